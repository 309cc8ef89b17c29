//! Load result types
//!
//! Defines the structures returned by load operations.

use std::path::PathBuf;

use crate::error::EntryError;
use crate::literal::Literal;

/// An option that was written to the registry
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedOption {
    pub key: String,
    pub value: Literal,
}

/// An entry that was reported and skipped
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedOption {
    pub key: String,
    pub raw: Option<String>,
    pub error: EntryError,
}

/// Outcome of one load operation
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub source: PathBuf,
    pub found: bool,
    pub applied: Vec<AppliedOption>,
    pub skipped: Vec<SkippedOption>,
}

impl LoadReport {
    /// Value applied for `key`, if any; the last write wins
    pub fn applied_value(&self, key: &str) -> Option<&Literal> {
        self.applied
            .iter()
            .rev()
            .find(|applied| applied.key == key)
            .map(|applied| &applied.value)
    }

    pub fn was_skipped(&self, key: &str) -> bool {
        self.skipped.iter().any(|skipped| skipped.key == key)
    }
}
