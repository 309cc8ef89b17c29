//! Option registry
//!
//! The loader writes into anything implementing [`OptionRegistry`]. The
//! registry owns key lookup and value validation; the loader only reports
//! what it refuses.

pub mod presets;
pub mod table;
pub mod validators;

use std::collections::BTreeMap;

use crate::error::OptionError;
use crate::literal::Literal;

pub use presets::tabular_options;
pub use table::{OptionTable, RegisteredOption, Validator};

/// A hierarchical option store keyed by dotted path
pub trait OptionRegistry {
    /// Set one option.
    ///
    /// Unrecognized keys must fail with [`OptionError::NoSuchKey`] or
    /// [`OptionError::AmbiguousKey`]; values the option does not accept must
    /// fail with [`OptionError::InvalidValue`].
    fn set_option(&mut self, key: &str, value: Literal) -> Result<(), OptionError>;
}

/// Accepts every key, last write wins
impl OptionRegistry for BTreeMap<String, Literal> {
    fn set_option(&mut self, key: &str, value: Literal) -> Result<(), OptionError> {
        self.insert(key.to_string(), value);
        Ok(())
    }
}
