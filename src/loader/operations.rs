//! Load operations
//!
//! Evaluates INI entries and writes them into an option registry, reporting
//! and skipping the entries that fail.

use log::debug;

use crate::error::EntryError;
use crate::error::handlers::report_skipped;
use crate::literal::{Literal, parse_literal};
use crate::loader::ini::IniEntry;
use crate::loader::results::{AppliedOption, LoadReport, SkippedOption};
use crate::registry::OptionRegistry;

/// Evaluate one entry and write it to the registry
pub fn apply_entry<R>(entry: &IniEntry, registry: &mut R) -> Result<Literal, EntryError>
where
    R: OptionRegistry + ?Sized,
{
    let raw = entry.raw.as_deref().ok_or(EntryError::MissingValue)?;
    let value = parse_literal(raw)?;
    registry.set_option(&entry.key(), value.clone())?;
    Ok(value)
}

/// Apply every entry in order; failures are reported and never stop the loop
pub fn apply_entries<R>(entries: &[IniEntry], registry: &mut R, report: &mut LoadReport)
where
    R: OptionRegistry + ?Sized,
{
    for entry in entries {
        let key = entry.key();
        match apply_entry(entry, registry) {
            Ok(value) => {
                debug!("Applied {} = {}", key, value);
                report.applied.push(AppliedOption { key, value });
            }
            Err(error) => {
                let skipped = SkippedOption {
                    key,
                    raw: entry.raw.clone(),
                    error,
                };
                report_skipped(&skipped);
                report.skipped.push(skipped);
            }
        }
    }
}
