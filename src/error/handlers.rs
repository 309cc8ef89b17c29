//! Error handlers
//!
//! Turns non-fatal load failures into console diagnostics.

use std::path::Path;

use log::warn;

use crate::loader::results::SkippedOption;

/// Diagnostic line for an entry that was not applied
pub fn skipped_message(skipped: &SkippedOption) -> String {
    let prefix = if skipped.error.is_invalid_option() {
        "Invalid option."
    } else {
        "Invalid literal value."
    };
    format!(
        "{} Skipping {}={}",
        prefix,
        skipped.key,
        skipped.raw.as_deref().unwrap_or("")
    )
}

/// Diagnostic line for a configuration file that could not be opened
pub fn missing_file_message(path: &Path) -> String {
    let cwd = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    format!(
        "No configuration file found at {}. (at {})",
        path.display(),
        cwd
    )
}

/// Report a skipped entry on the console and in the log
pub fn report_skipped(skipped: &SkippedOption) {
    let message = skipped_message(skipped);
    warn!("{} ({})", message, skipped.error);
    println!("{}", message);
}

/// Report a missing configuration file on the console and in the log
pub fn report_missing_file(path: &Path) {
    let message = missing_file_message(path);
    warn!("{}", message);
    println!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EntryError, LiteralError, OptionError};

    fn skipped(raw: Option<&str>, error: EntryError) -> SkippedOption {
        SkippedOption {
            key: "display.width".to_string(),
            raw: raw.map(str::to_string),
            error,
        }
    }

    #[test]
    fn test_unknown_option_message() {
        let entry = skipped(
            Some("200"),
            EntryError::UnknownOption(OptionError::NoSuchKey("display.width".into())),
        );
        assert_eq!(
            skipped_message(&entry),
            "Invalid option. Skipping display.width=200"
        );
    }

    #[test]
    fn test_invalid_literal_message() {
        let entry = skipped(
            Some("abc"),
            EntryError::InvalidLiteral(LiteralError::Unsupported("abc".into())),
        );
        assert_eq!(
            skipped_message(&entry),
            "Invalid literal value. Skipping display.width=abc"
        );

        let rejected = skipped(
            Some("'wide'"),
            EntryError::RejectedValue(OptionError::InvalidValue {
                key: "display.width".into(),
                reason: "expected int".into(),
            }),
        );
        assert!(skipped_message(&rejected).starts_with("Invalid literal value."));
    }

    #[test]
    fn test_missing_value_message() {
        let entry = skipped(None, EntryError::MissingValue);
        assert_eq!(
            skipped_message(&entry),
            "Invalid literal value. Skipping display.width="
        );
    }

    #[test]
    fn test_missing_file_message() {
        let message = missing_file_message(Path::new(".pandas.ini"));
        assert!(message.starts_with("No configuration file found at .pandas.ini. (at "));
        assert!(message.ends_with(')'));
    }
}
