//! Error types
//!
//! Defines the error types for literal parsing, the option registry, single
//! INI entries and whole load operations.

use std::fmt;
use std::path::PathBuf;

/// Literal parsing errors
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralError {
    Empty,
    UnexpectedEnd,
    UnexpectedChar { pos: usize, found: char },
    TrailingInput { pos: usize },
    InvalidNumber(String),
    IntegerOverflow(String),
    UnterminatedString { pos: usize },
    InvalidEscape { pos: usize, reason: String },
    NonAsciiBytes { pos: usize },
    MixedStringKinds { pos: usize },
    Unhashable(String),
    Unsupported(String),
    TooDeep { pos: usize },
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "Empty value"),
            LiteralError::UnexpectedEnd => write!(f, "Unexpected end of value"),
            LiteralError::UnexpectedChar { pos, found } => {
                write!(f, "Unexpected character {:?} at offset {}", found, pos)
            }
            LiteralError::TrailingInput { pos } => {
                write!(f, "Unexpected trailing input at offset {}", pos)
            }
            LiteralError::InvalidNumber(n) => write!(f, "Invalid number: {}", n),
            LiteralError::IntegerOverflow(n) => write!(f, "Integer out of range: {}", n),
            LiteralError::UnterminatedString { pos } => {
                write!(f, "Unterminated string starting at offset {}", pos)
            }
            LiteralError::InvalidEscape { pos, reason } => {
                write!(f, "Invalid escape at offset {}: {}", pos, reason)
            }
            LiteralError::NonAsciiBytes { pos } => {
                write!(f, "Bytes can only contain ASCII characters (offset {})", pos)
            }
            LiteralError::MixedStringKinds { pos } => {
                write!(f, "Cannot mix bytes and text literals (offset {})", pos)
            }
            LiteralError::Unhashable(kind) => write!(f, "Unhashable type: {}", kind),
            LiteralError::Unsupported(expr) => write!(f, "Not a literal: {}", expr),
            LiteralError::TooDeep { pos } => {
                write!(f, "Containers nested too deeply at offset {}", pos)
            }
        }
    }
}

impl std::error::Error for LiteralError {}

/// Option registry errors
#[derive(Debug, Clone, PartialEq)]
pub enum OptionError {
    NoSuchKey(String),
    AmbiguousKey { pattern: String, matches: Vec<String> },
    InvalidValue { key: String, reason: String },
    AlreadyRegistered(String),
}

impl OptionError {
    /// True when the registry did not recognize the key at all
    pub fn is_unknown_key(&self) -> bool {
        matches!(
            self,
            OptionError::NoSuchKey(_) | OptionError::AmbiguousKey { .. }
        )
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::NoSuchKey(k) => write!(f, "No such key(s): '{}'", k),
            OptionError::AmbiguousKey { pattern, matches } => write!(
                f,
                "Pattern '{}' matched multiple keys: {}",
                pattern,
                matches.join(", ")
            ),
            OptionError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for '{}': {}", key, reason)
            }
            OptionError::AlreadyRegistered(k) => write!(f, "Option '{}' already registered", k),
        }
    }
}

impl std::error::Error for OptionError {}

/// Reasons a single INI entry was skipped
#[derive(Debug, Clone, PartialEq)]
pub enum EntryError {
    MissingValue,
    InvalidLiteral(LiteralError),
    UnknownOption(OptionError),
    RejectedValue(OptionError),
}

impl EntryError {
    /// True when the registry refused the key rather than the value
    pub fn is_invalid_option(&self) -> bool {
        matches!(self, EntryError::UnknownOption(_))
    }
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::MissingValue => write!(f, "Option has no value"),
            EntryError::InvalidLiteral(e) => write!(f, "Invalid literal: {}", e),
            EntryError::UnknownOption(e) => write!(f, "Unknown option: {}", e),
            EntryError::RejectedValue(e) => write!(f, "Rejected value: {}", e),
        }
    }
}

impl std::error::Error for EntryError {}

impl From<LiteralError> for EntryError {
    fn from(error: LiteralError) -> Self {
        EntryError::InvalidLiteral(error)
    }
}

impl From<OptionError> for EntryError {
    fn from(error: OptionError) -> Self {
        if error.is_unknown_key() {
            EntryError::UnknownOption(error)
        } else {
            EntryError::RejectedValue(error)
        }
    }
}

/// Errors that abort a load operation
#[derive(Debug)]
pub enum LoadError {
    UnknownEncoding(String),
    Decode { path: PathBuf, encoding: String },
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnknownEncoding(label) => write!(f, "Unknown encoding: {}", label),
            LoadError::Decode { path, encoding } => write!(
                f,
                "Cannot decode {} as {}",
                path.display(),
                encoding
            ),
            LoadError::Parse(msg) => write!(f, "INI parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}
