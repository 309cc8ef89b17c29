//! In-memory option table
//!
//! Registered options with defaults, descriptions and validators. Keys may be
//! addressed by their full dotted path or by any case-insensitive fragment
//! that identifies exactly one option.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::OptionError;
use crate::literal::Literal;
use crate::registry::OptionRegistry;

/// Checks a candidate value, returning a human-readable reason on rejection
pub type Validator = Arc<dyn Fn(&Literal) -> Result<(), String> + Send + Sync>;

/// A single registered option
#[derive(Clone)]
pub struct RegisteredOption {
    pub key: String,
    pub default: Literal,
    pub current: Literal,
    pub doc: String,
    validator: Option<Validator>,
}

impl RegisteredOption {
    fn validate(&self, value: &Literal) -> Result<(), OptionError> {
        match &self.validator {
            Some(check) => check(value).map_err(|reason| OptionError::InvalidValue {
                key: self.key.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RegisteredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredOption")
            .field("key", &self.key)
            .field("default", &self.default)
            .field("current", &self.current)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

/// Option registry backed by a sorted map
#[derive(Debug, Clone, Default)]
pub struct OptionTable {
    options: BTreeMap<String, RegisteredOption>,
}

impl OptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new option; its current value starts at `default`
    pub fn register(
        &mut self,
        key: &str,
        default: impl Into<Literal>,
        doc: &str,
        validator: Option<Validator>,
    ) -> Result<(), OptionError> {
        let key = key.to_lowercase();
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(OptionError::NoSuchKey(key));
        }
        if self.options.contains_key(&key) {
            return Err(OptionError::AlreadyRegistered(key));
        }

        let default = default.into();
        let option = RegisteredOption {
            key: key.clone(),
            current: default.clone(),
            default,
            doc: doc.to_string(),
            validator,
        };
        option.validate(&option.default)?;
        self.options.insert(key, option);
        Ok(())
    }

    /// Resolve a key or fragment to the single registered key it names
    pub fn resolve(&self, pattern: &str) -> Result<String, OptionError> {
        if self.options.contains_key(pattern) {
            return Ok(pattern.to_string());
        }

        let needle = pattern.to_lowercase();
        let matches: Vec<String> = self
            .options
            .keys()
            .filter(|key| key.contains(&needle))
            .cloned()
            .collect();

        match matches.len() {
            0 => Err(OptionError::NoSuchKey(pattern.to_string())),
            1 => Ok(matches[0].clone()),
            _ => Err(OptionError::AmbiguousKey {
                pattern: pattern.to_string(),
                matches,
            }),
        }
    }

    pub fn get_option(&self, pattern: &str) -> Result<&Literal, OptionError> {
        let key = self.resolve(pattern)?;
        self.options
            .get(&key)
            .map(|option| &option.current)
            .ok_or(OptionError::NoSuchKey(key))
    }

    /// Restore the default value
    pub fn reset_option(&mut self, pattern: &str) -> Result<(), OptionError> {
        let key = self.resolve(pattern)?;
        if let Some(option) = self.options.get_mut(&key) {
            option.current = option.default.clone();
        }
        Ok(())
    }

    /// One paragraph per option: key, description, default and current value
    pub fn describe_option(&self, pattern: &str) -> Result<String, OptionError> {
        let key = self.resolve(pattern)?;
        let option = self
            .options
            .get(&key)
            .ok_or_else(|| OptionError::NoSuchKey(key.clone()))?;
        Ok(format!(
            "{} : {}\n    [default: {}] [currently: {}]",
            option.key, option.doc, option.default, option.current
        ))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl OptionRegistry for OptionTable {
    fn set_option(&mut self, key: &str, value: Literal) -> Result<(), OptionError> {
        let resolved = self.resolve(key)?;
        let option = self
            .options
            .get_mut(&resolved)
            .ok_or_else(|| OptionError::NoSuchKey(resolved.clone()))?;
        option.validate(&value)?;
        debug!("Option {} changed from {} to {}", resolved, option.current, value);
        option.current = value;
        Ok(())
    }
}
