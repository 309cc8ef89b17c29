//! Loader settings
//!
//! Where the loader looks for its INI file and how it decodes it. Defaults
//! can be overridden from the environment (`OPTINI_PATH`, `OPTINI_ENCODING`)
//! or from any additional `config` source.

use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory when no path is given
pub const DEFAULT_FILE: &str = ".pandas.ini";

/// Encoding used when none is given
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "OPTINI";

/// Settings for a load operation
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoaderSettings {
    /// Path of the INI file
    /// Environment: OPTINI_PATH
    pub path: PathBuf,

    /// Text encoding label of the INI file
    /// Environment: OPTINI_ENCODING
    pub encoding: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl LoaderSettings {
    /// Load settings from defaults with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Config::builder())
    }

    /// Load settings with an extra source layered over the defaults and
    /// under the environment
    pub fn load_from<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Self::build(Config::builder().add_source(source))
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings = builder
            .set_default("path", DEFAULT_FILE)?
            .set_default("encoding", DEFAULT_ENCODING)?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let loaded: LoaderSettings = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validation for all settings values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.encoding.trim().is_empty() {
            return Err(ConfigError::Message("encoding cannot be empty".into()));
        }
        Ok(())
    }

    /// The configured path, falling back to the default file when empty
    pub fn resolved_path(&self) -> &Path {
        if self.path.as_os_str().is_empty() {
            Path::new(DEFAULT_FILE)
        } else {
            &self.path
        }
    }
}
