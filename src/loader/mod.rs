//! INI option loader
//!
//! Reads an INI file and applies every `section.option = value` entry to an
//! [`OptionRegistry`]. Bad entries and a missing file are reported on the
//! console and skipped; only unreadable encodings and malformed INI text are
//! returned as errors.

pub mod ini;
pub mod operations;
pub mod results;
pub mod source;

use std::path::{Path, PathBuf};

use log::info;

use crate::config::{DEFAULT_ENCODING, DEFAULT_FILE, LoaderSettings};
use crate::error::LoadError;
use crate::error::handlers::report_missing_file;
use crate::registry::OptionRegistry;

pub use ini::{IniEntry, parse_entries};
pub use operations::{apply_entries, apply_entry};
pub use results::{AppliedOption, LoadReport, SkippedOption};

/// Configured load operation
#[derive(Debug, Clone)]
pub struct Loader {
    path: Option<PathBuf>,
    encoding: String,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            path: None,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &LoaderSettings) -> Self {
        Self::new()
            .path(settings.resolved_path())
            .encoding(&settings.encoding)
    }

    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn encoding(mut self, encoding: &str) -> Self {
        self.encoding = encoding.to_string();
        self
    }

    /// The file that will be read; an unset or empty path means the default
    pub fn resolved_path(&self) -> &Path {
        match &self.path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => Path::new(DEFAULT_FILE),
        }
    }

    /// Read the file and apply its entries to `registry`
    pub fn run<R>(&self, registry: &mut R) -> Result<LoadReport, LoadError>
    where
        R: OptionRegistry + ?Sized,
    {
        let path = self.resolved_path();
        let Some(text) = source::read_source(path, &self.encoding)? else {
            report_missing_file(path);
            return Ok(LoadReport {
                source: path.to_path_buf(),
                found: false,
                ..LoadReport::default()
            });
        };

        let mut report = self.apply_str(&text, registry)?;
        report.source = path.to_path_buf();
        info!(
            "Loaded {}: {} option(s) applied, {} skipped",
            path.display(),
            report.applied.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Apply INI text that has already been read
    pub fn apply_str<R>(&self, text: &str, registry: &mut R) -> Result<LoadReport, LoadError>
    where
        R: OptionRegistry + ?Sized,
    {
        let entries = parse_entries(text)?;
        let mut report = LoadReport {
            found: true,
            ..LoadReport::default()
        };
        apply_entries(&entries, registry, &mut report);
        Ok(report)
    }
}

/// Load `path` (default `.pandas.ini` in the current directory) into
/// `registry`.
///
/// Returns `Ok(())` whenever the file was handled, including a missing file
/// and entries that had to be skipped; those are printed instead.
pub fn load<P, R>(path: Option<P>, encoding: &str, registry: &mut R) -> Result<(), LoadError>
where
    P: AsRef<Path>,
    R: OptionRegistry + ?Sized,
{
    let mut loader = Loader::new().encoding(encoding);
    if let Some(path) = path {
        loader = loader.path(path);
    }
    loader.run(registry).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;
    use crate::registry::tabular_options;
    use std::collections::BTreeMap;

    #[test]
    fn test_resolved_path() {
        assert_eq!(Loader::new().resolved_path(), Path::new(".pandas.ini"));
        assert_eq!(Loader::new().path("").resolved_path(), Path::new(".pandas.ini"));
        assert_eq!(Loader::new().path("a.ini").resolved_path(), Path::new("a.ini"));
    }

    #[test]
    fn test_from_settings() {
        let settings = LoaderSettings {
            path: PathBuf::from("conf.ini"),
            encoding: "latin-1".to_string(),
        };
        let loader = Loader::from_settings(&settings);
        assert_eq!(loader.resolved_path(), Path::new("conf.ini"));
        assert_eq!(loader.encoding, "latin-1");
    }

    #[test]
    fn test_apply_str() {
        let mut table = tabular_options().unwrap();
        let report = Loader::new()
            .apply_str("[display]\nwidth = 200\nheight = 3\n", &mut table)
            .unwrap();
        assert!(report.found);
        assert_eq!(report.applied_value("display.width"), Some(&Literal::Int(200)));
        assert!(report.was_skipped("display.height"));
    }

    #[test]
    fn test_apply_str_comment_chars_in_values() {
        let mut map: BTreeMap<String, Literal> = BTreeMap::new();
        let report = Loader::new()
            .apply_str("[display]\ncolor = '#ff0000'\nsep = 'a;b'\n", &mut map)
            .unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(map.get("display.color"), Some(&Literal::from("#ff0000")));
        assert_eq!(map.get("display.sep"), Some(&Literal::from("a;b")));
    }

    #[test]
    fn test_apply_str_multiline_list() {
        let mut map: BTreeMap<String, Literal> = BTreeMap::new();
        let report = Loader::new()
            .apply_str("[custom]\nitems = [1,\n    2]\n", &mut map)
            .unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("custom.items"),
            Some(&Literal::List(vec![Literal::Int(1), Literal::Int(2)]))
        );
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut map: BTreeMap<String, Literal> = BTreeMap::new();
        let report = Loader::new()
            .path(dir.path().join("none.ini"))
            .run(&mut map)
            .unwrap();
        assert!(!report.found);
        assert!(report.applied.is_empty());
        assert!(map.is_empty());
    }
}
