//! Source file reading
//!
//! Reads the configuration file and decodes it with the requested encoding.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use log::debug;

use crate::error::LoadError;

/// Map common Python-style spellings onto WHATWG encoding labels
fn normalize_label(label: &str) -> String {
    let label = label.trim().to_ascii_lowercase();
    match label.as_str() {
        "latin-1" | "latin_1" | "l1" => "latin1".to_string(),
        "utf_8" | "utf8" | "u8" => "utf-8".to_string(),
        "utf_16" => "utf-16".to_string(),
        "cp1252" | "windows_1252" => "windows-1252".to_string(),
        _ => label.replace('_', "-"),
    }
}

/// Look up an encoding by label
pub fn lookup_encoding(label: &str) -> Result<&'static Encoding, LoadError> {
    Encoding::for_label(normalize_label(label).as_bytes())
        .ok_or_else(|| LoadError::UnknownEncoding(label.to_string()))
}

/// Read and decode `path`.
///
/// `Ok(None)` means the file could not be read for any reason (missing,
/// permissions, a directory); that is reported by the caller, not treated as
/// an error.
pub fn read_source(path: &Path, encoding: &str) -> Result<Option<String>, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    let encoding = lookup_encoding(encoding)?;
    decode(path, &bytes, encoding).map(Some)
}

/// Decode bytes with exactly `encoding`, dropping a byte order mark that
/// belongs to it; malformed input is an error
pub fn decode(path: &Path, bytes: &[u8], encoding: &'static Encoding) -> Result<String, LoadError> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(LoadError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}
