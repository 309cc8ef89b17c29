//! INI entry extraction
//!
//! Flattens parsed INI text into an ordered list of (section, option, raw
//! value) entries.

use configparser::ini::Ini;

use crate::error::LoadError;

/// Section whose options every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Joins section and option into a registry key
pub const KEY_SEPARATOR: &str = ".";

/// One option of one section
#[derive(Debug, Clone, PartialEq)]
pub struct IniEntry {
    pub section: String,
    pub option: String,
    pub raw: Option<String>,
}

impl IniEntry {
    /// Dotted registry key, `section.option`
    pub fn key(&self) -> String {
        format!("{}{}{}", self.section, KEY_SEPARATOR, self.option)
    }
}

/// Parse INI text into entries, in file order.
///
/// Section names keep their case, option names are lower-cased. Each section
/// lists its own options first, then the `[DEFAULT]` options it does not
/// override.
pub fn parse_entries(text: &str) -> Result<Vec<IniEntry>, LoadError> {
    let mut ini = Ini::new_cs();
    ini.set_default_section(DEFAULT_SECTION);
    // Comments only at line start; quoted values may contain `;` and `#`
    let no_inline: &[char] = &[];
    ini.set_inline_comment_symbols(Some(no_inline));
    ini.set_multiline(true);
    let map = ini.read(text.to_string()).map_err(LoadError::Parse)?;

    let defaults: Vec<(String, Option<String>)> = map
        .get(DEFAULT_SECTION)
        .map(|options| lowered(options.iter()))
        .unwrap_or_default();

    let mut entries = Vec::new();
    for (section, options) in map.iter() {
        if section == DEFAULT_SECTION {
            continue;
        }

        let own = lowered(options.iter());
        let inherited: Vec<(String, Option<String>)> = defaults
            .iter()
            .filter(|(name, _)| !own.iter().any(|(own_name, _)| own_name == name))
            .cloned()
            .collect();

        entries.extend(own.into_iter().chain(inherited).map(|(option, raw)| IniEntry {
            section: section.clone(),
            option,
            raw,
        }));
    }
    Ok(entries)
}

/// Lower-case option names and trim values; a later duplicate replaces the earlier value in place
fn lowered<'a, I>(options: I) -> Vec<(String, Option<String>)>
where
    I: Iterator<Item = (&'a String, &'a Option<String>)>,
{
    let mut result: Vec<(String, Option<String>)> = Vec::new();
    for (name, raw) in options {
        let name = name.to_lowercase();
        let raw = raw.as_deref().map(|value| value.trim().to_string());
        match result.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = raw,
            None => result.push((name, raw)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section: &str, option: &str, raw: &str) -> IniEntry {
        IniEntry {
            section: section.to_string(),
            option: option.to_string(),
            raw: Some(raw.to_string()),
        }
    }

    #[test]
    fn test_sections_and_options_in_order() {
        let text = "[display]\n; comment\nwidth = 200\nlarge_repr = \"info\"\n\n[display.html]\nborder = 4\n";
        let entries = parse_entries(text).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("display", "width", "200"),
                entry("display", "large_repr", "\"info\""),
                entry("display.html", "border", "4"),
            ]
        );
        assert_eq!(entries[2].key(), "display.html.border");
    }

    #[test]
    fn test_option_names_lowercased() {
        let entries = parse_entries("[Display]\nMax_Rows = 10\n").unwrap();
        assert_eq!(entries, vec![entry("Display", "max_rows", "10")]);
    }

    #[test]
    fn test_colon_delimiter() {
        let entries = parse_entries("[display]\nwidth: 120\n").unwrap();
        assert_eq!(entries, vec![entry("display", "width", "120")]);
    }

    #[test]
    fn test_default_section_inherited() {
        let text = "[DEFAULT]\nprecision = 3\nwidth = 100\n\n[display]\nwidth = 200\n";
        let entries = parse_entries(text).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("display", "width", "200"),
                entry("display", "precision", "3"),
            ]
        );
    }

    #[test]
    fn test_comment_chars_inside_values() {
        let text = "[display]\n# full line comment\ncolor = '#ff0000'\nsep = 'a;b'\n";
        let entries = parse_entries(text).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("display", "color", "'#ff0000'"),
                entry("display", "sep", "'a;b'"),
            ]
        );
    }

    #[test]
    fn test_continuation_lines_joined() {
        let entries = parse_entries("[custom]\nitems = [1,\n    2]\nflag = True\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key(), "custom.items");
        let raw = entries[0].raw.as_deref().unwrap();
        assert!(raw.starts_with("[1,") && raw.ends_with("2]"), "{raw}");
        assert_eq!(entries[1], entry("custom", "flag", "True"));
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_entries("").unwrap().is_empty());
        assert!(parse_entries("; only a comment\n").unwrap().is_empty());
    }
}
