//! Sectioned `key = value` configuration, read with [`configparser`]
//!
//! Each source is parsed on its own and overlaid on what has been read so
//! far, option by option. Section names are case-sensitive, option names are
//! lower-cased, and indented lines continue the previous value. Within one
//! source a section, or an option inside a section, may appear only once.

use std::collections::{HashMap, HashSet};

use configparser::ini::Ini as Parser;

use crate::error::{Error, Result};

/// Bucket for options that appear before any section header
const TOP_LEVEL: &str = "\u{0}top-level";

/// A named group of options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: HashMap<String, String>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an option; names are matched lower-cased
    pub fn get(&self, option: &str) -> Option<&str> {
        self.options
            .get(&option.to_lowercase())
            .map(String::as_str)
    }

    pub fn set(&mut self, option: &str, value: impl Into<String>) {
        self.options.insert(option.to_lowercase(), value.into());
    }
}

/// Parsed configuration, sections kept in declaration order
#[derive(Debug, Clone, Default)]
pub struct Ini {
    sections: Vec<Section>,
}

impl Ini {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and overlay it on what has been read so far.
    ///
    /// `source` only names the input in error messages.
    pub fn read_str(&mut self, text: &str, source: &str) -> Result<()> {
        check_declarations(text, source)?;

        let mut defaults = Parser::new_cs().defaults();
        defaults.default_section = TOP_LEVEL.to_string();
        defaults.multiline = true;
        let parsed = Parser::new_from_defaults(defaults)
            .read(text.to_string())
            .map_err(|message| parse_error(source, message))?;

        for (name, options) in parsed {
            if name == TOP_LEVEL {
                if options.is_empty() {
                    continue;
                }
                return Err(parse_error(source, "option outside of any section"));
            }
            if name.is_empty() {
                return Err(parse_error(source, "empty section name"));
            }

            let index = self.section_index_or_insert(&name);
            for (option, value) in options {
                let Some(value) = value else {
                    return Err(parse_error(
                        source,
                        format!("expected 'name = value' for {option:?} in [{name}]"),
                    ));
                };
                if option.trim().is_empty() {
                    return Err(parse_error(source, format!("missing option name in [{name}]")));
                }
                tracing::trace!("[{}] {} = {:?}", name, option, value);
                self.sections[index].set(option.trim(), value.trim());
            }
        }

        Ok(())
    }

    fn section_index_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(option))
    }
}

/// Reject malformed headers and a section or option declared twice in the
/// same source.
///
/// The parser keeps the last occurrence, so this runs over the raw text
/// first. Indented lines are continuations and never declare anything.
fn check_declarations(text: &str, source: &str) -> Result<()> {
    let mut sections = HashSet::new();
    let mut options = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty()
            || line.starts_with(['#', ';'])
            || raw.starts_with(char::is_whitespace)
        {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| {
                    parse_error(source, format!("line {}: malformed section header", index + 1))
                })?;
            if !sections.insert(name.to_string()) {
                return Err(parse_error(
                    source,
                    format!("line {}: section [{}] already declared", index + 1, name),
                ));
            }
            options.clear();
        } else if let Some(split_at) = line.find(['=', ':']) {
            let option = line[..split_at].trim().to_lowercase();
            if !options.insert(option.clone()) {
                return Err(parse_error(
                    source,
                    format!("line {}: option {:?} already set in this section", index + 1, option),
                ));
            }
        }
    }

    Ok(())
}

fn parse_error(source: &str, message: impl Into<String>) -> Error {
    Error::ParseError {
        path: source.to_string(),
        message: message.into(),
    }
}
