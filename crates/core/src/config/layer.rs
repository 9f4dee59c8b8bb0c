//! Configuration layers for cascading overrides
//!
//! Each layer holds only the fields its section actually defines. Layers
//! are applied in a fixed order and every present field replaces the value
//! below it.

use std::collections::BTreeSet;

use super::ini::Section;
use super::scope::Scope;
use crate::error::{Error, Result};

/// A single configuration layer
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    /// The scope this layer applies to
    pub scope: Scope,
    /// The fields defined by this layer
    pub config: LayerConfig,
}

impl ConfigLayer {
    pub fn new(scope: Scope, config: LayerConfig) -> Self {
        Self { scope, config }
    }

    /// Build a layer from a section, or `None` if the section has no known scope
    pub fn from_section(section: &Section) -> Result<Option<Self>> {
        match Scope::from_section_name(section.name()) {
            Some(scope) => Ok(Some(Self::new(scope, LayerConfig::from_section(section)?))),
            None => Ok(None),
        }
    }
}

/// Fields defined within a layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerConfig {
    /// Preset selection; only meaningful in `[default]` and `[path:...]`
    pub runner: Option<String>,
    pub command: Option<String>,
    pub workdir: Option<String>,
    pub filter_for_file: Option<String>,
    pub filter_for_directory: Option<String>,
    pub filter_for_package: Option<String>,
    pub filter_for_module: Option<String>,
    pub filter_for_doctest_file: Option<String>,
    pub filter_for_doctest: Option<String>,
    pub filter_for_function: Option<String>,
    pub filter_for_class: Option<String>,
    pub filter_for_method: Option<String>,
    pub absolute_filenames: Option<bool>,
    pub relative_filenames: Option<bool>,
    pub relative_to: Option<String>,
    pub clipboard_extras: Option<String>,
    pub clipboard_extras_suffix: Option<String>,
    pub ignore_functions_and_methods: Option<BTreeSet<String>>,
}

impl LayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the recognized options of a section. Unknown options are ignored.
    pub fn from_section(section: &Section) -> Result<Self> {
        let text = |option: &str| section.get(option).map(str::to_string);
        let flag = |option: &str| -> Result<Option<bool>> {
            section
                .get(option)
                .map(|value| {
                    parse_bool(value).ok_or_else(|| Error::InvalidValue {
                        section: section.name().to_string(),
                        option: option.to_string(),
                        value: value.to_string(),
                    })
                })
                .transpose()
        };

        Ok(Self {
            runner: text("runner"),
            command: text("command"),
            workdir: text("workdir"),
            filter_for_file: text("filter_for_file"),
            filter_for_directory: text("filter_for_directory"),
            filter_for_package: text("filter_for_package"),
            filter_for_module: text("filter_for_module"),
            filter_for_doctest_file: text("filter_for_doctest_file"),
            filter_for_doctest: text("filter_for_doctest"),
            filter_for_function: text("filter_for_function"),
            filter_for_class: text("filter_for_class"),
            filter_for_method: text("filter_for_method"),
            absolute_filenames: flag("absolute_filenames")?,
            relative_filenames: flag("relative_filenames")?,
            relative_to: text("relative_to"),
            clipboard_extras: text("clipboard_extras"),
            clipboard_extras_suffix: text("clipboard_extras_suffix"),
            ignore_functions_and_methods: section
                .get("ignore_functions_and_methods")
                .map(parse_name_list),
        })
    }

    /// Builder method for the command
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Builder method for the function template
    pub fn with_function_filter(mut self, template: impl Into<String>) -> Self {
        self.filter_for_function = Some(template.into());
        self
    }

    /// Apply another layer's fields on top of this one
    pub fn apply(&mut self, other: &LayerConfig) {
        overlay(&mut self.runner, &other.runner);
        overlay(&mut self.command, &other.command);
        overlay(&mut self.workdir, &other.workdir);
        overlay(&mut self.filter_for_file, &other.filter_for_file);
        overlay(&mut self.filter_for_directory, &other.filter_for_directory);
        overlay(&mut self.filter_for_package, &other.filter_for_package);
        overlay(&mut self.filter_for_module, &other.filter_for_module);
        overlay(&mut self.filter_for_doctest_file, &other.filter_for_doctest_file);
        overlay(&mut self.filter_for_doctest, &other.filter_for_doctest);
        overlay(&mut self.filter_for_function, &other.filter_for_function);
        overlay(&mut self.filter_for_class, &other.filter_for_class);
        overlay(&mut self.filter_for_method, &other.filter_for_method);
        overlay(&mut self.absolute_filenames, &other.absolute_filenames);
        overlay(&mut self.relative_filenames, &other.relative_filenames);
        overlay(&mut self.relative_to, &other.relative_to);
        overlay(&mut self.clipboard_extras, &other.clipboard_extras);
        overlay(&mut self.clipboard_extras_suffix, &other.clipboard_extras_suffix);
        overlay(
            &mut self.ignore_functions_and_methods,
            &other.ignore_functions_and_methods,
        );
    }
}

fn overlay<T: Clone>(slot: &mut Option<T>, other: &Option<T>) {
    if other.is_some() {
        slot.clone_from(other);
    }
}

/// Parse a boolean the way configparser does
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Split a whitespace or newline separated list of names
pub fn parse_name_list(value: &str) -> BTreeSet<String> {
    value.split_whitespace().map(str::to_string).collect()
}
