//! Configuration management for tagrunner
//!
//! Built-in presets are embedded as [`DEFAULT_CONFIGURATION`] and a user
//! file, when present, is overlaid on top of them.

pub mod ini;
pub mod layer;
pub mod scope;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::utils::expand_home;

pub use ini::{Ini, Section};
pub use layer::{ConfigLayer, LayerConfig};
pub use scope::Scope;

/// Default location of the user configuration file
pub const CONFIG_FILE: &str = "~/.vim/py-test-runner.cfg";

/// Preset used when `[default] runner` names one that does not exist
pub const DEFAULT_RUNNER: &str = "pytest";

/// Built-in configuration, always loaded before the user file
pub const DEFAULT_CONFIGURATION: &str = r#"
[default]
runner = pytest
ignore_functions_and_methods =
    __init__
    setUp
    tearDown
    test_suite

[runner:pytest]
command = pytest -ra
filter_for_file     = {filename}
filter_for_doctest  = -k {function}
filter_for_function = {filename}::{function}
filter_for_class    = {filename}::{class}
filter_for_method   = {filename}::{class}::{method}
absolute_filenames = 1

[runner:nose]
command = nosetests
filter_for_file     = {filename}
filter_for_function = {filename}:{function}
filter_for_class    = {filename}:{class}
filter_for_method   = {filename}:{class}.{method}
absolute_filenames = 1

[runner:django]
command = bin/django test
filter_for_file     = {filename}
filter_for_function = {filename}:{function}
filter_for_class    = {filename}:{class}
filter_for_method   = {filename}:{class}.{method}
absolute_filenames = 1

[runner:zope]
command = bin/test
filter_for_package  = -s {package}
filter_for_module   = -m {module}
filter_for_function = -t {function}
filter_for_class    = -t {class}
filter_for_method   = -t '{method} [(].*[.]{class}[)]'
clipboard_extras = -pvc
"#;

/// The merged configuration: built-in defaults plus the user file
#[derive(Debug, Clone)]
pub struct Config {
    ini: Ini,
    source: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults only
    pub fn builtin() -> Result<Self> {
        let mut ini = Ini::new();
        ini.read_str(DEFAULT_CONFIGURATION, "<built-in defaults>")?;
        Ok(Self { ini, source: None })
    }

    /// Load the built-in defaults and overlay `path` (with `~` expanded).
    ///
    /// A missing or unreadable file leaves the defaults in effect; a file that
    /// cannot be parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::builtin()?;
        let path = expand_home(&path.as_ref().to_string_lossy());

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("Loading user configuration from {:?}", path);
                config.ini.read_str(&text, &path.to_string_lossy())?;
                config.source = Some(path);
            }
            Err(err) => {
                tracing::debug!("Skipping configuration {:?}: {}", path, err);
            }
        }

        Ok(config)
    }

    /// Load from [`CONFIG_FILE`]
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }

    /// Overlay additional configuration text
    pub fn merge_str(&mut self, text: &str, source: &str) -> Result<()> {
        self.ini.read_str(text, source)
    }

    /// The user file that was read, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.ini.section(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.ini.has_section(name)
    }

    /// Look up an option, falling back to `default` when it is absent
    pub fn get_option<'a>(&'a self, section: &str, option: &str, default: &'a str) -> &'a str {
        self.ini.get(section, option).unwrap_or(default)
    }

    /// All sections in declaration order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.ini.sections()
    }

    /// Names of all runner presets in declaration order
    pub fn runner_names(&self) -> Vec<&str> {
        self.sections()
            .filter_map(|s| s.name().strip_prefix(scope::RUNNER_PREFIX))
            .collect()
    }
}
