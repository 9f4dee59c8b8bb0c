//! Main runner that selects a preset and resolves configuration per file

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    config::{
        Config, ConfigLayer, DEFAULT_RUNNER, LayerConfig, Section,
        scope::{DEFAULT_SECTION, Scope},
    },
    error::Result,
    filter::RunnerConfig,
};

/// Owns the merged configuration and hands out a [`RunnerConfig`] per file
#[derive(Debug, Clone)]
pub struct TestRunner {
    config: Config,
    runner: String,
    command_override: Option<String>,
}

impl TestRunner {
    /// Load the built-in defaults and the user file at its default location
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load_default()?)
    }

    /// Load the built-in defaults and overlay `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(Config::load(path)?)
    }

    /// Start with the preset named by `[default] runner`, or the built-in
    /// [`DEFAULT_RUNNER`] when that preset does not exist
    pub fn with_config(config: Config) -> Result<Self> {
        let configured = config.get_option(DEFAULT_SECTION, "runner", DEFAULT_RUNNER);
        let runner = if config.has_section(&Scope::runner_section(configured)) {
            configured.to_string()
        } else {
            warn!(
                "No [runner:{}] section in configuration, using {}",
                configured, DEFAULT_RUNNER
            );
            DEFAULT_RUNNER.to_string()
        };
        debug!("Default runner: {}", runner);
        Ok(Self {
            config,
            runner,
            command_override: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The globally active preset
    pub fn runner(&self) -> &str {
        &self.runner
    }

    /// Switch the active preset. Unknown names keep the current one.
    pub fn use_runner(&mut self, runner: &str) -> bool {
        let section = Scope::runner_section(runner);
        if !self.config.has_section(&section) {
            warn!("No [{}] section in configuration, keeping {}", section, self.runner);
            return false;
        }
        debug!("Switching runner from {} to {}", self.runner, runner);
        self.runner = runner.to_string();
        true
    }

    /// Replace the resolved command in the caller-facing operations
    pub fn set_command_override(&mut self, command: Option<String>) {
        self.command_override = command.filter(|c| !c.is_empty());
    }

    /// `[path:...]` sections covering `filename`, in declaration order
    pub fn find_overrides(&self, filename: &Path) -> Vec<&Section> {
        self.config
            .sections()
            .filter(|section| {
                Scope::from_section_name(section.name())
                    .is_some_and(|scope| scope.matches(filename))
            })
            .collect()
    }

    /// Preset for `filename`: the active one unless a path override picks another
    pub fn get_default_runner(&self, filename: impl AsRef<Path>) -> String {
        self.select_runner(&self.find_overrides(filename.as_ref()))
    }

    /// The last `runner` named by `overrides`, else the active preset
    fn select_runner(&self, overrides: &[&Section]) -> String {
        overrides
            .iter()
            .rev()
            .find_map(|section| section.get("runner"))
            .unwrap_or(self.runner.as_str())
            .to_string()
    }

    /// Layers that make up the configuration for `filename`, in application order:
    /// the selected preset, then `[default]`, then every matching `[path:...]`.
    pub fn layers_for(&self, filename: impl AsRef<Path>) -> Result<Vec<ConfigLayer>> {
        let filename = filename.as_ref();
        let sections = self.find_overrides(filename);
        let runner = self.select_runner(&sections);
        let overrides = sections
            .into_iter()
            .filter_map(|section| ConfigLayer::from_section(section).transpose())
            .collect::<Result<Vec<_>>>()?;
        debug!("Runner for {:?}: {}", filename, runner);

        let mut layers = Vec::with_capacity(overrides.len() + 2);
        match self.config.section(&Scope::runner_section(&runner)) {
            Some(section) => layers.extend(ConfigLayer::from_section(section)?),
            None => warn!("No [runner:{}] section in configuration, skipping preset", runner),
        }
        if let Some(section) = self.config.section(DEFAULT_SECTION) {
            layers.extend(ConfigLayer::from_section(section)?);
        }
        layers.extend(overrides);
        Ok(layers)
    }

    /// Resolve the configuration for `filename`
    pub fn get_runner(&self, filename: impl AsRef<Path>) -> Result<RunnerConfig> {
        let mut merged = LayerConfig::new();
        for layer in self.layers_for(filename)? {
            debug!("Applying {:?} layer", layer.scope);
            merged.apply(&layer.config);
        }
        Ok(RunnerConfig::new().with_layer(&merged))
    }

    /// [`TestRunner::get_runner`] with the command override applied
    pub fn get_test_runner(&self, filename: impl AsRef<Path>) -> Result<RunnerConfig> {
        let mut rc = self.get_runner(filename)?;
        if let Some(command) = &self.command_override {
            rc.command.clone_from(command);
        }
        Ok(rc)
    }

    /// Base command; the caller appends the filter
    pub fn get_test_command(&self, filename: impl AsRef<Path>) -> Result<String> {
        Ok(self.get_test_runner(filename)?.command)
    }

    /// Filter for `filename` and `tag`
    pub fn get_test(&self, filename: impl AsRef<Path>, tag: &str) -> Result<String> {
        let filename = filename.as_ref();
        Ok(self.get_test_runner(filename)?.construct_filter(filename, tag))
    }

    /// Command plus filter for `filename` and `tag`
    pub fn get_full_command(&self, filename: impl AsRef<Path>, tag: &str) -> Result<String> {
        let filename = filename.as_ref();
        Ok(self.get_test_runner(filename)?.construct_command(filename, tag))
    }

    /// Self-contained command suitable for the clipboard
    pub fn get_clipboard_command(&self, filename: impl AsRef<Path>, tag: &str) -> Result<String> {
        let filename = filename.as_ref();
        Ok(self
            .get_test_runner(filename)?
            .construct_clipboard_command(filename, tag))
    }
}
