pub mod build;
pub mod runners;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use tagrunner_core::TestRunner;
use tracing::debug;

pub use build::{Target, build_command};
pub use runners::runners_command;
pub use show::show_command;

/// Load the configuration and apply the caller's preset and command choices
pub fn load_runner(
    config: &Path,
    runner: Option<&str>,
    override_command: Option<String>,
) -> Result<TestRunner> {
    debug!("Loading configuration from {:?}", config);
    let mut test_runner = TestRunner::from_file(config)
        .with_context(|| format!("Failed to load configuration from {}", config.display()))?;

    if let Some(name) = runner.filter(|name| !name.is_empty()) {
        test_runner.use_runner(name);
    }
    test_runner.set_command_override(override_command);

    Ok(test_runner)
}
