use std::path::Path;

use anyhow::{Context, Result};
use tagrunner_core::TestRunner;
use tracing::debug;

pub fn show_command(runner: &TestRunner, filepath: &Path) -> Result<()> {
    if let Some(source) = runner.config().source() {
        debug!("User configuration: {:?}", source);
    }
    debug!("Runner for {:?}: {}", filepath, runner.get_default_runner(filepath));
    for section in runner.find_overrides(filepath) {
        debug!("Matching override: [{}]", section.name());
    }

    let resolved = runner
        .get_test_runner(filepath)
        .with_context(|| format!("Failed to resolve configuration for {}", filepath.display()))?;
    println!("{}", resolved.to_json()?);
    Ok(())
}
