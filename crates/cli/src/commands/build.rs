use std::path::Path;

use anyhow::{Context, Result};
use tagrunner_core::TestRunner;
use tracing::debug;

/// Which string to produce for a file and tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The base command only
    Command,
    /// The filter only
    Filter,
    /// Command followed by the filter
    Full,
    /// Command with clipboard extras, wrapped in the working directory
    Clipboard,
}

pub fn build_command(runner: &TestRunner, target: Target, filepath: &Path, tag: &str) -> Result<()> {
    debug!("Building {:?} for {:?} with tag {:?}", target, filepath, tag);

    let output = match target {
        Target::Command => runner.get_test_command(filepath),
        Target::Filter => runner.get_test(filepath, tag),
        Target::Full => runner.get_full_command(filepath, tag),
        Target::Clipboard => runner.get_clipboard_command(filepath, tag),
    }
    .with_context(|| format!("Failed to resolve configuration for {}", filepath.display()))?;

    println!("{output}");
    Ok(())
}
