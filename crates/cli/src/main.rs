use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagrunner_cli::Runner;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var; stdout is reserved for output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Runner::parse().execute()
}
