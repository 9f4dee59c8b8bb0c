use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{Target, build_command, load_runner, runners_command, show_command};

#[derive(Parser, Debug)]
#[command(name = "tagrunner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    /// Configuration file overlaid on the built-in presets
    #[arg(short, long, global = true, default_value = tagrunner_core::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Runner preset to use instead of the configured default
    #[arg(short, long, global = true, env = "TAGRUNNER_RUNNER")]
    pub runner: Option<String>,

    /// Replace the preset's command
    #[arg(long = "override-command", global = true)]
    pub override_command: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the base test command for a file
    #[command(visible_alias = "c")]
    Command {
        /// Path to the test file
        filepath: PathBuf,
    },
    /// Print the filter selecting the tagged test in a file
    #[command(visible_alias = "f")]
    Filter {
        /// Path to the test file
        filepath: PathBuf,

        /// Tag under the cursor (e.g. TestFoo.test_bar or "[in test_foo (function)]")
        #[arg(default_value = "")]
        tag: String,
    },
    /// Print the command and filter together
    Full {
        /// Path to the test file
        filepath: PathBuf,

        /// Tag under the cursor
        #[arg(default_value = "")]
        tag: String,
    },
    /// Print a self-contained command for pasting into a shell
    #[command(visible_alias = "y")]
    Clipboard {
        /// Path to the test file
        filepath: PathBuf,

        /// Tag under the cursor
        #[arg(default_value = "")]
        tag: String,
    },
    /// Show the resolved configuration for a file as JSON
    Show {
        /// Path to the test file
        filepath: PathBuf,
    },
    /// List the available runner presets
    Runners,
}

impl Runner {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let runner = load_runner(
            &self.config,
            self.runner.as_deref(),
            self.override_command,
        )?;

        match self.command {
            Commands::Command { filepath } => {
                build_command(&runner, Target::Command, &filepath, "")
            }
            Commands::Filter { filepath, tag } => {
                build_command(&runner, Target::Filter, &filepath, &tag)
            }
            Commands::Full { filepath, tag } => {
                build_command(&runner, Target::Full, &filepath, &tag)
            }
            Commands::Clipboard { filepath, tag } => {
                build_command(&runner, Target::Clipboard, &filepath, &tag)
            }
            Commands::Show { filepath } => show_command(&runner, &filepath),
            Commands::Runners => runners_command(&runner),
        }
    }
}
