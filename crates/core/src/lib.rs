//! tagrunner - Turn the test under the editor cursor into a runner invocation
//!
//! This crate provides functionality to:
//! - Load built-in runner presets and overlay a user configuration file
//! - Pick the preset and path-scoped overrides that apply to a file
//! - Classify an editor tag (function, method, class, doctest) and expand
//!   the matching filter templates into a command line
//!
//! Nothing is ever executed; only strings are produced.
pub mod config;
pub mod error;
pub mod filter;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use filter::RunnerConfig;
pub use runner::TestRunner;
