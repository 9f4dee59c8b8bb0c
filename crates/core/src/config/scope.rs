//! Section scopes
//!
//! Every configuration section applies at one of three scopes, told apart
//! by its name: the global `[default]` section, a named `[runner:<name>]`
//! preset, or a `[path:<dir>]` override for a filesystem subtree.

use std::path::{Path, PathBuf};

use crate::utils::{absolutize, expand_home};

pub const DEFAULT_SECTION: &str = "default";
pub const RUNNER_PREFIX: &str = "runner:";
pub const PATH_PREFIX: &str = "path:";

/// Represents the scope at which a section applies
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Global fallbacks
    Default,
    /// A named runner preset
    Runner(String),
    /// Override for everything whose absolute path starts with this one
    Path(PathBuf),
}

impl Scope {
    /// Classify a section name. Sections with other names carry no scope.
    pub fn from_section_name(name: &str) -> Option<Self> {
        if name == DEFAULT_SECTION {
            Some(Scope::Default)
        } else if let Some(runner) = name.strip_prefix(RUNNER_PREFIX) {
            Some(Scope::Runner(runner.to_string()))
        } else {
            name.strip_prefix(PATH_PREFIX)
                .map(|path| Scope::Path(absolutize(&expand_home(path))))
        }
    }

    /// Section name for a runner preset
    pub fn runner_section(runner: &str) -> String {
        format!("{RUNNER_PREFIX}{runner}")
    }

    /// Check whether this is a path scope covering `filename`.
    ///
    /// Path scopes compare plain string prefixes of the absolute paths, so
    /// `path:/a/b` also covers `/a/bc/file.py`.
    pub fn matches(&self, filename: &Path) -> bool {
        let Scope::Path(prefix) = self else {
            return false;
        };
        absolutize(filename)
            .to_string_lossy()
            .starts_with(&*prefix.to_string_lossy())
    }
}
