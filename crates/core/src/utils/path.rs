//! Path helpers that work lexically, without touching the filesystem

use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and collapse `.`/`..`.
///
/// Symlinks are not resolved, and an empty path means the current directory.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(err) => {
                tracing::debug!("Cannot read current directory ({}), keeping {:?}", err, path);
                path.to_path_buf()
            }
        }
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`, both taken as absolute.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = absolutize(path);
    let base = absolutize(base);
    pathdiff::diff_paths(&path, &base).unwrap_or(path)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
