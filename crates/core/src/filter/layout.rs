//! Python source layout: module and package names inferred from paths

use std::path::Path;

use crate::utils::absolutize;

/// Extension of importable source files
pub const SOURCE_EXTENSION: &str = "py";
/// Module name of a package's init file
pub const PACKAGE_INIT: &str = "__init__";
/// File whose presence makes a directory a package
pub const PACKAGE_MARKER: &str = "__init__.py";
/// Suffixes of standalone doctest files
pub const DOCTEST_FILE_SUFFIXES: [&str; 3] = [".txt", ".rst", ".test"];

/// Doctest files are recognized by suffix alone
pub fn is_doctest_file(filename: &Path) -> bool {
    let name = filename.to_string_lossy();
    DOCTEST_FILE_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Module name of a source file, or empty for package inits and non-source files
pub fn module_name(filename: &Path) -> String {
    if filename.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
        return String::new();
    }
    match filename.file_stem().and_then(|s| s.to_str()) {
        Some(PACKAGE_INIT) | None => String::new(),
        Some(stem) => stem.to_string(),
    }
}

pub fn is_package_directory(dirname: &Path) -> bool {
    dirname.join(PACKAGE_MARKER).exists()
}

/// Dotted package containing `filename`, found on disk
pub fn package_name(filename: &Path) -> String {
    infer_package(filename, is_package_directory)
}

/// Walk up from the file's directory while `is_package` holds.
///
/// Stops at the filesystem root even if every directory claims to be a package.
pub fn infer_package(filename: &Path, is_package: impl Fn(&Path) -> bool) -> String {
    let absolute = absolutize(filename);
    let mut current = absolute.parent();
    let mut names = Vec::new();

    while let Some(dir) = current {
        if !is_package(dir) {
            break;
        }
        if let Some(name) = dir.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
        current = dir.parent();
    }

    tracing::trace!("Package of {:?}: {:?}", filename, names);
    names.reverse();
    names.join(".")
}

/// `package.module`, skipping whichever part is empty
pub fn full_module(package: &str, module: &str) -> String {
    [package, module]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}
