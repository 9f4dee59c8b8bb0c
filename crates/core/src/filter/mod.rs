//! Turning a file and an editor tag into a runner filter
//!
//! [`RunnerConfig`] is the fully resolved configuration for one file. It
//! classifies the tag, applies the ignore list and expands the matching
//! templates into a filter, a command, or a clipboard-ready command.

pub mod layout;
pub mod tag;
pub mod template;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::LayerConfig;
use crate::error::Result;
use crate::utils::{absolutize, expand_home, relative_to};
use tag::TagKind;
use template::{expand, join};

/// Names that are never selected on their own
pub const DEFAULT_IGNORED: [&str; 4] = ["__init__", "setUp", "tearDown", "test_suite"];

const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Resolved runner configuration for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerConfig {
    pub workdir: String,
    pub command: String,
    pub filter_for_file: String,
    pub filter_for_directory: String,
    pub filter_for_package: String,
    pub filter_for_module: String,
    pub filter_for_doctest_file: String,
    pub filter_for_doctest: String,
    pub filter_for_function: String,
    pub filter_for_class: String,
    pub filter_for_method: String,
    pub absolute_filenames: bool,
    pub relative_filenames: bool,
    pub relative_to: String,
    pub clipboard_extras: String,
    pub clipboard_extras_suffix: String,
    pub ignore_functions_and_methods: BTreeSet<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workdir: String::new(),
            command: String::new(),
            filter_for_file: String::new(),
            filter_for_directory: String::new(),
            filter_for_package: String::new(),
            filter_for_module: String::new(),
            filter_for_doctest_file: String::new(),
            filter_for_doctest: String::new(),
            filter_for_function: String::new(),
            filter_for_class: String::new(),
            filter_for_method: String::new(),
            absolute_filenames: false,
            relative_filenames: false,
            relative_to: String::new(),
            clipboard_extras: String::new(),
            clipboard_extras_suffix: String::new(),
            ignore_functions_and_methods: DEFAULT_IGNORED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What a file contributes to template expansion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileContext {
    filename: String,
    directory: String,
    module: String,
    package: String,
}

impl FileContext {
    fn new(filename: &Path) -> Self {
        Self {
            filename: filename.to_string_lossy().into_owned(),
            directory: filename
                .parent()
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_default(),
            module: layout::module_name(filename),
            package: layout::package_name(filename),
        }
    }

    fn full_module(&self) -> String {
        layout::full_module(&self.package, &self.module)
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the fields a layer defines, replacing the current values
    pub fn apply_layer(&mut self, layer: &LayerConfig) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }

        fn set_path(slot: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *slot = expand_home(value).to_string_lossy().into_owned();
            }
        }

        set(&mut self.command, &layer.command);
        set_path(&mut self.workdir, &layer.workdir);
        set(&mut self.filter_for_file, &layer.filter_for_file);
        set(&mut self.filter_for_directory, &layer.filter_for_directory);
        set(&mut self.filter_for_package, &layer.filter_for_package);
        set(&mut self.filter_for_module, &layer.filter_for_module);
        set(&mut self.filter_for_doctest_file, &layer.filter_for_doctest_file);
        set(&mut self.filter_for_doctest, &layer.filter_for_doctest);
        set(&mut self.filter_for_function, &layer.filter_for_function);
        set(&mut self.filter_for_class, &layer.filter_for_class);
        set(&mut self.filter_for_method, &layer.filter_for_method);
        set(&mut self.absolute_filenames, &layer.absolute_filenames);
        set(&mut self.relative_filenames, &layer.relative_filenames);
        set_path(&mut self.relative_to, &layer.relative_to);
        set(&mut self.clipboard_extras, &layer.clipboard_extras);
        set(&mut self.clipboard_extras_suffix, &layer.clipboard_extras_suffix);
        set(
            &mut self.ignore_functions_and_methods,
            &layer.ignore_functions_and_methods,
        );
    }

    /// Builder form of [`RunnerConfig::apply_layer`]
    pub fn with_layer(mut self, layer: &LayerConfig) -> Self {
        self.apply_layer(layer);
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_functions_and_methods.contains(name)
    }

    /// Filter for a tag on its own, without any file context
    pub fn construct_tag_filter(&self, tag: &str) -> String {
        self.tag_filter(tag, None)
    }

    fn tag_filter(&self, tag: &str, file: Option<&FileContext>) -> String {
        let tag = tag::clean_tag(tag);
        if tag.is_empty() {
            return String::new();
        }

        if tag::is_doctest(tag) && !self.filter_for_doctest.is_empty() {
            let full_module = file.map(FileContext::full_module);
            let mut values = vec![("function", tag)];
            if let Some(full_module) = full_module.as_deref() {
                values.push(("full_module", full_module));
            }
            return expand(&self.filter_for_doctest, &values);
        }

        let function = match TagKind::classify(tag) {
            TagKind::InnerFunction { outer } => outer,
            TagKind::Method { class, method } => {
                if self.is_ignored(method) {
                    if !self.filter_for_class.is_empty() {
                        return expand(&self.filter_for_class, &[("class", class)]);
                    }
                    class
                } else if !self.filter_for_method.is_empty() {
                    return expand(
                        &self.filter_for_method,
                        &[("class", class), ("method", method)],
                    );
                } else {
                    method
                }
            }
            TagKind::Class(class) if !self.filter_for_class.is_empty() => {
                return expand(&self.filter_for_class, &[("class", class)]);
            }
            TagKind::Class(name) | TagKind::Function(name) => name,
        };

        if self.is_ignored(function) {
            tracing::debug!("Tag {:?} resolves to ignored name {:?}", tag, function);
            return String::new();
        }
        expand(&self.filter_for_function, &[("function", function)])
    }

    /// Normalize a filename according to the filename flags
    pub fn prepare_filename(&self, filename: &Path) -> PathBuf {
        if self.absolute_filenames {
            absolutize(filename)
        } else if self.relative_filenames {
            let base = if !self.relative_to.is_empty() {
                PathBuf::from(&self.relative_to)
            } else if !self.workdir.is_empty() {
                PathBuf::from(&self.workdir)
            } else {
                PathBuf::new()
            };
            relative_to(filename, &base)
        } else {
            filename.to_path_buf()
        }
    }

    fn doctest_file_filter(&self, filename: &Path) -> String {
        let template = [
            &self.filter_for_doctest_file,
            &self.filter_for_doctest,
            &self.filter_for_function,
        ]
        .into_iter()
        .find(|template| !template.is_empty())
        .map_or("", String::as_str);
        let basename = filename
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        expand(template, &[("function", basename.as_str())])
    }

    /// Full filter for a file and tag
    pub fn construct_filter(&self, filename: impl AsRef<Path>, tag: &str) -> String {
        let filename = self.prepare_filename(filename.as_ref());
        let file = FileContext::new(&filename);

        let tag_filter = if layout::is_doctest_file(&filename) {
            self.doctest_file_filter(&filename)
        } else {
            self.tag_filter(tag, Some(&file))
        };

        if tag_filter.contains(FILENAME_PLACEHOLDER) {
            return expand(&tag_filter, &[("filename", file.filename.as_str())]);
        }

        let optional = |value: &str, template: &str, name: &str| {
            if value.is_empty() {
                String::new()
            } else {
                expand(template, &[(name, value)])
            }
        };

        join(&[
            expand(&self.filter_for_file, &[("filename", file.filename.as_str())]),
            optional(&file.directory, &self.filter_for_directory, "directory"),
            optional(&file.package, &self.filter_for_package, "package"),
            optional(&file.module, &self.filter_for_module, "module"),
            tag_filter,
        ])
    }

    /// Command that runs the tests selected by the file and tag
    pub fn construct_command(&self, filename: impl AsRef<Path>, tag: &str) -> String {
        let filter = self.construct_filter(filename, tag);
        join(&[self.command.as_str(), filter.as_str()])
    }

    /// Self-contained command for pasting into a shell
    pub fn construct_clipboard_command(&self, filename: impl AsRef<Path>, tag: &str) -> String {
        let filter = self.construct_filter(filename, tag);
        let command = join(&[
            self.command.as_str(),
            self.clipboard_extras.as_str(),
            filter.as_str(),
            self.clipboard_extras_suffix.as_str(),
        ]);
        if self.workdir.is_empty() {
            command
        } else {
            format!("(cd {} && {})", shell_quote(&self.workdir), command)
        }
    }

    /// Pretty JSON rendering of this configuration
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Single-quote `arg` unless every character is safe for a POSIX shell
fn shell_quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn templates(function: &str) -> RunnerConfig {
        RunnerConfig {
            filter_for_function: function.to_string(),
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_is_ignored() {
        let mut rc = RunnerConfig::new();
        assert!(rc.is_ignored("setUp"));

        rc.ignore_functions_and_methods = ["bad", "beef"].iter().map(|s| s.to_string()).collect();
        assert!(rc.is_ignored("bad"));
        assert!(!rc.is_ignored("good"));
        assert!(!rc.is_ignored("setUp"));
    }

    #[test]
    fn test_construct_tag_filter() {
        let rc = RunnerConfig {
            filter_for_doctest: "-d {function}".into(),
            filter_for_function: "-f {function}".into(),
            filter_for_class: "-c {class}".into(),
            filter_for_method: "-m {class}::{method}".into(),
            ..RunnerConfig::default()
        };

        assert_eq!(rc.construct_tag_filter("test_foo"), "-f test_foo");
        assert_eq!(rc.construct_tag_filter("doctest_foo"), "-d doctest_foo");
        assert_eq!(rc.construct_tag_filter("TestFoo"), "-c TestFoo");
        assert_eq!(rc.construct_tag_filter("TestFoo.test_bar"), "-m TestFoo::test_bar");
    }

    #[test]
    fn test_construct_tag_filter_cleans_the_tag() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter("[in test_foo (function)]"), "-f test_foo");
    }

    #[test]
    fn test_construct_tag_filter_no_doctest_specialization() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter("doctest_foo"), "-f doctest_foo");
    }

    #[test]
    fn test_construct_tag_filter_no_class_specialization() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter("TestFoo"), "-f TestFoo");
    }

    #[test]
    fn test_construct_tag_filter_no_method_specialization() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter("TestFoo.test_foo"), "-f test_foo");
    }

    #[test]
    fn test_construct_tag_filter_inner_function_in_method() {
        let rc = RunnerConfig {
            filter_for_method: "-m {class}::{method}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_tag_filter("TestFoo.test_bar.inner"),
            "-m TestFoo::test_bar"
        );
    }

    #[test]
    fn test_construct_tag_filter_inner_function_in_function() {
        let rc = RunnerConfig {
            filter_for_function: "-f {function}".into(),
            filter_for_method: "-m {class}::{method}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_tag_filter("test_bar.inner"), "-f test_bar");
    }

    #[test]
    fn test_construct_tag_filter_ignored_method() {
        let rc = RunnerConfig {
            filter_for_function: "-f {function}".into(),
            filter_for_class: "-c {class}".into(),
            filter_for_method: "-m {class}::{method}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_tag_filter("TestFoo.__init__"), "-c TestFoo");
    }

    #[test]
    fn test_construct_tag_filter_ignored_method_no_class_specialization() {
        let rc = RunnerConfig {
            filter_for_function: "-f {function}".into(),
            filter_for_method: "-m {class}::{method}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_tag_filter("TestFoo.__init__"), "-f TestFoo");
    }

    #[test]
    fn test_construct_tag_filter_ignored_function() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter("setUp"), "");
        assert_eq!(rc.construct_tag_filter("setUp.inner"), "");
    }

    #[test]
    fn test_construct_tag_filter_no_configuration() {
        assert_eq!(RunnerConfig::new().construct_tag_filter("test_foo"), "");
    }

    #[test]
    fn test_construct_tag_filter_no_tag() {
        let rc = templates("-f {function}");
        assert_eq!(rc.construct_tag_filter(""), "");
        assert_eq!(rc.construct_tag_filter("[]"), "");
    }

    #[test]
    fn test_prepare_filename() {
        let mut rc = RunnerConfig::new();
        assert_eq!(rc.prepare_filename(Path::new("foo.py")), PathBuf::from("foo.py"));

        rc.absolute_filenames = true;
        assert_eq!(
            rc.prepare_filename(Path::new("foo.py")),
            std::env::current_dir().unwrap().join("foo.py")
        );
    }

    #[test]
    fn test_prepare_filename_relative() {
        let mut rc = RunnerConfig {
            relative_filenames: true,
            workdir: "/src/project".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.prepare_filename(Path::new("/src/project/pkg/test_foo.py")),
            PathBuf::from("pkg/test_foo.py")
        );

        rc.relative_to = "/src/project/pkg".into();
        assert_eq!(
            rc.prepare_filename(Path::new("/src/project/pkg/test_foo.py")),
            PathBuf::from("test_foo.py")
        );
    }

    #[test]
    fn test_prepare_filename_absolute_wins() {
        let rc = RunnerConfig {
            absolute_filenames: true,
            relative_filenames: true,
            relative_to: "/src".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.prepare_filename(Path::new("/src/test_foo.py")),
            PathBuf::from("/src/test_foo.py")
        );
    }

    #[test]
    fn test_construct_filter_no_tag() {
        let rc = RunnerConfig {
            filter_for_file: "-F {filename}".into(),
            filter_for_function: "-f {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_filter("test_foo.py", ""), "-F test_foo.py");
        assert_eq!(rc.construct_filter("test_foo.py", "setUp"), "-F test_foo.py");
    }

    #[test]
    fn test_construct_filter_with_tag() {
        let rc = RunnerConfig {
            filter_for_file: "-F {filename}".into(),
            filter_for_function: "-f {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter("test_foo.py", "test_bar"),
            "-F test_foo.py -f test_bar"
        );
    }

    #[test]
    fn test_construct_filter_with_tag_combined() {
        let rc = RunnerConfig {
            filter_for_file: "-F {filename}".into(),
            filter_for_function: "{filename}::{function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter("test_foo.py", "test_bar"),
            "test_foo.py::test_bar"
        );
    }

    #[test]
    fn test_construct_filter_absolute_filename() {
        let rc = RunnerConfig {
            filter_for_file: "-F {filename}".into(),
            absolute_filenames: true,
            ..RunnerConfig::default()
        };
        let expected = std::env::current_dir().unwrap().join("test_foo.py");
        assert_eq!(
            rc.construct_filter("test_foo.py", ""),
            format!("-F {}", expected.display())
        );
    }

    #[test]
    fn test_construct_filter_with_module() {
        let temp_dir = TempDir::new().unwrap();
        let rc = RunnerConfig {
            filter_for_module: "-m {module}".into(),
            filter_for_function: "-t {function}".into(),
            ..RunnerConfig::default()
        };

        let test_foo = temp_dir.path().join("pkg/test_foo.py");
        assert_eq!(rc.construct_filter(&test_foo, "test_bar"), "-m test_foo -t test_bar");

        let init = temp_dir.path().join("pkg/__init__.py");
        assert_eq!(rc.construct_filter(&init, "test_bar"), "-t test_bar");
    }

    #[test]
    fn test_construct_filter_with_package() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path().join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("__init__.py"), "").unwrap();

        let rc = RunnerConfig {
            filter_for_package: "-p {package}".into(),
            filter_for_module: "-m {module}".into(),
            filter_for_function: "-t {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter(pkg.join("test_foo.py"), "test_bar"),
            "-p pkg -m test_foo -t test_bar"
        );
    }

    #[test]
    fn test_construct_filter_with_directory() {
        let rc = RunnerConfig {
            filter_for_directory: "-d {directory}".into(),
            filter_for_module: "-m {module}".into(),
            filter_for_function: "-t {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter("pkg/test_foo.py", "test_bar"),
            "-d pkg -m test_foo -t test_bar"
        );
        assert_eq!(
            rc.construct_filter("test_foo.py", "test_bar"),
            "-m test_foo -t test_bar"
        );
    }

    #[test]
    fn test_construct_filter_with_directory_when_using_absolute_filenames() {
        let rc = RunnerConfig {
            filter_for_directory: "-d {directory}".into(),
            filter_for_module: "-m {module}".into(),
            filter_for_function: "-t {function}".into(),
            absolute_filenames: true,
            ..RunnerConfig::default()
        };
        let pkg = std::env::current_dir().unwrap().join("pkg");
        assert_eq!(
            rc.construct_filter("pkg/test_foo.py", "test_bar"),
            format!("-d {} -m test_foo -t test_bar", pkg.display())
        );
    }

    #[test]
    fn test_construct_filter_doctest_file() {
        let rc = RunnerConfig {
            filter_for_doctest: "-d {function}".into(),
            filter_for_function: "-t {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_filter("doctests/test.txt", ""), "-d test.txt");
    }

    #[test]
    fn test_construct_filter_doctest_file_template_wins() {
        let rc = RunnerConfig {
            filter_for_doctest_file: "--doctest-glob {function}".into(),
            filter_for_doctest: "-d {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter("doctests/test.rst", "TestIgnored"),
            "--doctest-glob test.rst"
        );
    }

    #[test]
    fn test_construct_filter_doctest_file_no_explicit_doctest_config() {
        let rc = templates("-t {function}");
        assert_eq!(rc.construct_filter("doctests/test.txt", ""), "-t test.txt");
    }

    #[test]
    fn test_construct_filter_doctest_full_module() {
        let temp_dir = TempDir::new().unwrap();
        let pkg = temp_dir.path().join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("__init__.py"), "").unwrap();

        let rc = RunnerConfig {
            filter_for_doctest: "--doctest {full_module}.{function}".into(),
            filter_for_function: "-t {function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_filter(pkg.join("utils.py"), "format_name"),
            "--doctest pkg.utils.format_name"
        );
        assert_eq!(
            rc.construct_tag_filter("format_name"),
            "--doctest {full_module}.format_name"
        );
    }

    #[test]
    fn test_construct_command() {
        let rc = RunnerConfig {
            command: "pytest -ra".into(),
            filter_for_function: "{filename}::{function}".into(),
            ..RunnerConfig::default()
        };
        insta::assert_snapshot!(
            rc.construct_command("test_foo.py", "test_bar"),
            @"pytest -ra test_foo.py::test_bar"
        );
    }

    #[test]
    fn test_construct_clipboard_command() {
        let rc = RunnerConfig {
            command: "pytest -ra".into(),
            filter_for_function: "{filename}::{function}".into(),
            clipboard_extras: "--color=auto".into(),
            clipboard_extras_suffix: "2>&1 | less -R".into(),
            ..RunnerConfig::default()
        };
        insta::assert_snapshot!(
            rc.construct_clipboard_command("test_foo.py", "test_bar"),
            @"pytest -ra --color=auto test_foo.py::test_bar 2>&1 | less -R"
        );
    }

    #[test]
    fn test_construct_clipboard_command_no_extras() {
        let rc = RunnerConfig {
            command: "pytest -ra".into(),
            filter_for_function: "{filename}::{function}".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_clipboard_command("test_foo.py", "test_bar"),
            "pytest -ra test_foo.py::test_bar"
        );
    }

    #[test]
    fn test_construct_clipboard_command_with_workdir() {
        let mut rc = RunnerConfig {
            command: "bin/test".into(),
            filter_for_function: "-t {function}".into(),
            workdir: "/src/project".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(
            rc.construct_clipboard_command("test_foo.txt", ""),
            "(cd /src/project && bin/test -t test_foo.txt)"
        );

        rc.workdir = "/src/my project".into();
        assert_eq!(
            rc.construct_clipboard_command("test_foo.txt", ""),
            "(cd '/src/my project' && bin/test -t test_foo.txt)"
        );
    }

    #[test]
    fn test_construct_clipboard_command_quotes_metacharacters() {
        let mut rc = RunnerConfig {
            command: "bin/test".into(),
            workdir: "/tmp/a;b".into(),
            ..RunnerConfig::default()
        };
        assert_eq!(rc.construct_clipboard_command("", ""), "(cd '/tmp/a;b' && bin/test)");

        rc.workdir = "/tmp/it's $HOME".into();
        assert_eq!(
            rc.construct_clipboard_command("", ""),
            r"(cd '/tmp/it'\''s $HOME' && bin/test)"
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("/src/project-1.0"), "/src/project-1.0");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("a&b"), "'a&b'");
        assert_eq!(shell_quote("don't"), r"'don'\''t'");
    }

    #[test]
    fn test_apply_layer_expands_home_in_paths() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let mut layer = LayerConfig::new().with_command("bin/test");
        layer.workdir = Some("~/my project".into());
        layer.relative_to = Some("~/src".into());

        let rc = RunnerConfig::new().with_layer(&layer);

        let workdir = home.join("my project").to_string_lossy().into_owned();
        assert_eq!(rc.workdir, workdir);
        assert_eq!(rc.relative_to, home.join("src").to_string_lossy());
        assert_eq!(
            rc.construct_clipboard_command("", ""),
            format!("(cd {} && bin/test)", shell_quote(&workdir))
        );
        assert!(!rc.construct_clipboard_command("", "").contains('~'));
    }

    #[test]
    fn test_apply_layer() {
        let mut layer = LayerConfig::new().with_command("nosetests");
        layer.absolute_filenames = Some(true);
        layer.ignore_functions_and_methods = Some(["setUpClass".to_string()].into());

        let rc = RunnerConfig::new().with_layer(&layer);

        assert_eq!(rc.command, "nosetests");
        assert!(rc.absolute_filenames);
        assert!(rc.is_ignored("setUpClass"));
        assert!(!rc.is_ignored("setUp"));
        assert_eq!(rc.filter_for_function, "");
    }

    #[test]
    fn test_to_json() {
        let json = RunnerConfig::new().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["absolute_filenames"], false);
        assert_eq!(value["ignore_functions_and_methods"][0], "__init__");
    }
}
