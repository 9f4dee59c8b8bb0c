//! Editor tags: cleaning and classification
//!
//! A tag names the code entity under the cursor, e.g. `test_foo`,
//! `TestFoo.test_bar` or `[in TestFoo.test_bar (method)]`.

/// What a clean, non-empty tag points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind<'a> {
    /// `outer.inner`: a function nested in a test function
    InnerFunction { outer: &'a str },
    /// `Class.method`, possibly with further nested segments
    Method { class: &'a str, method: &'a str },
    /// `Class`
    Class(&'a str),
    /// Anything else
    Function(&'a str),
}

impl<'a> TagKind<'a> {
    /// Classify a clean tag by its shape.
    ///
    /// Doctest detection is separate (see [`is_doctest`]) because it only
    /// takes precedence when a doctest template is configured.
    pub fn classify(tag: &'a str) -> Self {
        if is_inner_function(tag) {
            TagKind::InnerFunction {
                outer: strip_inner_function(tag),
            }
        } else if is_method(tag) {
            let (class, method) = split_class_method(tag);
            TagKind::Method { class, method }
        } else if is_class(tag) {
            TagKind::Class(tag)
        } else {
            TagKind::Function(tag)
        }
    }
}

/// Strip the cursor decoration around a tag.
///
/// Handles both `[fulltagname]` and `[in fulltagname (kind)]`.
pub fn clean_tag(tag: &str) -> &str {
    let tag = tag.strip_prefix('[').unwrap_or(tag);
    let tag = tag.strip_suffix(']').unwrap_or(tag);
    let tag = tag.strip_prefix("in ").unwrap_or(tag);
    if tag.ends_with(')') {
        tag.rsplit_once(" (").map_or("", |(name, _)| name)
    } else {
        tag
    }
}

/// Tags that do not look like conventional test names are treated as doctests
pub fn is_doctest(tag: &str) -> bool {
    !(tag.starts_with("test")
        || tag.starts_with("Test")
        || tag.contains(".test")
        || tag.ends_with("Tests"))
}

pub fn is_inner_function(tag: &str) -> bool {
    tag.contains('.') && starts_with(tag, char::is_lowercase)
}

pub fn is_method(tag: &str) -> bool {
    tag.contains('.') && starts_with(tag, char::is_uppercase)
}

pub fn is_class(tag: &str) -> bool {
    starts_with(tag, char::is_uppercase) && !tag.contains('.')
}

fn starts_with(tag: &str, predicate: impl Fn(char) -> bool) -> bool {
    tag.chars().next().is_some_and(predicate)
}

pub fn strip_inner_function(tag: &str) -> &str {
    tag.split_once('.').map_or(tag, |(outer, _)| outer)
}

/// First two dot-separated segments; deeper nesting is dropped
pub fn split_class_method(tag: &str) -> (&str, &str) {
    let mut parts = tag.split('.');
    let class = parts.next().unwrap_or_default();
    let method = parts.next().unwrap_or_default();
    (class, method)
}
