//! Placeholder expansion for filter templates

/// Replace every `{name}` whose name appears in `values`.
///
/// Values are substituted in order, each one everywhere in the template.
/// Unknown placeholders are copied through untouched so a template can be
/// finished by a later expansion, e.g. `{filename}` in a tag filter.
pub fn expand(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{key}}}"), value)
        })
}

/// Join the non-empty parts with single spaces
pub fn join<S: AsRef<str>>(parts: &[S]) -> String {
    let parts: Vec<&str> = parts
        .iter()
        .map(|part| part.as_ref())
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(" ")
}
