// src/template.rs

//! `${name}` placeholder substitution

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap()
});

/// Replace each `${name}` in `text` whose name is a key of `vars`
///
/// Unknown names are left in the output exactly as written. Substituted
/// values are not scanned again.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use ime_build_tools::template::substitute;
///
/// let vars = HashMap::from([("x".to_string(), "1".to_string())]);
/// assert_eq!(substitute("a${x}b${y}c", &vars), "a1b${y}c");
/// ```
pub fn substitute(text: &str, vars: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Parse a `NAME=VALUE` definition as given on the command line
pub fn parse_definition(definition: &str) -> Option<(String, String)> {
    let (name, value) = definition.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}
