//! `{{name}}` placeholder substitution for log messages.
//!
//! A token is two opening braces, an ASCII letter, any number of ASCII letters
//! or digits, and two closing braces. Tokens whose name is a key of the
//! [`Context`] are replaced by the value's text form; all other tokens stay in
//! the output exactly as written. Replacement text is never scanned again.

use crate::context::Context;
use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([a-zA-Z][a-zA-Z0-9]*)\}\}").expect("Invalid placeholder regex")
});

/// Replaces every known `{{name}}` token in `message` with its context value.
///
/// Key matching is exact and case-sensitive. An empty context returns the
/// message unchanged.
#[must_use]
pub fn substitute(message: &str, context: &Context) -> String {
    if context.is_empty() {
        return message.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(message, |caps: &Captures<'_>| {
            context
                .get(&caps[1])
                .map_or_else(|| caps[0].to_string(), render_value)
        })
        .into_owned()
}

/// Text form of a context value.
///
/// Strings are inserted verbatim, numbers and booleans in their natural text,
/// `null` as `null`. Arrays join their elements' text forms with `,`, and
/// objects collapse to `[object]`; neither is serialized.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object]".to_string(),
    }
}
