//! Keyword list parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::requote;

/// Sentinel shown when an article has no usable keywords.
pub const NO_KEYWORDS: &str = "No keywords";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Parse the raw `keywords` field into display strings.
///
/// # Examples
/// ```
/// use research_core::parse_keywords;
/// assert_eq!(parse_keywords("['a', 'b']"), vec!["a", "b"]);
/// assert_eq!(parse_keywords(""), vec!["No keywords"]);
/// assert_eq!(parse_keywords("not json"), vec!["No keywords"]);
/// ```
pub fn parse_keywords(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return no_keywords();
    }

    let json = requote(raw);
    let json = WHITESPACE_RUN.replace_all(&json, " ");

    match serde_json::from_str::<Value>(json.trim()) {
        Ok(Value::Array(items)) => items.into_iter().map(item_text).collect(),
        Ok(_) => no_keywords(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "unparseable keywords field");
            no_keywords()
        }
    }
}

fn no_keywords() -> Vec<String> {
    vec![NO_KEYWORDS.to_string()]
}

fn item_text(item: Value) -> String {
    match item {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
