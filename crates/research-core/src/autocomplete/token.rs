//! Query token helpers

/// The last whitespace-delimited token of `query`.
///
/// A query ending in whitespace has an empty last token, so completing
/// starts fresh after a space.
///
/// # Examples
/// ```
/// use research_core::autocomplete::last_token;
/// assert_eq!(last_token("graph neur"), "neur");
/// assert_eq!(last_token("graph "), "");
/// ```
pub fn last_token(query: &str) -> &str {
    match query.rfind(char::is_whitespace) {
        Some(i) => {
            let ws_len = query[i..].chars().next().map_or(1, char::len_utf8);
            &query[i + ws_len..]
        }
        None => query,
    }
}

/// Replace the last token of `query` with `replacement`.
///
/// Everything before the last token, spacing included, is kept.
pub fn replace_last_token(query: &str, replacement: &str) -> String {
    let token = last_token(query);
    let prefix = &query[..query.len() - token.len()];
    format!("{prefix}{replacement}")
}
