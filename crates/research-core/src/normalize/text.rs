//! Abstract truncation

/// Word budget for abstracts on result cards.
pub const DEFAULT_ABSTRACT_WORD_LIMIT: usize = 100;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Keep the first `word_limit` words of `text`.
///
/// Text within the limit is returned unmodified, whitespace included.
/// Truncated text is re-joined with single spaces and ends with `...`.
pub fn truncate_abstract(text: &str, word_limit: usize) -> String {
    let mut words = text.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(word_limit).collect();
    if words.next().is_none() {
        return text.to_string();
    }
    format!("{}{}", head.join(" "), ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_truncates_over_limit() {
        let out = truncate_abstract(&words(101), 100);
        assert!(out.ends_with(ELLIPSIS));
        let body = out.strip_suffix(ELLIPSIS).unwrap();
        assert_eq!(body.split_whitespace().count(), 100);
        assert!(body.ends_with("w100"));
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_abstract("short text", 100), "short text");
    }

    #[test]
    fn test_exact_limit_unchanged() {
        let text = words(100);
        assert_eq!(truncate_abstract(&text, 100), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(truncate_abstract("", 100), "");
    }

    proptest! {
        #[test]
        fn truncation_is_stable(n in 0usize..300, limit in 1usize..150) {
            let once = truncate_abstract(&words(n), limit);
            let body = once.strip_suffix(ELLIPSIS).unwrap_or(&once);
            prop_assert!(body.split_whitespace().count() <= limit);
            // Re-applying to the kept words changes nothing
            prop_assert_eq!(truncate_abstract(body, limit), body.to_string());
        }
    }
}
