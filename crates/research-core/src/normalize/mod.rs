//! Lenient normalization of raw API fields
//!
//! The upstream data source writes list fields as Python reprs
//! (`['a', 'b']`), not JSON. Every function here absorbs malformed input
//! into a placeholder or an empty list; nothing in this module returns an
//! error or panics on bad data.

pub mod keywords;
pub mod text;
pub mod urls;

pub use keywords::{parse_keywords, NO_KEYWORDS};
pub use text::{truncate_abstract, DEFAULT_ABSTRACT_WORD_LIMIT, ELLIPSIS};
pub use urls::{is_valid_url, normalize_url, parse_urls, valid_links};

/// Turn a Python-repr list into JSON text by swapping quote styles.
///
/// Apostrophes inside items become quotes too, which breaks the parse for
/// such items; callers fall back on failure.
pub(crate) fn requote(raw: &str) -> String {
    raw.replace('\'', "\"")
}
