//! Client-side ordering of a result page

use std::cmp::Reverse;

use crate::domain::Article;

/// Sort order applied to the page currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Server order
    #[default]
    Relevance,
    /// Newest first
    Year,
    /// Most cited first
    Citations,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Relevance, SortKey::Year, SortKey::Citations];

    /// Cycle to the next key.
    pub fn next(self) -> Self {
        match self {
            SortKey::Relevance => SortKey::Year,
            SortKey::Year => SortKey::Citations,
            SortKey::Citations => SortKey::Relevance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Year => "year",
            SortKey::Citations => "citations",
        }
    }

    /// Order `articles` by this key. Ties keep server order.
    pub fn apply<'a>(self, articles: &'a [Article]) -> Vec<&'a Article> {
        let mut ordered: Vec<&Article> = articles.iter().collect();
        match self {
            SortKey::Relevance => {}
            SortKey::Year => ordered.sort_by_key(|a| Reverse(a.year)),
            SortKey::Citations => ordered.sort_by_key(|a| Reverse(a.n_citation)),
        }
        ordered
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
