//! View models for result cards, the detail modal and the bookmark sidebar

use crate::domain::Article;
use crate::normalize::{normalize_url, parse_keywords, truncate_abstract, valid_links, ELLIPSIS};

pub const NO_TITLE: &str = "No Title";
pub const NO_ABSTRACT: &str = "Abstract not available";
pub const NO_CITATIONS: &str = "N/A";
pub const UNKNOWN_YEAR: &str = "Unknown";
pub const NO_LINKS: &str = "No valid links available";

/// Characters of abstract shown in the bookmark sidebar.
pub const PREVIEW_CHARS: usize = 100;

/// Everything a result card shows, with placeholders already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub citations: String,
    pub year: String,
    /// Validated links, in field order
    pub links: Vec<String>,
    /// Absolute target of each entry in `links`
    pub targets: Vec<String>,
}

impl ArticleCard {
    /// Build a card, truncating the abstract to `word_limit` words.
    pub fn from_article(article: &Article, word_limit: usize) -> Self {
        let abstract_text = if article.abstract_text.trim().is_empty() {
            NO_ABSTRACT.to_string()
        } else {
            truncate_abstract(&article.abstract_text, word_limit)
        };
        Self {
            abstract_text,
            ..Self::full(article)
        }
    }

    /// Build a card with the whole abstract, as the detail modal shows it.
    pub fn full(article: &Article) -> Self {
        let title = match article.title.trim() {
            "" => NO_TITLE.to_string(),
            t => t.to_string(),
        };
        let abstract_text = match article.abstract_text.trim() {
            "" => NO_ABSTRACT.to_string(),
            _ => article.abstract_text.clone(),
        };
        let citations = match article.n_citation {
            0 => NO_CITATIONS.to_string(),
            n => n.to_string(),
        };
        let year = match article.year {
            0 => UNKNOWN_YEAR.to_string(),
            y => y.to_string(),
        };

        let links = valid_links(&article.url);
        let targets = links
            .iter()
            .filter_map(|link| normalize_url(link))
            .map(String::from)
            .collect();

        Self {
            title,
            abstract_text,
            keywords: parse_keywords(&article.keywords),
            citations,
            year,
            links,
            targets,
        }
    }

    /// Labels for the links: `Link 1`, `Link 2`, ...
    pub fn link_labels(&self) -> Vec<String> {
        (1..=self.links.len()).map(link_label).collect()
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }
}

/// Label of the `n`th link (1-based).
pub fn link_label(n: usize) -> String {
    format!("Link {n}")
}

/// Sidebar preview: the first 100 characters of the abstract and `...`.
pub fn bookmark_preview(article: &Article) -> String {
    if article.abstract_text.trim().is_empty() {
        return NO_ABSTRACT.to_string();
    }
    let head: String = article.abstract_text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}{ELLIPSIS}")
}
