//! The add-article form
//!
//! An [`ArticleDraft`] holds the form fields as typed text. It can be
//! prefilled from an uploaded JSON document and is validated into a
//! [`NewDocument`] when submitted.

use std::path::Path;

use serde_json::Value;

use crate::domain::{AddDocumentResponse, NewDocument};
use crate::error::DraftError;

/// Raw text of the add-article form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub abstract_text: String,
    pub url: String,
    /// Comma-separated
    pub keywords: String,
    pub citations: String,
    pub year: String,
}

impl ArticleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an uploaded JSON document.
    ///
    /// Absent fields stay blank; `keywords` may be an array or a string.
    pub fn from_json(text: &str) -> Result<Self, DraftError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DraftError::InvalidJson(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(DraftError::InvalidJson("expected an object".to_string()));
        };

        let text_of = |key: &str| fields.get(key).map(field_text).unwrap_or_default();

        let keywords = match fields.get("keywords") {
            Some(Value::Array(items)) => items
                .iter()
                .map(field_text)
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => field_text(other),
            None => String::new(),
        };

        Ok(Self {
            title: text_of("title"),
            abstract_text: text_of("abstract"),
            url: text_of("url"),
            keywords,
            citations: text_of("n_citation"),
            year: text_of("year"),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, DraftError> {
        let text = std::fs::read_to_string(path).map_err(|e| DraftError::Io(e.to_string()))?;
        Self::from_json(&text)
    }

    /// Validate into an API payload.
    pub fn to_document(&self) -> Result<NewDocument, DraftError> {
        let title = required("title", &self.title)?;
        let abstract_text = required("abstract", &self.abstract_text)?;
        let url = required("url", &self.url)?;
        let keywords = required("keywords", &self.keywords)?;
        let citations = required("n_citation", &self.citations)?;
        let year = required("year", &self.year)?;

        let year: i32 = year.parse().map_err(|_| DraftError::InvalidNumber {
            field: "year",
            value: year.to_string(),
        })?;
        let n_citation = citations
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .ok_or_else(|| DraftError::InvalidNumber {
                field: "n_citation",
                value: citations.to_string(),
            })?;

        Ok(NewDocument {
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            year,
            keywords: split_keywords(keywords),
            n_citation,
            url: url.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Notification text for a successful add.
pub fn added_message(response: &AddDocumentResponse) -> String {
    format!("Article added in {:.2}s", response.time_taken)
}

/// Notification text for a failed add.
pub const ADD_FAILED_MESSAGE: &str = "Failed to add article";

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DraftError> {
    match value.trim() {
        "" => Err(DraftError::MissingField(field)),
        v => Ok(v),
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
