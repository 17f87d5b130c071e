//! Request and response bodies of the search API

use serde::{Deserialize, Serialize};

use super::Article;

/// Body of `POST /api/process`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub per_page: u32,
}

/// Response of `POST /api/process`
///
/// When `total` is zero the server fills `output` with its most cited
/// articles instead of matches.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub output: Vec<Article>,
    #[serde(default)]
    pub total: u64,
}

/// Body of `POST /api/add_document`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub year: i32,
    pub keywords: Vec<String>,
    pub n_citation: f64,
    pub url: String,
}

/// Response of `POST /api/add_document`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AddDocumentResponse {
    /// Server-side indexing time in seconds
    pub time_taken: f64,
    #[serde(default)]
    pub message: Option<String>,
}
