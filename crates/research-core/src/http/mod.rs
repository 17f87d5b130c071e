//! Access to the remote search API

pub mod client;

pub use client::HttpApi;

use async_trait::async_trait;

use crate::domain::{AddDocumentResponse, NewDocument, SearchRequest, SearchResponse};
use crate::error::ApiError;

/// The three endpoints the client calls.
///
/// Controllers hold an `Arc<dyn ResearchApi>` so tests can substitute a mock.
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// `POST /api/process`
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;

    /// `GET /api/autocomplete?prefix=<prefix>`
    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, ApiError>;

    /// `POST /api/add_document`
    async fn add_document(&self, document: &NewDocument)
        -> Result<AddDocumentResponse, ApiError>;
}
