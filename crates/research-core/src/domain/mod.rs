//! Domain models for the reSearch client
//!
//! These mirror the JSON shapes of the search API.

pub mod api;
pub mod article;

pub use api::{AddDocumentResponse, NewDocument, SearchRequest, SearchResponse};
pub use article::Article;
