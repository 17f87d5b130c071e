//! Shared fixtures for research-core integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use research_core::domain::SearchRequest;
use research_core::{AddDocumentResponse, ApiError, Article, NewDocument, ResearchApi, SearchResponse};

/// In-memory stand-in for the search API.
///
/// Searches match titles case-insensitively. A query with no matches
/// answers with the most cited articles and `total: 0`, like the server.
#[derive(Default)]
pub struct MockApi {
    catalog: Vec<Article>,
    catalog_limit: Mutex<Option<usize>>,
    completions: Vec<String>,
    fail_search: AtomicBool,
    search_calls: AtomicUsize,
    requests: Mutex<Vec<SearchRequest>>,
    prefixes: Mutex<Vec<String>>,
    added: Mutex<Vec<NewDocument>>,
}

impl MockApi {
    pub fn new(catalog: Vec<Article>) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    pub fn with_completions(mut self, completions: &[&str]) -> Self {
        self.completions = completions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_search.store(failing, Ordering::SeqCst);
    }

    /// Serve only the first `n` catalog entries from now on.
    pub fn limit_catalog(&self, n: usize) {
        *self.catalog_limit.lock().unwrap() = Some(n);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn autocomplete_calls(&self) -> usize {
        self.prefixes.lock().unwrap().len()
    }

    pub fn prefixes(&self) -> Vec<String> {
        self.prefixes.lock().unwrap().clone()
    }

    pub fn added(&self) -> Vec<NewDocument> {
        self.added.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResearchApi for MockApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if self.fail_search.load(Ordering::SeqCst) {
            return Err(ApiError::Request("connection refused".to_string()));
        }

        let limit = self.catalog_limit.lock().unwrap().unwrap_or(self.catalog.len());
        let needle = request.query.to_lowercase();
        let matches: Vec<&Article> = self
            .catalog
            .iter()
            .take(limit)
            .filter(|a| a.title.to_lowercase().contains(&needle))
            .collect();
        let per_page = request.per_page as usize;

        if matches.is_empty() {
            let mut cited: Vec<&Article> = self.catalog.iter().collect();
            cited.sort_by_key(|a| std::cmp::Reverse(a.n_citation));
            return Ok(SearchResponse {
                output: cited.into_iter().take(per_page).cloned().collect(),
                total: 0,
            });
        }

        let start = (request.page.saturating_sub(1) as usize) * per_page;
        Ok(SearchResponse {
            output: matches.iter().skip(start).take(per_page).map(|a| (*a).clone()).collect(),
            total: matches.len() as u64,
        })
    }

    async fn autocomplete(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        self.prefixes.lock().unwrap().push(prefix.to_string());
        Ok(self
            .completions
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn add_document(&self, document: &NewDocument) -> Result<AddDocumentResponse, ApiError> {
        self.added.lock().unwrap().push(document.clone());
        Ok(AddDocumentResponse {
            time_taken: 0.5,
            message: Some("Document added successfully".to_string()),
        })
    }
}

/// `n` articles titled `"{prefix} {i}"`, with distinct years and citations.
pub fn articles(prefix: &str, n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| Article {
            abstract_text: format!("Abstract of {prefix} {i}."),
            keywords: "['one', 'two']".to_string(),
            n_citation: ((i * 37) % 101) as u64,
            year: 1990 + (i % 30) as i32,
            url: format!("['https://example.org/{i}']"),
            ..Article::new(format!("{prefix} {i}"))
        })
        .collect()
}
