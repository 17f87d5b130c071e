//! Search session state machine
//!
//! ```text
//! Idle -> Searching -> Results | Empty
//!            ^             |
//!            +-------------+  (new query or page change)
//! Searching -> Idle           (request failed)
//! Searching -> Searching      (total shrank below the requested page)
//! ```
//!
//! The session never performs I/O. Starting a search hands back a
//! [`SearchTicket`]; the response is fed back with [`SearchSession::complete`]
//! or [`SearchSession::fail`] together with the ticket's sequence number.

use std::time::Duration;

use crate::domain::{Article, SearchRequest, SearchResponse};
use crate::error::ApiError;

use super::SortKey;

/// Display phase of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing to show: before the first search, or after a failure
    #[default]
    Idle,
    /// A request is in flight
    Searching,
    /// A page of matches is held
    Results,
    /// No matches; the held page is the server's most cited fallback
    Empty,
}

/// A request the caller should send.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    page_size: u32,
    query: String,
    current_page: u32,
    pending_page: Option<u32>,
    total_results: u64,
    results: Vec<Article>,
    sort_key: SortKey,
    phase: SearchPhase,
    elapsed: Option<Duration>,
    cursor: usize,
    latest_seq: u64,
    refetch: Option<SearchTicket>,
}

impl SearchSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            query: String::new(),
            current_page: 1,
            pending_page: None,
            total_results: 0,
            results: Vec::new(),
            sort_key: SortKey::default(),
            phase: SearchPhase::default(),
            elapsed: None,
            cursor: 0,
            latest_seq: 0,
            refetch: None,
        }
    }

    /// Start a new query at page 1. Blank queries are ignored.
    pub fn begin_query(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.query = query.to_string();
        self.current_page = 1;
        self.total_results = 0;
        self.sort_key = SortKey::Relevance;
        Some(self.begin(1))
    }

    /// Request `page` of the current query, if it exists.
    pub fn go_to_page(&mut self, page: u32) -> Option<SearchTicket> {
        if self.query.is_empty() || page < 1 || page > self.total_pages() {
            return None;
        }
        Some(self.begin(page))
    }

    pub fn next_page(&mut self) -> Option<SearchTicket> {
        if !self.has_next_page() {
            return None;
        }
        self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> Option<SearchTicket> {
        if !self.has_prev_page() {
            return None;
        }
        self.go_to_page(self.current_page - 1)
    }

    fn begin(&mut self, page: u32) -> SearchTicket {
        self.latest_seq += 1;
        self.refetch = None;
        self.pending_page = Some(page);
        self.results.clear();
        self.phase = SearchPhase::Searching;
        self.elapsed = None;
        self.cursor = 0;

        SearchTicket {
            seq: self.latest_seq,
            request: SearchRequest {
                query: self.query.clone(),
                page,
                per_page: self.page_size,
            },
        }
    }

    /// Feed back a successful response. Returns false for stale responses.
    ///
    /// If the new total no longer reaches the requested page, the page is
    /// dropped and the last existing page is requested instead; collect that
    /// request with [`SearchSession::take_refetch`].
    pub fn complete(&mut self, seq: u64, response: SearchResponse, elapsed: Duration) -> bool {
        if !self.is_current(seq) {
            return false;
        }

        let requested = self.pending_page.take().unwrap_or(self.current_page);
        self.total_results = response.total;
        self.elapsed = Some(elapsed);
        self.cursor = 0;

        if self.total_results == 0 {
            self.results = response.output;
            self.phase = SearchPhase::Empty;
            self.current_page = 1;
        } else if requested > self.total_pages() {
            let last = self.total_pages();
            tracing::info!(
                query = %self.query,
                requested,
                last,
                "result count shrank, requesting last page"
            );
            self.current_page = self.current_page.min(last);
            let ticket = self.begin(last);
            self.refetch = Some(ticket);
        } else {
            self.results = response.output;
            self.phase = SearchPhase::Results;
            self.current_page = requested;
        }
        tracing::debug!(
            query = %self.query,
            page = self.current_page,
            total = self.total_results,
            "search completed"
        );
        true
    }

    /// The follow-up request issued by the last [`SearchSession::complete`].
    pub fn take_refetch(&mut self) -> Option<SearchTicket> {
        self.refetch.take()
    }

    /// Feed back a failed request. Returns false for stale failures.
    ///
    /// Results are cleared; the query and last committed page stay.
    pub fn fail(&mut self, seq: u64, error: &ApiError, elapsed: Duration) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        tracing::warn!(query = %self.query, "Search request failed: {}", error);

        self.pending_page = None;
        self.refetch = None;
        self.results.clear();
        self.phase = SearchPhase::Idle;
        self.elapsed = Some(elapsed);
        self.cursor = 0;
        true
    }

    fn is_current(&self, seq: u64) -> bool {
        let current = seq == self.latest_seq && self.phase == SearchPhase::Searching;
        if !current {
            tracing::debug!(seq, latest = self.latest_seq, "dropping stale search response");
        }
        current
    }

    /// Reorder the held page. Never refetches.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.cursor = 0;
    }

    /// The held page in the active sort order.
    pub fn visible_results(&self) -> Vec<&Article> {
        self.sort_key.apply(&self.results)
    }

    /// The held page in server order.
    pub fn results(&self) -> &[Article] {
        &self.results
    }

    /// Message for the zero-match case, quoting the query.
    pub fn empty_message(&self) -> Option<String> {
        (self.phase == SearchPhase::Empty).then(|| {
            format!(
                "No results found for \"{}\". Showing the most cited articles instead.",
                self.query
            )
        })
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total_results.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next_page(&self) -> bool {
        self.phase == SearchPhase::Results && self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.phase == SearchPhase::Results && self.current_page > 1
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.results.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The article under the cursor, in display order.
    pub fn selected(&self) -> Option<&Article> {
        self.visible_results().get(self.cursor).copied()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Round-trip time of the last completed request
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }
}
