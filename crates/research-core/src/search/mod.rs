//! Query submission, pagination and client-side sorting
//!
//! [`SearchSession`] holds the state; [`SearchController`] wires it to a
//! [`ResearchApi`], running each request as a tokio task that reports a
//! [`SearchOutcome`] back to the owning thread.

pub mod session;
pub mod sort;

pub use session::{SearchPhase, SearchSession, SearchTicket};
pub use sort::SortKey;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::config::SearchConfig;
use crate::domain::SearchResponse;
use crate::error::ApiError;
use crate::http::ResearchApi;

/// A finished search request
#[derive(Debug)]
pub struct SearchOutcome {
    pub seq: u64,
    pub result: Result<SearchResponse, ApiError>,
    pub elapsed: Duration,
}

pub struct SearchController {
    api: Arc<dyn ResearchApi>,
    session: SearchSession,
    tx: mpsc::UnboundedSender<SearchOutcome>,
    rx: mpsc::UnboundedReceiver<SearchOutcome>,
}

impl SearchController {
    pub fn new(api: Arc<dyn ResearchApi>, config: &SearchConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            session: SearchSession::new(config.page_size),
            tx,
            rx,
        }
    }

    /// Search for `query` from page 1. Returns false for a blank query.
    ///
    /// Must be called from within a tokio runtime, as must the paging calls.
    pub fn submit(&mut self, query: &str) -> bool {
        let ticket = self.session.begin_query(query);
        self.dispatch(ticket)
    }

    pub fn next_page(&mut self) -> bool {
        let ticket = self.session.next_page();
        self.dispatch(ticket)
    }

    pub fn prev_page(&mut self) -> bool {
        let ticket = self.session.prev_page();
        self.dispatch(ticket)
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let ticket = self.session.go_to_page(page);
        self.dispatch(ticket)
    }

    fn dispatch(&self, ticket: Option<SearchTicket>) -> bool {
        let Some(SearchTicket { seq, request }) = ticket else {
            return false;
        };
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();

        tracing::info!(query = %request.query, page = request.page, "searching");
        tokio::spawn(async move {
            let started = Instant::now();
            let result = api.search(&request).await;
            // The receiver lives as long as the controller
            let _ = tx.send(SearchOutcome {
                seq,
                result,
                elapsed: started.elapsed(),
            });
        });
        true
    }

    /// Apply a finished request. Returns false for stale outcomes.
    ///
    /// A response whose total no longer reaches the requested page triggers
    /// a request for the new last page.
    pub fn apply(&mut self, outcome: SearchOutcome) -> bool {
        let applied = match outcome.result {
            Ok(response) => self.session.complete(outcome.seq, response, outcome.elapsed),
            Err(e) => self.session.fail(outcome.seq, &e, outcome.elapsed),
        };
        let refetch = self.session.take_refetch();
        self.dispatch(refetch);
        applied
    }

    /// Apply everything delivered so far without waiting.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait for the next finished request.
    pub async fn recv(&mut self) -> Option<SearchOutcome> {
        self.rx.recv().await
    }

    /// Re-sort the held page. No request is made.
    pub fn set_sort(&mut self, key: SortKey) {
        self.session.set_sort(key);
    }

    pub fn cycle_sort(&mut self) -> SortKey {
        let key = self.session.sort_key().next();
        self.session.set_sort(key);
        key
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SearchSession {
        &mut self.session
    }
}
