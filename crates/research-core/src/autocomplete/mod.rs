//! Debounced prefix completion for the search box
//!
//! Each keystroke restarts a debounce timer for the query's last token.
//! When the timer fires, a task asks the API for completions and reports a
//! [`SuggestionBatch`] back over a channel. The owner drains the channel on
//! its own thread with [`AutocompleteController::pump`], so suggestion state
//! is only ever touched by one thread.
//!
//! Every scheduled request gets a sequence number. Only the batch carrying
//! the latest number is applied; anything older is dropped, so a slow
//! response can never overwrite suggestions for newer input.

pub mod token;

pub use token::{last_token, replace_last_token};

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::AutocompleteConfig;
use crate::error::ApiError;
use crate::http::ResearchApi;

/// Completions for one token, tagged with the request sequence number.
#[derive(Debug)]
pub struct SuggestionBatch {
    pub seq: u64,
    pub token: String,
    pub outcome: Result<Vec<String>, ApiError>,
}

/// Keys the suggestion list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Tab,
    Escape,
}

/// Result of offering a key to the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The list did not use the key; handle it normally
    Ignored,
    /// The highlight moved
    Moved,
    /// The list was hidden without committing
    Dismissed,
    /// A suggestion was accepted; search `query` right away
    Commit { query: String },
}

pub struct AutocompleteController {
    api: Arc<dyn ResearchApi>,
    config: AutocompleteConfig,
    suggestions: Vec<String>,
    highlighted: Option<usize>,
    visible: bool,
    latest_seq: u64,
    pending: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<SuggestionBatch>,
    rx: mpsc::UnboundedReceiver<SuggestionBatch>,
}

impl AutocompleteController {
    pub fn new(api: Arc<dyn ResearchApi>, config: AutocompleteConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            config,
            suggestions: Vec::new(),
            highlighted: None,
            visible: false,
            latest_seq: 0,
            pending: None,
            tx,
            rx,
        }
    }

    /// React to an edit of the search box.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_input(&mut self, query: &str, search_in_flight: bool) {
        let token = last_token(query);

        if token.chars().count() < self.config.min_token_chars {
            self.close();
            return;
        }

        if search_in_flight {
            tracing::debug!(token, "search in flight, not requesting suggestions");
            self.close();
            return;
        }

        self.cancel_pending();
        let seq = self.latest_seq;
        let token = token.to_string();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let delay = self.config.debounce();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(seq, token = %token, "requesting suggestions");
            let outcome = api.autocomplete(&token).await;
            // The receiver lives as long as the controller
            let _ = tx.send(SuggestionBatch {
                seq,
                token,
                outcome,
            });
        }));
    }

    /// Apply a delivered batch. Returns false for stale batches.
    pub fn apply(&mut self, batch: SuggestionBatch) -> bool {
        if batch.seq != self.latest_seq {
            tracing::debug!(
                seq = batch.seq,
                latest = self.latest_seq,
                "dropping stale suggestions"
            );
            return false;
        }
        self.pending = None;

        match batch.outcome {
            Ok(suggestions) => {
                self.visible = !suggestions.is_empty();
                self.suggestions = suggestions;
                self.highlighted = None;
            }
            Err(e) => {
                tracing::debug!(token = %batch.token, error = %e, "autocomplete failed");
                self.clear();
            }
        }
        true
    }

    /// Apply everything delivered so far without waiting.
    ///
    /// Returns whether the visible state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(batch) = self.rx.try_recv() {
            changed |= self.apply(batch);
        }
        changed
    }

    /// Wait for the next delivered batch.
    pub async fn recv(&mut self) -> Option<SuggestionBatch> {
        self.rx.recv().await
    }

    /// Offer a key to the suggestion list.
    pub fn handle_key(&mut self, key: NavKey, query: &str) -> KeyOutcome {
        if !self.is_visible() {
            return KeyOutcome::Ignored;
        }
        let count = self.suggestions.len();

        match key {
            NavKey::Down => {
                self.highlighted = Some(match self.highlighted {
                    None => 0,
                    Some(i) => (i + 1) % count,
                });
                KeyOutcome::Moved
            }
            NavKey::Up => {
                self.highlighted = Some(match self.highlighted {
                    None | Some(0) => count - 1,
                    Some(i) => i - 1,
                });
                KeyOutcome::Moved
            }
            NavKey::Enter | NavKey::Tab => match self.highlighted_suggestion().map(str::to_string) {
                Some(suggestion) => {
                    let query = replace_last_token(query, &suggestion);
                    self.close();
                    KeyOutcome::Commit { query }
                }
                None => KeyOutcome::Ignored,
            },
            NavKey::Escape => {
                self.visible = false;
                self.highlighted = None;
                KeyOutcome::Dismissed
            }
        }
    }

    /// Cancel pending work and clear the list.
    pub fn close(&mut self) {
        self.cancel_pending();
        self.clear();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    /// Whether a request is scheduled or in flight.
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the pending task and invalidate anything already delivered.
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.latest_seq += 1;
    }

    fn clear(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
        self.visible = false;
    }
}

impl Drop for AutocompleteController {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
