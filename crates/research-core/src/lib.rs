//! research-core: core library for the reSearch scholarly-article client
//!
//! This crate holds everything the client does besides drawing:
//!
//! - **Normalize**: lenient parsing of the API's quasi-JSON `keywords` and `url` fields
//! - **Bookmarks**: title-keyed bookmark list mirrored to a key/value store
//! - **Autocomplete**: debounced prefix completion with keyboard navigation
//! - **Search**: query/pagination/sort session state and request dispatch
//! - **Draft**: the add-article form and its conversion to an API payload
//! - **Display**: view models for result cards, the modal and the bookmark sidebar
//! - **Http**: the `ResearchApi` trait and its reqwest implementation
//! - **Config**: client configuration loaded from TOML
//!
//! # Architecture
//!
//! Controllers are owned by a single UI thread. Network calls and debounce
//! timers run as tokio tasks that report back over channels, tagged with a
//! sequence number so that a late response never overwrites a newer one.
//!
//! ```text
//! input -> Autocomplete/Search controller -> ResearchApi -> normalize -> display
//! display -> BookmarkStore -> KeyValueStore
//! ```

pub mod autocomplete;
pub mod bookmarks;
pub mod config;
pub mod display;
pub mod domain;
pub mod draft;
pub mod error;
pub mod http;
pub mod normalize;
pub mod search;

pub use autocomplete::{AutocompleteController, KeyOutcome, NavKey, SuggestionBatch};
pub use bookmarks::{BookmarkStore, FileStore, KeyValueStore, MemoryStore, Toggle};
pub use config::{
    ApiConfig, AutocompleteConfig, ClientConfig, DisplayConfig, SearchConfig, StorageConfig,
};
pub use display::ArticleCard;
pub use domain::{AddDocumentResponse, Article, NewDocument, SearchResponse};
pub use draft::ArticleDraft;
pub use error::{ApiError, ConfigError, DraftError, ResearchError, Result, StorageError};
pub use http::{HttpApi, ResearchApi};
pub use normalize::{
    is_valid_url, normalize_url, parse_keywords, parse_urls, truncate_abstract, valid_links,
};
pub use search::{SearchController, SearchOutcome, SearchPhase, SearchSession, SortKey};

/// Returns the version of research-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
