//! Bookmark list keyed by article title
//!
//! The list lives in memory for the lifetime of the app and is mirrored in
//! full to a [`KeyValueStore`] after every change. Loading tolerates missing
//! or corrupt snapshots by starting empty.

pub mod storage;

pub use storage::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use crate::domain::Article;
use crate::error::StorageError;

/// Storage key of the persisted snapshot.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// What a toggle did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Ordered, title-unique bookmark list with write-through persistence.
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
    items: Vec<Article>,
}

impl BookmarkStore {
    /// Load the persisted list, starting empty if it is absent or unreadable.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match store.get_item(BOOKMARKS_KEY) {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<Article>>(&snapshot) {
                Ok(items) => dedup_by_title(items),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable bookmark snapshot: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read bookmarks: {}", e);
                Vec::new()
            }
        };
        tracing::debug!(count = items.len(), "bookmarks loaded");

        Self { store, items }
    }

    /// Remove the article if a bookmark with its title exists, else append it.
    ///
    /// The in-memory list changes even when persisting fails; the write
    /// error is returned for the caller to report.
    pub fn toggle(&mut self, article: &Article) -> Result<Toggle, StorageError> {
        let change = match self.position(&article.title) {
            Some(index) => {
                self.items.remove(index);
                Toggle::Removed
            }
            None => {
                self.items.push(article.clone());
                Toggle::Added
            }
        };
        self.persist()?;
        Ok(change)
    }

    pub fn is_bookmarked(&self, article: &Article) -> bool {
        self.contains_title(&article.title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.position(title).is_some()
    }

    /// Bookmarks in insertion order.
    pub fn bookmarks(&self) -> &[Article] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|b| b.title == title)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.items)?;
        self.store.set_item(BOOKMARKS_KEY, &snapshot)
    }
}

fn dedup_by_title(items: Vec<Article>) -> Vec<Article> {
    let mut unique: Vec<Article> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|u| u.same_identity(&item)) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn article(title: &str) -> Article {
        Article {
            abstract_text: format!("About {title}"),
            year: 2020,
            ..Article::new(title)
        }
    }

    fn empty_store() -> (Arc<MemoryStore>, BookmarkStore) {
        let backing = Arc::new(MemoryStore::new());
        let store = BookmarkStore::load(backing.clone());
        (backing, store)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (_, mut store) = empty_store();
        let a = article("A");

        assert_eq!(store.toggle(&a).unwrap(), Toggle::Added);
        assert!(store.is_bookmarked(&a));
        assert_eq!(store.toggle(&a).unwrap(), Toggle::Removed);
        assert!(!store.is_bookmarked(&a));
    }

    #[test]
    fn test_identity_is_title() {
        let (_, mut store) = empty_store();
        store.toggle(&article("Same")).unwrap();

        let other = Article {
            year: 1990,
            ..Article::new("Same")
        };
        assert!(store.is_bookmarked(&other));
        assert_eq!(store.toggle(&other).unwrap(), Toggle::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_, mut store) = empty_store();
        for t in ["C", "A", "B"] {
            store.toggle(&article(t)).unwrap();
        }
        let titles: Vec<&str> = store.bookmarks().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_every_toggle_writes_snapshot() {
        let (backing, mut store) = empty_store();
        store.toggle(&article("A")).unwrap();
        store.toggle(&article("B")).unwrap();

        let snapshot = backing.get_item(BOOKMARKS_KEY).unwrap().unwrap();
        let saved: Vec<Article> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(saved, store.bookmarks());

        store.toggle(&article("A")).unwrap();
        let snapshot = backing.get_item(BOOKMARKS_KEY).unwrap().unwrap();
        let saved: Vec<Article> = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "B");
    }

    #[test]
    fn test_reload_restores_list() {
        let (backing, mut store) = empty_store();
        store.toggle(&article("A")).unwrap();
        store.toggle(&article("B")).unwrap();

        let reloaded = BookmarkStore::load(backing);
        assert_eq!(reloaded.bookmarks(), store.bookmarks());
    }

    #[test]
    fn test_corrupt_snapshot_loads_empty() {
        let backing = Arc::new(MemoryStore::new().with_item(BOOKMARKS_KEY, "{not json"));
        let store = BookmarkStore::load(backing);
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_titles_collapse_on_load() {
        let snapshot = r#"[{"title": "A", "year": 1}, {"title": "B"}, {"title": "A", "year": 2}]"#;
        let backing = Arc::new(MemoryStore::new().with_item(BOOKMARKS_KEY, snapshot));
        let store = BookmarkStore::load(backing);
        assert_eq!(store.len(), 2);
        assert_eq!(store.bookmarks()[0].year, 1);
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io("denied".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("disk full".to_string()))
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_change() {
        let mut store = BookmarkStore::load(Arc::new(FailingStore));
        assert!(store.is_empty());

        let err = store.toggle(&article("A")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(store.contains_title("A"));
    }

    proptest! {
        #[test]
        fn toggle_is_its_own_inverse(
            titles in proptest::collection::vec("[a-e]{1,3}", 0..8),
            target in "[a-e]{1,3}",
        ) {
            let (_, mut store) = empty_store();
            for t in &titles {
                if !store.contains_title(t) {
                    store.toggle(&article(t)).unwrap();
                }
            }
            let before = store.bookmarks().to_vec();

            let a = article(&target);
            store.toggle(&a).unwrap();
            store.toggle(&a).unwrap();

            // Removing then re-adding moves an existing entry to the end,
            // so compare as sets when the target was already present.
            if before.iter().any(|b| b.title == target) {
                let mut left: Vec<_> = before.iter().map(|b| b.title.clone()).collect();
                let mut right: Vec<_> = store.bookmarks().iter().map(|b| b.title.clone()).collect();
                left.sort();
                right.sort();
                prop_assert_eq!(left, right);
            } else {
                prop_assert_eq!(store.bookmarks(), before.as_slice());
            }
        }
    }
}
