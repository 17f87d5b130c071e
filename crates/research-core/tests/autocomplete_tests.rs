//! Autocomplete debounce and navigation integration tests

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::MockApi;
use research_core::{AutocompleteConfig, AutocompleteController, KeyOutcome, NavKey};

fn controller(api: &Arc<MockApi>) -> AutocompleteController {
    AutocompleteController::new(api.clone(), AutocompleteConfig::default())
}

/// Let every pending timer fire and deliver.
async fn settle(c: &mut AutocompleteController) {
    tokio::time::sleep(Duration::from_secs(1)).await;
    c.pump();
}

#[tokio::test(start_paused = true)]
async fn test_burst_sends_one_request_for_final_token() {
    let api = Arc::new(MockApi::default().with_completions(&["graph", "grammar"]));
    let mut c = controller(&api);

    c.on_input("g", false);
    c.on_input("gr", false);
    c.on_input("gra", false);
    settle(&mut c).await;

    assert_eq!(api.prefixes(), vec!["gra"]);
    assert_eq!(c.suggestions(), ["graph", "grammar"]);
    assert!(c.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_keystrokes_inside_window_restart_timer() {
    let api = Arc::new(MockApi::default().with_completions(&["graph"]));
    let mut c = controller(&api);

    for query in ["gr", "gra", "grap"] {
        c.on_input(query, false);
        tokio::time::sleep(Duration::from_millis(200)).await;
        c.pump();
    }
    assert_eq!(api.autocomplete_calls(), 0);

    settle(&mut c).await;
    assert_eq!(api.prefixes(), vec!["grap"]);
}

#[tokio::test(start_paused = true)]
async fn test_pause_past_window_sends_each() {
    let api = Arc::new(MockApi::default());
    let mut c = controller(&api);

    c.on_input("gr", false);
    tokio::time::sleep(Duration::from_millis(350)).await;
    c.on_input("gra", false);
    settle(&mut c).await;

    assert_eq!(api.prefixes(), vec!["gr", "gra"]);
}

#[tokio::test(start_paused = true)]
async fn test_single_char_token_sends_nothing() {
    let api = Arc::new(MockApi::default().with_completions(&["graph"]));
    let mut c = controller(&api);

    c.on_input("g", false);
    settle(&mut c).await;

    assert_eq!(api.autocomplete_calls(), 0);
    assert!(!c.has_pending());
    assert!(!c.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_short_token_clears_shown_list() {
    let api = Arc::new(MockApi::default().with_completions(&["graph"]));
    let mut c = controller(&api);

    c.on_input("gr", false);
    settle(&mut c).await;
    assert!(c.is_visible());

    c.on_input("gr n", false);
    assert!(!c.is_visible());
    assert!(c.suggestions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_only_last_token_is_completed() {
    let api = Arc::new(MockApi::default().with_completions(&["neural"]));
    let mut c = controller(&api);

    c.on_input("graph neu", false);
    settle(&mut c).await;

    assert_eq!(api.prefixes(), vec!["neu"]);
}

#[tokio::test(start_paused = true)]
async fn test_no_request_while_search_in_flight() {
    let api = Arc::new(MockApi::default().with_completions(&["graph"]));
    let mut c = controller(&api);

    c.on_input("gra", true);
    settle(&mut c).await;

    assert_eq!(api.autocomplete_calls(), 0);
    assert!(!c.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_commit_replaces_last_token() {
    let api = Arc::new(MockApi::default().with_completions(&["graph", "grammar", "gradient"]));
    let mut c = controller(&api);

    c.on_input("deep gra", false);
    settle(&mut c).await;

    c.handle_key(NavKey::Up, "deep gra");
    let outcome = c.handle_key(NavKey::Enter, "deep gra");
    assert_eq!(
        outcome,
        KeyOutcome::Commit {
            query: "deep gradient".to_string()
        }
    );
    assert!(!c.is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_keys_ignored_when_hidden() {
    let api = Arc::new(MockApi::default());
    let mut c = controller(&api);

    for key in [NavKey::Up, NavKey::Down, NavKey::Enter, NavKey::Tab, NavKey::Escape] {
        assert_eq!(c.handle_key(key, "gra"), KeyOutcome::Ignored);
    }
}
