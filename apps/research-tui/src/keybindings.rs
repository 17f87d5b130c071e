//! Keybinding definitions

use crossterm::event::KeyCode;
use research_core::NavKey;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Focus the search box
    FocusSearch,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Request the next result page
    NextPage,
    /// Request the previous result page
    PrevPage,
    /// Cycle relevance / year / citations
    CycleSort,
    /// Bookmark or un-bookmark the selected article
    ToggleBookmark,
    /// Open the detail modal for the selected article
    OpenDetail,
    /// Show and focus the bookmark sidebar
    ToggleSidebar,
    /// Open the add-article form
    AddArticle,
    /// Toggle help
    ToggleHelp,
    /// Cancel/escape to normal mode
    Cancel,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusSearch),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Char('b') => Some(Action::ToggleBookmark),
        KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Char('B') => Some(Action::ToggleSidebar),
        KeyCode::Char('a') => Some(Action::AddArticle),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

/// Keys the suggestion dropdown may claim while typing a query
pub fn suggestion_key(code: KeyCode) -> Option<NavKey> {
    match code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Tab => Some(NavKey::Tab),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}
