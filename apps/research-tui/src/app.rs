//! Application state and main render loop

use std::path::Path;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

use research_core::draft::{added_message, ADD_FAILED_MESSAGE};
use research_core::{
    AddDocumentResponse, ApiError, Article, ArticleDraft, AutocompleteController,
    BookmarkStore, ClientConfig, KeyOutcome, KeyValueStore, ResearchApi, SearchController,
    Toggle,
};

use crate::keybindings::{normal_mode_action, suggestion_key, Action};
use crate::mode::Mode;
use crate::views::{centered_rect, AddForm, BookmarkSidebar, DetailView, FormField, ResultsView, SearchBar};
use crate::widgets::StatusBar;

/// Main application state
pub struct App {
    /// Where keys go
    pub mode: Mode,
    /// Search box text
    pub query: String,
    pub autocomplete: AutocompleteController,
    pub search: SearchController,
    pub bookmarks: BookmarkStore,
    pub form: AddForm,
    /// Article shown in the modal
    pub detail: Option<Article>,
    pub detail_scroll: u16,
    /// Mode to return to when the modal closes
    detail_return: Mode,
    pub show_sidebar: bool,
    pub sidebar_cursor: usize,
    pub show_help: bool,
    /// Status message
    pub status_message: Option<String>,
    api: Arc<dyn ResearchApi>,
    api_url: String,
    word_limit: usize,
    add_tx: mpsc::UnboundedSender<Result<AddDocumentResponse, ApiError>>,
    add_rx: mpsc::UnboundedReceiver<Result<AddDocumentResponse, ApiError>>,
}

impl App {
    /// Create a new application instance
    pub fn new(
        config: &ClientConfig,
        api: Arc<dyn ResearchApi>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let (add_tx, add_rx) = mpsc::unbounded_channel();
        Self {
            mode: Mode::Normal,
            query: String::new(),
            autocomplete: AutocompleteController::new(
                Arc::clone(&api),
                config.autocomplete.clone(),
            ),
            search: SearchController::new(Arc::clone(&api), &config.search),
            bookmarks: BookmarkStore::load(store),
            form: AddForm::new(),
            detail: None,
            detail_scroll: 0,
            detail_return: Mode::Normal,
            show_sidebar: false,
            sidebar_cursor: 0,
            show_help: false,
            status_message: None,
            api,
            api_url: config.api.base_url.clone(),
            word_limit: config.display.abstract_word_limit,
            add_tx,
            add_rx,
        }
    }

    /// Apply everything background tasks delivered. Returns whether to redraw.
    pub fn tick(&mut self) -> bool {
        let mut changed = self.autocomplete.pump();
        changed |= self.search.pump();

        while let Ok(outcome) = self.add_rx.try_recv() {
            self.form.submitting = false;
            match outcome {
                Ok(response) => {
                    tracing::info!(time_taken = response.time_taken, "article added");
                    self.status_message = Some(added_message(&response));
                    self.form.reset();
                    if self.mode == Mode::Form {
                        self.mode = Mode::Normal;
                    }
                }
                Err(e) => {
                    tracing::warn!("{}: {}", ADD_FAILED_MESSAGE, e);
                    self.status_message = Some(ADD_FAILED_MESSAGE.to_string());
                }
            }
            changed = true;
        }
        changed
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(3), // Search box
                Constraint::Min(0),    // Results and sidebar
                Constraint::Length(1), // Message line
            ])
            .split(size);

        StatusBar {
            mode: self.mode,
            api_url: &self.api_url,
            bookmarks: self.bookmarks.len(),
            loading: self.search.is_loading() || self.form.submitting,
        }
        .render(frame, chunks[0]);

        SearchBar::render(
            frame,
            chunks[1],
            &self.query,
            self.mode == Mode::Search,
            self.search.is_loading(),
        );

        let body = if self.show_sidebar {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(40)])
                .split(chunks[2]);
            BookmarkSidebar::render(
                frame,
                split[1],
                &self.bookmarks,
                self.sidebar_cursor,
                self.mode == Mode::Bookmarks,
            );
            split[0]
        } else {
            chunks[2]
        };
        ResultsView::render(
            frame,
            body,
            self.search.session(),
            &self.bookmarks,
            self.word_limit,
        );

        self.render_message_line(frame, chunks[3]);

        if self.mode == Mode::Search && self.autocomplete.is_visible() {
            SearchBar::render_suggestions(
                frame,
                chunks[1],
                self.autocomplete.suggestions(),
                self.autocomplete.highlighted(),
            );
        }
        if let Some(article) = &self.detail {
            DetailView::render(
                frame,
                size,
                article,
                self.bookmarks.is_bookmarked(article),
                self.detail_scroll,
            );
        }
        if self.mode == Mode::Form {
            self.form.render(frame, size);
        }
        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_message_line(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.mode {
            Mode::Normal => "/ search | j/k move | n/p page | s sort | b bookmark | o open | B bookmarks | a add | q quit",
            Mode::Search => "Enter search | Up/Down choose suggestion | Tab accept | Esc back",
            Mode::Bookmarks => "j/k move | o open | b remove | B hide | Esc back",
            Mode::Detail => "j/k scroll | b bookmark | Esc close",
            Mode::Form => "Tab next field | Ctrl+S submit | Esc close",
        };
        let content = self.status_message.clone().unwrap_or_else(|| hint.to_string());
        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
reSearch - Help

Search box (/ or i):
  type      - Edit query; suggestions follow the last word
  Up/Down   - Move through suggestions
  Enter/Tab - Accept suggestion and search
  Enter     - Search (no suggestion highlighted)
  Esc       - Hide suggestions, then leave the box

Results:
  j/k       - Move up/down
  n/p       - Next/previous page
  s         - Sort by relevance, year, citations
  b         - Bookmark / un-bookmark
  o, Enter  - Open article

Other:
  B         - Bookmark sidebar
  a         - Add an article
  ?         - Toggle this help
  q         - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }
        if self.show_help && !self.mode.is_text_entry() {
            self.show_help = false;
            return false;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Search => self.handle_search_key(code),
            Mode::Bookmarks => self.handle_bookmarks_key(code),
            Mode::Detail => self.handle_detail_key(code),
            Mode::Form => self.handle_form_key(code, modifiers),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };
        match action {
            Action::Quit => return true,
            Action::FocusSearch => {
                self.mode = Mode::Search;
                self.status_message = None;
            }
            Action::MoveDown => self.search.session_mut().cursor_down(),
            Action::MoveUp => self.search.session_mut().cursor_up(),
            Action::NextPage => {
                self.search.next_page();
            }
            Action::PrevPage => {
                self.search.prev_page();
            }
            Action::CycleSort => {
                let key = self.search.cycle_sort();
                self.status_message = Some(format!("Sorted by {key}"));
            }
            Action::ToggleBookmark => {
                if let Some(article) = self.search.session().selected().cloned() {
                    self.toggle_bookmark(&article);
                }
            }
            Action::OpenDetail => {
                if let Some(article) = self.search.session().selected().cloned() {
                    self.open_detail(article);
                }
            }
            Action::ToggleSidebar => {
                self.show_sidebar = !self.show_sidebar;
                if self.show_sidebar {
                    self.mode = Mode::Bookmarks;
                    self.clamp_sidebar_cursor();
                }
            }
            Action::AddArticle => {
                self.mode = Mode::Form;
                self.status_message = None;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Cancel => self.status_message = None,
        }
        false
    }

    fn handle_search_key(&mut self, code: KeyCode) -> bool {
        if let Some(nav) = suggestion_key(code) {
            match self.autocomplete.handle_key(nav, &self.query) {
                KeyOutcome::Commit { query } => {
                    self.query = query;
                    self.submit_search();
                    return false;
                }
                KeyOutcome::Moved | KeyOutcome::Dismissed => return false,
                KeyOutcome::Ignored => {}
            }
        }

        match code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.query.pop();
                self.on_query_edited();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.on_query_edited();
            }
            _ => {}
        }
        false
    }

    fn on_query_edited(&mut self) {
        self.autocomplete
            .on_input(&self.query, self.search.is_loading());
    }

    fn submit_search(&mut self) {
        self.autocomplete.close();
        if self.search.submit(&self.query) {
            self.mode = Mode::Normal;
            self.status_message = None;
        }
    }

    fn handle_bookmarks_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Char('B') => {
                self.show_sidebar = false;
                self.mode = Mode::Normal;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.sidebar_cursor + 1 < self.bookmarks.len() {
                    self.sidebar_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            KeyCode::Char('o') | KeyCode::Enter => {
                if let Some(article) = self.bookmarks.bookmarks().get(self.sidebar_cursor).cloned() {
                    self.open_detail(article);
                }
            }
            KeyCode::Char('b') | KeyCode::Char('d') => {
                if let Some(article) = self.bookmarks.bookmarks().get(self.sidebar_cursor).cloned() {
                    self.toggle_bookmark(&article);
                    self.clamp_sidebar_cursor();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_detail_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('q') => {
                self.detail = None;
                self.mode = self.detail_return;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::Char('b') => {
                if let Some(article) = self.detail.clone() {
                    self.toggle_bookmark(&article);
                    self.clamp_sidebar_cursor();
                }
            }
            _ => {}
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if code == KeyCode::Char('s') {
                self.submit_form();
            }
            return false;
        }

        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter if self.form.focus == FormField::ImportPath => self.import_draft(),
            KeyCode::Enter => self.form.focus_next(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) => self.form.push(c),
            _ => {}
        }
        false
    }

    fn import_draft(&mut self) {
        let path = self.form.import_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        match ArticleDraft::from_file(Path::new(&path)) {
            Ok(draft) => {
                self.form.draft = draft;
                self.form.focus = FormField::Title;
                self.status_message = Some(format!("Loaded {path}"));
            }
            Err(e) => {
                tracing::warn!(path = %path, "Failed to load article file: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Validate the form and send it. Must be called within a tokio runtime.
    fn submit_form(&mut self) {
        if self.form.submitting {
            return;
        }
        let document = match self.form.draft.to_document() {
            Ok(document) => document,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };

        self.form.submitting = true;
        self.status_message = Some("Adding article...".to_string());
        let api = Arc::clone(&self.api);
        let tx = self.add_tx.clone();
        tokio::spawn(async move {
            let outcome = api.add_document(&document).await;
            // The receiver lives as long as the app
            let _ = tx.send(outcome);
        });
    }

    fn open_detail(&mut self, article: Article) {
        self.detail = Some(article);
        self.detail_scroll = 0;
        self.detail_return = self.mode;
        self.mode = Mode::Detail;
    }

    fn toggle_bookmark(&mut self, article: &Article) {
        let verb = match self.bookmarks.toggle(article) {
            Ok(Toggle::Added) => "Bookmarked",
            Ok(Toggle::Removed) => "Removed bookmark",
            Err(e) => {
                tracing::warn!("Failed to save bookmarks: {}", e);
                self.status_message = Some(format!("Bookmarks not saved: {e}"));
                return;
            }
        };
        self.status_message = Some(format!("{verb}: {}", article.title));
    }

    fn clamp_sidebar_cursor(&mut self) {
        self.sidebar_cursor = self
            .sidebar_cursor
            .min(self.bookmarks.len().saturating_sub(1));
    }
}
