//! TUI interaction modes

/// Where key presses go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Result list navigation (default)
    #[default]
    Normal,
    /// Typing in the search box (activated with / or i)
    Search,
    /// Browsing the bookmark sidebar (activated with B)
    Bookmarks,
    /// Article detail modal (activated with o or Enter)
    Detail,
    /// Add-article form (activated with a)
    Form,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "NORMAL"),
            Mode::Search => write!(f, "SEARCH"),
            Mode::Bookmarks => write!(f, "BOOKMARKS"),
            Mode::Detail => write!(f, "DETAIL"),
            Mode::Form => write!(f, "ADD"),
        }
    }
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Search => "SRC",
            Mode::Bookmarks => "BMK",
            Mode::Detail => "VEW",
            Mode::Form => "ADD",
        }
    }

    /// Whether typed characters are text rather than commands.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Mode::Search | Mode::Form)
    }
}
