//! Top status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::ModeIndicator;
use crate::mode::Mode;

pub struct StatusBar<'a> {
    pub mode: Mode,
    pub api_url: &'a str,
    pub bookmarks: usize,
    pub loading: bool,
}

impl StatusBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let activity = if self.loading {
            Span::styled(" ... ", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("     ")
        };

        let line = Line::from(vec![
            Span::raw(" reSearch "),
            ModeIndicator::new(self.mode).as_span(),
            activity,
            Span::raw(format!("| {} bookmarks | ", self.bookmarks)),
            Span::styled(self.api_url.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(" | ? for help"),
        ]);

        let bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(bar, area);
    }
}
