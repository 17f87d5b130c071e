//! Add-article form
//!
//! Six article fields plus a path to prefill them from a JSON file.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use research_core::ArticleDraft;

use super::centered_rect;

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Abstract,
    Url,
    Keywords,
    Citations,
    Year,
    ImportPath,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Title,
        FormField::Abstract,
        FormField::Url,
        FormField::Keywords,
        FormField::Citations,
        FormField::Year,
        FormField::ImportPath,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Abstract => "Abstract",
            FormField::Url => "URL",
            FormField::Keywords => "Keywords (comma separated)",
            FormField::Citations => "Citations",
            FormField::Year => "Year",
            FormField::ImportPath => "Load from JSON file",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Form state
#[derive(Debug, Clone)]
pub struct AddForm {
    pub draft: ArticleDraft,
    pub import_path: String,
    pub focus: FormField,
    /// A submission is awaiting the server
    pub submitting: bool,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            draft: ArticleDraft::new(),
            import_path: String::new(),
            focus: FormField::Title,
            submitting: false,
        }
    }
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Abstract => &self.draft.abstract_text,
            FormField::Url => &self.draft.url,
            FormField::Keywords => &self.draft.keywords,
            FormField::Citations => &self.draft.citations,
            FormField::Year => &self.draft.year,
            FormField::ImportPath => &self.import_path,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.draft.title,
            FormField::Abstract => &mut self.draft.abstract_text,
            FormField::Url => &mut self.draft.url,
            FormField::Keywords => &mut self.draft.keywords,
            FormField::Citations => &mut self.draft.citations,
            FormField::Year => &mut self.draft.year,
            FormField::ImportPath => &mut self.import_path,
        }
    }

    pub fn push(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(70, 70, area);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            let focused = field == self.focus;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cursor = if focused { "_" } else { "" };

            if field == FormField::ImportPath {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(field.label(), label_style)));
            lines.push(Line::from(format!("  {}{}", self.value(field), cursor)));
        }

        let title = if self.submitting {
            "Add Article (submitting...)"
        } else {
            "Add Article"
        };
        let block = Block::default()
            .title(title)
            .title_bottom(" Tab: next field | Enter on file: load | Ctrl+S: submit | Esc: close ")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, modal);
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            modal,
        );
    }
}
