//! Search box and suggestion dropdown

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Rows the dropdown may take before it scrolls off.
const MAX_DROPDOWN_ROWS: u16 = 8;

pub struct SearchBar;

impl SearchBar {
    /// Render the input box; places the terminal cursor when focused.
    pub fn render(frame: &mut Frame, area: Rect, query: &str, focused: bool, loading: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = if loading { "Search (searching...)" } else { "Search" };

        let content = if query.is_empty() && !focused {
            Line::from(Span::styled(
                "Press / to search articles",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(query)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(Paragraph::new(content).block(block), area);

        if focused {
            let typed = query.chars().count() as u16;
            let x = (area.x + 1 + typed).min(area.right().saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    /// Render the dropdown under the input box.
    pub fn render_suggestions(
        frame: &mut Frame,
        input_area: Rect,
        suggestions: &[String],
        highlighted: Option<usize>,
    ) {
        if suggestions.is_empty() {
            return;
        }
        let screen = frame.area();
        let rows = (suggestions.len() as u16).min(MAX_DROPDOWN_ROWS) + 2;
        let y = input_area.bottom();
        let height = rows.min(screen.bottom().saturating_sub(y));
        if height < 3 {
            return;
        }
        let area = Rect::new(input_area.x + 1, y, input_area.width.saturating_sub(2).min(50), height);

        let items: Vec<ListItem> = suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let style = if Some(i) == highlighted {
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(s.as_str()).style(style)
            })
            .collect();

        frame.render_widget(Clear, area);
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(list, area);
    }
}
