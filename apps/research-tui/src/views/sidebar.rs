//! Bookmark sidebar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use research_core::display::bookmark_preview;
use research_core::BookmarkStore;

pub struct BookmarkSidebar;

impl BookmarkSidebar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        bookmarks: &BookmarkStore,
        cursor: usize,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(format!("Bookmarks ({})", bookmarks.len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        if bookmarks.is_empty() {
            let paragraph = Paragraph::new("No bookmarks yet. Press b on a result.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let preview_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = bookmarks
            .bookmarks()
            .iter()
            .map(|article| {
                let preview: String = bookmark_preview(article)
                    .chars()
                    .take(preview_width.max(10))
                    .collect();
                ListItem::new(vec![
                    Line::from(Span::styled(
                        article.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(preview, Style::default().fg(Color::DarkGray))),
                ])
            })
            .collect();

        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(Style::default().bg(Color::DarkGray));
        }
        let mut state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
