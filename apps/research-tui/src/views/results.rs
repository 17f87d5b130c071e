//! Result list
//!
//! One card per article: title, year, citations, keyword badges, the
//! truncated abstract and numbered links. Bookmarked articles carry a star.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use research_core::{ArticleCard, BookmarkStore, SearchPhase, SearchSession};

pub struct ResultsView;

impl ResultsView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        session: &SearchSession,
        bookmarks: &BookmarkStore,
        word_limit: usize,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Summary
                Constraint::Min(0),    // Cards
            ])
            .split(area);

        frame.render_widget(Paragraph::new(summary_line(session)), chunks[0]);

        let block = Block::default().title("Results").borders(Borders::ALL);
        let placeholder = match session.phase() {
            SearchPhase::Searching => Some("Searching..."),
            SearchPhase::Idle if session.query().is_empty() => {
                Some("Type / and a query, then Enter to search.")
            }
            SearchPhase::Idle => Some("No results to show."),
            SearchPhase::Results | SearchPhase::Empty => None,
        };
        if let Some(text) = placeholder {
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, chunks[1]);
            return;
        }

        let width = chunks[1].width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = session
            .visible_results()
            .into_iter()
            .map(|article| {
                let card = ArticleCard::from_article(article, word_limit);
                card_item(&card, bookmarks.is_bookmarked(article), width)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = ListState::default().with_selected(Some(session.cursor()));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }
}

fn summary_line(session: &SearchSession) -> Line<'static> {
    if let Some(message) = session.empty_message() {
        return Line::from(Span::styled(message, Style::default().fg(Color::Yellow)));
    }
    if session.phase() != SearchPhase::Results {
        return Line::default();
    }

    let mut spans = vec![
        Span::styled(
            format!(
                "Page {} of {}",
                session.current_page(),
                session.total_pages()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " | {} results | sorted by {}",
            session.total_results(),
            session.sort_key()
        )),
    ];
    if let Some(elapsed) = session.elapsed() {
        spans.push(Span::styled(
            format!(" | fetched in {} ms", elapsed.as_millis()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn card_item(card: &ArticleCard, bookmarked: bool, width: usize) -> ListItem<'static> {
    let marker = if bookmarked { "* " } else { "  " };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(card.year.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(" | cited by "),
            Span::styled(card.citations.clone(), Style::default().fg(Color::Green)),
        ]),
    ];

    let mut badges = vec![Span::raw("  ")];
    for keyword in &card.keywords {
        badges.push(Span::styled(
            format!("[{keyword}]"),
            Style::default().fg(Color::Magenta),
        ));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges));

    for row in wrap(&card.abstract_text, width) {
        lines.push(Line::from(format!("  {row}")));
    }

    let links = if card.has_links() {
        card.link_labels().join("  ")
    } else {
        research_core::display::NO_LINKS.to_string()
    };
    lines.push(Line::from(Span::styled(
        format!("  {links}"),
        Style::default().fg(Color::Blue),
    )));
    lines.push(Line::default());

    ListItem::new(lines)
}

/// Greedy word wrap; list items do not wrap on their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(20);
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        if !row.is_empty() && row.chars().count() + 1 + word.chars().count() > width {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(word);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
