//! Article detail modal
//!
//! Same fields as a result card, with the full abstract and link targets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use research_core::display::NO_LINKS;
use research_core::{Article, ArticleCard};

use super::centered_rect;

pub struct DetailView;

impl DetailView {
    pub fn render(frame: &mut Frame, area: Rect, article: &Article, bookmarked: bool, scroll: u16) {
        let card = ArticleCard::full(article);
        let modal = centered_rect(80, 80, area);

        let label = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Year: ", label),
                Span::styled(card.year.clone(), Style::default().fg(Color::Cyan)),
                Span::styled("   Citations: ", label),
                Span::styled(card.citations.clone(), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::styled("Keywords: ", label),
                Span::styled(card.keywords.join(", "), Style::default().fg(Color::Magenta)),
            ]),
            Line::default(),
            Line::from(card.abstract_text.clone()),
            Line::default(),
        ];

        if card.has_links() {
            for (name, target) in card.link_labels().into_iter().zip(&card.targets) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{name}: "), Style::default().fg(Color::Blue)),
                    Span::raw(target.clone()),
                ]));
            }
        } else {
            lines.push(Line::from(Span::styled(NO_LINKS, label)));
        }

        let hint = if bookmarked {
            " b: remove bookmark | Esc: close "
        } else {
            " b: bookmark | Esc: close "
        };
        let block = Block::default()
            .title("Article")
            .title_bottom(hint)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, modal);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, modal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(article: &Article) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| DetailView::render(f, f.area(), article, false, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_links_render_absolute_targets() {
        let article = Article {
            url: "['doi.org/10.1/x']".to_string(),
            ..Article::new("Graph networks")
        };
        let screen = rendered(&article);
        assert!(screen.contains("Link 1: https://doi.org/10.1/x"));
    }

    #[test]
    fn test_no_links_placeholder() {
        let screen = rendered(&Article::new("Graph networks"));
        assert!(screen.contains(NO_LINKS));
    }
}
