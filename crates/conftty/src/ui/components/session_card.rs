use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::domain::session::SessionCardView;
use crate::ui::Component;
use crate::ui::components::category_badge::CategoryBadge;
use crate::ui::components::favorite_toggle::FavoriteToggle;
use crate::ui::text_util::truncate_with_ellipsis;

const CARD_INDENT: &str = "    ";
const HIGHLIGHT_MARKER: &str = "  ▸ ";

/// Compact card for one talk: time, title, location, badge and favorite star.
pub struct SessionCard<'a> {
    card: &'a SessionCardView,
    is_highlighted: bool,
}

impl<'a> SessionCard<'a> {
    pub fn new(card: &'a SessionCardView) -> Self {
        Self {
            card,
            is_highlighted: false,
        }
    }

    /// Marks the card as the highlighted talk of its speaker.
    #[must_use]
    pub fn highlighted(mut self, is_highlighted: bool) -> Self {
        self.is_highlighted = is_highlighted;
        self
    }

    /// Returns the card's lines truncated to `width` columns.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let prefix = if self.is_highlighted {
            HIGHLIGHT_MARKER
        } else {
            CARD_INDENT
        };
        let text_width = width.saturating_sub(prefix.width() + 2);
        let title_style = if self.is_highlighted {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let muted = Style::default().fg(Color::Gray);

        let mut title_line = vec![
            Span::raw(prefix),
            FavoriteToggle::new(self.card.is_favorite).span(),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(&self.card.title, text_width),
                title_style,
            ),
        ];
        if let Some(badge) = CategoryBadge::new(self.card.category()).span() {
            title_line.push(Span::raw("  "));
            title_line.push(badge);
        }

        vec![
            Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::styled(
                    truncate_with_ellipsis(&self.card.time_line, width.saturating_sub(4)),
                    muted,
                ),
            ]),
            Line::from(title_line),
            Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::raw("  "),
                Span::styled(
                    truncate_with_ellipsis(&self.card.location_line, text_width),
                    muted,
                ),
            ]),
        ]
    }
}

impl Component for SessionCard<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let lines = self.lines(usize::from(area.width.saturating_sub(2)));
        let card = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

        f.render_widget(card, area);
    }
}
