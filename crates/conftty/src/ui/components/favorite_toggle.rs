use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

const ACTIVE_SYMBOL: &str = "★";
const INACTIVE_SYMBOL: &str = "☆";

/// Star toggle reflecting one session's favorite flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FavoriteToggle {
    is_active: bool,
}

impl FavoriteToggle {
    pub fn new(is_active: bool) -> Self {
        Self { is_active }
    }

    /// Returns the glyph for the current state.
    pub fn symbol(self) -> &'static str {
        if self.is_active {
            ACTIVE_SYMBOL
        } else {
            INACTIVE_SYMBOL
        }
    }

    /// Returns the styled span drawn next to session titles.
    pub fn span(self) -> Span<'static> {
        let style = if self.is_active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Span::styled(self.symbol(), style)
    }
}
