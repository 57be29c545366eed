use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::session::SessionCategory;

/// Badge for a session's category, or nothing for regular talks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CategoryBadge {
    category: Option<SessionCategory>,
}

impl CategoryBadge {
    pub fn new(category: Option<SessionCategory>) -> Self {
        Self { category }
    }

    /// Returns the badge span, or `None` when the slot stays empty.
    pub fn span(self) -> Option<Span<'static>> {
        let category = self.category?;
        let color = match category {
            SessionCategory::Lightning => Color::Yellow,
            SessionCategory::CodeLab => Color::LightMagenta,
            SessionCategory::CloudLab => Color::LightBlue,
        };

        Some(Span::styled(
            category.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_category_renders_empty_slot() {
        // Arrange & Act
        let span = CategoryBadge::new(None).span();

        // Assert
        assert!(span.is_none());
    }

    #[test]
    fn test_lightning_badge_label() {
        // Arrange & Act
        let span = CategoryBadge::new(Some(SessionCategory::Lightning)).span();

        // Assert
        assert_eq!(
            span.map(|span| span.content.to_string()),
            Some("⚡ Lightning Talk".to_string())
        );
    }

    #[test]
    fn test_lab_badges_use_distinct_colors() {
        // Arrange & Act
        let code_lab = CategoryBadge::new(Some(SessionCategory::CodeLab)).span();
        let cloud_lab = CategoryBadge::new(Some(SessionCategory::CloudLab)).span();

        // Assert
        assert_ne!(
            code_lab.map(|span| span.style.fg),
            cloud_lab.map(|span| span.style.fg)
        );
    }
}
