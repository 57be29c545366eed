use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::ui::Component;

/// Top bar with the app version and the conference name.
pub struct StatusBar {
    conference_name: String,
    screen_depth: usize,
}

impl StatusBar {
    pub fn new(conference_name: String, screen_depth: usize) -> Self {
        Self {
            conference_name,
            screen_depth,
        }
    }
}

impl Component for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let version = env!("CARGO_PKG_VERSION");
        let left_text = Span::styled(
            format!(" Conftty v{version}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let right_text = if self.screen_depth > 1 {
            format!("{} ({}) ", self.conference_name, self.screen_depth)
        } else {
            format!("{} ", self.conference_name)
        };
        let left_width = u16::try_from(left_text.width()).unwrap_or(u16::MAX);
        let right_width = u16::try_from(right_text.width()).unwrap_or(u16::MAX);
        let padding = area
            .width
            .saturating_sub(left_width.saturating_add(right_width));
        let status_bar = Paragraph::new(Line::from(vec![
            left_text,
            Span::raw(" ".repeat(padding as usize)),
            Span::styled(right_text, Style::default().fg(Color::Gray)),
        ]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
        f.render_widget(status_bar, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_text(status_bar: &StatusBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                status_bar.render(f, area);
            })
            .expect("failed to draw");

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_status_bar_shows_version_and_conference() {
        // Arrange
        let status_bar = StatusBar::new("Demo Conf".to_string(), 1);

        // Act
        let text = render_text(&status_bar);

        // Assert
        assert!(text.contains("Conftty v"));
        assert!(text.contains("Demo Conf"));
        assert!(!text.contains("(1)"));
    }

    #[test]
    fn test_status_bar_shows_stack_depth_when_nested() {
        // Arrange
        let status_bar = StatusBar::new("Demo Conf".to_string(), 3);

        // Act
        let text = render_text(&status_bar);

        // Assert
        assert!(text.contains("Demo Conf (3)"));
    }
}
