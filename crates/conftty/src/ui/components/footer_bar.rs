use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Component;
use crate::ui::state::help_action::{self, HelpAction};
use crate::ui::text_util::truncate_with_ellipsis;

/// Bottom bar listing the shortcuts of the visible screen.
pub struct FooterBar {
    actions: Vec<HelpAction>,
}

impl FooterBar {
    pub fn new(actions: Vec<HelpAction>) -> Self {
        Self { actions }
    }
}

impl Component for FooterBar {
    fn render(&self, f: &mut Frame, area: Rect) {
        let help_text = help_action::footer_text(&self.actions);
        let visible_text =
            truncate_with_ellipsis(&help_text, usize::from(area.width.saturating_sub(1)));
        let footer = Paragraph::new(Line::from(vec![Span::styled(
            format!(" {visible_text}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )]))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));

        f.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_footer_bar_renders_actions() {
        // Arrange
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let footer = FooterBar::new(vec![
            HelpAction::new("back", "q"),
            HelpAction::new("favorite", "f"),
        ]);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("q: back | f: favorite"));
    }

    #[test]
    fn test_footer_bar_truncates_to_width() {
        // Arrange
        let backend = TestBackend::new(12, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let footer = FooterBar::new(vec![
            HelpAction::new("back", "q"),
            HelpAction::new("favorite", "f"),
        ]);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains('…'));
    }
}
