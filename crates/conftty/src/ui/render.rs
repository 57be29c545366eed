use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::Screen;
use crate::ui::{components, router};

/// A trait for UI pages that enforces a standard rendering interface.
pub trait Page {
    /// Renders a page in the provided frame and area.
    fn render(&mut self, f: &mut Frame, area: Rect);
}

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    /// Renders a component in the provided frame and area.
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Data required to draw a single UI frame.
pub struct RenderContext<'a> {
    pub conference_name: &'a str,
    pub screen: &'a mut Screen,
    pub screen_depth: usize,
}

/// Renders a complete frame including status bar, content area, and footer.
pub fn render(f: &mut Frame, context: RenderContext<'_>) {
    let area = f.area();
    let outer_chunks = Layout::default()
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let status_bar_area = outer_chunks[0];
    let content_area = outer_chunks[1];
    let footer_bar_area = outer_chunks[2];

    components::status_bar::StatusBar::new(
        context.conference_name.to_string(),
        context.screen_depth,
    )
    .render(f, status_bar_area);

    let footer_actions = router::route_frame(f, content_area, context.screen);
    components::footer_bar::FooterBar::new(footer_actions).render(f, footer_bar_area);
}
