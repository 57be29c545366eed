use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::domain::session::Score;
use crate::presenter::session_detail::{
    SessionDetailTree, SpeakerThumbnail, ThumbnailSize, VotingBlock,
};
use crate::ui::Page;
use crate::ui::components::category_badge::CategoryBadge;
use crate::ui::components::favorite_toggle::FavoriteToggle;
use crate::ui::text_util::initials;

const CURSOR: &str = "█";
const PHOTO_LABEL: &str = "Photo: ";

/// Session detail renderer: header, speakers, description and voting.
pub struct SessionDetailPage<'a> {
    pub tree: &'a SessionDetailTree,
}

impl<'a> SessionDetailPage<'a> {
    pub fn new(tree: &'a SessionDetailTree) -> Self {
        Self { tree }
    }
}

impl Page for SessionDetailPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let voting_height = match &self.tree.voting {
            Some(VotingBlock {
                feedback_draft: Some(_),
                ..
            }) => 6,
            Some(_) => 3,
            None => 0,
        };
        let chunks = Layout::default()
            .constraints([
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(voting_height),
            ])
            .margin(1)
            .split(area);

        render_header(f, chunks[0], self.tree);
        render_speakers(f, chunks[1], self.tree);

        let description = Paragraph::new(self.tree.description.as_str())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).title("About"));
        f.render_widget(description, chunks[2]);

        if let Some(voting) = &self.tree.voting {
            render_voting(f, chunks[3], voting);
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, tree: &SessionDetailTree) {
    let mut badge_line = Vec::new();
    if let Some(badge) = CategoryBadge::new(tree.badge).span() {
        badge_line.push(badge);
    }

    let lines = vec![
        Line::from(badge_line),
        Line::from(vec![
            FavoriteToggle::new(tree.is_favorite).span(),
            Span::raw(" "),
            Span::styled(
                tree.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            tree.time.as_str(),
            Style::default().fg(Color::LightCyan),
        )),
        Line::from(Span::styled(
            tree.location.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_speakers(f: &mut Frame, area: Rect, tree: &SessionDetailTree) {
    let mut photo_spans = Vec::new();
    for (index, photo) in tree.photos.iter().enumerate() {
        if index > 0 {
            photo_spans.push(Span::raw(" "));
        }

        photo_spans.push(thumbnail_span(photo, tree.selected_speaker == Some(index)));
    }

    let mut lines = vec![
        Line::from(photo_spans),
        Line::from(Span::styled(
            tree.speaker_names.join(", "),
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Some(photo) = tree
        .selected_speaker
        .and_then(|index| tree.photos.get(index))
        .filter(|photo| !photo.photo_url.is_empty())
    {
        lines.push(Line::from(Span::styled(
            format!("{PHOTO_LABEL}{}", photo.photo_url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn thumbnail_span(photo: &SpeakerThumbnail, is_selected: bool) -> Span<'static> {
    let label = match photo.size {
        ThumbnailSize::Large => format!("[ {} ]", photo.name),
        ThumbnailSize::Compact => format!("[{}]", initials(&photo.name)),
    };
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightCyan)
    };

    Span::styled(label, style)
}

fn render_voting(f: &mut Frame, area: Rect, voting: &VotingBlock) {
    let mut score_spans = vec![Span::raw("Rate this session: ")];
    for score in Score::ALL {
        let style = if voting.vote == Some(score) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        score_spans.push(Span::styled(
            format!(" {} {} ", score.key(), score.face()),
            style,
        ));
        score_spans.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(score_spans)];
    if let Some(draft) = &voting.feedback_draft {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tell us more (Enter to send, Esc to dismiss):",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::raw(draft.clone()),
            Span::styled(CURSOR, Style::default().fg(Color::Gray)),
        ]));
    }

    let voting_block = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::TOP).title("Feedback"));
    f.render_widget(voting_block, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::domain::session::SessionCategory;

    fn tree() -> SessionDetailTree {
        SessionDetailTree {
            badge: Some(SessionCategory::Lightning),
            description: "Scopes and cancellation.".to_string(),
            is_favorite: true,
            location: "Room 12".to_string(),
            photos: vec![SpeakerThumbnail {
                name: "Tomas Reyes".to_string(),
                photo_url: String::new(),
                size: ThumbnailSize::Large,
            }],
            selected_speaker: None,
            speaker_names: vec!["Tomas Reyes".to_string()],
            time: "THURSDAY 10:15".to_string(),
            title: "STRUCTURED CONCURRENCY".to_string(),
            voting: None,
        }
    }

    fn render_text(tree: &SessionDetailTree) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                SessionDetailPage::new(tree).render(f, area);
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
    fn test_render_shows_header_and_speakers() {
        // Arrange
        let tree = tree();

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(text.contains("Lightning Talk"));
        assert!(text.contains("STRUCTURED CONCURRENCY"));
        assert!(text.contains("THURSDAY 10:15"));
        assert!(text.contains("[ Tomas Reyes ]"));
        assert!(text.contains("Scopes and cancellation."));
    }

    #[test]
    fn test_render_without_voting_hides_scores() {
        // Arrange
        let tree = tree();

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(!text.contains("Rate this session"));
    }

    #[test]
    fn test_render_open_panel_shows_draft() {
        // Arrange
        let tree = SessionDetailTree {
            voting: Some(VotingBlock {
                feedback_draft: Some("great pace".to_string()),
                vote: Some(Score::Good),
            }),
            ..tree()
        };

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(text.contains("Rate this session"));
        assert!(text.contains("> great pace"));
    }

    #[test]
    fn test_render_shows_photo_reference_of_selected_speaker() {
        // Arrange
        let mut tree = tree();
        tree.photos[0].photo_url = "https://example.com/tomas.jpg".to_string();
        let unselected_text = render_text(&tree);
        tree.selected_speaker = Some(0);

        // Act
        let text = render_text(&tree);

        // Assert
        assert!(text.contains("Photo: https://example.com/tomas.jpg"));
        assert!(!unselected_text.contains("Photo: "));
    }

    #[test]
    fn test_compact_thumbnail_uses_initials() {
        // Arrange
        let photo = SpeakerThumbnail {
            name: "Idris Kamara".to_string(),
            photo_url: String::new(),
            size: ThumbnailSize::Compact,
        };

        // Act
        let span = thumbnail_span(&photo, false);

        // Assert
        assert_eq!(span.content, "[IK]");
    }
}
