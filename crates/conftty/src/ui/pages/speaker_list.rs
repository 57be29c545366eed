use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::presenter::speaker_list::{SpeakerEntry, SpeakerListTree};
use crate::ui::Page;
use crate::ui::components::session_card::SessionCard;
use crate::ui::text_util::{truncate_with_ellipsis, wrap_words};

const ROW_HIGHLIGHT_SYMBOL: &str = "│ ";
const EMPTY_LIST_MESSAGE: &str = "No speakers announced yet.";
const PHOTO_LABEL: &str = "Photo: ";
const TALKS_HEADER: &str = "TALKS:";

/// Speakers renderer with every speaker expanded into their talks.
pub struct SpeakerListPage<'a> {
    pub list_state: &'a mut ListState,
    pub tree: &'a SpeakerListTree,
}

impl<'a> SpeakerListPage<'a> {
    pub fn new(tree: &'a SpeakerListTree, list_state: &'a mut ListState) -> Self {
        Self { list_state, tree }
    }
}

impl Page for SpeakerListPage<'_> {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Speakers");

        if self.tree.entries.is_empty() {
            let message = Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(message, area);

            return;
        }

        let width = usize::from(area.width.saturating_sub(2))
            .saturating_sub(ROW_HIGHLIGHT_SYMBOL.width());
        let selected_index = self.list_state.selected();
        let items: Vec<ListItem<'static>> = self
            .tree
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let selected_talk = if selected_index == Some(index) {
                    self.tree.selected_talk
                } else {
                    None
                };

                ListItem::new(speaker_text(entry, selected_talk, width))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(30, 30, 40)))
            .highlight_symbol(ROW_HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(list, area, self.list_state);
    }
}

/// Returns the lines of one speaker entry including their talk cards.
fn speaker_text(
    entry: &SpeakerEntry,
    selected_talk: Option<usize>,
    width: usize,
) -> Text<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_with_ellipsis(&entry.name, width),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&entry.position, width),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !entry.photo_url.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&format!("{PHOTO_LABEL}{}", entry.photo_url), width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if !entry.description.is_empty() {
        lines.extend(wrap_words(&entry.description, width).into_iter().map(Line::from));
    }

    if !entry.talks.is_empty() {
        lines.push(Line::from(Span::styled(
            TALKS_HEADER,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    for (talk_index, talk) in entry.talks.iter().enumerate() {
        lines.extend(
            SessionCard::new(talk)
                .highlighted(selected_talk == Some(talk_index))
                .lines(width),
        );
    }
    lines.push(Line::from(""));

    Text::from(lines)
}
