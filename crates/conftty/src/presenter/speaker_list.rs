use std::sync::Arc;

use ratatui::widgets::ListState;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::app::AppController;
use crate::domain::session::SessionCardView;
use crate::domain::speaker::SpeakerView;
use crate::ui::state::focus::FocusScroll;
use crate::ui::state::render_signal::RenderSignal;

/// One expanded speaker in the render tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpeakerEntry {
    pub description: String,
    pub id: String,
    pub name: String,
    pub photo_url: String,
    pub position: String,
    /// Talk cards resolved from the controller at render time.
    pub talks: Vec<SessionCardView>,
}

/// Render tree of the speaker list screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpeakerListTree {
    pub entries: Vec<SpeakerEntry>,
    /// Highlighted talk inside the selected speaker entry.
    pub selected_talk: Option<usize>,
}

/// Presents the speaker list and owns its one-shot focus scroll.
pub struct SpeakerListPresenter {
    controller: Arc<dyn AppController>,
    focus_scroll: FocusScroll,
    list_state: ListState,
    render_signal: RenderSignal,
    selected_talk: Option<usize>,
    snapshots: watch::Receiver<Vec<SpeakerView>>,
    speakers: Vec<SpeakerView>,
}

impl SpeakerListPresenter {
    /// Mounts a presenter on the current speaker list.
    ///
    /// `focus_speaker_id` may be empty, in which case the list never scrolls
    /// on its own.
    pub fn new(
        controller: Arc<dyn AppController>,
        mut snapshots: watch::Receiver<Vec<SpeakerView>>,
        focus_speaker_id: &str,
    ) -> Self {
        let speakers = snapshots.borrow_and_update().clone();

        Self {
            controller,
            focus_scroll: FocusScroll::new(focus_speaker_id),
            list_state: ListState::default(),
            render_signal: RenderSignal::default(),
            selected_talk: None,
            snapshots,
            speakers,
        }
    }

    /// Returns the speakers currently on screen.
    pub fn speakers(&self) -> &[SpeakerView] {
        &self.speakers
    }

    /// Returns the focus target of this mount.
    pub fn focus_scroll(&self) -> &FocusScroll {
        &self.focus_scroll
    }

    /// Returns the index of the selected speaker.
    pub fn selected_speaker(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Returns the highlighted talk inside the selected speaker.
    pub fn selected_talk(&self) -> Option<usize> {
        self.selected_talk
    }

    /// Returns the list state used by the page for scrolling.
    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }

    /// Pulls the latest speaker list when the stream changed.
    ///
    /// Replacing the list never re-triggers the focus scroll.
    pub fn sync_snapshot(&mut self) -> bool {
        if !self.snapshots.has_changed().unwrap_or(false) {
            return false;
        }

        self.speakers = self.snapshots.borrow_and_update().clone();
        if let Some(selected) = self.list_state.selected()
            && selected >= self.speakers.len()
        {
            self.list_state.select(self.speakers.len().checked_sub(1));
            self.selected_talk = None;
        }
        self.render_signal.request();

        true
    }

    /// Runs the one-shot focus effect after a frame was drawn.
    ///
    /// Returns the index scrolled to, which happens at most once per mount.
    pub fn after_render(&mut self) -> Option<usize> {
        let index = self.focus_scroll.resolve(&self.speakers)?;
        info!(index, speaker_id = ?self.focus_scroll.target(), "scrolling to focused speaker");
        self.scroll_to(index);

        Some(index)
    }

    fn scroll_to(&mut self, index: usize) {
        self.list_state.select(Some(index));
        *self.list_state.offset_mut() = index;
        self.selected_talk = None;
        self.render_signal.request();
    }

    /// Builds the render tree, resolving each speaker's talks lazily.
    pub fn tree(&self) -> SpeakerListTree {
        let entries = self
            .speakers
            .iter()
            .map(|speaker| SpeakerEntry {
                description: speaker.description.clone(),
                id: speaker.id.clone(),
                name: speaker.name.to_uppercase(),
                photo_url: speaker.photo_url.clone(),
                position: speaker.position.clone(),
                talks: self.controller.sessions_for_speaker(&speaker.id),
            })
            .collect();

        SpeakerListTree {
            entries,
            selected_talk: self.selected_talk,
        }
    }

    /// Selects the next speaker, wrapping around.
    pub fn select_next_speaker(&mut self) {
        if self.speakers.is_empty() {
            return;
        }

        let next_index = match self.list_state.selected() {
            Some(index) if index + 1 < self.speakers.len() => index + 1,
            _ => 0,
        };
        self.select_speaker(next_index);
    }

    /// Selects the previous speaker, wrapping around.
    pub fn select_previous_speaker(&mut self) {
        if self.speakers.is_empty() {
            return;
        }

        let previous_index = match self.list_state.selected() {
            Some(0) | None => self.speakers.len() - 1,
            Some(index) => index - 1,
        };
        self.select_speaker(previous_index);
    }

    fn select_speaker(&mut self, index: usize) {
        self.list_state.select(Some(index));
        self.selected_talk = None;
        self.render_signal.request();
    }

    /// Highlights the next talk of the selected speaker, wrapping around.
    pub fn select_next_talk(&mut self) {
        let talk_count = self.selected_speaker_talks().len();
        if talk_count == 0 {
            self.selected_talk = None;
            return;
        }

        self.selected_talk = match self.selected_talk {
            Some(index) if index + 1 < talk_count => Some(index + 1),
            _ => Some(0),
        };
        self.render_signal.request();
    }

    /// Toggles the favorite flag of the highlighted talk.
    pub fn toggle_selected_favorite(&self) {
        if let Some(talk) = self.selected_talk_card() {
            self.toggle_favorite(&talk.id);
        }
    }

    /// Opens the highlighted talk, or the speaker's first talk when none is
    /// highlighted.
    pub fn open_selected_talk(&self) {
        if let Some(talk) = self.selected_talk_card() {
            self.show_session(&talk.id);
        }
    }

    /// Asks the controller to flip the favorite flag of `session_id`.
    pub fn toggle_favorite(&self, session_id: &str) {
        debug!(session_id, "toggle favorite from speaker list");
        self.controller.toggle_favorite(session_id);
    }

    /// Opens the detail screen of `session_id`.
    pub fn show_session(&self, session_id: &str) {
        self.controller.show_session(session_id);
    }

    /// Leaves the screen.
    pub fn back(&self) {
        self.controller.back();
    }

    /// Consumes the pending render request.
    pub fn take_render_request(&mut self) -> bool {
        self.render_signal.take()
    }

    fn selected_speaker_talks(&self) -> Vec<SessionCardView> {
        self.list_state
            .selected()
            .and_then(|index| self.speakers.get(index))
            .map(|speaker| self.controller.sessions_for_speaker(&speaker.id))
            .unwrap_or_default()
    }

    fn selected_talk_card(&self) -> Option<SessionCardView> {
        let talks = self.selected_speaker_talks();
        let index = self.selected_talk.unwrap_or(0);

        talks.into_iter().nth(index)
    }
}
