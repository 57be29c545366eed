use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::app::AppController;
use crate::domain::session::{Score, SessionCategory, SessionView};
use crate::ui::state::feedback::FeedbackPanel;
use crate::ui::state::render_signal::RenderSignal;

/// Speaker count below which thumbnails are drawn large.
const LARGE_THUMBNAIL_LIMIT: usize = 3;

/// Thumbnail size for speaker photos in the session header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThumbnailSize {
    Large,
    Compact,
}

/// One clickable speaker photo in the session header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpeakerThumbnail {
    pub name: String,
    pub photo_url: String,
    pub size: ThumbnailSize,
}

/// Voting block shown for finished sessions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingBlock {
    /// Draft text while the feedback panel is open, `None` when collapsed.
    pub feedback_draft: Option<String>,
    /// Vote read from the current snapshot.
    pub vote: Option<Score>,
}

/// Render tree of the session detail screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionDetailTree {
    pub badge: Option<SessionCategory>,
    pub description: String,
    pub is_favorite: bool,
    pub location: String,
    pub photos: Vec<SpeakerThumbnail>,
    pub selected_speaker: Option<usize>,
    pub speaker_names: Vec<String>,
    pub time: String,
    pub title: String,
    pub voting: Option<VotingBlock>,
}

/// Presents one session and routes its gestures to the controller.
///
/// The presenter subscribes to the session snapshot stream. The feedback
/// machine exists only while the current snapshot is finished and is reset
/// whenever the session id changes.
pub struct SessionDetailPresenter {
    controller: Arc<dyn AppController>,
    feedback: Option<FeedbackPanel>,
    render_signal: RenderSignal,
    selected_speaker: Option<usize>,
    session: SessionView,
    snapshots: watch::Receiver<SessionView>,
}

impl SessionDetailPresenter {
    /// Mounts a presenter on the current value of `snapshots`.
    pub fn new(
        controller: Arc<dyn AppController>,
        mut snapshots: watch::Receiver<SessionView>,
    ) -> Self {
        let session = snapshots.borrow_and_update().clone();
        let feedback = session.is_finished.then(FeedbackPanel::default);

        Self {
            controller,
            feedback,
            render_signal: RenderSignal::default(),
            selected_speaker: None,
            session,
            snapshots,
        }
    }

    /// Returns the snapshot currently on screen.
    pub fn session(&self) -> &SessionView {
        &self.session
    }

    /// Returns the feedback machine, or `None` when the session is not
    /// finished.
    pub fn feedback_panel(&self) -> Option<&FeedbackPanel> {
        self.feedback.as_ref()
    }

    /// Returns the speaker index highlighted in the header, if any.
    pub fn selected_speaker(&self) -> Option<usize> {
        self.selected_speaker
    }

    /// Pulls the latest snapshot when the stream changed.
    ///
    /// Returns whether a new snapshot was applied. A closed stream keeps the
    /// last snapshot on screen.
    pub fn sync_snapshot(&mut self) -> bool {
        if !self.snapshots.has_changed().unwrap_or(false) {
            return false;
        }

        let next_session = self.snapshots.borrow_and_update().clone();
        self.apply_snapshot(next_session);

        true
    }

    fn apply_snapshot(&mut self, next_session: SessionView) {
        if next_session.id == self.session.id {
            match (&self.feedback, next_session.is_finished) {
                (None, true) => self.feedback = Some(FeedbackPanel::default()),
                (Some(_), false) => self.feedback = None,
                _ => {}
            }
        } else {
            debug!(
                from = %self.session.id,
                to = %next_session.id,
                "session changed, resetting interaction state"
            );
            self.feedback = next_session.is_finished.then(FeedbackPanel::default);
            self.selected_speaker = None;
        }

        if self
            .selected_speaker
            .is_some_and(|index| index >= next_session.speakers.len())
        {
            self.selected_speaker = None;
        }

        self.session = next_session;
        self.render_signal.request();
    }

    /// Returns the voting surface, which exists only for finished sessions.
    pub fn voting(&mut self) -> Option<VotingSurface<'_>> {
        let panel = self.feedback.as_mut()?;

        Some(VotingSurface {
            controller: self.controller.as_ref(),
            panel,
            render_signal: &mut self.render_signal,
            session: &self.session,
        })
    }

    /// Asks the controller to flip the favorite flag.
    ///
    /// The flag on screen changes only when the next snapshot arrives.
    pub fn toggle_favorite(&self) {
        debug!(session_id = %self.session.id, "toggle favorite");
        self.controller.toggle_favorite(&self.session.id);
    }

    /// Leaves the screen. Panel state is discarded with the screen, not
    /// closed first.
    pub fn back(&self) {
        self.controller.back();
    }

    /// Opens the speaker screen focused on `speaker_id`.
    pub fn show_speaker(&self, speaker_id: &str) {
        self.controller.show_speaker(speaker_id);
    }

    /// Moves the header highlight to the next speaker, wrapping around.
    pub fn select_next_speaker(&mut self) {
        let speaker_count = self.session.speakers.len();
        if speaker_count == 0 {
            return;
        }

        let next_index = match self.selected_speaker {
            Some(index) if index + 1 < speaker_count => index + 1,
            _ => 0,
        };
        self.selected_speaker = Some(next_index);
        self.render_signal.request();
    }

    /// Opens the highlighted speaker, or the first one when nothing is
    /// highlighted.
    pub fn show_selected_speaker(&self) {
        let index = self.selected_speaker.unwrap_or(0);
        if let Some(speaker) = self.session.speakers.get(index) {
            self.show_speaker(&speaker.id);
        }
    }

    /// Builds the render tree for the current snapshot and local state.
    pub fn tree(&self) -> SessionDetailTree {
        let session = &self.session;
        let size = if session.speakers.len() < LARGE_THUMBNAIL_LIMIT {
            ThumbnailSize::Large
        } else {
            ThumbnailSize::Compact
        };

        SessionDetailTree {
            badge: session.category(),
            description: session.description.clone(),
            is_favorite: session.is_favorite,
            location: session.location.clone(),
            photos: session
                .speakers
                .iter()
                .map(|speaker| SpeakerThumbnail {
                    name: speaker.name.clone(),
                    photo_url: speaker.photo_url.clone(),
                    size,
                })
                .collect(),
            selected_speaker: self.selected_speaker,
            speaker_names: session
                .speakers
                .iter()
                .map(|speaker| speaker.name.clone())
                .collect(),
            time: session.time.to_uppercase(),
            title: session.title.to_uppercase(),
            voting: self.feedback.as_ref().map(|panel| VotingBlock {
                feedback_draft: panel.draft().map(ToString::to_string),
                vote: session.vote,
            }),
        }
    }

    /// Consumes the pending render request.
    pub fn take_render_request(&mut self) -> bool {
        self.render_signal.take()
    }
}

/// Vote and feedback gestures of a finished session.
pub struct VotingSurface<'a> {
    controller: &'a dyn AppController,
    panel: &'a mut FeedbackPanel,
    render_signal: &'a mut RenderSignal,
    session: &'a SessionView,
}

impl VotingSurface<'_> {
    /// Returns the vote carried by the current snapshot.
    pub fn current_vote(&self) -> Option<Score> {
        self.session.vote
    }

    /// Returns whether the feedback panel is open.
    pub fn is_feedback_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Forwards `score` to the controller, then opens the feedback panel.
    ///
    /// The panel stays open even if the controller later drops the vote.
    pub fn vote(&mut self, score: Score) {
        debug!(session_id = %self.session.id, %score, "vote cast");
        self.controller.vote(&self.session.id, score);
        self.panel.open();
        self.render_signal.request();
    }

    /// Sends `text` as feedback and collapses the panel.
    ///
    /// Does nothing while the panel is collapsed.
    pub fn submit_feedback(&mut self, text: &str) {
        if !self.panel.is_open() {
            return;
        }

        debug!(session_id = %self.session.id, "feedback submitted");
        self.controller.send_feedback(&self.session.id, text);
        self.panel.close();
        self.render_signal.request();
    }

    /// Sends the typed draft as feedback and collapses the panel.
    pub fn submit_draft(&mut self) {
        let Some(draft) = self.panel.draft().map(ToString::to_string) else {
            return;
        };

        self.submit_feedback(&draft);
    }

    /// Collapses the panel without contacting the controller.
    pub fn dismiss_feedback(&mut self) {
        if self.panel.close().is_some() {
            debug!(session_id = %self.session.id, "feedback dismissed");
            self.render_signal.request();
        }
    }

    /// Appends one character to the feedback draft.
    pub fn push_char(&mut self, ch: char) {
        if self.panel.is_open() {
            self.panel.push_char(ch);
            self.render_signal.request();
        }
    }

    /// Removes the last character of the feedback draft.
    pub fn pop_char(&mut self) {
        if self.panel.is_open() {
            self.panel.pop_char();
            self.render_signal.request();
        }
    }
}
