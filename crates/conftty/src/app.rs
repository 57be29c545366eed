//! App-layer composition root and navigation stack.
//!
//! This module wires the in-memory [`ConferenceController`] to the presenters
//! and exposes [`App`] used by runtime mode handlers.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::infra::catalog::Catalog;
use crate::presenter::{SessionDetailPresenter, SpeakerListPresenter};

mod conference;
mod controller;

pub use conference::{ConferenceController, FeedbackEntry};
pub use controller::AppController;
#[cfg(test)]
pub use controller::MockAppController;

/// Returns the conftty home directory (`~/.conftty`).
pub fn conftty_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(".conftty");
    }

    PathBuf::from(".conftty")
}

/// Navigation events emitted by the controller.
///
/// Producers should emit events only; the screen stack is changed only in
/// [`App::apply_app_events`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppEvent {
    /// Pops the current screen.
    Back,
    /// Pushes the detail screen of one session.
    ShowSession { session_id: String },
    /// Pushes the speaker list focused on one speaker.
    ShowSpeaker { speaker_id: String },
}

/// Screen selected on startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StartScreen {
    /// Session detail of the given session id.
    Session(String),
    /// Speaker list, optionally focused on one speaker (empty for none).
    Speakers { focus_speaker_id: String },
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::Speakers {
            focus_speaker_id: String::new(),
        }
    }
}

/// One mounted screen on the navigation stack.
pub enum Screen {
    SessionDetail(SessionDetailPresenter),
    Speakers(SpeakerListPresenter),
}

impl Screen {
    /// Pulls the latest snapshot into the mounted presenter.
    pub fn sync_snapshot(&mut self) -> bool {
        match self {
            Self::SessionDetail(presenter) => presenter.sync_snapshot(),
            Self::Speakers(presenter) => presenter.sync_snapshot(),
        }
    }

    /// Consumes the presenter's pending render request.
    pub fn take_render_request(&mut self) -> bool {
        match self {
            Self::SessionDetail(presenter) => presenter.take_render_request(),
            Self::Speakers(presenter) => presenter.take_render_request(),
        }
    }
}

/// Stateful application model used by the runtime loop.
pub struct App {
    controller: Arc<ConferenceController>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    needs_redraw: bool,
    screens: Vec<Screen>,
}

impl App {
    /// Builds the app over `catalog` and mounts `start_screen`.
    ///
    /// An unknown start session falls back to the full speaker list.
    pub fn new(catalog: Catalog, start_screen: &StartScreen) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let controller = Arc::new(ConferenceController::new(catalog, event_tx));
        let mut app = Self {
            controller,
            event_rx,
            needs_redraw: true,
            screens: Vec::new(),
        };

        let start_screen = match start_screen {
            StartScreen::Session(session_id) => {
                app.session_screen(session_id).unwrap_or_else(|| {
                    warn!(session_id, "unknown start session, showing speakers");
                    app.speakers_screen("")
                })
            }
            StartScreen::Speakers { focus_speaker_id } => app.speakers_screen(focus_speaker_id),
        };
        app.screens.push(start_screen);

        app
    }

    /// Returns the controller that owns conference state.
    pub fn controller(&self) -> &ConferenceController {
        &self.controller
    }

    /// Returns the screen on top of the stack.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// Returns the screen on top of the stack for key handling.
    pub fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    /// Returns the number of mounted screens.
    pub fn screen_depth(&self) -> usize {
        self.screens.len()
    }

    /// Returns whether the last screen was popped.
    pub fn is_finished(&self) -> bool {
        self.screens.is_empty()
    }

    /// Applies all queued navigation events without waiting.
    pub fn process_pending_app_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_app_event(event);
        }
    }

    /// Waits for the next navigation event.
    pub async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Applies `first_event` and everything queued behind it.
    pub fn apply_app_events(&mut self, first_event: AppEvent) {
        self.apply_app_event(first_event);
        self.process_pending_app_events();
    }

    fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Back => {
                self.screens.pop();
                info!(depth = self.screens.len(), "navigated back");
            }
            AppEvent::ShowSession { session_id } => {
                let Some(screen) = self.session_screen(&session_id) else {
                    warn!(session_id, "ignoring navigation to unknown session");
                    return;
                };
                info!(session_id, "showing session");
                self.screens.push(screen);
            }
            AppEvent::ShowSpeaker { speaker_id } => {
                info!(speaker_id, "showing speakers");
                let screen = self.speakers_screen(&speaker_id);
                self.screens.push(screen);
            }
        }

        self.needs_redraw = true;
    }

    /// Pulls the latest snapshots into every mounted screen.
    pub fn sync_snapshots(&mut self) {
        for screen in &mut self.screens {
            screen.sync_snapshot();
        }
    }

    /// Forces a redraw on the next loop iteration, e.g. after a resize.
    pub fn request_render(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether the visible screen needs a new frame.
    pub fn take_render_request(&mut self) -> bool {
        let needs_redraw = std::mem::take(&mut self.needs_redraw);
        let screen_requested = self
            .screens
            .last_mut()
            .is_some_and(Screen::take_render_request);

        needs_redraw || screen_requested
    }

    /// Runs post-frame effects of the visible screen.
    pub fn after_render(&mut self) {
        if let Some(Screen::Speakers(presenter)) = self.screens.last_mut() {
            presenter.after_render();
        }
    }

    fn session_screen(&self, session_id: &str) -> Option<Screen> {
        let snapshots = self.controller.subscribe_session(session_id)?;

        Some(Screen::SessionDetail(SessionDetailPresenter::new(
            self.shared_controller(),
            snapshots,
        )))
    }

    fn speakers_screen(&self, focus_speaker_id: &str) -> Screen {
        Screen::Speakers(SpeakerListPresenter::new(
            self.shared_controller(),
            self.controller.subscribe_speakers(),
            focus_speaker_id,
        ))
    }

    fn shared_controller(&self) -> Arc<dyn AppController> {
        self.controller.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::session::Score;

    const CATALOG: &str = r#"{
        "name": "Test Conf",
        "speakers": [
            { "id": "sp1", "name": "Ada" },
            { "id": "sp2", "name": "Grace" }
        ],
        "sessions": [
            { "id": "s1", "title": "Opening", "time": "09:00", "location": "Hall A",
              "speakers": ["sp1", "sp2"], "finished": true }
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::parse(CATALOG, Path::new("test.json")).expect("invalid catalog")
    }

    fn current_session_id(app: &App) -> Option<&str> {
        match app.current_screen() {
            Some(Screen::SessionDetail(presenter)) => Some(presenter.session().id.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_new_mounts_requested_session() {
        // Arrange & Act
        let app = App::new(catalog(), &StartScreen::Session("s1".to_string()));

        // Assert
        assert_eq!(app.screen_depth(), 1);
        assert_eq!(current_session_id(&app), Some("s1"));
    }

    #[test]
    fn test_new_falls_back_to_speakers_for_unknown_session() {
        // Arrange & Act
        let app = App::new(catalog(), &StartScreen::Session("ghost".to_string()));

        // Assert
        assert!(matches!(app.current_screen(), Some(Screen::Speakers(_))));
    }

    #[test]
    fn test_show_speaker_pushes_focused_speaker_list() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::Session("s1".to_string()));

        // Act
        app.controller().show_speaker("sp2");
        app.process_pending_app_events();
        app.after_render();

        // Assert
        assert_eq!(app.screen_depth(), 2);
        let Some(Screen::Speakers(presenter)) = app.current_screen() else {
            panic!("expected speaker list on top");
        };
        assert_eq!(presenter.focus_scroll().target(), Some("sp2"));
        assert_eq!(presenter.selected_speaker(), Some(1));
    }

    #[test]
    fn test_show_unknown_session_is_ignored() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::default());

        // Act
        app.controller().show_session("ghost");
        app.process_pending_app_events();

        // Assert
        assert_eq!(app.screen_depth(), 1);
    }

    #[test]
    fn test_back_from_root_finishes_app() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::default());

        // Act
        app.controller().show_session("s1");
        app.controller().back();
        app.controller().back();
        app.process_pending_app_events();

        // Assert
        assert!(app.is_finished());
    }

    #[test]
    fn test_vote_reaches_mounted_session_after_sync() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::Session("s1".to_string()));
        app.take_render_request();

        // Act
        if let Some(Screen::SessionDetail(presenter)) = app.current_screen_mut()
            && let Some(mut voting) = presenter.voting()
        {
            voting.vote(Score::Good);
        }
        app.sync_snapshots();

        // Assert
        assert!(app.take_render_request());
        let Some(Screen::SessionDetail(presenter)) = app.current_screen() else {
            panic!("expected session detail on top");
        };
        assert_eq!(presenter.session().vote, Some(Score::Good));
    }

    #[test]
    fn test_take_render_request_is_cleared_after_read() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::default());

        // Act
        let first = app.take_render_request();
        let second = app.take_render_request();

        // Assert
        assert!(first);
        assert!(!second);
    }

    #[tokio::test]
    async fn test_next_app_event_receives_emitted_event() {
        // Arrange
        let mut app = App::new(catalog(), &StartScreen::default());
        app.controller().show_session("s1");

        // Act
        let event = app.next_app_event().await;

        // Assert
        assert_eq!(
            event,
            Some(AppEvent::ShowSession {
                session_id: "s1".to_string(),
            })
        );
    }
}
