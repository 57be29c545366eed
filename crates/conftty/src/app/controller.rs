use crate::domain::session::{Score, SessionCardView};

/// Capability boundary presenters use to emit intents and query talk lists.
///
/// Production uses [`crate::app::ConferenceController`], while tests inject
/// `MockAppController` to assert exactly which intents a gesture emits.
/// Implementations own all durable state; presenters observe the outcome of
/// each intent only through the next published snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait AppController: Send + Sync {
    /// Flips the favorite flag of `session_id` in the canonical store.
    fn toggle_favorite(&self, session_id: &str);

    /// Records `score` for `session_id`.
    fn vote(&self, session_id: &str, score: Score);

    /// Stores free-text feedback for `session_id`.
    fn send_feedback(&self, session_id: &str, text: &str);

    /// Pops the current screen.
    fn back(&self);

    /// Pushes the speaker screen focused on `speaker_id`.
    fn show_speaker(&self, speaker_id: &str);

    /// Pushes the detail screen of `session_id`.
    fn show_session(&self, session_id: &str);

    /// Returns the ordered talk cards of `speaker_id`.
    ///
    /// This is a synchronous read against already loaded data and must not
    /// have side effects.
    fn sessions_for_speaker(&self, speaker_id: &str) -> Vec<SessionCardView>;
}
