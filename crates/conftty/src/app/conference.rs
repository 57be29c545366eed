//! In-memory controller that owns conference state for one process.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::app::{AppController, AppEvent};
use crate::domain::session::{
    Score, SessionCardView, SessionCategory, SessionView, SpeakerSummary,
};
use crate::domain::speaker::SpeakerView;
use crate::infra::catalog::{Catalog, SessionRecord};

/// Feedback text submitted for one session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedbackEntry {
    pub session_id: String,
    pub text: String,
}

#[derive(Default)]
struct ConferenceState {
    favorites: HashSet<String>,
    feedback: Vec<FeedbackEntry>,
    votes: HashMap<String, Score>,
}

/// Canonical store behind both detail screens.
///
/// Every intent mutates the in-memory state and republishes the affected
/// snapshots. Navigation intents are emitted as [`AppEvent`]s and applied by
/// [`crate::app::App`]. Nothing is written to disk.
pub struct ConferenceController {
    catalog: Catalog,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    session_feeds: Mutex<HashMap<String, watch::Sender<SessionView>>>,
    speaker_feed: watch::Sender<Vec<SpeakerView>>,
    state: Mutex<ConferenceState>,
}

impl ConferenceController {
    /// Creates a controller over `catalog` that emits navigation on
    /// `event_tx`.
    pub fn new(catalog: Catalog, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let speaker_views = speaker_views(&catalog);
        let (speaker_feed, _) = watch::channel(speaker_views);

        Self {
            catalog,
            event_tx,
            session_feeds: Mutex::new(HashMap::new()),
            speaker_feed,
            state: Mutex::new(ConferenceState::default()),
        }
    }

    /// Returns the conference display name.
    pub fn conference_name(&self) -> &str {
        &self.catalog.name
    }

    /// Builds the current snapshot of `session_id`.
    pub fn session_view(&self, session_id: &str) -> Option<SessionView> {
        let record = self.catalog.session(session_id)?;
        let state = self.lock_state();

        Some(self.build_session_view(record, &state))
    }

    /// Subscribes to snapshots of `session_id`, or `None` for unknown ids.
    pub fn subscribe_session(&self, session_id: &str) -> Option<watch::Receiver<SessionView>> {
        let session_view = self.session_view(session_id)?;
        let mut feeds = lock(&self.session_feeds);
        let feed = feeds
            .entry(session_id.to_string())
            .or_insert_with(|| watch::channel(session_view).0);

        Some(feed.subscribe())
    }

    /// Subscribes to the speaker list snapshots.
    pub fn subscribe_speakers(&self) -> watch::Receiver<Vec<SpeakerView>> {
        self.speaker_feed.subscribe()
    }

    /// Returns all feedback submitted so far, oldest first.
    pub fn submitted_feedback(&self) -> Vec<FeedbackEntry> {
        self.lock_state().feedback.clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, ConferenceState> {
        lock(&self.state)
    }

    fn build_session_view(&self, record: &SessionRecord, state: &ConferenceState) -> SessionView {
        let (is_lightning, is_code_lab, is_cloud_lab) = SessionCategory::flags(record.category);
        let speakers = record
            .speakers
            .iter()
            .filter_map(|speaker_id| self.catalog.speaker(speaker_id))
            .map(|speaker| SpeakerSummary {
                id: speaker.id.clone(),
                name: speaker.name.clone(),
                photo_url: speaker.photo_url.clone(),
            })
            .collect();

        SessionView {
            id: record.id.clone(),
            time: record.time.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            is_favorite: state.favorites.contains(&record.id),
            vote: state.votes.get(&record.id).copied(),
            is_finished: record.finished,
            speakers,
            is_lightning,
            is_code_lab,
            is_cloud_lab,
        }
    }

    fn build_card_view(record: &SessionRecord, state: &ConferenceState) -> SessionCardView {
        let (is_lightning, is_code_lab, is_cloud_lab) = SessionCategory::flags(record.category);

        SessionCardView {
            id: record.id.clone(),
            title: record.title.clone(),
            location_line: record.location.clone(),
            time_line: record.time.clone(),
            is_lightning,
            is_code_lab,
            is_cloud_lab,
            is_favorite: state.favorites.contains(&record.id),
        }
    }

    /// Republishes the snapshot of `session_id` to its subscribers.
    fn publish_session(&self, session_id: &str) {
        let Some(session_view) = self.session_view(session_id) else {
            return;
        };

        if let Some(feed) = lock(&self.session_feeds).get(session_id) {
            feed.send_replace(session_view);
        }
    }

    /// Republishes the speaker list so talk cards are resolved again.
    fn publish_speakers(&self) {
        self.speaker_feed.send_replace(speaker_views(&self.catalog));
    }

    fn emit(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

impl AppController for ConferenceController {
    fn toggle_favorite(&self, session_id: &str) {
        if self.catalog.session(session_id).is_none() {
            warn!(session_id, "ignoring favorite toggle for unknown session");
            return;
        }

        {
            let mut state = self.lock_state();
            if !state.favorites.remove(session_id) {
                state.favorites.insert(session_id.to_string());
            }
        }

        self.publish_session(session_id);
        self.publish_speakers();
    }

    fn vote(&self, session_id: &str, score: Score) {
        if self.catalog.session(session_id).is_none() {
            warn!(session_id, "ignoring vote for unknown session");
            return;
        }

        self.lock_state()
            .votes
            .insert(session_id.to_string(), score);
        info!(session_id, %score, "vote recorded");

        self.publish_session(session_id);
    }

    fn send_feedback(&self, session_id: &str, text: &str) {
        if self.catalog.session(session_id).is_none() {
            warn!(session_id, "ignoring feedback for unknown session");
            return;
        }

        self.lock_state().feedback.push(FeedbackEntry {
            session_id: session_id.to_string(),
            text: text.to_string(),
        });
        info!(session_id, length = text.len(), "feedback stored");
    }

    fn back(&self) {
        self.emit(AppEvent::Back);
    }

    fn show_speaker(&self, speaker_id: &str) {
        self.emit(AppEvent::ShowSpeaker {
            speaker_id: speaker_id.to_string(),
        });
    }

    fn show_session(&self, session_id: &str) {
        self.emit(AppEvent::ShowSession {
            session_id: session_id.to_string(),
        });
    }

    fn sessions_for_speaker(&self, speaker_id: &str) -> Vec<SessionCardView> {
        let state = self.lock_state();

        self.catalog
            .sessions_for_speaker(speaker_id)
            .map(|record| Self::build_card_view(record, &state))
            .collect()
    }
}

fn speaker_views(catalog: &Catalog) -> Vec<SpeakerView> {
    catalog
        .speakers
        .iter()
        .map(|speaker| SpeakerView {
            id: speaker.id.clone(),
            name: speaker.name.clone(),
            position: speaker.position.clone(),
            photo_url: speaker.photo_url.clone(),
            description: speaker.description.clone(),
        })
        .collect()
}

/// Locks `mutex`, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
