//! Conference catalog loading and validation.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::session::SessionCategory;

/// Catalog bundled with the binary, used when no data file is configured.
const DEMO_CATALOG: &str = include_str!("../../assets/demo_catalog.json");

/// Origin label used in errors for the bundled catalog.
const DEMO_CATALOG_ORIGIN: &str = "<bundled demo catalog>";

/// Errors raised while loading a conference catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse catalog `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("session `{0}` is defined more than once")]
    DuplicateSession(String),
    #[error("speaker `{0}` is defined more than once")]
    DuplicateSpeaker(String),
    #[error("session `{session_id}` references unknown speaker `{speaker_id}`")]
    UnknownSpeaker {
        session_id: String,
        speaker_id: String,
    },
}

/// One session as stored in the catalog file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub speakers: Vec<String>,
    /// Whether the session already took place.
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub category: Option<SessionCategory>,
}

/// One speaker as stored in the catalog file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SpeakerRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub description: String,
}

/// Read-only conference data the controller builds snapshots from.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub speakers: Vec<SpeakerRecord>,
}

impl Catalog {
    /// Loads and validates the catalog stored at `path`.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read, is not valid catalog
    /// JSON, or contains inconsistent ids.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&raw, path)
    }

    /// Returns the bundled demo catalog.
    ///
    /// # Errors
    /// Returns an error only if the bundled file is malformed.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::parse(DEMO_CATALOG, Path::new(DEMO_CATALOG_ORIGIN))
    }

    /// Parses and validates catalog JSON; `origin` is used for error messages.
    ///
    /// # Errors
    /// Returns an error when `raw` is not valid catalog JSON or contains
    /// inconsistent ids.
    pub fn parse(raw: &str, origin: &Path) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        catalog.validate()?;

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut speaker_ids = HashSet::new();
        for speaker in &self.speakers {
            if !speaker_ids.insert(speaker.id.as_str()) {
                return Err(CatalogError::DuplicateSpeaker(speaker.id.clone()));
            }
        }

        let mut session_ids = HashSet::new();
        for session in &self.sessions {
            if !session_ids.insert(session.id.as_str()) {
                return Err(CatalogError::DuplicateSession(session.id.clone()));
            }

            if let Some(speaker_id) = session
                .speakers
                .iter()
                .find(|speaker_id| !speaker_ids.contains(speaker_id.as_str()))
            {
                return Err(CatalogError::UnknownSpeaker {
                    session_id: session.id.clone(),
                    speaker_id: speaker_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns the session with `session_id`.
    pub fn session(&self, session_id: &str) -> Option<&SessionRecord> {
        self.sessions
            .iter()
            .find(|session| session.id == session_id)
    }

    /// Returns the speaker with `speaker_id`.
    pub fn speaker(&self, speaker_id: &str) -> Option<&SpeakerRecord> {
        self.speakers
            .iter()
            .find(|speaker| speaker.id == speaker_id)
    }

    /// Returns the sessions `speaker_id` takes part in, in catalog order.
    pub fn sessions_for_speaker<'a>(
        &'a self,
        speaker_id: &'a str,
    ) -> impl Iterator<Item = &'a SessionRecord> + 'a {
        self.sessions.iter().filter(move |session| {
            session
                .speakers
                .iter()
                .any(|session_speaker| session_speaker == speaker_id)
        })
    }
}
