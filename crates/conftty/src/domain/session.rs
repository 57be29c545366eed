use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Satisfaction score a visitor can leave on a finished session.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Bad,
    Ok,
    Good,
}

impl Score {
    /// Ordered list of all scores, from worst to best.
    pub const ALL: [Score; 3] = [Score::Bad, Score::Ok, Score::Good];

    /// Returns the key that casts this score on the session detail screen.
    pub fn key(self) -> char {
        match self {
            Score::Bad => '1',
            Score::Ok => '2',
            Score::Good => '3',
        }
    }

    /// Maps a pressed key back to its score.
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|score| score.key() == key)
    }

    /// Returns the short face shown next to the score key.
    pub fn face(self) -> &'static str {
        match self {
            Score::Bad => ":(",
            Score::Ok => ":|",
            Score::Good => ":)",
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Bad => write!(f, "bad"),
            Score::Ok => write!(f, "ok"),
            Score::Good => write!(f, "good"),
        }
    }
}

impl FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bad" | "Bad" | "BAD" => Ok(Score::Bad),
            "ok" | "Ok" | "OK" => Ok(Score::Ok),
            "good" | "Good" | "GOOD" => Ok(Score::Good),
            _ => Err(format!("Unknown score: {s}")),
        }
    }
}

/// Mutually exclusive session tag that selects a badge.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCategory {
    Lightning,
    CodeLab,
    CloudLab,
}

impl SessionCategory {
    /// Resolves the three category flags into at most one category.
    ///
    /// Flags are expected to be mutually exclusive. When they are not, the
    /// lightning flag wins over code lab, which wins over cloud lab.
    pub fn from_flags(is_lightning: bool, is_code_lab: bool, is_cloud_lab: bool) -> Option<Self> {
        if is_lightning {
            Some(SessionCategory::Lightning)
        } else if is_code_lab {
            Some(SessionCategory::CodeLab)
        } else if is_cloud_lab {
            Some(SessionCategory::CloudLab)
        } else {
            None
        }
    }

    /// Returns the `(lightning, code_lab, cloud_lab)` flags for an optional
    /// category.
    pub fn flags(category: Option<Self>) -> (bool, bool, bool) {
        (
            category == Some(SessionCategory::Lightning),
            category == Some(SessionCategory::CodeLab),
            category == Some(SessionCategory::CloudLab),
        )
    }

    /// Returns the badge label.
    pub fn label(self) -> &'static str {
        match self {
            SessionCategory::Lightning => "⚡ Lightning Talk",
            SessionCategory::CodeLab => "Code Lab",
            SessionCategory::CloudLab => "Cloud Lab",
        }
    }
}

/// Speaker reference embedded in a session snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpeakerSummary {
    pub id: String,
    pub name: String,
    pub photo_url: String,
}

/// Immutable display snapshot of one session.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionView {
    pub id: String,
    pub time: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub is_favorite: bool,
    pub vote: Option<Score>,
    /// Whether the session already took place, which enables voting.
    pub is_finished: bool,
    pub speakers: Vec<SpeakerSummary>,
    pub is_lightning: bool,
    pub is_code_lab: bool,
    pub is_cloud_lab: bool,
}

impl SessionView {
    /// Returns the single category selected by the snapshot flags.
    pub fn category(&self) -> Option<SessionCategory> {
        SessionCategory::from_flags(self.is_lightning, self.is_code_lab, self.is_cloud_lab)
    }
}

/// Compact session entry listed under a speaker.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionCardView {
    pub id: String,
    pub title: String,
    pub location_line: String,
    pub time_line: String,
    pub is_lightning: bool,
    pub is_code_lab: bool,
    pub is_cloud_lab: bool,
    pub is_favorite: bool,
}

impl SessionCardView {
    /// Returns the single category selected by the card flags.
    pub fn category(&self) -> Option<SessionCategory> {
        SessionCategory::from_flags(self.is_lightning, self.is_code_lab, self.is_cloud_lab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_key_round_trips_through_from_key() {
        // Arrange & Act & Assert
        assert_eq!(Score::from_key('1'), Some(Score::Bad));
        assert_eq!(Score::from_key('2'), Some(Score::Ok));
        assert_eq!(Score::from_key('3'), Some(Score::Good));
        assert_eq!(Score::from_key('4'), None);
    }

    #[test]
    fn test_score_from_str_rejects_unknown_value() {
        // Arrange
        let raw = "great";

        // Act
        let result = raw.parse::<Score>();

        // Assert
        assert_eq!(result, Err("Unknown score: great".to_string()));
    }

    #[test]
    fn test_category_from_flags_returns_none_when_no_flag_is_set() {
        // Arrange & Act
        let category = SessionCategory::from_flags(false, false, false);

        // Assert
        assert_eq!(category, None);
    }

    #[test]
    fn test_category_from_flags_prefers_lightning_over_other_flags() {
        // Arrange & Act
        let all_set = SessionCategory::from_flags(true, true, true);
        let lab_flags = SessionCategory::from_flags(false, true, true);

        // Assert
        assert_eq!(all_set, Some(SessionCategory::Lightning));
        assert_eq!(lab_flags, Some(SessionCategory::CodeLab));
    }

    #[test]
    fn test_category_flags_sets_exactly_one_flag() {
        // Arrange & Act
        let cloud_flags = SessionCategory::flags(Some(SessionCategory::CloudLab));
        let no_flags = SessionCategory::flags(None);

        // Assert
        assert_eq!(cloud_flags, (false, false, true));
        assert_eq!(no_flags, (false, false, false));
    }

    #[test]
    fn test_session_view_category_uses_snapshot_flags() {
        // Arrange
        let session = SessionView {
            is_code_lab: true,
            ..SessionView::default()
        };

        // Act
        let category = session.category();

        // Assert
        assert_eq!(category, Some(SessionCategory::CodeLab));
    }
}
