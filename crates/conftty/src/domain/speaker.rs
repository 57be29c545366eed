/// Immutable display snapshot of one speaker.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SpeakerView {
    pub id: String,
    pub name: String,
    /// Role or company line shown under the name.
    pub position: String,
    pub photo_url: String,
    pub description: String,
}

/// Returns the index of the first speaker whose id equals `speaker_id`.
///
/// The list is not assumed to be sorted, so this is a linear scan. An empty
/// id never matches.
pub fn speaker_index(speakers: &[SpeakerView], speaker_id: &str) -> Option<usize> {
    if speaker_id.is_empty() {
        return None;
    }

    speakers.iter().position(|speaker| speaker.id == speaker_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(id: &str) -> SpeakerView {
        SpeakerView {
            id: id.to_string(),
            name: format!("Speaker {id}"),
            ..SpeakerView::default()
        }
    }

    #[test]
    fn test_speaker_index_finds_first_match_in_unsorted_list() {
        // Arrange
        let speakers = vec![speaker("c"), speaker("a"), speaker("b"), speaker("a")];

        // Act
        let index = speaker_index(&speakers, "a");

        // Assert
        assert_eq!(index, Some(1));
    }

    #[test]
    fn test_speaker_index_ignores_empty_id() {
        // Arrange
        let speakers = vec![speaker(""), speaker("a")];

        // Act
        let index = speaker_index(&speakers, "");

        // Assert
        assert_eq!(index, None);
    }

    #[test]
    fn test_speaker_index_returns_none_for_missing_id() {
        // Arrange
        let speakers = vec![speaker("a"), speaker("b")];

        // Act
        let index = speaker_index(&speakers, "z");

        // Assert
        assert_eq!(index, None);
    }
}
