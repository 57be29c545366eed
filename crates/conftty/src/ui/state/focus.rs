use crate::domain::speaker::{SpeakerView, speaker_index};

/// One-shot scroll target owned by a single speaker list mount.
///
/// The target resolves at most once. Once it scrolled, later snapshots never
/// scroll again even when the list is replaced, so user scrolling is not
/// overridden.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FocusScroll {
    consumed: bool,
    target: Option<String>,
}

impl FocusScroll {
    /// Creates a focus target from the mount's speaker id. An empty id means
    /// no target.
    pub fn new(focus_speaker_id: &str) -> Self {
        let target = (!focus_speaker_id.is_empty()).then(|| focus_speaker_id.to_string());

        Self {
            consumed: false,
            target,
        }
    }

    /// Returns the speaker id this mount was asked to focus, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Returns whether the scroll already happened for this mount.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Resolves the target against `speakers` and consumes it on success.
    ///
    /// Returns the index to scroll to only on the first successful
    /// resolution. A target missing from the list leaves the flag untouched.
    pub fn resolve(&mut self, speakers: &[SpeakerView]) -> Option<usize> {
        if self.consumed {
            return None;
        }

        let index = speaker_index(speakers, self.target.as_deref()?)?;
        self.consumed = true;

        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speakers(ids: &[&str]) -> Vec<SpeakerView> {
        ids.iter()
            .map(|id| SpeakerView {
                id: (*id).to_string(),
                ..SpeakerView::default()
            })
            .collect()
    }

    #[test]
    fn test_new_treats_empty_id_as_no_target() {
        // Arrange & Act
        let focus = FocusScroll::new("");

        // Assert
        assert_eq!(focus.target(), None);
        assert!(!focus.is_consumed());
    }

    #[test]
    fn test_resolve_returns_index_once() {
        // Arrange
        let mut focus = FocusScroll::new("b");
        let list = speakers(&["a", "b", "c"]);

        // Act
        let first = focus.resolve(&list);
        let second = focus.resolve(&list);

        // Assert
        assert_eq!(first, Some(1));
        assert_eq!(second, None);
        assert!(focus.is_consumed());
    }

    #[test]
    fn test_resolve_missing_target_stays_pending() {
        // Arrange
        let mut focus = FocusScroll::new("c");

        // Act
        let missing = focus.resolve(&speakers(&["a", "b"]));
        let found = focus.resolve(&speakers(&["a", "b", "c"]));

        // Assert
        assert_eq!(missing, None);
        assert_eq!(found, Some(2));
    }

    #[test]
    fn test_resolve_without_target_never_scrolls() {
        // Arrange
        let mut focus = FocusScroll::new("");

        // Act
        let index = focus.resolve(&speakers(&["", "a"]));

        // Assert
        assert_eq!(index, None);
        assert!(!focus.is_consumed());
    }
}
