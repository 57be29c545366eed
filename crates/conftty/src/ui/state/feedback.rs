/// Local two-state machine behind the feedback surface of a finished session.
///
/// The vote itself is never stored here; it is read from each snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FeedbackPanel {
    #[default]
    Collapsed,
    FeedbackOpen {
        draft: String,
    },
}

impl FeedbackPanel {
    /// Returns whether the feedback surface is visible.
    pub fn is_open(&self) -> bool {
        matches!(self, FeedbackPanel::FeedbackOpen { .. })
    }

    /// Returns the in-progress feedback text while the panel is open.
    pub fn draft(&self) -> Option<&str> {
        match self {
            FeedbackPanel::Collapsed => None,
            FeedbackPanel::FeedbackOpen { draft } => Some(draft.as_str()),
        }
    }

    /// Opens the panel with an empty draft. An already open panel keeps its
    /// draft.
    pub fn open(&mut self) {
        if let FeedbackPanel::Collapsed = self {
            *self = FeedbackPanel::FeedbackOpen {
                draft: String::new(),
            };
        }
    }

    /// Collapses the panel and returns the draft it held, if any.
    pub fn close(&mut self) -> Option<String> {
        match std::mem::take(self) {
            FeedbackPanel::Collapsed => None,
            FeedbackPanel::FeedbackOpen { draft } => Some(draft),
        }
    }

    /// Appends one character to the draft while the panel is open.
    pub fn push_char(&mut self, ch: char) {
        if let FeedbackPanel::FeedbackOpen { draft } = self {
            draft.push(ch);
        }
    }

    /// Removes the last draft character while the panel is open.
    pub fn pop_char(&mut self) {
        if let FeedbackPanel::FeedbackOpen { draft } = self {
            draft.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_panel_starts_collapsed() {
        // Arrange & Act
        let panel = FeedbackPanel::default();

        // Assert
        assert!(!panel.is_open());
        assert_eq!(panel.draft(), None);
    }

    #[test]
    fn test_open_keeps_existing_draft() {
        // Arrange
        let mut panel = FeedbackPanel::FeedbackOpen {
            draft: "great demo".to_string(),
        };

        // Act
        panel.open();

        // Assert
        assert_eq!(panel.draft(), Some("great demo"));
    }

    #[test]
    fn test_close_returns_draft_and_collapses() {
        // Arrange
        let mut panel = FeedbackPanel::default();
        panel.open();
        panel.push_char('h');
        panel.push_char('i');
        panel.push_char('!');
        panel.pop_char();

        // Act
        let draft = panel.close();

        // Assert
        assert_eq!(draft, Some("hi".to_string()));
        assert_eq!(panel, FeedbackPanel::Collapsed);
    }

    #[test]
    fn test_edits_are_ignored_while_collapsed() {
        // Arrange
        let mut panel = FeedbackPanel::Collapsed;

        // Act
        panel.push_char('x');
        panel.pop_char();
        let draft = panel.close();

        // Assert
        assert_eq!(draft, None);
        assert!(!panel.is_open());
    }
}
