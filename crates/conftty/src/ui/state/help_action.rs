/// One user-visible shortcut entry rendered in the footer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpAction {
    pub footer_label: &'static str,
    pub key: &'static str,
}

impl HelpAction {
    /// Creates one help action descriptor.
    pub const fn new(footer_label: &'static str, key: &'static str) -> Self {
        Self { footer_label, key }
    }
}

/// Returns shortcuts of the session detail screen.
///
/// Vote shortcuts are listed only for finished sessions, and typing
/// shortcuts replace everything else while the feedback panel is open.
pub fn session_detail_actions(
    is_finished: bool,
    is_feedback_open: bool,
    has_speakers: bool,
) -> Vec<HelpAction> {
    if is_feedback_open {
        return vec![
            HelpAction::new("send", "Enter"),
            HelpAction::new("dismiss", "Esc"),
            HelpAction::new("back", "Ctrl+b"),
        ];
    }

    let mut actions = vec![
        HelpAction::new("back", "q"),
        HelpAction::new("favorite", "f"),
    ];

    if is_finished {
        actions.push(HelpAction::new("vote", "1/2/3"));
    }

    if has_speakers {
        actions.push(HelpAction::new("next speaker", "Tab"));
        actions.push(HelpAction::new("open speaker", "Enter"));
    }

    actions
}

/// Returns shortcuts of the speaker list screen.
pub fn speaker_list_actions(has_talks: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("back", "q"),
        HelpAction::new("nav", "j/k"),
    ];

    if has_talks {
        actions.push(HelpAction::new("next talk", "Tab"));
        actions.push(HelpAction::new("favorite", "f"));
        actions.push(HelpAction::new("open talk", "Enter"));
    }

    actions
}

/// Joins `actions` into one footer line.
pub fn footer_text(actions: &[HelpAction]) -> String {
    let mut help_text = String::new();

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            help_text.push_str(" | ");
        }

        help_text.push_str(action.key);
        help_text.push_str(": ");
        help_text.push_str(action.footer_label);
    }

    help_text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_detail_actions_hide_vote_for_unfinished_session() {
        // Arrange & Act
        let actions = session_detail_actions(false, false, true);

        // Assert
        assert!(actions.iter().all(|action| action.key != "1/2/3"));
        assert!(actions.iter().any(|action| action.key == "Tab"));
    }

    #[test]
    fn test_session_detail_actions_while_typing_feedback() {
        // Arrange & Act
        let actions = session_detail_actions(true, true, true);

        // Assert
        assert_eq!(
            footer_text(&actions),
            "Enter: send | Esc: dismiss | Ctrl+b: back"
        );
    }

    #[test]
    fn test_speaker_list_actions_without_talks() {
        // Arrange & Act
        let text = footer_text(&speaker_list_actions(false));

        // Assert
        assert_eq!(text, "q: back | j/k: nav");
    }

    #[test]
    fn test_footer_text_empty_actions() {
        // Arrange & Act
        let text = footer_text(&[]);

        // Assert
        assert!(text.is_empty());
    }
}
