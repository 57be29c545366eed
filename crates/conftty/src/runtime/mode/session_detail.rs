use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::session::Score;
use crate::presenter::SessionDetailPresenter;
use crate::runtime::EventResult;
use crate::ui::state::feedback::FeedbackPanel;

/// Handles key input on the session detail screen.
///
/// While the feedback panel is open, plain and shifted characters go to the
/// draft and only `Ctrl+b` leaves the screen.
pub(crate) fn handle(presenter: &mut SessionDetailPresenter, key: KeyEvent) -> EventResult {
    if is_back_chord(key) {
        presenter.back();

        return EventResult::Continue;
    }

    if presenter
        .feedback_panel()
        .is_some_and(FeedbackPanel::is_open)
    {
        handle_feedback_key(presenter, key);

        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => presenter.back(),
        KeyCode::Char('f') => presenter.toggle_favorite(),
        KeyCode::Char(ch @ ('1' | '2' | '3')) => {
            if let Some(score) = Score::from_key(ch)
                && let Some(mut voting) = presenter.voting()
            {
                voting.vote(score);
            }
        }
        KeyCode::Tab => presenter.select_next_speaker(),
        KeyCode::Enter | KeyCode::Char('s') => presenter.show_selected_speaker(),
        _ => {}
    }

    EventResult::Continue
}

fn handle_feedback_key(presenter: &mut SessionDetailPresenter, key: KeyEvent) {
    let Some(mut voting) = presenter.voting() else {
        return;
    };

    match key.code {
        KeyCode::Enter => voting.submit_draft(),
        KeyCode::Esc => voting.dismiss_feedback(),
        KeyCode::Backspace => voting.pop_char(),
        KeyCode::Char(ch) if is_text_input(key.modifiers) => voting.push_char(ch),
        _ => {}
    }
}

fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn is_back_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL)
}
