use crossterm::event::{KeyCode, KeyEvent};

use crate::presenter::SpeakerListPresenter;
use crate::runtime::EventResult;

/// Handles key input on the speaker list screen.
pub(crate) fn handle(presenter: &mut SpeakerListPresenter, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => presenter.back(),
        KeyCode::Char('j') | KeyCode::Down => presenter.select_next_speaker(),
        KeyCode::Char('k') | KeyCode::Up => presenter.select_previous_speaker(),
        KeyCode::Tab => presenter.select_next_talk(),
        KeyCode::Char('f') => presenter.toggle_selected_favorite(),
        KeyCode::Enter => presenter.open_selected_talk(),
        _ => {}
    }

    EventResult::Continue
}
