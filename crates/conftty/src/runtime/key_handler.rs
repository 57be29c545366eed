use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Screen};
use crate::runtime::{EventResult, mode};

pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match app.current_screen_mut() {
        Some(Screen::SessionDetail(presenter)) => mode::session_detail::handle(presenter, key),
        Some(Screen::Speakers(presenter)) => mode::speaker_list::handle(presenter, key),
        None => EventResult::Quit,
    }
}
