use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::{App, AppEvent};
use crate::runtime::{EventResult, key_handler};

pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) {
    std::thread::spawn(move || {
        loop {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        AppEvent(Option<AppEvent>),
        Event(Option<Event>),
        Tick,
    }

    // Wake on input, on navigation emitted by the controller, or on the tick
    // that picks up snapshot changes.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        app_event = app.next_app_event() => LoopSignal::AppEvent(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };

    match signal {
        LoopSignal::Event(None) => {
            warn!("terminal event reader stopped");
            return EventResult::Quit;
        }
        LoopSignal::Event(Some(event)) => {
            if process_event(app, &event) == EventResult::Quit {
                return EventResult::Quit;
            }
        }
        LoopSignal::AppEvent(Some(app_event)) => app.apply_app_events(app_event),
        LoopSignal::AppEvent(None) | LoopSignal::Tick => {}
    }

    // Drain queued input before the next frame so rapid key presses are
    // handled together instead of one per frame.
    while let Ok(event) = event_rx.try_recv() {
        if process_event(app, &event) == EventResult::Quit {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

fn process_event(app: &mut App, event: &Event) -> EventResult {
    match event {
        Event::Key(key) => key_handler::handle_key_event(app, *key),
        Event::Resize(_, _) => {
            app.request_render();

            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}
