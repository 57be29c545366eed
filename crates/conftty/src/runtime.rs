use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::app::App;
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Outcome of handling one input event.
#[derive(Debug, Eq, PartialEq)]
pub enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub async fn run(app: &mut App) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Crossterm reads block, so they run on a dedicated thread and the loop
    // below only awaits the channel.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(event_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(50));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    run_main_loop(app, &mut terminal, &mut event_rx, &mut tick).await?;

    terminal.show_cursor()?;

    Ok(())
}

async fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        app.process_pending_app_events();
        if app.is_finished() {
            break;
        }

        app.sync_snapshots();
        if app.take_render_request() {
            render_frame(app, terminal)?;
            app.after_render();
        }

        if event::process_events(app, event_rx, tick).await == EventResult::Quit {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &mut App, terminal: &mut TuiTerminal) -> io::Result<()> {
    let conference_name = app.controller().conference_name().to_string();
    let screen_depth = app.screen_depth();
    let Some(screen) = app.current_screen_mut() else {
        return Ok(());
    };

    terminal.draw(|frame| {
        ui::render(
            frame,
            ui::RenderContext {
                conference_name: &conference_name,
                screen,
                screen_depth,
            },
        );
    })?;

    Ok(())
}
