use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::app::App;
use crate::infra::watcher::FolderWatcher;
use crate::ui;

mod event;
mod key_handler;
mod mouse_handler;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// `change_rx` carries change signals from the folder watcher; the watcher is
/// re-aimed at the displayed folder before every frame.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event processing fails.
pub async fn run(
    app: &mut App,
    watcher: &mut FolderWatcher,
    change_rx: &mut mpsc::UnboundedReceiver<()>,
) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Spawn a dedicated thread for crossterm event reading so the main async
    // loop can yield to tokio between iterations.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(event_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(50));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    run_main_loop(app, watcher, &mut terminal, &mut event_rx, change_rx, &mut tick).await?;

    terminal.show_cursor()?;

    Ok(())
}

async fn run_main_loop(
    app: &mut App,
    watcher: &mut FolderWatcher,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    change_rx: &mut mpsc::UnboundedReceiver<()>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        if let Some(folder) = app.displayed_folder() {
            watcher.watch(folder);
        }

        render_frame(app, terminal)?;

        if matches!(
            event::process_events(app, terminal, event_rx, change_rx, tick).await?,
            EventResult::Quit
        ) {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &mut App, terminal: &mut TuiTerminal) -> io::Result<()> {
    terminal.draw(|frame| ui::render(frame, app))?;

    Ok(())
}
