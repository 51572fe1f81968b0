use std::io;
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::app::App;
use crate::runtime::{EventResult, TuiTerminal, key_handler, mouse_handler};

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
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    change_rx: &mut mpsc::UnboundedReceiver<()>,
    tick: &mut tokio::time::Interval,
) -> io::Result<EventResult> {
    enum LoopSignal {
        Event(Option<Event>),
        Change,
        Tick,
    }

    // Wait for a terminal event, a folder change signal, or the next tick
    // (for redraws). This yields to tokio between frames.
    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Event(event),
        _ = change_rx.recv() => LoopSignal::Change,
        _ = tick.tick() => LoopSignal::Tick,
    };
    let maybe_event = match signal {
        LoopSignal::Event(event) => event,
        LoopSignal::Change => {
            // A burst of filesystem events collapses into one reload; the
            // snapshot is rebuilt before the next frame renders.
            while change_rx.try_recv().is_ok() {}
            app.reload();
            None
        }
        LoopSignal::Tick => None,
    };

    if matches!(
        process_event(app, terminal, maybe_event)?,
        EventResult::Quit
    ) {
        return Ok(EventResult::Quit);
    }

    // Drain remaining queued events before re-rendering so rapid key presses
    // and mouse drags are processed immediately instead of one-per-frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(
            process_event(app, terminal, Some(event))?,
            EventResult::Quit
        ) {
            return Ok(EventResult::Quit);
        }
    }

    Ok(EventResult::Continue)
}

fn process_event(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event: Option<Event>,
) -> io::Result<EventResult> {
    match event {
        Some(Event::Key(key)) => return Ok(key_handler::handle_key_event(app, key)),
        Some(Event::Mouse(mouse)) => {
            let size = terminal.size()?;
            let window = ratatui::layout::Rect::new(0, 0, size.width, size.height);
            mouse_handler::handle_mouse_event(app, window, mouse);
        }
        Some(Event::FocusGained) => app.focus_changed(true),
        Some(Event::FocusLost) => app.focus_changed(false),
        _ => {}
    }

    Ok(EventResult::Continue)
}
