use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::app::selection::NavCommand;
use crate::runtime::EventResult;

/// Handles key input for the browser.
///
/// Every arm performs exactly one state transition and returns; a folder
/// navigation replaces the snapshot, so nothing may touch it afterwards.
/// Input is ignored while the terminal does not have focus.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    if !app.has_focus() {
        return EventResult::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            app.navigate(NavCommand::Down);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.navigate(NavCommand::Up);
        }
        KeyCode::PageDown => {
            app.navigate(NavCommand::PageDown);
        }
        KeyCode::PageUp => {
            app.navigate(NavCommand::PageUp);
        }
        KeyCode::Home => {
            app.navigate(NavCommand::Home);
        }
        KeyCode::End => {
            app.navigate(NavCommand::End);
        }
        KeyCode::Enter => {
            app.open_selection();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.enter_folder(true);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
            app.exit_folder();
        }
        KeyCode::Char('o') => {
            app.open_selection_externally();
        }
        KeyCode::Char('e') => {
            app.reveal_selection();
        }
        KeyCode::Char('i') => {
            app.inspect_selection();
        }
        KeyCode::Char('p') => {
            app.show_selection_properties();
        }
        _ => {}
    }

    EventResult::Continue
}
