use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::App;
use crate::app::virtualizer::{self, ROW_HEIGHT};
use crate::ui::layout;

/// Translates terminal mouse events into browser gestures.
///
/// Gesture positions use absolute window cells so drag distances stay
/// consistent when the pointer leaves the list region mid-drag.
pub(crate) fn handle_mouse_event(app: &mut App, window: Rect, mouse: MouseEvent) {
    let areas = layout::panel_areas(window);
    let position = (f32::from(mouse.column), f32::from(mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if areas.list_contains(mouse.column, mouse.row) {
                let index = virtualizer::row_at(
                    app.scroll_offset(),
                    areas.list_relative_y(mouse.row),
                    ROW_HEIGHT,
                );
                app.press_row(index, position, Instant::now());
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if areas.list_contains(mouse.column, mouse.row) {
                let index = virtualizer::row_at(
                    app.scroll_offset(),
                    areas.list_relative_y(mouse.row),
                    ROW_HEIGHT,
                );
                app.press_row_secondary(index);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.pointer_moved(position);
            let over_header =
                app.dragging().is_some() && areas.header_contains(mouse.column, mouse.row);
            app.set_drag_over_header(over_header);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.pointer_up(areas.header_contains(mouse.column, mouse.row));
        }
        MouseEventKind::ScrollDown => app.scroll_by(1.0),
        MouseEventKind::ScrollUp => app.scroll_by(-1.0),
        _ => {}
    }
}
