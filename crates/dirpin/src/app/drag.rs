//! Drag-vs-click disambiguation for pointer input.

use std::time::Instant;

/// Movement past this distance turns a pending press into a drag. The unit
/// is whatever coordinate space the pointer reports; desktop-style pixel
/// input uses this default.
pub const DRAG_THRESHOLD: f32 = 6.0;

/// Terminal cells are coarse: two cells of travel is already a deliberate
/// drag.
pub const CELL_DRAG_THRESHOLD: f32 = 2.0;

/// A second press on the same row within this window opens the row instead
/// of arming another drag.
pub const DOUBLE_CLICK_MS: u128 = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum GestureState {
    #[default]
    Idle,
    Pending {
        index: usize,
        origin: (f32, f32),
    },
}

/// Outcome of a pointer press on a row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PressOutcome {
    /// A single press: selection was the caller's job, a drag is now pending.
    Pressed,
    /// A double click: open the row, no drag is pending.
    DoubleClick,
}

/// State machine between pointer-down on a row and either a drag start or a
/// release.
///
/// The current time is threaded in explicitly so the double-click window is
/// testable.
#[derive(Debug)]
pub struct DragGesture {
    state: GestureState,
    threshold: f32,
    last_press: Option<(Instant, usize)>,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self::with_threshold(DRAG_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            state: GestureState::Idle,
            threshold,
            last_press: None,
        }
    }

    /// Registers a primary press on `index`. A second press on the same row
    /// within the double-click window bypasses drag handling entirely.
    pub fn pointer_down(&mut self, index: usize, position: (f32, f32), now: Instant) -> PressOutcome {
        if let Some((pressed_at, pressed_index)) = self.last_press
            && pressed_index == index
            && now.duration_since(pressed_at).as_millis() < DOUBLE_CLICK_MS
        {
            self.last_press = None;
            self.state = GestureState::Idle;

            return PressOutcome::DoubleClick;
        }

        self.last_press = Some((now, index));
        self.state = GestureState::Pending { index, origin: position };

        PressOutcome::Pressed
    }

    /// Reports pointer movement; returns the row whose drag begins once the
    /// Euclidean distance from the press origin exceeds the threshold. The
    /// gesture returns to idle at that point, so later movement in the same
    /// drag is not re-evaluated here.
    pub fn pointer_moved(&mut self, position: (f32, f32)) -> Option<usize> {
        let GestureState::Pending { index, origin } = self.state else {
            return None;
        };

        let dx = position.0 - origin.0;
        let dy = position.1 - origin.1;
        if (dx * dx + dy * dy).sqrt() > self.threshold {
            self.state = GestureState::Idle;

            return Some(index);
        }

        None
    }

    /// Releases a pending press without a drag (the plain-click case;
    /// selection already happened on pointer-down).
    pub fn pointer_up(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Abandons a pending press on focus or capture loss.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
        self.last_press = None;
    }
}
