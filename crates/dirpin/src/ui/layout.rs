use ratatui::layout::{Constraint, Layout, Rect};

/// The three fixed panel regions of the browser window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelAreas {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

impl PanelAreas {
    /// True when `position` falls inside the header bar. Used as the drop
    /// target test for row drags.
    pub fn header_contains(&self, column: u16, row: u16) -> bool {
        row >= self.header.y
            && row < self.header.y + self.header.height
            && column >= self.header.x
            && column < self.header.x + self.header.width
    }

    /// True when `position` falls inside the list region.
    pub fn list_contains(&self, column: u16, row: u16) -> bool {
        row >= self.list.y
            && row < self.list.y + self.list.height
            && column >= self.list.x
            && column < self.list.x + self.list.width
    }

    /// Converts an absolute row coordinate to a list-relative y coordinate.
    pub fn list_relative_y(&self, row: u16) -> f32 {
        f32::from(row.saturating_sub(self.list.y))
    }
}

/// Splits the window into header bar, list viewport, and footer bar.
pub fn panel_areas(area: Rect) -> PanelAreas {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(1), // Header bar (pinned folder path, drop target)
            Constraint::Min(0),    // List viewport
            Constraint::Length(1), // Footer bar
        ])
        .split(area);

    PanelAreas {
        header: chunks[0],
        list: chunks[1],
        footer: chunks[2],
    }
}
