//! Selection by stable id and pure keyboard navigation.

use crate::app::model::Snapshot;

/// Keyboard navigation commands over the current snapshot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavCommand {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// What to select after a folder loads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SelectTarget {
    /// Select the entry with this stable id (moving up reselects the folder
    /// just exited this way).
    Id(String),
    /// Select the entry currently at this path (a dropped file is selected
    /// this way, since the drop payload carries a path).
    Path(String),
}

/// Computes the navigation target index.
///
/// Returns `None` only for an empty snapshot (the command is not handled).
/// Without a previous selection every command lands on row 0.
pub fn navigate(
    current: Option<usize>,
    len: usize,
    command: NavCommand,
    viewport_rows: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let last = len - 1;
    let Some(current) = current else {
        return Some(0);
    };

    let page = viewport_rows.max(1);
    let target = match command {
        NavCommand::Up => current.saturating_sub(1),
        NavCommand::Down => current.saturating_add(1),
        NavCommand::PageUp => current.saturating_sub(page),
        NavCommand::PageDown => current.saturating_add(page),
        NavCommand::Home => 0,
        NavCommand::End => last,
    };

    Some(target.min(last))
}

/// The selected entry, tracked by stable id so it survives reloads.
#[derive(Debug, Default)]
pub struct Selection {
    selected_id: Option<String>,
}

impl Selection {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Returns the selected entry's index in `snapshot`, if it is present.
    pub fn index_in(&self, snapshot: &Snapshot) -> Option<usize> {
        self.selected_id
            .as_deref()
            .and_then(|id| snapshot.index_of_id(id))
    }

    /// Selects the entry at `index`; out-of-range indices are ignored.
    pub fn select_index(&mut self, snapshot: &Snapshot, index: usize) {
        if let Some(entry) = snapshot.get(index) {
            self.selected_id = Some(entry.id.clone());
        }
    }

    /// Re-resolves selection against a freshly loaded snapshot.
    ///
    /// Precedence: explicit `select` target, else the previous id when
    /// `restore_previous` is set, else none. A target that no longer
    /// resolves degrades to no selection.
    pub fn resolve_after_load(
        &mut self,
        snapshot: &Snapshot,
        select: Option<&SelectTarget>,
        restore_previous: bool,
    ) {
        let previous = self.selected_id.take();

        self.selected_id = match select {
            Some(SelectTarget::Id(id)) => {
                snapshot.index_of_id(id).map(|_| id.clone())
            }
            Some(SelectTarget::Path(path)) => snapshot
                .entries()
                .iter()
                .find(|entry| entry.path == *path)
                .map(|entry| entry.id.clone()),
            None if restore_previous => {
                previous.filter(|id| snapshot.index_of_id(id).is_some())
            }
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entry::Entry;

    use super::*;

    fn snapshot_of(names: &[&str]) -> Snapshot {
        let entries = names
            .iter()
            .map(|name| Entry::new(format!("id-{name}"), format!("/f/{name}"), false, false))
            .collect();

        Snapshot::new("/f", entries)
    }

    #[test]
    fn test_navigate_steps_and_clamps() {
        // Arrange & Act & Assert
        assert_eq!(navigate(Some(2), 5, NavCommand::Up, 3), Some(1));
        assert_eq!(navigate(Some(0), 5, NavCommand::Up, 3), Some(0));
        assert_eq!(navigate(Some(4), 5, NavCommand::Down, 3), Some(4));
    }

    #[test]
    fn test_navigate_home_end_and_page() {
        // Arrange — selected index 2 of 5, 3 visible rows
        let len = 5;

        // Act & Assert
        assert_eq!(navigate(Some(2), len, NavCommand::Home, 3), Some(0));
        assert_eq!(navigate(Some(2), len, NavCommand::End, 3), Some(4));
        assert_eq!(navigate(Some(2), len, NavCommand::PageDown, 3), Some(4));
        assert_eq!(navigate(Some(4), len, NavCommand::PageUp, 3), Some(1));
    }

    #[test]
    fn test_navigate_empty_snapshot_is_not_handled() {
        // Arrange & Act & Assert
        assert_eq!(navigate(Some(2), 0, NavCommand::Down, 3), None);
        assert_eq!(navigate(None, 0, NavCommand::Home, 3), None);
    }

    #[test]
    fn test_navigate_without_anchor_lands_on_row_zero() {
        // Arrange & Act & Assert
        assert_eq!(navigate(None, 5, NavCommand::Down, 3), Some(0));
        assert_eq!(navigate(None, 5, NavCommand::Up, 3), Some(0));
        assert_eq!(navigate(None, 5, NavCommand::PageDown, 3), Some(0));
        assert_eq!(navigate(None, 5, NavCommand::End, 3), Some(0));
    }

    #[test]
    fn test_navigate_page_size_is_at_least_one() {
        // Arrange & Act & Assert
        assert_eq!(navigate(Some(2), 5, NavCommand::PageDown, 0), Some(3));
    }

    #[test]
    fn test_selection_restores_previous_id_across_reload() {
        // Arrange
        let mut selection = Selection::default();
        let first = snapshot_of(&["a", "b", "c"]);
        selection.select_index(&first, 1);

        // Act — same content reloaded
        let second = snapshot_of(&["a", "b", "c"]);
        selection.resolve_after_load(&second, None, true);

        // Assert
        assert_eq!(selection.selected_id(), Some("id-b"));
        assert_eq!(selection.index_in(&second), Some(1));
    }

    #[test]
    fn test_selection_survives_reorder_by_id() {
        // Arrange
        let mut selection = Selection::default();
        let first = snapshot_of(&["a", "b", "c"]);
        selection.select_index(&first, 2);

        // Act — entry moved to the front
        let second = snapshot_of(&["c", "a", "b"]);
        selection.resolve_after_load(&second, None, true);

        // Assert
        assert_eq!(selection.index_in(&second), Some(0));
    }

    #[test]
    fn test_selection_clears_when_entry_disappears() {
        // Arrange
        let mut selection = Selection::default();
        let first = snapshot_of(&["a", "b"]);
        selection.select_index(&first, 1);

        // Act
        let second = snapshot_of(&["a"]);
        selection.resolve_after_load(&second, None, true);

        // Assert
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_explicit_target_beats_restore() {
        // Arrange
        let mut selection = Selection::default();
        let first = snapshot_of(&["a", "b"]);
        selection.select_index(&first, 0);

        // Act
        let second = snapshot_of(&["a", "b"]);
        let target = SelectTarget::Id("id-b".to_string());
        selection.resolve_after_load(&second, Some(&target), true);

        // Assert
        assert_eq!(selection.selected_id(), Some("id-b"));
    }

    #[test]
    fn test_select_by_path_resolves_to_id() {
        // Arrange
        let mut selection = Selection::default();
        let snapshot = snapshot_of(&["a", "b"]);

        // Act
        let target = SelectTarget::Path("/f/b".to_string());
        selection.resolve_after_load(&snapshot, Some(&target), false);

        // Assert
        assert_eq!(selection.selected_id(), Some("id-b"));
    }

    #[test]
    fn test_unresolvable_target_degrades_to_no_selection() {
        // Arrange
        let mut selection = Selection::default();
        let first = snapshot_of(&["a"]);
        selection.select_index(&first, 0);

        // Act
        let target = SelectTarget::Id("id-gone".to_string());
        selection.resolve_after_load(&first, Some(&target), true);

        // Assert
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_select_index_out_of_range_is_ignored() {
        // Arrange
        let mut selection = Selection::default();
        let snapshot = snapshot_of(&["a"]);
        selection.select_index(&snapshot, 0);

        // Act
        selection.select_index(&snapshot, 7);

        // Assert
        assert_eq!(selection.selected_id(), Some("id-a"));
    }
}
