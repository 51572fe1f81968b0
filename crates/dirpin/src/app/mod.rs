//! Browser core: one pinned folder, its snapshot, selection, scroll and drag
//! state.
//!
//! [`App`] owns all mutable widget state exclusively; every transition runs
//! synchronously inside the reaction to one input or notification event.
//! Filesystem knowledge lives behind the repository trait.

pub mod drag;
pub mod model;
pub mod selection;
pub mod virtualizer;

use std::sync::Arc;
use std::time::Instant;

use crate::app::drag::{CELL_DRAG_THRESHOLD, DragGesture, PressOutcome};
use crate::app::model::Snapshot;
use crate::app::selection::{NavCommand, SelectTarget, Selection};
use crate::app::virtualizer::ROW_HEIGHT;
use crate::domain::entry::Entry;
use crate::domain::path;
use crate::infra::repository::AssetRepository;

/// Selection behavior applied after a folder loads.
#[derive(Clone, Debug, Default)]
pub struct SetFolderOptions {
    /// Entry to select once the new snapshot is in place.
    pub select: Option<SelectTarget>,
    /// Re-resolve the previous selection by id when no target is given.
    pub restore_previous: bool,
}

impl SetFolderOptions {
    pub fn restore_previous() -> Self {
        Self {
            select: None,
            restore_previous: true,
        }
    }

    pub fn select(target: SelectTarget) -> Self {
        Self {
            select: Some(target),
            restore_previous: false,
        }
    }
}

/// Payload of an active row drag.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DragPayload {
    pub entry_id: String,
    pub path: String,
    pub is_folder: bool,
}

/// The pinned-folder browser widget state.
pub struct App {
    repo: Arc<dyn AssetRepository>,
    snapshot: Option<Snapshot>,
    selection: Selection,
    scroll_offset: f32,
    viewport_height: f32,
    pending_reveal: Option<usize>,
    gesture: DragGesture,
    drag: Option<DragPayload>,
    drag_over_header: bool,
    has_focus: bool,
}

impl App {
    pub fn new(repo: Arc<dyn AssetRepository>) -> Self {
        Self {
            repo,
            snapshot: None,
            selection: Selection::default(),
            scroll_offset: 0.0,
            viewport_height: 0.0,
            pending_reveal: None,
            gesture: DragGesture::with_threshold(CELL_DRAG_THRESHOLD),
            drag: None,
            drag_over_header: false,
            has_focus: true,
        }
    }

    /// The currently displayed folder identifier, for the header title and
    /// host persistence.
    pub fn displayed_folder(&self) -> Option<&str> {
        self.snapshot.as_ref().map(Snapshot::folder_id)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.snapshot
            .as_ref()
            .and_then(|snapshot| self.selection.index_in(snapshot))
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        let snapshot = self.snapshot.as_ref()?;
        snapshot.get(self.selection.index_in(snapshot)?)
    }

    /// The selected entry's stable id, for host persistence.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected_id()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn dragging(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    pub fn drag_over_header(&self) -> bool {
        self.drag_over_header
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Pins `target`, which may name a folder or a file; a file pins its
    /// parent folder with the file preselected. A target that is neither a
    /// valid folder nor inside one degrades to the no-folder state.
    pub fn set_folder(&mut self, target: &str, options: SetFolderOptions) {
        let target = path::normalize(target);

        let resolved = if self.repo.is_valid_folder(&target) {
            Some((target.clone(), options.select))
        } else if let Some(parent) = self.repo.parent_of(&target)
            && self.repo.is_valid_folder(&parent)
        {
            let select = options
                .select
                .or(Some(SelectTarget::Path(target.clone())));
            Some((parent, select))
        } else {
            None
        };

        let Some((folder_path, select)) = resolved else {
            tracing::debug!(requested = %target, "target is neither a folder nor inside one");
            self.snapshot = None;
            self.selection.clear();
            self.scroll_offset = 0.0;
            self.pending_reveal = None;
            return;
        };

        let folder_changed = self.displayed_folder() != Some(folder_path.as_str());
        let snapshot = model::load(self.repo.as_ref(), &folder_path);

        self.selection
            .resolve_after_load(&snapshot, select.as_ref(), options.restore_previous);

        if folder_changed {
            self.scroll_offset = 0.0;
        }

        // An explicitly requested selection is brought into view; a restored
        // one keeps the user's scroll position.
        self.pending_reveal = match select {
            Some(_) => self.selection.index_in(&snapshot),
            None => None,
        };

        self.snapshot = Some(snapshot);
        // Row indices under a pending press are stale now.
        self.gesture.cancel();
    }

    /// Reloads the displayed folder after a change notification, restoring
    /// the previous selection by id. Completes before the caller returns.
    pub fn reload(&mut self) {
        let Some(folder_id) = self.displayed_folder().map(str::to_string) else {
            return;
        };

        self.set_folder(&folder_id, SetFolderOptions::restore_previous());
    }

    /// Reports the measured list viewport height for this cycle and applies
    /// any deferred scroll-into-view request.
    pub fn layout_viewport(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        if viewport_height <= 0.0 {
            // No real layout yet; the reveal stays pending.
            return;
        }

        if let Some(index) = self.pending_reveal.take() {
            self.scroll_offset =
                virtualizer::scroll_to_index(index, self.scroll_offset, viewport_height, ROW_HEIGHT);
        }

        let count = self.snapshot.as_ref().map_or(0, Snapshot::len);
        self.scroll_offset =
            virtualizer::clamp_scroll(self.scroll_offset, count, viewport_height, ROW_HEIGHT);
    }

    /// Runs one navigation command; returns false when there is nothing to
    /// navigate (empty or missing snapshot).
    pub fn navigate(&mut self, command: NavCommand) -> bool {
        let Some(snapshot) = &self.snapshot else {
            return false;
        };

        let rows = virtualizer::viewport_rows(self.viewport_height, ROW_HEIGHT);
        let current = self.selection.index_in(snapshot);
        let Some(index) = selection::navigate(current, snapshot.len(), command, rows) else {
            return false;
        };

        self.selection.select_index(snapshot, index);
        self.pending_reveal = Some(index);

        true
    }

    /// Enters the selected folder; false when the selection is not a folder.
    ///
    /// `select_first_child` preselects the new folder's first row and is the
    /// arrow-key entry behavior; Enter and double click leave the new folder
    /// unselected.
    pub fn enter_folder(&mut self, select_first_child: bool) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        if !entry.is_folder {
            return false;
        }

        let target = entry.path.clone();
        self.set_folder(&target, SetFolderOptions::default());

        if select_first_child
            && let Some(snapshot) = &self.snapshot
            && !snapshot.is_empty()
        {
            self.selection.select_index(snapshot, 0);
            self.pending_reveal = Some(0);
        }

        true
    }

    /// Moves up to the parent folder, reselecting the folder just exited;
    /// false (not handled) at a root with no valid parent.
    pub fn exit_folder(&mut self) -> bool {
        let Some(current) = self.displayed_folder().map(str::to_string) else {
            return false;
        };
        let Some(parent) = self.repo.parent_of(&current) else {
            return false;
        };
        if parent == current || !self.repo.is_valid_folder(&parent) {
            return false;
        }

        self.set_folder(&parent, SetFolderOptions::select(SelectTarget::Id(current)));

        true
    }

    /// Opens the selection: a folder is entered, a file is handed to the
    /// repository's default-open integration.
    pub fn open_selection(&mut self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        if entry.is_folder {
            return self.enter_folder(false);
        }

        self.repo.open_default(&entry.id);

        true
    }

    /// Primary press at `index`. A press below the last row clears the
    /// selection; a double click opens the row.
    pub fn press_row(&mut self, index: usize, position: (f32, f32), now: Instant) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };

        if index >= snapshot.len() {
            self.selection.clear();
            return;
        }

        // Selection moves on pointer-down; the row was clicked, so it is
        // already in view and no reveal is requested.
        self.selection.select_index(snapshot, index);

        if self.gesture.pointer_down(index, position, now) == PressOutcome::DoubleClick {
            self.open_selection();
        }
    }

    /// Secondary press at `index`: select and signal the context-menu
    /// request, with no drag handling.
    pub fn press_row_secondary(&mut self, index: usize) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let Some(entry) = snapshot.get(index) else {
            return;
        };

        tracing::debug!(entry = %entry.id, "context menu requested");
        self.selection.select_index(snapshot, index);
    }

    /// Pointer movement while a button is held; may promote a pending press
    /// into an active drag. Once a drag is active, movement is not
    /// re-evaluated.
    pub fn pointer_moved(&mut self, position: (f32, f32)) {
        if self.drag.is_some() {
            return;
        }

        if let Some(index) = self.gesture.pointer_moved(position)
            && let Some(entry) = self.snapshot.as_ref().and_then(|snapshot| snapshot.get(index))
        {
            self.drag = Some(DragPayload {
                entry_id: entry.id.clone(),
                path: entry.path.clone(),
                is_folder: entry.is_folder,
            });
        }
    }

    pub fn set_drag_over_header(&mut self, over: bool) {
        self.drag_over_header = over;
    }

    /// Pointer release; drops the active payload on the header bar when the
    /// release happened there.
    pub fn pointer_up(&mut self, over_header: bool) {
        self.gesture.pointer_up();
        self.drag_over_header = false;

        let Some(payload) = self.drag.take() else {
            return;
        };
        if !over_header {
            return;
        }

        // Accept only a payload that still resolves to one folder-like path;
        // set_folder pins a folder directly and a file via its parent with
        // the file preselected.
        let Some(dropped_path) = self.repo.resolve_by_id(&payload.entry_id) else {
            tracing::debug!(entry = %payload.entry_id, "dropped entry no longer resolves");
            return;
        };

        self.set_folder(&dropped_path, SetFolderOptions::default());
    }

    /// Scrolls by whole rows (mouse wheel), clamped to the content.
    pub fn scroll_by(&mut self, delta_rows: f32) {
        let count = self.snapshot.as_ref().map_or(0, Snapshot::len);
        self.scroll_offset = virtualizer::clamp_scroll(
            self.scroll_offset + delta_rows * ROW_HEIGHT,
            count,
            self.viewport_height,
            ROW_HEIGHT,
        );
    }

    /// Tracks logical input focus; losing focus abandons any pending or
    /// active drag.
    pub fn focus_changed(&mut self, focused: bool) {
        self.has_focus = focused;
        if !focused {
            self.gesture.cancel();
            self.drag = None;
            self.drag_over_header = false;
        }
    }

    /// Opens the selection with the platform default application.
    pub fn open_selection_externally(&self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        self.repo.open_default(&entry.id);

        true
    }

    /// Reveals the selection in the platform file manager.
    pub fn reveal_selection(&self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        self.repo.reveal_externally(&entry.path);

        true
    }

    /// Asks the host to focus and inspect the selection.
    pub fn inspect_selection(&self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        self.repo.focus_and_inspect(&entry.id);

        true
    }

    /// Asks the host to show the selection's properties.
    pub fn show_selection_properties(&self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        self.repo.show_properties(&entry.id);

        true
    }
}
