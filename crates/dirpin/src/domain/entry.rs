use std::sync::OnceLock;

use crate::domain::path;

/// One immediate child of the displayed folder.
///
/// `id` is the stable identifier used to survive reloads; `path` is the
/// display path at load time and may go stale if the repository changes
/// without a reload. `is_empty_folder` is computed at load time only.
#[derive(Clone, Debug)]
pub struct Entry {
    pub id: String,
    pub path: String,
    pub is_folder: bool,
    pub is_empty_folder: bool,
    display_name: OnceLock<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        is_folder: bool,
        is_empty_folder: bool,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            is_folder,
            is_empty_folder,
            display_name: OnceLock::new(),
        }
    }

    /// Basename without extension, computed once per entry instance.
    pub fn display_name(&self) -> &str {
        self.display_name
            .get_or_init(|| path::display_name(&self.path))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        // The memoized display name is derived state and never compared.
        self.id == other.id
            && self.path == other.path
            && self.is_folder == other.is_folder
            && self.is_empty_folder == other.is_empty_folder
    }
}

impl Eq for Entry {}
