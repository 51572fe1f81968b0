//! Folder listing model: one immutable snapshot per loaded folder.

use std::collections::HashSet;

use crate::domain::entry::Entry;
use crate::domain::path;
use crate::infra::repository::AssetRepository;

/// An immutable ordered listing of one folder at one point in time.
///
/// Folders occupy a prefix of the sequence; within each partition the
/// repository's own order is preserved. Snapshots are created wholesale and
/// replaced wholesale, never mutated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    folder_id: String,
    entries: Vec<Entry>,
}

impl Snapshot {
    pub fn new(folder_id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            folder_id: folder_id.into(),
            entries,
        }
    }

    pub fn empty(folder_id: impl Into<String>) -> Self {
        Self::new(folder_id, Vec::new())
    }

    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

/// Loads a snapshot of the immediate children of `folder_id`.
///
/// The repository listing may include deeper descendants; only entries whose
/// containing folder is exactly `folder_id` survive. Entries whose id no
/// longer resolves are silently omitted (a transient inconsistency, not an
/// error). Loading twice against an unchanged repository yields equal
/// snapshots, content and order.
pub fn load(repo: &dyn AssetRepository, folder_id: &str) -> Snapshot {
    let Some(folder_path) = repo.resolve_by_id(folder_id) else {
        return Snapshot::empty(folder_id);
    };
    let folder_path = path::normalize(&folder_path);

    let mut seen_ids = HashSet::new();
    let mut seen_paths = HashSet::new();
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for child in repo.query_children(folder_id) {
        let child_path = path::normalize(&child.path);
        if path::parent(&child_path).as_deref() != Some(folder_path.as_str()) {
            continue;
        }

        let Some(resolved_path) = repo.resolve_by_id(&child.id) else {
            tracing::debug!(entry = %child.id, "omitting entry that no longer resolves");
            continue;
        };

        // Snapshot invariant: ids and paths are unique.
        if !seen_ids.insert(child.id.clone()) || !seen_paths.insert(resolved_path.clone()) {
            continue;
        }

        let is_empty_folder = child.is_folder && repo.is_empty(&child.id);
        let entry = Entry::new(child.id, resolved_path, child.is_folder, is_empty_folder);

        if entry.is_folder {
            folders.push(entry);
        } else {
            files.push(entry);
        }
    }

    folders.append(&mut files);

    Snapshot::new(folder_path, folders)
}
