//! Filesystem-backed [`AssetRepository`] with gitignore-aware listing.

use std::fs;
use std::path::Path;

use ignore::WalkBuilder;

use crate::domain::path;
use crate::infra::repository::{AssetRepository, ChildRecord};

/// Listing depth below the queried folder. One extra level is returned on
/// purpose: the model's immediate-children filter owns the cut.
const LIST_DEPTH: usize = 2;

/// Production repository rooted in the real filesystem.
///
/// Stable ids are normalized absolute paths: an entry's id stays valid as
/// long as the entry itself does not move, which is the strongest guarantee
/// a plain filesystem offers without an inode index.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsRepository;

impl FsRepository {
    pub fn new() -> Self {
        Self
    }
}

impl AssetRepository for FsRepository {
    fn query_children(&self, folder_id: &str) -> Vec<ChildRecord> {
        let walker = WalkBuilder::new(folder_id)
            .max_depth(Some(LIST_DEPTH))
            .hidden(false)
            .build();

        walker
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let is_folder = entry.file_type().is_some_and(|ft| ft.is_dir());
                if !is_folder && entry.file_type().is_none_or(|ft| !ft.is_file()) {
                    return None;
                }

                let child_path = path::normalize(&entry.path().to_string_lossy());
                if child_path == path::normalize(folder_id) {
                    return None;
                }

                Some(ChildRecord {
                    id: child_path.clone(),
                    path: child_path,
                    is_folder,
                })
            })
            .collect()
    }

    fn is_empty(&self, folder_id: &str) -> bool {
        // Same ignore rules as the listing, so a folder whose only contents
        // are ignored gets the empty icon it renders as.
        WalkBuilder::new(folder_id)
            .max_depth(Some(1))
            .hidden(false)
            .build()
            .filter_map(Result::ok)
            .all(|entry| entry.depth() == 0)
    }

    fn resolve_by_id(&self, id: &str) -> Option<String> {
        if Path::new(id).exists() {
            return Some(path::normalize(id));
        }

        None
    }

    fn is_valid_folder(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn parent_of(&self, path: &str) -> Option<String> {
        path::parent(&path::normalize(path))
    }

    fn open_default(&self, id: &str) {
        if let Err(error) = open::that_detached(id) {
            tracing::warn!(%error, entry = %id, "failed to open entry");
        }
    }

    fn reveal_externally(&self, path: &str) {
        // Plain `open` has no select-in-file-manager contract, so reveal
        // opens the containing folder (or the folder itself).
        let target = if Path::new(path).is_dir() {
            path.to_string()
        } else {
            self.parent_of(path).unwrap_or_else(|| path.to_string())
        };

        if let Err(error) = open::that_detached(&target) {
            tracing::warn!(%error, folder = %target, "failed to reveal entry");
        }
    }

    fn focus_and_inspect(&self, id: &str) {
        tracing::info!(entry = %id, "focus and inspect requested");
    }

    fn show_properties(&self, id: &str) {
        match fs::metadata(id) {
            Ok(metadata) => tracing::info!(
                entry = %id,
                size = metadata.len(),
                readonly = metadata.permissions().readonly(),
                "entry properties"
            ),
            Err(error) => tracing::debug!(%error, entry = %id, "properties unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn path_of(dir: &TempDir, relative: &str) -> String {
        path::normalize(&dir.path().join(relative).to_string_lossy())
    }

    #[test]
    fn test_query_children_lists_files_and_folders() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("sub")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("a.txt"), "").expect("test expectation should hold");
        let repo = FsRepository::new();

        // Act
        let children = repo.query_children(&path_of(&temp_dir, ""));

        // Assert
        let paths: Vec<&str> = children.iter().map(|child| child.path.as_str()).collect();
        assert!(paths.contains(&path_of(&temp_dir, "sub").as_str()));
        assert!(paths.contains(&path_of(&temp_dir, "a.txt").as_str()));
    }

    #[test]
    fn test_query_children_may_return_deeper_descendants() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("sub")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("sub/deep.txt"), "").expect("test expectation should hold");
        let repo = FsRepository::new();

        // Act
        let children = repo.query_children(&path_of(&temp_dir, ""));

        // Assert — the contract allows more than one level
        let paths: Vec<&str> = children.iter().map(|child| child.path.as_str()).collect();
        assert!(paths.contains(&path_of(&temp_dir, "sub/deep.txt").as_str()));
    }

    #[test]
    fn test_query_children_excludes_the_folder_itself() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let repo = FsRepository::new();
        let folder = path_of(&temp_dir, "");

        // Act
        let children = repo.query_children(&folder);

        // Assert
        assert!(children.iter().all(|child| child.path != folder));
    }

    #[test]
    fn test_is_empty_detects_empty_folder() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("empty")).expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("full")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("full/a.txt"), "").expect("test expectation should hold");
        let repo = FsRepository::new();

        // Act & Assert
        assert!(repo.is_empty(&path_of(&temp_dir, "empty")));
        assert!(!repo.is_empty(&path_of(&temp_dir, "full")));
    }

    #[test]
    fn test_is_empty_agrees_with_the_ignore_filtered_listing() {
        // Arrange — a repository whose folder holds only a gitignored file
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join(".git")).expect("test expectation should hold");
        fs::write(temp_dir.path().join(".gitignore"), "*.log\n")
            .expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("logs")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("logs/debug.log"), "")
            .expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("src")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("src/main.rs"), "").expect("test expectation should hold");
        let repo = FsRepository::new();

        // Act
        let logs_children = repo.query_children(&path_of(&temp_dir, "logs"));

        // Assert — the folder lists as empty and reports empty
        assert!(logs_children.is_empty());
        assert!(repo.is_empty(&path_of(&temp_dir, "logs")));
        assert!(!repo.is_empty(&path_of(&temp_dir, "src")));
    }

    #[test]
    fn test_resolve_by_id_misses_deleted_entries() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::write(temp_dir.path().join("a.txt"), "").expect("test expectation should hold");
        let repo = FsRepository::new();
        let id = path_of(&temp_dir, "a.txt");

        // Act
        let before = repo.resolve_by_id(&id);
        fs::remove_file(temp_dir.path().join("a.txt")).expect("test expectation should hold");
        let after = repo.resolve_by_id(&id);

        // Assert
        assert_eq!(before, Some(id));
        assert_eq!(after, None);
    }

    #[test]
    fn test_parent_of_is_absent_at_root() {
        // Arrange
        let repo = FsRepository::new();

        // Act & Assert
        assert_eq!(repo.parent_of("/"), None);
        assert_eq!(repo.parent_of("/tmp"), Some("/".to_string()));
    }

    #[test]
    fn test_is_valid_folder_rejects_files() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::write(temp_dir.path().join("a.txt"), "").expect("test expectation should hold");
        let repo = FsRepository::new();

        // Act & Assert
        assert!(repo.is_valid_folder(&path_of(&temp_dir, "")));
        assert!(!repo.is_valid_folder(&path_of(&temp_dir, "a.txt")));
        assert!(!repo.is_valid_folder(&path_of(&temp_dir, "missing")));
    }
}
