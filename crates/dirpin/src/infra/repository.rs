//! Repository abstraction the browser core talks to.
//!
//! The core never touches the filesystem directly; everything goes through
//! [`AssetRepository`]. Production uses [`crate::infra::fs::FsRepository`];
//! tests use the generated `MockAssetRepository`.

/// One child record returned by a repository listing, before entry
/// resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildRecord {
    /// Stable identifier for the child.
    pub id: String,
    /// Display path of the child at listing time.
    pub path: String,
    /// Whether the child is a folder.
    pub is_folder: bool,
}

/// Collaborator contract consumed by the browser core.
///
/// Every query is synchronous and total: a missing id or path degrades to an
/// empty result or `None`, never to an error the core must handle. The four
/// trailing operations are fire-and-forget host integrations with no return
/// contract the core depends on.
#[cfg_attr(test, mockall::automock)]
pub trait AssetRepository: Send + Sync {
    /// Lists descendants of `folder_id`. May return entries deeper than one
    /// level; callers are responsible for filtering to immediate children.
    fn query_children(&self, folder_id: &str) -> Vec<ChildRecord>;

    /// Returns true when the folder has zero children.
    fn is_empty(&self, folder_id: &str) -> bool;

    /// Resolves a stable id back to a current path, `None` when it is gone.
    fn resolve_by_id(&self, id: &str) -> Option<String>;

    /// Returns true when `path` names an existing folder.
    fn is_valid_folder(&self, path: &str) -> bool;

    /// Returns the containing folder of `path`, `None` at a root.
    fn parent_of(&self, path: &str) -> Option<String>;

    /// Opens the entry with the platform default application.
    fn open_default(&self, id: &str);

    /// Reveals the entry in the platform file manager.
    fn reveal_externally(&self, path: &str);

    /// Asks the host to focus and inspect the entry.
    fn focus_and_inspect(&self, id: &str);

    /// Asks the host to show entry properties.
    fn show_properties(&self, id: &str);
}
