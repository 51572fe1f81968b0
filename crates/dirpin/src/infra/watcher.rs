//! Coarse change notifications for the pinned folder.
//!
//! The stream carries no payload: any create/modify/remove under the watched
//! folder sends one `()` and the core reacts by reloading the currently
//! displayed folder.

use std::path::PathBuf;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// Watches one folder tree and re-aims when the pinned folder changes.
pub struct FolderWatcher {
    watcher: RecommendedWatcher,
    watched: Option<PathBuf>,
}

impl FolderWatcher {
    /// Creates the watcher; change signals arrive on `change_tx`.
    ///
    /// # Errors
    /// Returns an error when the platform watch backend cannot be created.
    pub fn new(change_tx: mpsc::UnboundedSender<()>) -> Result<Self, notify::Error> {
        let watcher = notify::recommended_watcher(
            move |result: Result<notify::Event, notify::Error>| {
                // Access events would turn every directory read into a
                // reload loop; only content changes count.
                if let Ok(event) = result
                    && !matches!(event.kind, EventKind::Access(_))
                {
                    let _ = change_tx.send(());
                }
            },
        )?;

        Ok(Self {
            watcher,
            watched: None,
        })
    }

    /// Re-aims the watcher at `folder`, dropping the previous watch.
    /// No-op when `folder` is already watched.
    pub fn watch(&mut self, folder: &str) {
        let target = PathBuf::from(folder);
        if self.watched.as_deref() == Some(target.as_path()) {
            return;
        }

        if let Some(previous) = self.watched.take()
            && let Err(error) = self.watcher.unwatch(&previous)
        {
            tracing::debug!(%error, folder = %previous.display(), "failed to unwatch folder");
        }

        match self.watcher.watch(&target, RecursiveMode::Recursive) {
            Ok(()) => self.watched = Some(target),
            Err(error) => {
                tracing::warn!(%error, folder = %target.display(), "failed to watch folder");
            }
        }
    }
}
