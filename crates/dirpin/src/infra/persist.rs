//! Host-side persistence of the last pinned view.
//!
//! The browser core hands the host two opaque strings (folder id, selected
//! entry id); this module is the host's storage for them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Relative directory name for dirpin state under the home directory.
pub const DIRPIN_DIR: &str = ".dirpin";

const STATE_FILE: &str = "state.json";

/// The last pinned folder and selected entry, both opaque to the host.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct LastView {
    pub folder: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Returns the dirpin home directory (`~/.dirpin`).
pub fn dirpin_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(DIRPIN_DIR);
    }

    PathBuf::from(DIRPIN_DIR)
}

/// Loads the last view; a missing or unreadable state file yields the
/// default empty view.
pub fn load(home: &Path) -> LastView {
    let Ok(contents) = fs::read_to_string(home.join(STATE_FILE)) else {
        return LastView::default();
    };

    serde_json::from_str(&contents).unwrap_or_else(|error| {
        tracing::debug!(%error, "discarding unreadable state file");
        LastView::default()
    })
}

/// Saves the last view, creating the home directory when needed.
///
/// # Errors
/// Returns an error when the home directory or state file cannot be written.
pub fn save(home: &Path, view: &LastView) -> Result<(), StateError> {
    fs::create_dir_all(home)?;
    let contents = serde_json::to_string_pretty(view)?;
    fs::write(home.join(STATE_FILE), contents)?;

    Ok(())
}
