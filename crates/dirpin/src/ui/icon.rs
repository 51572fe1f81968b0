use std::fmt;

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A closed folder symbol (▸).
    Folder,
    /// An empty folder symbol (▹).
    EmptyFolder,
    /// A plain file symbol (·).
    File,
    /// The pinned-folder marker in the header bar (●).
    Pin,
}

impl Icon {
    /// Returns the list icon for an entry.
    pub fn for_entry(is_folder: bool, is_empty_folder: bool) -> Self {
        if !is_folder {
            Icon::File
        } else if is_empty_folder {
            Icon::EmptyFolder
        } else {
            Icon::Folder
        }
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Folder => "▸",
            Icon::EmptyFolder => "▹",
            Icon::File => "·",
            Icon::Pin => "●",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
