//! Browser state and directory transitions.
//!
//! [`BrowserState`] pairs the current path with a fresh listing of it. Every
//! transition replaces the whole listing; nothing is patched in place.

use std::path::{Path, PathBuf};

use crate::fs::entry::Entry;
use crate::fs::lister::list;

/// Returns the path to enter when `entry` is tapped, or `None` for files.
pub fn navigate_into(entry: &Entry) -> Option<PathBuf> {
    entry.is_dir().then(|| entry.path().to_path_buf())
}

/// Returns the parent of `current`, or `None` when `current` is the storage
/// root (or has no parent at all).
///
/// `None` tells the host to fall back to its own back action.
pub fn navigate_up(root: &Path, current: &Path) -> Option<PathBuf> {
    if current == root {
        return None;
    }
    current.parent().map(Path::to_path_buf)
}

/// Result of tapping an entry.
#[derive(Debug, Clone)]
pub enum Navigation {
    /// A directory was entered; carries the freshly listed state.
    Entered(BrowserState),
    /// A file was tapped. The current path is unchanged.
    FileSelected(Entry),
}

/// The directory being shown and its entries.
///
/// Immutable: transitions return a new `BrowserState`.
#[derive(Debug, Clone)]
pub struct BrowserState {
    root: PathBuf,
    current_path: PathBuf,
    entries: Vec<Entry>,
}

impl BrowserState {
    /// Opens the browser at the storage root.
    pub fn open(root: PathBuf) -> Self {
        let current_path = root.clone();
        Self::at(root, current_path)
    }

    /// Opens the browser at `current_path` beneath `root`.
    pub fn at(root: PathBuf, current_path: PathBuf) -> Self {
        let entries = list(&current_path);
        Self {
            root,
            current_path,
            entries,
        }
    }

    /// Returns the configured storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory currently listed.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Returns the entries, directories first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns `true` when the current path is the storage root.
    pub fn is_at_root(&self) -> bool {
        self.current_path == self.root
    }

    /// Enters `entry` if it is a directory, otherwise reports the selection.
    pub fn navigate_into(&self, entry: &Entry) -> Navigation {
        match navigate_into(entry) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "entering directory");
                Navigation::Entered(Self::at(self.root.clone(), path))
            }
            None => {
                tracing::debug!(name = entry.name(), "file selected");
                Navigation::FileSelected(entry.clone())
            }
        }
    }

    /// Moves to the parent directory. Returns `None` at the storage root.
    pub fn navigate_up(&self) -> Option<Self> {
        let parent = navigate_up(&self.root, &self.current_path)?;
        Some(Self::at(self.root.clone(), parent))
    }

    /// Re-lists the current path.
    pub fn refresh(&self) -> Self {
        Self::at(self.root.clone(), self.current_path.clone())
    }
}
