//! Event system for communication between UI and Core.
//!
//! The UI translates user input into [`Command`]s, which the core processes
//! and responds to with [`Event`]s. This decoupling allows any frontend to
//! drive the same core logic.

use std::path::PathBuf;

use crate::fs::entry::Entry;

/// An action the UI requests the core to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor up by one entry.
    CursorUp,
    /// Move the cursor down by one entry.
    CursorDown,
    /// Jump to the first entry.
    CursorTop,
    /// Jump to the last entry.
    CursorBottom,
    /// Tap the selected entry (enter a directory or select a file).
    Open,
    /// System back action: move to the parent directory.
    Back,
    /// Re-read the current directory.
    Refresh,
}

/// A notification the core sends back to the UI.
///
/// Events flow **Core → UI**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A directory was listed.
    DirectoryLoaded {
        /// The path now shown.
        path: PathBuf,
        /// Number of entries in the listing.
        count: usize,
    },
    /// A file (not a directory) was tapped.
    FileSelected(Entry),
    /// Back was pressed at the storage root; the host should close the screen.
    ExitRequested,
}
