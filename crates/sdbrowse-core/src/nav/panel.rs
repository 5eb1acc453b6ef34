//! Cursor-carrying browser panel.
//!
//! [`Browser`] wraps a [`BrowserState`] with a selection index and turns
//! [`Command`]s into state transitions plus an optional [`Event`] for the UI.

use std::path::{Path, PathBuf};

use crate::event::{Command, Event};
use crate::fs::entry::Entry;
use crate::nav::browser::{BrowserState, Navigation};

/// A single-list storage browser with cursor selection.
///
/// Immutable: all state transitions return a new `Browser`.
/// Selection is automatically clamped to valid bounds.
#[derive(Debug, Clone)]
pub struct Browser {
    state: BrowserState,
    selected_index: usize,
}

impl Browser {
    /// Opens a browser at the storage root with the cursor on the first entry.
    pub fn open(root: PathBuf) -> Self {
        Self::from_state(BrowserState::open(root))
    }

    /// Wraps an existing state with the cursor on the first entry.
    pub fn from_state(state: BrowserState) -> Self {
        Self {
            state,
            selected_index: 0,
        }
    }

    /// Returns the underlying browser state.
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn current_path(&self) -> &Path {
        self.state.current_path()
    }

    pub fn entries(&self) -> &[Entry] {
        self.state.entries()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Returns the entry under the cursor, if any.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries().get(self.selected_index)
    }

    /// Returns a new browser with the selection moved to `index` (clamped).
    pub fn with_selection(self, index: usize) -> Self {
        let clamped = match self.entries().len() {
            0 => 0,
            len => index.min(len - 1),
        };
        Self {
            selected_index: clamped,
            ..self
        }
    }

    /// Moves the selection up by one. No-op at the top.
    pub fn move_up(self) -> Self {
        let index = self.selected_index.saturating_sub(1);
        self.with_selection(index)
    }

    /// Moves the selection down by one. No-op at the bottom.
    pub fn move_down(self) -> Self {
        let index = self.selected_index + 1;
        self.with_selection(index)
    }

    /// Applies a command, returning the new browser and an event for the UI.
    pub fn handle(self, command: Command) -> (Self, Option<Event>) {
        match command {
            Command::CursorUp => (self.move_up(), None),
            Command::CursorDown => (self.move_down(), None),
            Command::CursorTop => (self.with_selection(0), None),
            Command::CursorBottom => (self.with_selection(usize::MAX), None),
            Command::Open => self.open_selected(),
            Command::Back => self.go_up(),
            Command::Refresh => {
                let index = self.selected_index;
                let next = Self::from_state(self.state.refresh()).with_selection(index);
                let event = next.loaded_event();
                (next, Some(event))
            }
        }
    }

    fn open_selected(self) -> (Self, Option<Event>) {
        let Some(entry) = self.selected_entry().cloned() else {
            return (self, None);
        };
        match self.state.navigate_into(&entry) {
            Navigation::Entered(state) => {
                let next = Self::from_state(state);
                let event = next.loaded_event();
                (next, Some(event))
            }
            Navigation::FileSelected(entry) => (self, Some(Event::FileSelected(entry))),
        }
    }

    fn go_up(self) -> (Self, Option<Event>) {
        let Some(parent) = self.state.navigate_up() else {
            return (self, Some(Event::ExitRequested));
        };
        // Keep the cursor on the directory we just left.
        let left = self.state.current_path().to_path_buf();
        let index = parent
            .entries()
            .iter()
            .position(|e| e.path() == left)
            .unwrap_or(0);
        let next = Self::from_state(parent).with_selection(index);
        let event = next.loaded_event();
        (next, Some(event))
    }

    fn loaded_event(&self) -> Event {
        Event::DirectoryLoaded {
            path: self.current_path().to_path_buf(),
            count: self.entries().len(),
        }
    }
}
