//! sdbrowse core library — UI-agnostic storage browser logic.
//!
//! `sdbrowse-core` lists directories, navigates a storage tree below a fixed
//! root, and decides how to obtain storage access on each platform tier. It
//! knows nothing about rendering; `sdbrowse-tui` is one host for it.
//!
//! # Modules
//!
//! - [`fs`] — [`Entry`] and directory listing ([`list`], [`read_directory`], [`sort_entries`]).
//! - [`nav`] — [`BrowserState`] transitions and the cursor-carrying [`Browser`].
//! - [`permission`] — storage tiers, the access decision table, and [`PermissionResolver`].
//! - [`config`] — TOML settings and theme.
//! - [`event`] — Command and event types for UI ↔ Core communication.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod permission;

pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::Entry;
pub use fs::lister::{list, read_directory, sort_entries};
pub use nav::browser::{navigate_into, navigate_up, BrowserState, Navigation};
pub use nav::panel::Browser;
pub use permission::{
    AccessAction, AccessOutcome, AccessRequest, PendingAccess, PermissionResolver,
    PermissionState, RationaleChoice, SettingsTarget, StoragePermission, StoragePlatform,
    StorageTier,
};

/// Normalises a string to NFC (composed) form.
///
/// Paths read back from some filesystems arrive decomposed (NFD); this
/// re-composes them for display.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
