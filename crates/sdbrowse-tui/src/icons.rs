//! Nerd Font icons for list entries.

use sdbrowse_core::Entry;

const FOLDER: &str = "\u{f07b} ";
const FILE: &str = "\u{f15b} ";

/// Returns the glyph prefix for `entry`.
///
/// With icons disabled, directories get a `/` marker and files a space so
/// names stay aligned.
pub fn icon_for_entry(entry: &Entry, show_icons: bool) -> &'static str {
    match (show_icons, entry.is_dir()) {
        (true, true) => FOLDER,
        (true, false) => FILE,
        (false, true) => "/",
        (false, false) => " ",
    }
}
