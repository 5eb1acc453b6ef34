//! Navigation logic.
//!
//! [`browser::BrowserState`] holds the current path and its listing;
//! [`panel::Browser`] adds cursor selection and command handling.

pub mod browser;
pub mod panel;
