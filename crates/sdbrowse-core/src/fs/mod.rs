//! File system abstractions.
//!
//! [`entry::Entry`] is the display snapshot of one node; [`lister`] reads a
//! directory into an ordered list of entries.

pub mod entry;
pub mod lister;
