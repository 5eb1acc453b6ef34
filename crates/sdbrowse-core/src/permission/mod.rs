//! Storage permission handling.
//!
//! [`tier`] holds the pure decision table keyed by [`tier::StorageTier`];
//! [`resolver`] drives requests through a [`resolver::StoragePlatform`].

pub mod resolver;
pub mod tier;

pub use resolver::{
    AccessOutcome, PendingAccess, PermissionResolver, RationaleChoice, StoragePlatform,
};
pub use tier::{
    decide, AccessAction, AccessRequest, PermissionState, SettingsTarget, StoragePermission,
    StorageTier,
};
