//! In-terminal stand-in for the platform permission model.
//!
//! [`DesktopPlatform`] keeps grant states in memory, seeded from config.
//! Launching a request only records it; the app draws the emulated prompt
//! and writes the user's answer back with [`DesktopPlatform::set_state`].

use std::collections::HashMap;

use sdbrowse_core::config::settings::PlatformConfig;
use sdbrowse_core::{
    CoreResult, PermissionState, SettingsTarget, StoragePermission, StoragePlatform,
};

const ALL_PERMISSIONS: [StoragePermission; 3] = [
    StoragePermission::ReadExternalStorage,
    StoragePermission::WriteExternalStorage,
    StoragePermission::ManageExternalStorage,
];

#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    api_level: u32,
    package_name: String,
    grants: HashMap<StoragePermission, PermissionState>,
}

impl DesktopPlatform {
    /// Builds a platform whose permissions all start in `initial_permission`.
    pub fn new(config: &PlatformConfig) -> Self {
        let grants = ALL_PERMISSIONS
            .iter()
            .map(|p| (*p, config.initial_permission))
            .collect();
        Self {
            api_level: config.api_level,
            package_name: config.package_name.clone(),
            grants,
        }
    }

    /// Records the user's answer for `permission`.
    pub fn set_state(&mut self, permission: StoragePermission, state: PermissionState) {
        self.grants.insert(permission, state);
    }
}

impl StoragePlatform for DesktopPlatform {
    fn api_level(&self) -> u32 {
        self.api_level
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn check_permission(&self, permission: StoragePermission) -> PermissionState {
        self.grants.get(&permission).copied().unwrap_or_default()
    }

    fn request_permissions(&mut self, permissions: &[StoragePermission]) -> CoreResult<()> {
        let names: Vec<&str> = permissions.iter().map(|p| p.manifest_name()).collect();
        tracing::info!(?names, "showing runtime permission prompt");
        Ok(())
    }

    fn open_settings(&mut self, target: &SettingsTarget) -> CoreResult<()> {
        tracing::info!(?target, "showing all-files access settings");
        Ok(())
    }
}
