//! Storage access tiers and the permission decision table.
//!
//! The platform's API level selects a [`StorageTier`]; the tier plus the
//! current [`PermissionState`] select an [`AccessAction`] via [`decide`].

use serde::{Deserialize, Serialize};

/// First API level with scoped storage (Android 10).
pub const API_SCOPED_STORAGE: u32 = 29;
/// First API level with all-files access (Android 11).
pub const API_ALL_FILES_ACCESS: u32 = 30;

/// Grant status of a storage permission, read fresh from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Granted,
    Denied,
    #[default]
    NotDetermined,
}

/// Storage permissions the browser may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoragePermission {
    ReadExternalStorage,
    WriteExternalStorage,
    /// All-files access, granted only from the system settings screen.
    ManageExternalStorage,
}

impl StoragePermission {
    /// The manifest identifier of this permission.
    pub fn manifest_name(self) -> &'static str {
        match self {
            Self::ReadExternalStorage => "android.permission.READ_EXTERNAL_STORAGE",
            Self::WriteExternalStorage => "android.permission.WRITE_EXTERNAL_STORAGE",
            Self::ManageExternalStorage => "android.permission.MANAGE_EXTERNAL_STORAGE",
        }
    }
}

/// Which system screen to open for all-files access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsTarget {
    /// The general "all files access" list.
    AllFilesAccess,
    /// The per-app page, addressed by package name.
    AppAllFilesAccess { package: String },
}

/// A request the platform must show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequest {
    /// In-app runtime permission dialog.
    RuntimePermissions(Vec<StoragePermission>),
    /// System settings screen.
    SystemSettings(SettingsTarget),
}

/// What the host should do next to obtain storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessAction {
    /// Access is granted; list files.
    Proceed,
    /// Show the runtime permission dialog for these permissions.
    RequestPermissions(Vec<StoragePermission>),
    /// The user already declined; explain and offer a retry.
    ShowRationale,
    /// Send the user to the all-files access settings screen.
    OpenSettings,
}

/// Storage model era of the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    /// Before scoped storage: read + write runtime permissions.
    Legacy,
    /// Scoped storage: read runtime permission.
    Scoped,
    /// All-files access via system settings.
    AllFiles,
}

impl StorageTier {
    /// Selects the tier for a platform API level.
    pub fn from_api_level(api_level: u32) -> Self {
        match api_level {
            level if level >= API_ALL_FILES_ACCESS => Self::AllFiles,
            API_SCOPED_STORAGE => Self::Scoped,
            _ => Self::Legacy,
        }
    }

    /// The permission whose grant status decides whether access is granted.
    pub fn gate_permission(self) -> StoragePermission {
        match self {
            Self::Legacy => StoragePermission::WriteExternalStorage,
            Self::Scoped => StoragePermission::ReadExternalStorage,
            Self::AllFiles => StoragePermission::ManageExternalStorage,
        }
    }

    /// Runtime permissions requested in-app, empty for [`StorageTier::AllFiles`].
    pub fn runtime_permissions(self) -> Vec<StoragePermission> {
        match self {
            Self::Legacy => vec![
                StoragePermission::ReadExternalStorage,
                StoragePermission::WriteExternalStorage,
            ],
            Self::Scoped => vec![StoragePermission::ReadExternalStorage],
            Self::AllFiles => Vec::new(),
        }
    }

    /// The primary request this tier makes.
    pub fn request(self) -> AccessRequest {
        match self {
            Self::AllFiles => AccessRequest::SystemSettings(SettingsTarget::AllFilesAccess),
            tier => AccessRequest::RuntimePermissions(tier.runtime_permissions()),
        }
    }
}

/// The permission decision table.
pub fn decide(tier: StorageTier, state: PermissionState) -> AccessAction {
    match (tier, state) {
        (_, PermissionState::Granted) => AccessAction::Proceed,
        (StorageTier::AllFiles, _) => AccessAction::OpenSettings,
        (tier, PermissionState::NotDetermined) => {
            AccessAction::RequestPermissions(tier.runtime_permissions())
        }
        (_, PermissionState::Denied) => AccessAction::ShowRationale,
    }
}
