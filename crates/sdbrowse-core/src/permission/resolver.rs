//! Storage permission resolution.
//!
//! [`PermissionResolver`] asks a [`StoragePlatform`] whether storage access
//! is granted and, when it is not, launches the tier's request. The answer
//! arrives later, when the host forwards the platform's result event to
//! [`PermissionResolver::on_permissions_result`] or
//! [`PermissionResolver::on_settings_closed`]. That completes the single-shot
//! channel behind the [`PendingAccess`] handed out by
//! [`PermissionResolver::request_access`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::error::CoreResult;
use crate::permission::tier::{
    decide, AccessAction, AccessRequest, PermissionState, SettingsTarget, StoragePermission,
    StorageTier,
};

/// The host platform's permission surface.
///
/// Launch methods only show UI; they return once the prompt or screen is
/// up. The user's answer comes back through the resolver's `on_*` methods.
pub trait StoragePlatform {
    /// The platform API level, used to pick a [`StorageTier`].
    fn api_level(&self) -> u32;

    /// Application package name, used to address the per-app settings page.
    fn package_name(&self) -> &str;

    /// Current grant status of `permission`.
    fn check_permission(&self, permission: StoragePermission) -> PermissionState;

    /// Shows the runtime permission dialog.
    fn request_permissions(&mut self, permissions: &[StoragePermission]) -> CoreResult<()>;

    /// Opens a system settings screen.
    fn open_settings(&mut self, target: &SettingsTarget) -> CoreResult<()>;
}

/// How a pending access request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    Granted,
    Denied,
    /// A newer request replaced this one, or the resolver went away.
    Superseded,
}

impl AccessOutcome {
    fn from_granted(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

/// User's answer to the rationale dialog shown after a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationaleChoice {
    /// Ask again.
    Retry,
    /// Keep browsing without storage access for the rest of the session.
    AcceptLimited,
}

/// A storage access request awaiting the user's answer.
///
/// Await it, or poll it with [`PendingAccess::try_outcome`] from an event
/// loop. There is no timeout: an unanswered request stays pending.
#[derive(Debug)]
pub struct PendingAccess {
    rx: oneshot::Receiver<bool>,
}

impl PendingAccess {
    /// Returns the outcome if the request has been answered.
    pub fn try_outcome(&mut self) -> Option<AccessOutcome> {
        match self.rx.try_recv() {
            Ok(granted) => Some(AccessOutcome::from_granted(granted)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(AccessOutcome::Superseded),
        }
    }
}

impl Future for PendingAccess {
    type Output = AccessOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|result| match result {
            Ok(granted) => AccessOutcome::from_granted(granted),
            Err(_) => AccessOutcome::Superseded,
        })
    }
}

#[derive(Debug)]
struct InFlight {
    request: AccessRequest,
    responder: oneshot::Sender<bool>,
}

/// Decides and drives storage access for one platform.
#[derive(Debug)]
pub struct PermissionResolver<P> {
    platform: P,
    tier: StorageTier,
    in_flight: Option<InFlight>,
    limited: bool,
}

impl<P: StoragePlatform> PermissionResolver<P> {
    /// Creates a resolver, deriving the storage tier from the platform.
    pub fn new(platform: P) -> Self {
        let tier = StorageTier::from_api_level(platform.api_level());
        tracing::info!(api_level = platform.api_level(), ?tier, "storage tier selected");
        Self {
            platform,
            tier,
            in_flight: None,
            limited: false,
        }
    }

    pub fn tier(&self) -> StorageTier {
        self.tier
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Reads the current grant state from the platform. Never cached.
    pub fn resolve_access(&self) -> PermissionState {
        self.platform.check_permission(self.tier.gate_permission())
    }

    /// What the host should do right now.
    pub fn next_action(&self) -> AccessAction {
        let action = decide(self.tier, self.resolve_access());
        tracing::debug!(tier = ?self.tier, ?action, "access decision");
        action
    }

    /// The request currently shown to the user, if any.
    pub fn in_flight(&self) -> Option<&AccessRequest> {
        self.in_flight.as_ref().map(|f| &f.request)
    }

    /// `true` once the user chose to continue without access.
    pub fn is_limited(&self) -> bool {
        self.limited
    }

    /// Launches the tier's access request and returns a handle to its answer.
    ///
    /// A request already in flight is superseded.
    ///
    /// # Errors
    ///
    /// Returns the platform error if neither the request nor, for the
    /// all-files tier, the per-app settings fallback could be launched.
    pub fn request_access(&mut self) -> CoreResult<PendingAccess> {
        let request = match self.tier.request() {
            AccessRequest::RuntimePermissions(permissions) => {
                self.platform.request_permissions(&permissions)?;
                AccessRequest::RuntimePermissions(permissions)
            }
            AccessRequest::SystemSettings(target) => {
                AccessRequest::SystemSettings(self.launch_settings(target)?)
            }
        };
        tracing::info!(?request, "storage access requested");

        let (responder, rx) = oneshot::channel();
        if self
            .in_flight
            .replace(InFlight { request, responder })
            .is_some()
        {
            tracing::debug!("previous access request superseded");
        }
        self.limited = false;
        Ok(PendingAccess { rx })
    }

    fn launch_settings(&mut self, target: SettingsTarget) -> CoreResult<SettingsTarget> {
        match self.platform.open_settings(&target) {
            Ok(()) => Ok(target),
            Err(e) => {
                tracing::warn!("all-files settings unavailable, trying app page: {e}");
                let fallback = SettingsTarget::AppAllFilesAccess {
                    package: self.platform.package_name().to_owned(),
                };
                self.platform.open_settings(&fallback)?;
                Ok(fallback)
            }
        }
    }

    /// Completes a runtime permission request.
    ///
    /// Access is granted only if `results` is non-empty and every permission
    /// was granted. Returns that verdict.
    pub fn on_permissions_result(&mut self, results: &[PermissionState]) -> bool {
        let granted = !results.is_empty() && results.iter().all(|s| *s == PermissionState::Granted);
        self.complete(granted);
        granted
    }

    /// Completes a settings-screen request by re-reading the grant state.
    pub fn on_settings_closed(&mut self) -> bool {
        let granted = self.resolve_access() == PermissionState::Granted;
        self.complete(granted);
        granted
    }

    /// Handles the rationale dialog. `Retry` starts a new request.
    ///
    /// # Errors
    ///
    /// Propagates launch failures from [`PermissionResolver::request_access`].
    pub fn on_rationale(&mut self, choice: RationaleChoice) -> CoreResult<Option<PendingAccess>> {
        match choice {
            RationaleChoice::Retry => self.request_access().map(Some),
            RationaleChoice::AcceptLimited => {
                tracing::info!("continuing with limited functionality");
                self.limited = true;
                Ok(None)
            }
        }
    }

    fn complete(&mut self, granted: bool) {
        match self.in_flight.take() {
            Some(in_flight) => {
                tracing::info!(request = ?in_flight.request, granted, "storage access answered");
                // The receiver may already be gone; the answer is then moot.
                let _ = in_flight.responder.send(granted);
            }
            None => tracing::debug!(granted, "permission result with no request in flight"),
        }
    }
}
