use std::path::{Path, PathBuf};

use sdbrowse_core::config::settings::Config;
use sdbrowse_core::{
    AccessAction, AccessOutcome, AccessRequest, Browser, Command, Event, PendingAccess,
    PermissionResolver, PermissionState, RationaleChoice, StoragePermission, StoragePlatform,
    StorageTier, Theme,
};

use crate::platform::DesktopPlatform;

pub const LIMITED_MESSAGE: &str = "Functionality will be limited without storage access";

/// Application mode — determines how input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// An emulated OS permission prompt or settings screen is showing.
    PermissionPrompt,
    /// Access was denied; explaining why it is needed.
    Rationale,
}

/// Top-level application state.
///
/// The browser only exists once storage access has been granted. Until then
/// (or for the whole session, when the user accepts limited functionality)
/// only the path label and an empty list are shown.
pub struct App {
    root: PathBuf,
    browser: Option<Browser>,
    resolver: PermissionResolver<DesktopPlatform>,
    pending: Option<PendingAccess>,
    mode: AppMode,
    theme: Theme,
    show_icons: bool,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app and immediately runs the storage access check.
    pub fn new(root: PathBuf, config: &Config, theme: Theme) -> Self {
        let resolver = PermissionResolver::new(DesktopPlatform::new(&config.platform));
        let app = Self {
            root,
            browser: None,
            resolver,
            pending: None,
            mode: AppMode::Normal,
            theme,
            show_icons: config.ui.show_icons,
            status_message: None,
            should_quit: false,
        };
        app.start_access()
    }

    // --- Accessors ---

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// The directory shown in the path label.
    pub fn current_path(&self) -> &Path {
        self.browser
            .as_ref()
            .map_or(self.root.as_path(), Browser::current_path)
    }

    pub fn browser(&self) -> Option<&Browser> {
        self.browser.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_icons(&self) -> bool {
        self.show_icons
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tier(&self) -> StorageTier {
        self.resolver.tier()
    }

    pub fn api_level(&self) -> u32 {
        self.resolver.platform().api_level()
    }

    pub fn is_limited(&self) -> bool {
        self.resolver.is_limited()
    }

    /// The request the emulated prompt should show.
    pub fn in_flight(&self) -> Option<&AccessRequest> {
        self.resolver.in_flight()
    }

    // --- Builders ---

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_status(self, message: impl Into<String>) -> Self {
        Self {
            status_message: Some(message.into()),
            ..self
        }
    }

    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    fn with_listing(self) -> Self {
        let browser = Browser::open(self.root.clone());
        Self {
            browser: Some(browser),
            mode: AppMode::Normal,
            ..self
        }
    }

    // --- Storage access ---

    fn start_access(self) -> Self {
        match self.resolver.next_action() {
            AccessAction::Proceed => self.with_listing(),
            AccessAction::RequestPermissions(_) | AccessAction::OpenSettings => {
                self.request_access()
            }
            AccessAction::ShowRationale => self.with_mode(AppMode::Rationale),
        }
    }

    fn request_access(mut self) -> Self {
        match self.resolver.request_access() {
            Ok(pending) => {
                self.pending = Some(pending);
                self.with_mode(AppMode::PermissionPrompt)
            }
            Err(e) => {
                tracing::error!("storage access request failed: {e}");
                self.with_status(format!("Could not request access: {e}"))
                    .with_mode(AppMode::Rationale)
            }
        }
    }

    /// Picks up the answer to a pending access request, if one arrived.
    pub fn poll_access(mut self) -> Self {
        let Some(outcome) = self.pending.as_mut().and_then(PendingAccess::try_outcome) else {
            return self;
        };
        self.pending = None;
        match outcome {
            AccessOutcome::Granted => self.with_listing(),
            AccessOutcome::Denied => self.with_mode(AppMode::Rationale),
            AccessOutcome::Superseded => self,
        }
    }

    /// Applies the user's answer to the emulated prompt.
    pub fn answer_prompt(mut self, allow: bool) -> Self {
        let Some(request) = self.resolver.in_flight().cloned() else {
            return self.with_mode(AppMode::Normal);
        };
        let state = if allow {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };

        match request {
            AccessRequest::RuntimePermissions(permissions) => {
                let platform = self.resolver.platform_mut();
                for permission in &permissions {
                    platform.set_state(*permission, state);
                }
                let results = vec![state; permissions.len()];
                self.resolver.on_permissions_result(&results);
            }
            AccessRequest::SystemSettings(_) => {
                self.resolver
                    .platform_mut()
                    .set_state(StoragePermission::ManageExternalStorage, state);
                self.resolver.on_settings_closed();
            }
        }
        self.poll_access()
    }

    /// Handles the rationale dialog's buttons.
    pub fn choose_rationale(mut self, choice: RationaleChoice) -> Self {
        match self.resolver.on_rationale(choice) {
            Ok(Some(pending)) => {
                self.pending = Some(pending);
                self.with_clear_status().with_mode(AppMode::PermissionPrompt)
            }
            Ok(None) => self.with_mode(AppMode::Normal).with_status(LIMITED_MESSAGE),
            Err(e) => {
                tracing::error!("storage access retry failed: {e}");
                self.with_status(format!("Could not request access: {e}"))
            }
        }
    }

    // --- Browsing ---

    /// Dispatches a browser command and reacts to the resulting event.
    pub fn handle_command(mut self, command: Command) -> Self {
        let Some(browser) = self.browser.take() else {
            // Without access there is nothing to browse; back closes the screen.
            return if command == Command::Back {
                self.with_quit()
            } else {
                self
            };
        };
        let (browser, event) = browser.handle(command);
        self.browser = Some(browser);
        match event {
            Some(event) => self.with_event(event),
            None => self,
        }
    }

    fn with_event(self, event: Event) -> Self {
        match event {
            Event::DirectoryLoaded { path, count } => {
                tracing::debug!(path = %path.display(), count, "directory loaded");
                self
            }
            Event::FileSelected(entry) => {
                tracing::info!(path = %entry.path().display(), "file selected");
                self.with_status(format!("File selected: {}", entry.name()))
            }
            Event::ExitRequested => self.with_quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdbrowse_core::SettingsTarget;
    use std::fs;
    use tempfile::TempDir;

    fn setup(api_level: u32, initial: PermissionState) -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Download")).unwrap();
        fs::write(tmp.path().join("Download").join("ticket.pdf"), "x").unwrap();
        fs::write(tmp.path().join("photo.jpg"), "x").unwrap();

        let mut config = Config::default();
        config.platform.api_level = api_level;
        config.platform.initial_permission = initial;
        let app = App::new(tmp.path().to_path_buf(), &config, Theme::default());
        (tmp, app)
    }

    fn names(app: &App) -> Vec<String> {
        app.browser()
            .map(|b| b.entries().iter().map(|e| e.name().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn granted_lists_immediately() {
        let (_tmp, app) = setup(34, PermissionState::Granted);
        assert_eq!(app.mode(), AppMode::Normal);
        assert_eq!(names(&app), vec!["Download", "photo.jpg"]);
    }

    #[test]
    fn legacy_prompts_for_read_and_write() {
        let (_tmp, app) = setup(27, PermissionState::NotDetermined);
        assert_eq!(app.mode(), AppMode::PermissionPrompt);
        assert_eq!(app.tier(), StorageTier::Legacy);
        assert_eq!(
            app.in_flight(),
            Some(&AccessRequest::RuntimePermissions(vec![
                StoragePermission::ReadExternalStorage,
                StoragePermission::WriteExternalStorage,
            ]))
        );
        assert!(app.browser().is_none());
    }

    #[test]
    fn allowing_prompt_lists_files() {
        let (_tmp, app) = setup(29, PermissionState::NotDetermined);
        let app = app.answer_prompt(true);

        assert_eq!(app.mode(), AppMode::Normal);
        assert_eq!(names(&app), vec!["Download", "photo.jpg"]);
        assert!(app.in_flight().is_none());
    }

    #[test]
    fn denying_prompt_shows_rationale() {
        let (_tmp, app) = setup(29, PermissionState::NotDetermined);
        let app = app.answer_prompt(false);

        assert_eq!(app.mode(), AppMode::Rationale);
        assert!(app.browser().is_none());
    }

    #[test]
    fn rationale_retry_prompts_again() {
        let (_tmp, app) = setup(29, PermissionState::NotDetermined);
        let app = app
            .answer_prompt(false)
            .choose_rationale(RationaleChoice::Retry);

        assert_eq!(app.mode(), AppMode::PermissionPrompt);
        let app = app.answer_prompt(true);
        assert_eq!(names(&app), vec!["Download", "photo.jpg"]);
    }

    #[test]
    fn rationale_cancel_continues_limited() {
        let (tmp, app) = setup(29, PermissionState::NotDetermined);
        let app = app
            .answer_prompt(false)
            .choose_rationale(RationaleChoice::AcceptLimited);

        assert_eq!(app.mode(), AppMode::Normal);
        assert!(app.is_limited());
        assert_eq!(app.status_message(), Some(LIMITED_MESSAGE));
        assert_eq!(app.current_path(), tmp.path());
        assert!(!app.should_quit());

        let app = app.handle_command(Command::Open);
        assert!(!app.should_quit());
        let app = app.handle_command(Command::Back);
        assert!(app.should_quit());
    }

    #[test]
    fn previously_denied_starts_at_rationale() {
        let (_tmp, app) = setup(28, PermissionState::Denied);
        assert_eq!(app.mode(), AppMode::Rationale);
        assert!(app.in_flight().is_none());
    }

    #[test]
    fn all_files_tier_uses_settings_screen() {
        let (_tmp, app) = setup(33, PermissionState::NotDetermined);
        assert_eq!(
            app.in_flight(),
            Some(&AccessRequest::SystemSettings(SettingsTarget::AllFilesAccess))
        );

        let app = app.answer_prompt(true);
        assert_eq!(app.mode(), AppMode::Normal);
        assert_eq!(names(&app).len(), 2);
    }

    #[test]
    fn leaving_settings_off_shows_rationale() {
        let (_tmp, app) = setup(31, PermissionState::NotDetermined);
        let app = app.answer_prompt(false);
        assert_eq!(app.mode(), AppMode::Rationale);
    }

    #[test]
    fn opening_file_sets_status_without_navigating() {
        let (tmp, app) = setup(34, PermissionState::Granted);
        let app = app
            .handle_command(Command::CursorDown)
            .handle_command(Command::Open);

        assert_eq!(app.status_message(), Some("File selected: photo.jpg"));
        assert_eq!(app.current_path(), tmp.path());
    }

    #[test]
    fn opening_directory_then_back_returns_to_root() {
        let (tmp, app) = setup(34, PermissionState::Granted);
        let app = app.handle_command(Command::Open);
        assert_eq!(app.current_path(), tmp.path().join("Download"));
        assert_eq!(names(&app), vec!["ticket.pdf"]);

        let app = app.handle_command(Command::Back);
        assert_eq!(app.current_path(), tmp.path());
        assert!(!app.should_quit());
    }

    #[test]
    fn back_at_root_quits() {
        let (_tmp, app) = setup(34, PermissionState::Granted);
        let app = app.handle_command(Command::Back);
        assert!(app.should_quit());
    }

    #[test]
    fn poll_without_pending_is_noop() {
        let (_tmp, app) = setup(34, PermissionState::Granted);
        let app = app.poll_access();
        assert_eq!(app.mode(), AppMode::Normal);
    }

    #[test]
    fn unanswered_prompt_stays_open() {
        let (_tmp, app) = setup(29, PermissionState::NotDetermined);
        let app = app.poll_access().poll_access();
        assert_eq!(app.mode(), AppMode::PermissionPrompt);
    }
}
