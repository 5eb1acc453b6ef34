use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use sdbrowse_core::{parse_color, AccessRequest, SettingsTarget};

use crate::app::{App, AppMode};
use crate::ui::panel::render_file_list;
use crate::ui::path_label::render_path_label;
use crate::ui::popup::render_popup;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

const RATIONALE_TITLE: &str = "Permission required";
const RATIONALE_BODY: &str = "This app needs storage access to show your files.";

/// Main render function — composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_path_label(f, chunks[0], app.current_path(), theme);

    let browser = app.browser();
    let entries = browser.map(|b| b.entries()).unwrap_or_default();
    let selected_index = browser.map_or(0, |b| b.selected_index());

    render_file_list(
        f,
        chunks[1],
        entries,
        selected_index,
        theme,
        app.show_icons(),
        empty_text(app),
    );

    let props = StatusBarProps {
        entry_count: entries.len(),
        selected_index,
        selected_entry: browser.and_then(|b| b.selected_entry()),
        tier: app.tier(),
        api_level: app.api_level(),
        limited: app.is_limited(),
        status_message: app.status_message(),
    };
    render_statusbar(f, chunks[2], &props, theme);

    match app.mode() {
        AppMode::Normal => {}
        AppMode::PermissionPrompt => {
            if let Some(request) = app.in_flight() {
                let (title, lines) = prompt_lines(request);
                render_popup(f, title, &lines, parse_color(&theme.popup.prompt_border_fg));
            }
        }
        AppMode::Rationale => {
            let mut lines = vec![
                RATIONALE_BODY.to_owned(),
                String::new(),
                "[Enter] Accept  [Esc] Cancel".to_owned(),
            ];
            if let Some(msg) = app.status_message() {
                lines.insert(1, msg.to_owned());
            }
            render_popup(f, RATIONALE_TITLE, &lines, parse_color(&theme.popup.border_fg));
        }
    }
}

fn empty_text(app: &App) -> &'static str {
    match (app.browser().is_some(), app.is_limited()) {
        (true, _) => "(empty directory)",
        (false, true) => "(no storage access)",
        (false, false) => "Waiting for storage access...",
    }
}

/// Title and body of the emulated system prompt for `request`.
fn prompt_lines(request: &AccessRequest) -> (&'static str, Vec<String>) {
    match request {
        AccessRequest::RuntimePermissions(permissions) => {
            let mut lines = vec!["Allow access to files on this device?".to_owned()];
            lines.push(String::new());
            lines.extend(permissions.iter().map(|p| format!("  {}", p.manifest_name())));
            lines.push(String::new());
            lines.push("[y] Allow  [n] Deny".to_owned());
            ("Storage permission", lines)
        }
        AccessRequest::SystemSettings(target) => {
            let heading = match target {
                SettingsTarget::AllFilesAccess => "All files access".to_owned(),
                SettingsTarget::AppAllFilesAccess { package } => {
                    format!("All files access for {package}")
                }
            };
            let lines = vec![
                heading,
                String::new(),
                "Allow access to manage all files?".to_owned(),
                String::new(),
                "[y] Allow  [n] Leave off".to_owned(),
            ];
            ("Settings", lines)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use sdbrowse_core::{Config, PermissionState, RationaleChoice, StoragePermission, Theme};
    use std::fs;
    use tempfile::TempDir;

    fn app_at(api_level: u32, initial: PermissionState) -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Music")).unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        let mut config = Config::default();
        config.platform.api_level = api_level;
        config.platform.initial_permission = initial;
        config.ui.show_icons = false;
        let app = App::new(tmp.path().to_path_buf(), &config, Theme::default());
        (tmp, app)
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn runtime_prompt_lists_manifest_names() {
        let request = AccessRequest::RuntimePermissions(vec![
            StoragePermission::ReadExternalStorage,
            StoragePermission::WriteExternalStorage,
        ]);
        let (title, lines) = prompt_lines(&request);
        assert_eq!(title, "Storage permission");
        assert!(lines
            .iter()
            .any(|l| l.contains("android.permission.READ_EXTERNAL_STORAGE")));
        assert!(lines
            .iter()
            .any(|l| l.contains("android.permission.WRITE_EXTERNAL_STORAGE")));
    }

    #[test]
    fn settings_prompt_names_package_on_app_page() {
        let request = AccessRequest::SystemSettings(SettingsTarget::AppAllFilesAccess {
            package: "org.example".to_owned(),
        });
        let (title, lines) = prompt_lines(&request);
        assert_eq!(title, "Settings");
        assert_eq!(lines[0], "All files access for org.example");
    }

    #[test]
    fn granted_app_draws_listing_and_path() {
        let (tmp, app) = app_at(34, PermissionState::Granted);
        let screen = draw(&app);
        assert!(screen.contains("Path:"));
        assert!(screen.contains(&*tmp.path().to_string_lossy()));
        assert!(screen.contains("/Music"));
        assert!(screen.contains("notes.txt"));
        assert!(screen.contains("1/2"));
    }

    #[test]
    fn rationale_dialog_is_drawn() {
        let (_tmp, app) = app_at(29, PermissionState::Denied);
        let screen = draw(&app);
        assert!(screen.contains(RATIONALE_TITLE));
        assert!(screen.contains("[Enter] Accept"));
    }

    #[test]
    fn limited_mode_shows_placeholder_and_indicator() {
        let (_tmp, app) = app_at(29, PermissionState::Denied);
        let app = app.choose_rationale(RationaleChoice::AcceptLimited);
        let screen = draw(&app);
        assert!(screen.contains("(no storage access)"));
        assert!(screen.contains("[LIMITED]"));
    }
}
