//! sdbrowse — a storage browser built with ratatui.
//!
//! This binary initialises the terminal, runs the storage access check and
//! the main event loop, and restores the terminal on exit or panic.

mod app;
mod icons;
mod input;
mod platform;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sdbrowse_core::{Config, Theme};

use crate::app::App;
use crate::input::{handle_key, InputAction};
use crate::render::render;

const TICK: Duration = Duration::from_millis(100);

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Returns the config directory: `./config` if present, else `~/.config/sdbrowse`.
fn config_dir() -> PathBuf {
    let local = PathBuf::from("config");
    if local.exists() {
        return local;
    }
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("sdbrowse")
}

fn init_tracing() -> anyhow::Result<()> {
    // Logs go to a file so they don't interfere with the terminal.
    let log_path = std::env::temp_dir().join("sdbrowse.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn load_config(cfg_dir: &std::path::Path) -> (Config, Theme) {
    let config = Config::load(&cfg_dir.join("default.toml")).unwrap_or_else(|e| {
        tracing::warn!("using default config: {e}");
        Config::default()
    });
    let theme = Theme::load(&cfg_dir.join("theme.toml")).unwrap_or_else(|e| {
        tracing::warn!("using default theme: {e}");
        Theme::default()
    });
    (config, theme)
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let (config, theme) = load_config(&config_dir());

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.storage.root_or_default());
    let root = root.canonicalize().unwrap_or(root);
    tracing::info!(root = %root.display(), "starting");

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, App::new(root, &config, theme));

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    loop {
        app = app.poll_access();

        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != event::KeyEventKind::Press {
                continue;
            }
            app = match handle_key(key, app.mode()) {
                InputAction::Command(command) => app.with_clear_status().handle_command(command),
                InputAction::AnswerPrompt(allow) => app.answer_prompt(allow),
                InputAction::Rationale(choice) => app.choose_rationale(choice),
                InputAction::Quit => app.with_quit(),
                InputAction::None => app,
            };
        }
    }

    tracing::info!("exiting");
    Ok(())
}
