use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sdbrowse_core::{Command, RationaleChoice};

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Answer the emulated permission prompt (`true` = allow).
    AnswerPrompt(bool),
    /// Choose a button in the rationale dialog.
    Rationale(RationaleChoice),
    /// Quit the application.
    Quit,
    /// Key has no binding in the current mode.
    None,
}

/// Maps a key press to an action for the current mode.
pub fn handle_key(key: KeyEvent, mode: AppMode) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }

    match mode {
        AppMode::Normal => normal_key(key.code),
        AppMode::PermissionPrompt => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => InputAction::AnswerPrompt(true),
            KeyCode::Char('n') | KeyCode::Esc => InputAction::AnswerPrompt(false),
            KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        },
        AppMode::Rationale => match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('a') => {
                InputAction::Rationale(RationaleChoice::Retry)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('c') => {
                InputAction::Rationale(RationaleChoice::AcceptLimited)
            }
            KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        },
    }
}

fn normal_key(code: KeyCode) -> InputAction {
    let command = match code {
        KeyCode::Char('q') => return InputAction::Quit,
        KeyCode::Char('j') | KeyCode::Down => Command::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Command::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => Command::CursorTop,
        KeyCode::Char('G') | KeyCode::End => Command::CursorBottom,
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Command::Open,
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left | KeyCode::Esc => Command::Back,
        KeyCode::Char('r') => Command::Refresh,
        _ => return InputAction::None,
    };
    InputAction::Command(command)
}
