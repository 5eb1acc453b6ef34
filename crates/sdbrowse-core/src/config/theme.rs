//! Theme configuration.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub path_label: PathLabelTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Entry list colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelTheme {
    pub dir_fg: String,
    pub file_fg: String,
    pub hidden_fg: String,
    pub selected_fg: String,
    pub empty_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            file_fg: "reset".to_string(),
            hidden_fg: "dark_gray".to_string(),
            selected_fg: "yellow".to_string(),
            empty_fg: "dark_gray".to_string(),
        }
    }
}

/// Current-path header colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathLabelTheme {
    pub bg: String,
    pub label_fg: String,
    pub path_fg: String,
}

impl Default for PathLabelTheme {
    fn default() -> Self {
        Self {
            bg: "dark_gray".to_string(),
            label_fg: "cyan".to_string(),
            path_fg: "white".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub message_fg: String,
    pub limited_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            position_fg: "black".to_string(),
            message_fg: "magenta".to_string(),
            limited_fg: "red".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
    pub prompt_border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
            prompt_border_fg: "green".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> Color {
    let lower = s.to_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color::Reset);
    }

    match lower.replace('_', "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
