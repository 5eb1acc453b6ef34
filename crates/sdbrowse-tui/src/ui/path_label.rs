use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sdbrowse_core::{nfc_string, parse_color, Theme};

/// Renders the one-line "Path: /absolute/path" header.
pub fn render_path_label(f: &mut Frame, area: Rect, current_dir: &Path, theme: &Theme) {
    let bg = parse_color(&theme.path_label.bg);
    let line = path_line(current_dir, theme);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn path_line(current_dir: &Path, theme: &Theme) -> Line<'static> {
    let label_fg = parse_color(&theme.path_label.label_fg);
    let path_fg = parse_color(&theme.path_label.path_fg);

    Line::from(vec![
        Span::styled(
            " Path: ",
            Style::default().fg(label_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            nfc_string(&current_dir.to_string_lossy()),
            Style::default().fg(path_fg),
        ),
    ])
}
