//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, the selected entry, the storage tier, a
//! limited-mode indicator, and an optional status message.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sdbrowse_core::{parse_color, Entry, StorageTier, Theme};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: usize,
    pub selected_entry: Option<&'a Entry>,
    pub tier: StorageTier,
    pub api_level: u32,
    pub limited: bool,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let file_info = props
        .selected_entry
        .map(|e| {
            if e.is_dir() {
                format!("  [DIR] {}", e.name())
            } else {
                format!("  {}", e.name())
            }
        })
        .unwrap_or_default();

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position_label(props.entry_count, props.selected_index),
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(file_info, Style::default().fg(position_fg).bg(bg)),
        Span::styled(
            format!("  {}", tier_label(props.tier, props.api_level)),
            Style::default().fg(position_fg).bg(bg),
        ),
        limited_span(props.limited, theme),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn position_label(entry_count: usize, selected_index: usize) -> String {
    if entry_count > 0 {
        format!(" {}/{}", selected_index + 1, entry_count)
    } else {
        " 0/0".to_owned()
    }
}

fn tier_label(tier: StorageTier, api_level: u32) -> String {
    let name = match tier {
        StorageTier::Legacy => "legacy",
        StorageTier::Scoped => "scoped",
        StorageTier::AllFiles => "all-files",
    };
    format!("API {api_level} ({name})")
}

fn limited_span(limited: bool, theme: &Theme) -> Span<'static> {
    if !limited {
        return Span::raw("");
    }
    Span::styled(
        "  [LIMITED]",
        Style::default()
            .fg(parse_color(&theme.statusbar.limited_fg))
            .bg(parse_color(&theme.statusbar.bg))
            .add_modifier(Modifier::BOLD),
    )
}
