//! Entry list rendering.
//!
//! Renders the current listing as a scrollable `List` widget: one row per
//! entry with a folder/file icon and the name.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use sdbrowse_core::{parse_color, Entry, Theme};

use crate::icons::icon_for_entry;

/// Renders the entry list. Directories are bold; the selection is reversed.
///
/// `empty_text` is shown in place of the list when there are no entries.
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    entries: &[Entry],
    selected: usize,
    theme: &Theme,
    show_icons: bool,
    empty_text: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(parse_color(&theme.panel.selected_fg)));

    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            empty_text.to_owned(),
            Style::default()
                .fg(parse_color(&theme.panel.empty_fg))
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, theme, show_icons)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(parse_color(&theme.panel.selected_fg)),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));

    f.render_stateful_widget(list, area, &mut state);
}

fn entry_line(entry: &Entry, theme: &Theme, show_icons: bool) -> Line<'static> {
    let display = format!("{}{}", icon_for_entry(entry, show_icons), entry.name());
    Line::from(Span::styled(display, entry_style(entry, theme)))
}

fn entry_style(entry: &Entry, theme: &Theme) -> Style {
    let fg = if entry.is_hidden() {
        &theme.panel.hidden_fg
    } else if entry.is_dir() {
        &theme.panel.dir_fg
    } else {
        &theme.panel.file_fg
    };
    let style = Style::default().fg(parse_color(fg));
    if entry.is_dir() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}
