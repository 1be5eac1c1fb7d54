use crate::roster::{RosterActions, RosterState};
use crate::ui::components::panel_block;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const EMPTY_MESSAGE: &str = "No users added yet";

pub fn widget(
    state: &RosterState,
    selected: usize,
    focused: bool,
    area: Rect,
) -> Paragraph<'static> {
    let title = if state.can_edit {
        "Users"
    } else {
        "Users (read-only)"
    };
    let block = panel_block(title, focused);

    if state.users.is_empty() {
        let line = Line::styled(
            EMPTY_MESSAGE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        );
        return Paragraph::new(line).block(block);
    }

    let mut row_style = Style::default().fg(HEADER_TEXT);
    if !state.can_edit {
        row_style = row_style.add_modifier(Modifier::DIM);
    }

    let visible = usize::from(inner_height(area).max(1));
    let offset = scroll_offset(selected, inner_height(area));
    let lines: Vec<Line> = state
        .users
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, name)| {
            let line = Line::from(vec![
                Span::styled(row_prefix(idx), row_style),
                Span::styled(name.clone(), row_style),
            ]);
            if focused && idx == selected {
                line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                line
            }
        })
        .collect();

    Paragraph::new(lines).block(block)
}

/// Terminal cursor position at the end of the selected name, if editable.
pub fn cursor_position(state: &RosterState, selected: usize, area: Rect) -> Option<(u16, u16)> {
    if !state.can_edit || area.width < 3 || area.height < 3 {
        return None;
    }
    let name = state.users.get(selected)?;
    let row = selected - scroll_offset(selected, inner_height(area));
    let row = u16::try_from(row).ok()?;
    let max_x = area.x + area.width - 2;
    // Display width, not char count: wide glyphs take two cells.
    let text_width = row_prefix(selected).len() + Span::raw(name.as_str()).width();
    let x = (area.x + 1).saturating_add(u16::try_from(text_width).unwrap_or(u16::MAX));
    Some((x.min(max_x), area.y + 1 + row))
}

/// Handle a key while the list has focus. Returns true if the key was consumed.
///
/// Indices passed to `update_username` always come from the snapshot read here.
pub fn on_key(actions: &mut impl RosterActions, selected: &mut usize, key: KeyEvent) -> bool {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    let state = actions.state();
    let len = state.users.len();
    match key.code {
        KeyCode::Up => {
            *selected = selected.saturating_sub(1);
            true
        }
        KeyCode::Down => {
            if *selected + 1 < len {
                *selected += 1;
            }
            true
        }
        KeyCode::Backspace => edit_selected(actions, &state, *selected, |name| {
            name.pop();
        }),
        KeyCode::Char(ch) => edit_selected(actions, &state, *selected, |name| name.push(ch)),
        _ => false,
    }
}

fn edit_selected(
    actions: &mut impl RosterActions,
    state: &RosterState,
    index: usize,
    edit: impl FnOnce(&mut String),
) -> bool {
    if !state.can_edit {
        return false;
    }
    let Some(current) = state.users.get(index) else {
        return false;
    };

    let mut value = current.clone();
    edit(&mut value);
    if value != *current {
        actions.update_username(index, value);
    }
    true
}

/// One-based row number, right-aligned to three columns.
fn row_prefix(idx: usize) -> String {
    format!("{:>3}. ", idx + 1)
}

fn inner_height(area: Rect) -> u16 {
    area.height.saturating_sub(2)
}

/// First visible row that keeps `selected` on screen.
fn scroll_offset(selected: usize, visible_rows: u16) -> usize {
    let visible = usize::from(visible_rows.max(1));
    selected.saturating_sub(visible - 1)
}
