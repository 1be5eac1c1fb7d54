use crate::roster::{RosterActions, RosterState};
use crate::ui::components::panel_block;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn widget(state: &RosterState, focused: bool) -> Paragraph<'static> {
    let flag_color = if state.can_edit { STATUS_OK } else { STATUS_ERROR };
    let lines = vec![
        Line::from(vec![
            Span::styled("Can Edit: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(state.can_edit.to_string(), Style::default().fg(flag_color)),
        ]),
        Line::styled(
            "[t] Toggle",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ];
    Paragraph::new(lines).block(panel_block("Permissions", focused))
}

/// Returns true if the key was consumed.
pub fn on_key(actions: &mut impl RosterActions, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => {
            actions.toggle_edit();
            true
        }
        _ => false,
    }
}
