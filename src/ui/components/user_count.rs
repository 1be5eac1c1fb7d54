use crate::roster::{RosterActions, RosterState};
use crate::ui::components::panel_block;
use crate::ui::theme::HEADER_TEXT;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub fn widget(state: &RosterState, focused: bool) -> Paragraph<'static> {
    let lines = vec![
        Line::styled(
            format!("Count: {}", state.user_count()),
            Style::default().fg(HEADER_TEXT),
        ),
        Line::styled(
            "[a] Add user",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ),
    ];
    Paragraph::new(lines).block(panel_block("Users", focused))
}

/// Returns true if the key was consumed.
pub fn on_key(actions: &mut impl RosterActions, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            actions.add_user();
            true
        }
        _ => false,
    }
}
