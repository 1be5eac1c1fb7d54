//! Panels that render roster snapshots.
//!
//! Each panel renders from a `&RosterState` snapshot. Panels that change the
//! roster take a `&mut impl RosterActions` from the caller.

pub mod can_edit;
pub mod debug;
pub mod user_count;
pub mod users;

use crate::ui::theme::{ACCENT, FOCUS_BORDER, GLOBAL_BORDER};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

pub(crate) fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}
