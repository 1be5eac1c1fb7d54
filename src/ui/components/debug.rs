use crate::roster::RosterState;
use crate::ui::components::panel_block;
use crate::ui::theme::HEADER_SEPARATOR;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

pub fn widget(state: &RosterState) -> Paragraph<'static> {
    let dump = match state.to_debug_json() {
        Ok(json) => json,
        Err(err) => format!("<state not serializable: {err}>"),
    };
    Paragraph::new(dump)
        .style(Style::default().fg(HEADER_SEPARATOR))
        .block(panel_block("Debug", false))
}
