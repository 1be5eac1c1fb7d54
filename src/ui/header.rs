use crate::roster::RosterState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &RosterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (mode, status_style) = if state.can_edit {
            ("editing", Style::default().fg(STATUS_OK))
        } else {
            ("read-only", Style::default().fg(STATUS_ERROR))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", status_style),
            Span::styled("  ", text_style),
            Span::styled("Roster", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} users", state.user_count()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
