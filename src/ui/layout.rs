use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the count / can-edit row, borders included.
const CONTROLS_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Areas of the four body panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPanels {
    pub user_count: Rect,
    pub can_edit: Rect,
    pub users: Rect,
    pub debug: Option<Rect>,
}

pub fn body_panels(body: Rect, show_debug: bool) -> BodyPanels {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CONTROLS_HEIGHT), Constraint::Min(0)])
        .split(body);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let (users, debug) = if show_debug {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        (columns[0], Some(columns[1]))
    } else {
        (rows[1], None)
    };

    BodyPanels {
        user_count: controls[0],
        can_edit: controls[1],
        users,
        debug,
    }
}
