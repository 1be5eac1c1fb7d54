use crate::ui::app::{App, Focus};
use crate::ui::components::{can_edit, debug, user_count, users};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panels, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let state = app.state();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(&state), header);
    frame.render_widget(Clear, body);

    let panels = body_panels(body, app.show_debug());
    let controls_focused = app.focus() == Focus::Controls;
    frame.render_widget(
        user_count::widget(&state, controls_focused),
        panels.user_count,
    );
    frame.render_widget(can_edit::widget(&state, controls_focused), panels.can_edit);

    let users_focused = app.focus() == Focus::Users;
    let selected = app.selected();
    frame.render_widget(
        users::widget(&state, selected, users_focused, panels.users),
        panels.users,
    );
    if users_focused {
        if let Some(position) = users::cursor_position(&state, selected, panels.users) {
            frame.set_cursor_position(position);
        }
    }

    if let Some(debug_area) = panels.debug {
        frame.render_widget(debug::widget(&state), debug_area);
    }

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);
}
