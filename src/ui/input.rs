use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Controls => {
            if key.code == KeyCode::Char('q') {
                app.request_quit();
                return;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            if !app.on_controls_key(key) {
                tracing::trace!(code = ?key.code, "unbound key");
            }
        }
        Focus::Users => {
            if matches!(key.code, KeyCode::Esc) {
                app.focus_controls();
                return;
            }
            app.on_users_key(key);
        }
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
