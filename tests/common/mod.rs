//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use roster::ui::app::App;
use roster::ui::render::draw;
use roster::{RosterActions, RosterStore};

/// Build a store holding `names` in order.
pub fn store_with(names: &[&str]) -> RosterStore {
    let mut store = RosterStore::new();
    for (idx, name) in names.iter().enumerate() {
        store.add_user();
        store.update_username(idx, name.to_string());
    }
    store
}

/// Render one frame of `app` and return the buffer as text, one line per row.
pub fn render_to_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
