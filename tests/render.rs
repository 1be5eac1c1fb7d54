mod common;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster::ui::app::App;
use roster::ui::input::handle_key;
use roster::RosterStore;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

#[test]
fn empty_roster_shows_placeholder() {
    let app = App::new(RosterStore::new(), true);
    let text = common::render_to_text(&app, 100, 24);
    assert!(text.contains("Count: 0"));
    assert!(text.contains("Can Edit: true"));
    assert!(text.contains("No users added yet"));
    assert!(text.contains("\"canEdit\": true"));
}

#[test]
fn debug_panel_can_be_hidden() {
    let app = App::new(RosterStore::new(), false);
    let text = common::render_to_text(&app, 100, 24);
    assert!(!text.contains("canEdit"));
}

#[test]
fn keyboard_session_edits_roster() {
    let mut app = App::new(RosterStore::new(), true);

    handle_key(&mut app, press(KeyCode::Char('a')));
    handle_key(&mut app, press(KeyCode::Tab));
    for ch in "alice".chars() {
        handle_key(&mut app, press(KeyCode::Char(ch)));
    }
    handle_key(&mut app, press(KeyCode::Esc));
    handle_key(&mut app, press(KeyCode::Char('t')));
    handle_key(&mut app, press(KeyCode::Char('a')));

    let state = app.state();
    assert_eq!(state.users, vec!["alice".to_string(), String::new()]);
    assert!(!state.can_edit);

    let text = common::render_to_text(&app, 100, 24);
    assert!(text.contains("Count: 2"));
    assert!(text.contains("Can Edit: false"));
    assert!(text.contains("1. alice"));
    assert!(text.contains("Users (read-only)"));
}

#[test]
fn read_only_list_ignores_typing() {
    let mut app = App::new(common::store_with(&["bob"]), false);
    handle_key(&mut app, press(KeyCode::Char('t')));
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Char('x')));
    assert_eq!(app.state().users, vec!["bob".to_string()]);
}

#[test]
fn q_quits_only_from_controls() {
    let mut app = App::new(common::store_with(&[""]), false);
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.state().users, vec!["q".to_string()]);

    handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn esc_in_controls_does_not_quit() {
    let mut app = App::new(common::store_with(&["al"]), false);
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.should_quit());

    // Esc from the list only returns focus to the controls.
    handle_key(&mut app, press(KeyCode::Tab));
    handle_key(&mut app, press(KeyCode::Esc));
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.should_quit());
    assert_eq!(app.state().users, vec!["al".to_string()]);
}
