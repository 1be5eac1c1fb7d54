use crate::roster::{RosterState, RosterStore};
use crate::ui::components::{can_edit, user_count, users};
use crossterm::event::KeyEvent;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Count and can-edit panels.
    Controls,
    /// The editable user list.
    Users,
}

/// View-side state plus the roster store it was handed.
pub struct App {
    store: RosterStore,
    focus: Focus,
    selected: usize,
    show_debug: bool,
    should_quit: bool,
    /// Set by the store subscription and by view-local changes.
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut store: RosterStore, show_debug: bool) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));
        Self {
            store,
            focus: Focus::Controls,
            selected: 0,
            show_debug,
            should_quit: false,
            needs_redraw,
        }
    }

    /// Snapshot to render.
    pub fn state(&self) -> Arc<RosterState> {
        self.store.state()
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row, clamped to the current snapshot.
    pub fn selected(&self) -> usize {
        let len = self.store.state().user_count();
        self.selected.min(len.saturating_sub(1))
    }

    pub fn show_debug(&self) -> bool {
        self.show_debug
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Controls => Focus::Users,
            Focus::Users => Focus::Controls,
        };
        self.selected = self.selected();
        self.mark_dirty();
    }

    pub fn focus_controls(&mut self) {
        if self.focus != Focus::Controls {
            self.focus = Focus::Controls;
            self.mark_dirty();
        }
    }

    /// Route a key to the count and can-edit panels.
    pub fn on_controls_key(&mut self, key: KeyEvent) -> bool {
        user_count::on_key(&mut self.store, key) || can_edit::on_key(&mut self.store, key)
    }

    /// Route a key to the user list.
    pub fn on_users_key(&mut self, key: KeyEvent) -> bool {
        let mut selected = self.selected();
        let handled = users::on_key(&mut self.store, &mut selected, key);
        if selected != self.selected {
            self.selected = selected;
            self.mark_dirty();
        }
        handled
    }

    pub fn mark_dirty(&self) {
        self.needs_redraw.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }
}
