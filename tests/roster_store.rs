mod common;

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;

use roster::{RosterActions, RosterState, RosterStore};

fn snapshot(users: &[&str], can_edit: bool) -> RosterState {
    RosterState {
        users: users.iter().map(|u| u.to_string()).collect(),
        can_edit,
    }
}

#[test]
fn initial_state_is_empty_and_editable() {
    let store = RosterStore::new();
    assert_eq!(*store.state(), snapshot(&[], true));
}

#[test]
fn add_user_keeps_existing_entries() {
    let mut store = common::store_with(&["a", "b"]);
    store.add_user();
    assert_eq!(*store.state(), snapshot(&["a", "b", ""], true));
}

#[test]
fn update_username_is_point_local() {
    let mut store = common::store_with(&["a", "b", "c"]);
    store.toggle_edit();
    store.update_username(2, "carol".to_string());
    assert_eq!(*store.state(), snapshot(&["a", "b", "carol"], false));
}

#[test]
fn old_snapshots_are_never_mutated() {
    let mut store = RosterStore::new();
    let initial = store.state();

    store.add_user();
    let after_add = store.state();
    store.update_username(0, "alice".to_string());
    store.toggle_edit();

    assert_eq!(*initial, snapshot(&[], true));
    assert_eq!(*after_add, snapshot(&[""], true));
    assert_eq!(*store.state(), snapshot(&["alice"], false));
    assert!(!Arc::ptr_eq(&initial, &store.state()));
}

#[test]
fn every_action_publishes_one_snapshot() {
    let mut store = RosterStore::new();
    store.add_user();
    store.toggle_edit();
    store.update_username(0, "x".to_string());
    assert_eq!(store.version(), 3);
}

#[test]
fn out_of_range_update_panics_and_keeps_state() {
    let mut store = common::store_with(&["alice"]);
    let before = store.state();
    let version = store.version();

    let result = catch_unwind(AssertUnwindSafe(|| {
        store.update_username(1, "bob".to_string());
    }));

    assert!(result.is_err());
    assert!(Arc::ptr_eq(&before, &store.state()));
    assert_eq!(store.version(), version);
}

#[test]
fn subscribers_see_each_new_snapshot() {
    let mut store = RosterStore::new();
    let seen: Rc<RefCell<Vec<RosterState>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |state| sink.borrow_mut().push(RosterState::clone(state)));

    store.add_user();
    store.toggle_edit();

    assert_eq!(
        *seen.borrow(),
        vec![snapshot(&[""], true), snapshot(&[""], false)]
    );
}

#[test]
fn works_through_the_actions_trait() {
    fn fill(actions: &mut dyn RosterActions) {
        actions.add_user();
        let index = actions.state().users.len() - 1;
        actions.update_username(index, "dyn".to_string());
    }

    let mut store = RosterStore::new();
    fill(&mut store);
    assert_eq!(*store.state(), snapshot(&["dyn"], true));
}

#[test]
fn end_to_end_scenario() {
    let mut store = RosterStore::new();

    store.add_user();
    assert_eq!(*store.state(), snapshot(&[""], true));

    store.update_username(0, "alice".to_string());
    assert_eq!(*store.state(), snapshot(&["alice"], true));

    store.toggle_edit();
    assert_eq!(*store.state(), snapshot(&["alice"], false));

    store.add_user();
    assert_eq!(*store.state(), snapshot(&["alice", ""], false));
}
