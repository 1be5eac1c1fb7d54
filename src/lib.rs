//! A terminal editor for a list of user names, built around an immutable
//! snapshot store.

pub mod config;
pub mod logging;
pub mod roster;
pub mod shutdown;
pub mod store;
pub mod ui;

pub use roster::{RosterActions, RosterIntent, RosterState, RosterStore};
