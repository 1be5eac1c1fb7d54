//! The roster store: a list of user names plus an edit-permission flag.

mod actions;
mod intent;
mod reducer;
mod state;

pub use actions::{RosterActions, RosterStore};
pub use intent::RosterIntent;
pub use reducer::RosterReducer;
pub use state::RosterState;
