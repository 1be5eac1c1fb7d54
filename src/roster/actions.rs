use std::sync::Arc;

use crate::roster::intent::RosterIntent;
use crate::roster::reducer::RosterReducer;
use crate::roster::state::RosterState;
use crate::store::Store;

pub type RosterStore = Store<RosterReducer>;

/// The operations view components may invoke on the roster.
///
/// Components receive an implementation explicitly instead of looking the
/// store up from ambient context.
pub trait RosterActions {
    /// Current snapshot.
    fn state(&self) -> Arc<RosterState>;

    fn add_user(&mut self);

    fn toggle_edit(&mut self);

    /// Set `users[index] = value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position in the current snapshot.
    fn update_username(&mut self, index: usize, value: String);
}

impl RosterActions for RosterStore {
    fn state(&self) -> Arc<RosterState> {
        Store::state(self)
    }

    fn add_user(&mut self) {
        self.dispatch(RosterIntent::AddUser);
    }

    fn toggle_edit(&mut self) {
        self.dispatch(RosterIntent::ToggleEdit);
    }

    fn update_username(&mut self, index: usize, value: String) {
        self.dispatch(RosterIntent::UpdateUsername { index, value });
    }
}
