use crate::roster::intent::RosterIntent;
use crate::roster::state::RosterState;
use crate::store::Reducer;

pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::AddUser => {
                state.users.push(String::new());
            }
            RosterIntent::ToggleEdit => {
                state.can_edit = !state.can_edit;
            }
            RosterIntent::UpdateUsername { index, value } => {
                let len = state.users.len();
                match state.users.get_mut(index) {
                    Some(slot) => *slot = value,
                    // Callers must take indices from the current snapshot.
                    None => {
                        panic!("update_username: index {index} out of range for {len} users")
                    }
                }
            }
        }
        state
    }
}
