//! Reducer trait.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// `state` is a private draft owned by the caller; the reducer may
    /// modify it freely before returning it.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
