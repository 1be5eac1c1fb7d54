//! Base trait for intents (actions) dispatched to a store.

use std::fmt::Debug;

/// An action that can be dispatched to a [`Store`](super::Store).
///
/// Intents carry everything the reducer needs to compute the next
/// snapshot. They are `Debug` so every transition can be traced.
pub trait Intent: Debug + Send + 'static {
    /// Stable action name for logging and filtering.
    fn name(&self) -> &'static str;
}
