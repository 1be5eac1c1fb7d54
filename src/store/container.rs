//! Snapshot container that applies reducers and notifies subscribers.

use std::fmt;
use std::sync::Arc;

use super::intent::Intent;
use super::reducer::Reducer;
use super::state::State;

type Subscriber<S> = Box<dyn FnMut(&Arc<S>)>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the current snapshot of `R::State`.
///
/// The only way to change the state is [`Store::dispatch`]. Each dispatch
/// clones the current snapshot into a draft, runs the reducer on it and
/// publishes the result as a new `Arc`. Snapshots handed out by
/// [`Store::state`] are never touched again.
pub struct Store<R: Reducer> {
    current: Arc<R::State>,
    version: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
    next_subscription: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self {
            current: Arc::new(R::State::default()),
            version: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.current)
    }

    /// Number of transitions published since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply `intent` and publish the next snapshot.
    ///
    /// If the reducer panics, the panic propagates to the caller and the
    /// previous snapshot stays current.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let name = intent.name();
        tracing::debug!(action = name, intent = ?intent, "dispatch");
        let draft = <R::State as Clone>::clone(&self.current);
        let next = Arc::new(R::reduce(draft, intent));

        self.current = next;
        self.version += 1;
        tracing::debug!(
            action = name,
            version = self.version,
            state = %self.current.summary(),
            "state transition"
        );

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.current);
        }
    }

    /// Register a callback invoked with every newly published snapshot.
    ///
    /// Subscribers run in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<R::State>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("current", &self.current)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
