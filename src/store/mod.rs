//! Snapshot store primitives.
//!
//! This module provides the base traits and the container used to implement
//! unidirectional data flow between the state and the view layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, published behind an `Arc`
//! - **Intent**: A named action with its arguments
//! - **Reducer**: Pure function that computes the next snapshot
//! - **Store**: Owns the current snapshot and notifies subscribers

mod container;
mod intent;
mod reducer;
mod state;

pub use container::{Store, SubscriptionId};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
