//! Base trait for store state.

/// Marker trait for snapshot types.
///
/// States should be:
/// - Immutable once published (Clone to create a draft)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {
    /// Short description logged after each transition.
    fn summary(&self) -> String {
        String::new()
    }
}
