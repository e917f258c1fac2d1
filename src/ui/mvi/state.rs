//! Marker trait for UI state slices.

/// A slice of view state. `Default` is the state before anything happened.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
