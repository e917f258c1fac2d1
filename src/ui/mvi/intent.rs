//! Marker trait for intents.

/// An input to a reducer: a key press, a mouse click, an API completion or
/// a timer tick. Time-dependent intents carry the instant they refer to so
/// reducers stay pure.
pub trait Intent: Send + 'static {}
