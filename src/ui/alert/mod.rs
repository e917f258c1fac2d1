//! Transient notification (toast) slot.
//!
//! - `state.rs` - The single notification and its deadline
//! - `intent.rs` - Show / Hide / Dismiss / Expire
//! - `reducer.rs` - Transitions
//! - `toast.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod toast;

pub use intent::{AlertIntent, DismissReason};
pub use reducer::AlertReducer;
pub use state::{AlertNotification, AlertState, Severity, ALERT_DURATION};
pub use toast::{render_toast, toast_rect};
