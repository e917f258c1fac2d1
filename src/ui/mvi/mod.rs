//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of mutable view state (profile, alert, modal, form) is an
//! owned slice with its own reducer, so each can be tested without a
//! terminal.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
