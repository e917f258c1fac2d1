//! Edit modal lifecycle.
//!
//! - `state.rs` - Closed / Open (with slide-in frames)
//! - `intent.rs` - Open / Close / BackdropClick / AnimationTick
//! - `reducer.rs` - Transitions
//! - `dialog.rs` - Rendering of the modal and its form

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{modal_rect, render_edit_modal};
pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::{ModalState, SLIDE_FRAMES};
