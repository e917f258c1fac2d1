//! Edit form: draft accumulation, image selection and expiry computation.
//!
//! Image validation itself lives on `CandidateImage` (see `crate::model`);
//! this slice only ever receives images that already passed it.

pub mod expiry;
mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormState};
