//! Terminal front end: state slices, the orchestrating `App`, rendering and
//! the event loop.

pub mod alert;
pub mod app;
pub mod card;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod modal;
pub mod mvi;
pub mod profile;
pub mod render;
mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
