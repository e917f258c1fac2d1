//! Client side of the remote profile service (`GET /user`, `PUT /user/edit`).

mod client;
mod error;

pub use client::ProfileClient;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE, SERVER_ERROR_MESSAGE};
