//! Configuration loading.
//!
//! The profile service URL is the only value without a default. It can come
//! from the TOML file, the `PASSCARD_API_URL` environment variable or the
//! `--api-url` flag, in increasing order of precedence.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, UiConfig};
