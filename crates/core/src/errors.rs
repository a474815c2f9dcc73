//! Core error types for the conversion view.
//!
//! Input problems (bad amount, missing rate) are not errors of the view
//! itself; they live in [`crate::conversion`] and end up as view state.
//! This type covers misuse of the view lifecycle and bad settings.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Rate view was already activated")]
    AlreadyActivated,

    #[error("Rate view has been torn down")]
    TornDown,

    #[error("No async runtime available: {0}")]
    Runtime(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
