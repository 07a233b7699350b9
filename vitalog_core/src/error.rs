//! Error types for the vitalog_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vitalog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Key-value store error
    #[error("Store error: {0}")]
    Store(String),

    /// Authentication error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the authentication collaborator.
///
/// These surface to the caller as user-visible messages and are never
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("registration failed")]
    RegistrationFailed,

    #[error("failed to update preferences")]
    PreferencesUpdateFailed,
}
