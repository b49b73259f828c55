use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in linkseal.
#[derive(Debug, Error)]
pub enum LinkSealError {
    // --- Crypto errors ---
    #[error("Cryptographic primitives unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// Deliberately carries no detail: a wrong password, a tampered blob
    /// and malformed base64 all look the same to the caller.
    #[error("Incorrect password")]
    DecryptionFailed,

    // --- Link manifest errors ---
    #[error("Link '{0}' not found")]
    LinkNotFound(String),

    #[error("Link '{0}' already exists (use --force to replace it)")]
    LinkAlreadyExists(String),

    #[error("Invalid link name '{0}': only lowercase letters, digits, '-' and '_' are allowed")]
    InvalidLinkName(String),

    #[error("Link manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Could not launch browser '{0}': {1}")]
    OpenerFailed(String, String),
}

/// Convenience type alias for linkseal results.
pub type Result<T> = std::result::Result<T, LinkSealError>;
