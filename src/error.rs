//! Error types for storage, configuration, and browser installation.
//!
//! Storage errors never escape the theme manager; they exist so store
//! implementations can say what went wrong before the manager drops it.

/// Failure talking to the persisted preference store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is missing or refused access (private mode, disabled storage).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Storage exists but rejected the operation (quota exceeded).
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Invalid or unparsable UI configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Browser installation failure.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no window available")]
    MissingWindow,
    #[error("no document available")]
    MissingDocument,
    #[error("document has no root element")]
    MissingRoot,
    #[error("dom operation failed: {0}")]
    Dom(String),
}
