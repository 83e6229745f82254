//! Error type for storage, configuration, and browser access failures.
//!
//! These errors stop at the adapter boundary: `PreferenceService` logs them
//! and falls back to defaults so the page never shows a failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefsError {
    /// The origin has no usable key-value storage (disabled, sandboxed).
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Reading a key from storage failed.
    #[error("storage read failed for key {key}: {message}")]
    StorageRead { key: String, message: String },

    /// Writing a key to storage failed (quota, private mode).
    #[error("storage write failed for key {key}: {message}")]
    StorageWrite { key: String, message: String },

    /// A page configuration document could not be used.
    #[error("config parse failed: {0}")]
    Config(String),

    /// A browser object the bindings rely on is missing.
    #[error("browser object missing: {0}")]
    MissingBrowserObject(&'static str),
}

impl PrefsError {
    /// Stable machine-readable code for logs and the JS surface.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StorageUnavailable(_) => "E_STORAGE_UNAVAILABLE",
            Self::StorageRead { .. } => "E_STORAGE_READ",
            Self::StorageWrite { .. } => "E_STORAGE_WRITE",
            Self::Config(_) => "E_CONFIG",
            Self::MissingBrowserObject(_) => "E_MISSING_BROWSER_OBJECT",
        }
    }
}
