//! Core traits and types for secret lookup

use std::path::PathBuf;

use thiserror::Error;

/// Information about a key held by a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretInfo {
    /// Whether the key has a non-empty value
    pub available: bool,
    /// Which store provided the value (useful for chain stores)
    pub source: String,
}

impl SecretInfo {
    pub fn new(available: bool, source: impl Into<String>) -> Self {
        Self {
            available,
            source: source.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            available: false,
            source: "none".to_string(),
        }
    }
}

/// Errors raised while bringing a secret store up
///
/// Lookups themselves never fail; a store that cannot answer reports the
/// key as absent.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("Failed to read secrets file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse secrets file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Store error: {0}")]
    Other(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// A "get value by key, or absent" source of configuration values
///
/// Implementations:
/// - Environment variables (`EnvSecretStore`)
/// - In-memory, for tests and injected environments (`MemorySecretStore`)
/// - A TOML secrets file (`FileSecretStore`)
/// - The OS keychain (`KeychainSecretStore`)
/// - Chained for fallback behavior (`ChainSecretStore`)
///
/// Empty values are reported as absent by every built-in store.
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// // store.get("GOOGLE_API_KEY") reads the GOOGLE_API_KEY variable
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store can answer lookups right now
    ///
    /// A keychain store, for example, is not available on a headless server.
    fn is_available(&self) -> bool {
        true
    }

    /// Retrieve a value by key
    fn get(&self, key: &str) -> Option<String>;

    /// Check if a value exists
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get information about a key
    fn get_info(&self, key: &str) -> SecretInfo {
        if self.has(key) {
            SecretInfo::new(true, self.name())
        } else {
            SecretInfo::not_found()
        }
    }
}

/// Treat empty strings as absent
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
