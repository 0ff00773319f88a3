//! Environment variable store

use std::env;

use super::traits::{non_empty, SecretStore};

/// Store that reads process environment variables by their exact name
///
/// This store is read-only. Variables set to the empty string are reported
/// as absent, so an exported-but-empty `GOOGLE_API_KEY` falls through to the
/// next source in a chain.
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// let debug = store.get("DEBUG_MODE");
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (), // Prevent direct construction, use new()
}

impl EnvSecretStore {
    /// Create a new environment variable store
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().and_then(non_empty)
    }
}
