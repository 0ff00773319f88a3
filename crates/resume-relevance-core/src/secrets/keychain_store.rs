//! System keychain store
//!
//! Uses the OS keychain for API keys:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{non_empty, SecretStore, SecretStoreError, SecretStoreResult};
use crate::logging::file_logger as log;

/// Default keychain service name
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "resume-relevance";

/// Read-only store backed by the system keychain
///
/// Entries are looked up as `<service>/<key>`, e.g.
/// `resume-relevance/GOOGLE_API_KEY`. Values are provisioned with the
/// platform's own tooling (`security`, `secret-tool`, ...).
///
/// # Example
///
/// ```no_run
/// use resume_relevance_core::secrets::{KeychainSecretStore, SecretStore};
///
/// let store = KeychainSecretStore::new();
/// if store.is_available() {
///     let key = store.get("GOOGLE_API_KEY");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct KeychainSecretStore {
    service_name: String,
}

impl KeychainSecretStore {
    /// Create a keychain store with the default service name
    pub fn new() -> Self {
        Self::with_service(DEFAULT_KEYCHAIN_SERVICE)
    }

    /// Create a keychain store with a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    /// Create a store only if the keychain answers
    pub fn connect(service: impl Into<String>) -> SecretStoreResult<Self> {
        let store = Self::with_service(service);
        if store.is_available() {
            Ok(store)
        } else {
            Err(SecretStoreError::NotAvailable(format!(
                "system keychain (service '{}')",
                store.service_name
            )))
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    fn entry(&self, key: &str) -> SecretStoreResult<Entry> {
        Entry::new(&self.service_name, key)
            .map_err(|e| SecretStoreError::Other(format!("Failed to create keychain entry: {}", e)))
    }
}

impl Default for KeychainSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore for KeychainSecretStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // Entry creation fails on headless servers without a keychain daemon
        match Entry::new(&self.service_name, "__availability_check__") {
            Ok(_) => true,
            Err(e) => {
                log::warn("KeychainSecretStore", &format!("keychain unavailable: {:?}", e));
                false
            }
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let entry = match self.entry(key) {
            Ok(entry) => entry,
            Err(e) => {
                log::error("KeychainSecretStore", &format!("get('{}'): {}", key, e));
                return None;
            }
        };
        match entry.get_password() {
            Ok(password) => {
                log::debug("KeychainSecretStore", &format!("get('{}') found, len={}", key, password.len()));
                non_empty(password)
            }
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                log::warn("KeychainSecretStore", &format!("get('{}') error: {:?}", key, e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let store = KeychainSecretStore::new();
        assert_eq!(store.name(), "keychain");
        assert_eq!(store.service_name(), DEFAULT_KEYCHAIN_SERVICE);
    }

    #[test]
    fn test_custom_service() {
        let store = KeychainSecretStore::with_service("rrc-test");
        assert_eq!(store.service_name(), "rrc-test");
    }

    #[test]
    #[ignore] // Requires system keychain
    fn test_get_missing_entry() {
        let store = KeychainSecretStore::connect("rrc-test").unwrap();
        assert_eq!(store.get("__definitely_not_stored__"), None);
    }
}
