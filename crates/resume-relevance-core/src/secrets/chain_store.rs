//! Chained store with fallback behavior

use std::sync::Arc;

use super::traits::{SecretInfo, SecretStore};

/// A store that chains multiple stores together with fallback behavior
///
/// Lookups try each store in order and return the first non-empty value.
/// Stores reporting `is_available() == false` are skipped, so a keychain on a
/// headless host simply drops out of the chain.
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::{SecretStore, ChainSecretStore, EnvSecretStore, MemorySecretStore};
/// use std::sync::Arc;
///
/// let secrets = Arc::new(MemorySecretStore::from_pairs([("GOOGLE_API_KEY", "from-secrets")]));
/// let env = Arc::new(EnvSecretStore::new());
///
/// // Try secrets first, then fall back to env
/// let chain = ChainSecretStore::new(vec![secrets, env]);
/// assert_eq!(chain.get("GOOGLE_API_KEY"), Some("from-secrets".to_string()));
/// ```
#[derive(Clone)]
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
}

impl ChainSecretStore {
    /// Create a new chain store; stores are tried in order
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self { stores }
    }

    /// Get the stores in this chain
    pub fn stores(&self) -> &[Arc<dyn SecretStore>] {
        &self.stores
    }

    /// Find the first available store holding a key
    pub fn find_store(&self, key: &str) -> Option<&Arc<dyn SecretStore>> {
        self.stores
            .iter()
            .find(|store| store.is_available() && store.has(key))
    }

    /// Look up a key and report which store answered
    pub fn get_with_source(&self, key: &str) -> Option<(String, &Arc<dyn SecretStore>)> {
        for store in &self.stores {
            if !store.is_available() {
                continue;
            }
            if let Some(value) = store.get(key) {
                return Some((value, store));
            }
        }
        None
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        // Chain is available if any store is available
        self.stores.iter().any(|s| s.is_available())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.get_with_source(key).map(|(value, _)| value)
    }

    fn get_info(&self, key: &str) -> SecretInfo {
        match self.find_store(key) {
            Some(store) => SecretInfo::new(true, store.name()),
            None => SecretInfo::not_found(),
        }
    }
}

// Implement Debug manually since Arc<dyn SecretStore> doesn't implement Debug
impl std::fmt::Debug for ChainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stores.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSecretStore")
            .field("stores", &names)
            .finish()
    }
}
