//! In-memory store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::SecretStore;

/// In-memory store for tests and injected environments
///
/// `Config::load` takes its environment as a `SecretStore`, so a
/// `MemorySecretStore` stands in for the process environment wherever a
/// test needs a hermetic set of variables.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.insert("GOOGLE_API_KEY", "AIza-test");
/// assert_eq!(store.get("GOOGLE_API_KEY"), Some("AIza-test".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    name: Option<String>,
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            name: None,
            secrets: RwLock::new(initial),
        }
    }

    /// Build a store from key/value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let initial = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::with_secrets(initial)
    }

    /// Report a different store name (e.g. "env" when standing in for the environment)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Insert or replace a value
    pub fn insert(&self, key: &str, value: &str) {
        self.secrets.write().insert(key.to_string(), value.to_string());
    }

    /// Remove a value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.secrets.write().remove(key)
    }

    /// Clear all values from the store
    pub fn clear(&self) {
        self.secrets.write().clear();
    }

    /// Get the number of values in the store
    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("memory")
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .read()
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

impl Clone for MemorySecretStore {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            secrets: RwLock::new(self.secrets.read().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_name() {
        let store = MemorySecretStore::new();
        assert_eq!(store.name(), "memory");

        let env = MemorySecretStore::new().named("env");
        assert_eq!(env.name(), "env");
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySecretStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("test"), None);

        store.insert("test", "value");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("test"), Some("value".to_string()));
        assert!(store.has("test"));

        store.insert("test", "new_value");
        assert_eq!(store.get("test"), Some("new_value".to_string()));

        assert_eq!(store.remove("test"), Some("new_value".to_string()));
        assert_eq!(store.get("test"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_empty_value_is_absent() {
        let store = MemorySecretStore::from_pairs([("GOOGLE_API_KEY", "")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("GOOGLE_API_KEY"), None);
        assert!(!store.get_info("GOOGLE_API_KEY").available);
    }

    #[test]
    fn test_memory_store_from_pairs() {
        let store = MemorySecretStore::from_pairs([("key1", "value1"), ("key2", "value2")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_memory_store_clear() {
        let store = MemorySecretStore::new();
        store.insert("key1", "value1");
        store.insert("key2", "value2");

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_memory_store_clone() {
        let store = MemorySecretStore::new();
        store.insert("key", "value");

        let cloned = store.clone();
        assert_eq!(cloned.get("key"), Some("value".to_string()));

        // Modifying clone doesn't affect original
        cloned.insert("key", "modified");
        assert_eq!(store.get("key"), Some("value".to_string()));
        assert_eq!(cloned.get("key"), Some("modified".to_string()));
    }

    #[test]
    fn test_memory_store_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemorySecretStore::new());
        let mut handles = vec![];

        for i in 0..10 {
            let store_clone = Arc::clone(&store);
            let handle = thread::spawn(move || {
                let key = format!("key_{}", i);
                let value = format!("value_{}", i);
                store_clone.insert(&key, &value);
                assert_eq!(store_clone.get(&key), Some(value));
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 10);
    }
}
