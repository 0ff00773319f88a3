//! Secret store registry for discovering and creating stores by name

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::env_store::EnvSecretStore;
use super::file_store::{FileSecretStore, DEFAULT_SECRETS_FILE};
use super::keychain_store::{KeychainSecretStore, DEFAULT_KEYCHAIN_SERVICE};
use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Factory function type for creating secret stores
///
/// The argument is the project root, used by stores that read files.
/// Factories may fail; callers decide whether a failure is fatal.
pub type StoreFactory =
    Box<dyn Fn(&Path) -> SecretStoreResult<Arc<dyn SecretStore>> + Send + Sync>;

/// Definition of a registered secret store
pub struct StoreDefinition {
    /// Unique name for this store
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: StoreFactory,
}

impl std::fmt::Debug for StoreDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn definition(name: &str, description: &str, factory: StoreFactory) -> (String, StoreDefinition) {
    (
        name.to_string(),
        StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of secret stores
static REGISTRY: Lazy<RwLock<HashMap<String, StoreDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        definition(
            "env",
            "Read values from environment variables",
            Box::new(|_: &Path| Ok(Arc::new(EnvSecretStore::new()) as Arc<dyn SecretStore>)),
        ),
        definition(
            "file",
            "TOML secrets file (.streamlit/secrets.toml under the project root)",
            Box::new(|root: &Path| {
                let store = FileSecretStore::open(root.join(DEFAULT_SECRETS_FILE))?;
                Ok(Arc::new(store) as Arc<dyn SecretStore>)
            }),
        ),
        definition(
            "keychain",
            "System keychain (macOS Keychain, Windows Credential Manager, Linux Secret Service)",
            Box::new(|_: &Path| {
                let store = KeychainSecretStore::connect(DEFAULT_KEYCHAIN_SERVICE)?;
                Ok(Arc::new(store) as Arc<dyn SecretStore>)
            }),
        ),
    ]);
    RwLock::new(map)
});

/// Register a new secret store type
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::{register_secret_store, MemorySecretStore, SecretStore};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// register_secret_store(
///     "vault",
///     "Secrets fetched from Vault at startup",
///     Box::new(|_: &Path| Ok(Arc::new(MemorySecretStore::new()) as Arc<dyn SecretStore>)),
/// );
/// ```
pub fn register_secret_store(name: &str, description: &str, factory: StoreFactory) {
    let (key, def) = definition(name, description, factory);
    REGISTRY.write().insert(key, def);
}

/// Create a secret store by name
///
/// Returns `SecretStoreError::NotAvailable` for unknown names, and the
/// factory's own error when the store fails to initialize.
///
/// # Example
///
/// ```
/// use resume_relevance_core::secrets::create_secret_store;
///
/// let store = create_secret_store("env", std::path::Path::new(".")).expect("env store should exist");
/// ```
pub fn create_secret_store(name: &str, root: &Path) -> SecretStoreResult<Arc<dyn SecretStore>> {
    let registry = REGISTRY.read();
    match registry.get(name) {
        Some(def) => (def.factory)(root),
        None => Err(SecretStoreError::NotAvailable(format!(
            "unknown secret store '{}'",
            name
        ))),
    }
}

/// List all registered secret stores as (name, description) pairs, sorted by name
pub fn list_secret_stores() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    let mut stores: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    stores.sort();
    stores
}

/// Check if a store is registered
pub fn has_secret_store(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a secret store (mainly for testing)
pub fn unregister_secret_store(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
