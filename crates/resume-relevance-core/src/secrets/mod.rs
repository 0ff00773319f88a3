//! Secret lookup abstractions and implementations
//!
//! This module provides the pluggable "get value by key, or absent" sources
//! that settings resolve through:
//! - `SecretStore` trait for implementing custom stores
//! - Built-in implementations: `EnvSecretStore`, `MemorySecretStore`,
//!   `FileSecretStore`, `KeychainSecretStore`, `ChainSecretStore`
//! - A registry for creating stores by name
//! - `detect_secrets_store` for deciding the optional secrets store once at startup

mod traits;
mod env_store;
mod memory_store;
mod file_store;
mod chain_store;
mod keychain_store;
mod registry;
mod detect;

pub use traits::{SecretStore, SecretInfo, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
pub use file_store::{FileSecretStore, DEFAULT_SECRETS_FILE};
pub use chain_store::ChainSecretStore;
pub use keychain_store::{KeychainSecretStore, DEFAULT_KEYCHAIN_SERVICE};
pub use registry::{
    register_secret_store, create_secret_store, list_secret_stores, has_secret_store,
    unregister_secret_store, StoreDefinition, StoreFactory,
};
pub use detect::{detect_secrets_store, SecretsSource};
