//! Resume Relevance Core
//!
//! Configuration for the Resume Relevance Check System. Every setting is
//! resolved once at startup through a fixed chain (secrets store, then
//! environment variable, then a hard-coded default) into an immutable
//! [`Config`] that the rest of the application borrows.
//!
//! ```rust,no_run
//! use resume_relevance_core::{Config, ConsoleLogger, SecretsSource};
//!
//! let logger = ConsoleLogger::new();
//! let config = Config::startup(".", &SecretsSource::default(), &logger);
//!
//! let weights = config.scoring_weights();
//! println!("{} v{}: keyword={} semantic={}",
//!     config.app_name, config.app_version, weights.keyword, weights.semantic);
//! ```
//!
//! The secrets store is optional. A missing or unreadable
//! `.streamlit/secrets.toml`, or a keychain that is not reachable, leaves
//! resolution to the environment and defaults.

pub mod secrets;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use secrets::{
    SecretStore, SecretInfo, SecretStoreError, SecretStoreResult,
    EnvSecretStore, MemorySecretStore, FileSecretStore, KeychainSecretStore, ChainSecretStore,
    SecretsSource, detect_secrets_store,
    register_secret_store, create_secret_store, list_secret_stores,
};

pub use logging::{Logger, ConsoleLogger, ConsoleStream, MemoryLogger};

pub use config::{
    Config, ConfigError, ConfigResult, ConfigResolver, ProjectPaths,
    ResolvedSetting, SettingSource, ScoringWeights, ValidationState,
};
