//! Configuration error types

/// Errors raised when exporting configuration
///
/// Loading itself never fails; these come from serializing a loaded config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
