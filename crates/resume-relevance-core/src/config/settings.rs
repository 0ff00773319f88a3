//! Resolved application configuration

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};

use super::coerce::{Flag, Float, Integer, List, Text};
use super::error::ConfigResult;
use super::paths::ProjectPaths;
use super::keys::is_secret_key;
use super::resolver::{ConfigResolver, Lookup, Provenance, ResolvedSetting};
use crate::logging::file_logger as log;
use crate::logging::Logger;
use crate::secrets::{detect_secrets_store, EnvSecretStore, SecretStore, SecretsSource};

/// Warning emitted by [`Config::validate`] when the primary credential is missing
pub const MISSING_GOOGLE_API_KEY_WARNING: &str =
    "GOOGLE_API_KEY is missing! The app may not work correctly.";

const REDACTED: &str = "[REDACTED]";

/// Outcome of the startup credential check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    Unvalidated,
    /// Checked; `true` if the credential was present
    Validated(bool),
}

/// Weights combining keyword and semantic relevance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub semantic: f64,
}

/// Immutable application configuration
///
/// Built once at startup with [`Config::load`] or [`Config::startup`] and
/// then shared by reference (or `Arc`). There is no reload path.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use resume_relevance_core::config::{Config, ProjectPaths};
/// use resume_relevance_core::secrets::MemorySecretStore;
///
/// let env = Arc::new(MemorySecretStore::from_pairs([("MAX_FILE_SIZE_MB", "25")]));
/// let config = Config::load(None, env, ProjectPaths::new("."));
/// assert_eq!(config.max_file_size_mb, 25);
/// assert_eq!(config.min_relevance_score, 30);
/// ```
#[derive(Clone, Serialize)]
pub struct Config {
    #[serde(serialize_with = "redact_optional")]
    pub google_api_key: Option<String>,
    #[serde(serialize_with = "redact")]
    pub langchain_api_key: String,
    pub app_name: String,
    pub app_version: String,
    pub debug_mode: bool,
    pub max_file_size_mb: i64,
    pub allowed_extensions: Vec<String>,
    pub keyword_weight: f64,
    pub semantic_weight: f64,
    pub min_relevance_score: i64,
    pub langchain_tracing_v2: bool,
    pub paths: ProjectPaths,
    #[serde(skip)]
    sources: BTreeMap<&'static str, Provenance>,
    #[serde(skip)]
    validated: OnceCell<bool>,
}

impl Config {
    /// Resolve every setting from an optional secrets store and an environment
    ///
    /// Never fails. Values that cannot be coerced fall back to their default;
    /// see [`Config::rejected`].
    pub fn load(
        secrets: Option<Arc<dyn SecretStore>>,
        env: Arc<dyn SecretStore>,
        paths: ProjectPaths,
    ) -> Self {
        let resolver = ConfigResolver::new(secrets, env);
        let mut sources = BTreeMap::new();

        fn track<T>(
            sources: &mut BTreeMap<&'static str, Provenance>,
            key: &'static str,
            resolved: ResolvedSetting<T>,
        ) -> T {
            sources.insert(key, resolved.provenance());
            resolved.value
        }

        use super::keys::*;

        let config = Self {
            google_api_key: track(
                &mut sources,
                GOOGLE_API_KEY,
                resolver.resolve_optional(GOOGLE_API_KEY, lookup_for(GOOGLE_API_KEY), Text),
            ),
            langchain_api_key: track(
                &mut sources,
                LANGCHAIN_API_KEY,
                resolver.resolve(LANGCHAIN_API_KEY, lookup_for(LANGCHAIN_API_KEY), Text, DEFAULT_LANGCHAIN_API_KEY.to_string()),
            ),
            app_name: track(
                &mut sources,
                APP_NAME,
                resolver.resolve(APP_NAME, lookup_for(APP_NAME), Text, DEFAULT_APP_NAME.to_string()),
            ),
            app_version: track(
                &mut sources,
                APP_VERSION,
                resolver.resolve(APP_VERSION, lookup_for(APP_VERSION), Text, DEFAULT_APP_VERSION.to_string()),
            ),
            debug_mode: track(
                &mut sources,
                DEBUG_MODE,
                resolver.resolve(DEBUG_MODE, lookup_for(DEBUG_MODE), Flag, DEFAULT_DEBUG_MODE),
            ),
            max_file_size_mb: track(
                &mut sources,
                MAX_FILE_SIZE_MB,
                resolver.resolve(MAX_FILE_SIZE_MB, lookup_for(MAX_FILE_SIZE_MB), Integer, DEFAULT_MAX_FILE_SIZE_MB),
            ),
            allowed_extensions: track(
                &mut sources,
                ALLOWED_EXTENSIONS,
                resolver.resolve(
                    ALLOWED_EXTENSIONS,
                    lookup_for(ALLOWED_EXTENSIONS),
                    List::verbatim(LIST_DELIMITER),
                    DEFAULT_ALLOWED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
                ),
            ),
            keyword_weight: track(
                &mut sources,
                KEYWORD_WEIGHT,
                resolver.resolve(KEYWORD_WEIGHT, lookup_for(KEYWORD_WEIGHT), Float, DEFAULT_KEYWORD_WEIGHT),
            ),
            semantic_weight: track(
                &mut sources,
                SEMANTIC_WEIGHT,
                resolver.resolve(SEMANTIC_WEIGHT, lookup_for(SEMANTIC_WEIGHT), Float, DEFAULT_SEMANTIC_WEIGHT),
            ),
            min_relevance_score: track(
                &mut sources,
                MIN_RELEVANCE_SCORE,
                resolver.resolve(MIN_RELEVANCE_SCORE, lookup_for(MIN_RELEVANCE_SCORE), Integer, DEFAULT_MIN_RELEVANCE_SCORE),
            ),
            langchain_tracing_v2: track(
                &mut sources,
                LANGCHAIN_TRACING_V2,
                resolver.resolve(LANGCHAIN_TRACING_V2, lookup_for(LANGCHAIN_TRACING_V2), Flag, DEFAULT_LANGCHAIN_TRACING_V2),
            ),
            paths,
            sources,
            validated: OnceCell::new(),
        };

        log::debug(
            "Config",
            &format!(
                "loaded {} settings (secrets store: {})",
                config.sources.len(),
                resolver.secrets().map(|s| s.name()).unwrap_or("none")
            ),
        );
        config
    }

    /// Load the way the application does at startup, then run the credential check
    ///
    /// Detects the secrets store from `secrets`, reads the process
    /// environment, reports any rejected values as warnings and runs
    /// [`Config::validate`] once.
    pub fn startup(root: impl AsRef<Path>, secrets: &SecretsSource, logger: &dyn Logger) -> Self {
        let root = root.as_ref();
        let store = detect_secrets_store(secrets, root);
        let config = Self::load(store, Arc::new(EnvSecretStore::new()), ProjectPaths::new(root));
        config.report_rejected(logger);
        config.validate(logger);
        config
    }

    /// Check that the primary credential is present
    ///
    /// Emits one warning through `logger` when `GOOGLE_API_KEY` is missing.
    /// Never aborts; safe to call again.
    pub fn validate(&self, logger: &dyn Logger) -> bool {
        let ok = self.google_api_key.as_deref().is_some_and(|k| !k.is_empty());
        if !ok {
            logger.warn(MISSING_GOOGLE_API_KEY_WARNING);
        }
        let _ = self.validated.set(ok);
        ok
    }

    /// Whether [`Config::validate`] has run, and its first result
    pub fn validation_state(&self) -> ValidationState {
        match self.validated.get() {
            Some(ok) => ValidationState::Validated(*ok),
            None => ValidationState::Unvalidated,
        }
    }

    /// Warn about every value that was present but could not be coerced
    pub fn report_rejected(&self, logger: &dyn Logger) {
        for (key, error) in self.rejected() {
            logger.warn(&format!("{}: {}; using the default", key, error));
        }
    }

    /// Settings whose configured value was rejected, with the reason
    pub fn rejected(&self) -> Vec<(&'static str, String)> {
        self.sources
            .iter()
            .filter_map(|(key, p)| p.rejected.as_ref().map(|e| (*key, e.to_string())))
            .collect()
    }

    /// Where a setting's value came from
    pub fn source_of(&self, key: &str) -> Option<&Provenance> {
        self.sources.get(key)
    }

    /// Provenance of every setting, in key order
    pub fn sources(&self) -> &BTreeMap<&'static str, Provenance> {
        &self.sources
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            keyword: self.keyword_weight,
            semantic: self.semantic_weight,
        }
    }

    /// Upload size limit in bytes; negative limits count as zero
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::try_from(self.max_file_size_mb)
            .unwrap_or(0)
            .saturating_mul(1024 * 1024)
    }

    /// Check a file name against the allowed extensions, ignoring letter case
    pub fn is_allowed_file(&self, file_name: &str) -> bool {
        let Some(extension) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Export as pretty JSON, credentials redacted
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export as YAML, credentials redacted
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Credentials may come from the secrets store; every other key is environment-only
fn lookup_for(key: &str) -> Lookup {
    if is_secret_key(key) {
        Lookup::SecretsThenEnv
    } else {
        Lookup::EnvOnly
    }
}

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}

fn redact_optional<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => redact(v, serializer),
        None => serializer.serialize_none(),
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |present: bool| if present { REDACTED } else { "<unset>" };
        f.debug_struct("Config")
            .field("google_api_key", &redacted(self.google_api_key.is_some()))
            .field("langchain_api_key", &redacted(!self.langchain_api_key.is_empty()))
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("debug_mode", &self.debug_mode)
            .field("max_file_size_mb", &self.max_file_size_mb)
            .field("allowed_extensions", &self.allowed_extensions)
            .field("keyword_weight", &self.keyword_weight)
            .field("semantic_weight", &self.semantic_weight)
            .field("min_relevance_score", &self.min_relevance_score)
            .field("langchain_tracing_v2", &self.langchain_tracing_v2)
            .field("paths", &self.paths)
            .field("validation", &self.validation_state())
            .finish()
    }
}
