//! Layered setting resolution
//!
//! A setting resolves through a fixed chain: secrets store, then
//! environment, then a literal default. The first source with a non-empty
//! value wins and only that value is coerced. When the coercion rejects it,
//! the default is used and the rejection is kept for reporting.

use std::fmt;
use std::sync::Arc;

use super::coerce::{CoerceError, Coercion};
use crate::logging::file_logger as log;
use crate::secrets::{ChainSecretStore, SecretStore};

/// Which sources a setting consults, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Secrets store (when present), then environment
    SecretsThenEnv,
    /// Environment only
    EnvOnly,
}

/// Where a resolved value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// The secrets store, by store name
    Secrets(String),
    Environment,
    Default,
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingSource::Secrets(name) => write!(f, "secrets:{}", name),
            SettingSource::Environment => write!(f, "env"),
            SettingSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with source tracking
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSetting<T> {
    pub key: String,
    pub value: T,
    pub source: SettingSource,
    /// Set when a raw value was found but could not be coerced
    pub rejected: Option<CoerceError>,
}

impl<T> ResolvedSetting<T> {
    /// Drop the value, keeping where it came from
    pub fn provenance(&self) -> Provenance {
        Provenance {
            source: self.source.clone(),
            rejected: self.rejected.clone(),
        }
    }
}

/// Source information for a setting, detached from its value
#[derive(Debug, Clone, PartialEq)]
pub struct Provenance {
    pub source: SettingSource,
    pub rejected: Option<CoerceError>,
}

/// Resolves keys against an optional secrets store and an environment
///
/// The secrets store is decided once, at construction. A store that reports
/// itself unavailable is skipped on every lookup, so a keychain that went
/// away degrades to environment/default lookup without error.
#[derive(Clone)]
pub struct ConfigResolver {
    secrets: Option<Arc<dyn SecretStore>>,
    env: Arc<dyn SecretStore>,
    secrets_then_env: ChainSecretStore,
    env_only: ChainSecretStore,
}

impl ConfigResolver {
    pub fn new(secrets: Option<Arc<dyn SecretStore>>, env: Arc<dyn SecretStore>) -> Self {
        let mut chain: Vec<Arc<dyn SecretStore>> = Vec::with_capacity(2);
        if let Some(store) = &secrets {
            chain.push(Arc::clone(store));
        }
        chain.push(Arc::clone(&env));

        Self {
            secrets,
            secrets_then_env: ChainSecretStore::new(chain),
            env_only: ChainSecretStore::new(vec![Arc::clone(&env)]),
            env,
        }
    }

    /// The secrets store, if one was provided
    pub fn secrets(&self) -> Option<&Arc<dyn SecretStore>> {
        self.secrets.as_ref()
    }

    /// Find the raw value for a key and report its source
    pub fn lookup(&self, key: &str, lookup: Lookup) -> Option<(String, SettingSource)> {
        let chain = match lookup {
            Lookup::SecretsThenEnv => &self.secrets_then_env,
            Lookup::EnvOnly => &self.env_only,
        };
        chain.get_with_source(key).map(|(value, store)| {
            let source = if Arc::ptr_eq(store, &self.env) {
                SettingSource::Environment
            } else {
                SettingSource::Secrets(store.name().to_string())
            };
            (value, source)
        })
    }

    /// Resolve a key to a typed value; never fails
    pub fn resolve<C: Coercion>(
        &self,
        key: &str,
        lookup: Lookup,
        coercion: C,
        default: C::Output,
    ) -> ResolvedSetting<C::Output> {
        let Some((raw, source)) = self.lookup(key, lookup) else {
            log::trace("ConfigResolver", &format!("{} -> default", key));
            return ResolvedSetting {
                key: key.to_string(),
                value: default,
                source: SettingSource::Default,
                rejected: None,
            };
        };

        match coercion.coerce(&raw) {
            Ok(value) => {
                log::trace("ConfigResolver", &format!("{} -> {}", key, source));
                ResolvedSetting {
                    key: key.to_string(),
                    value,
                    source,
                    rejected: None,
                }
            }
            Err(e) => {
                log::warn("ConfigResolver", &format!("{} from {} rejected: {}", key, source, e));
                ResolvedSetting {
                    key: key.to_string(),
                    value: default,
                    source: SettingSource::Default,
                    rejected: Some(e),
                }
            }
        }
    }

    /// Resolve a key that has no default; absence resolves to `None`
    pub fn resolve_optional<C: Coercion>(
        &self,
        key: &str,
        lookup: Lookup,
        coercion: C,
    ) -> ResolvedSetting<Option<C::Output>> {
        self.resolve(key, lookup, Present(coercion), None)
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("secrets", &self.secrets.as_ref().map(|s| s.name().to_string()))
            .field("env", &self.env.name())
            .finish()
    }
}

/// Wraps a coercion so that a found value becomes `Some`
struct Present<C>(C);

impl<C: Coercion> Coercion for Present<C> {
    type Output = Option<C::Output>;

    fn coerce(&self, raw: &str) -> Result<Self::Output, CoerceError> {
        self.0.coerce(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::coerce::{Flag, Float, Integer, List, Text};
    use crate::secrets::MemorySecretStore;

    fn env(pairs: &[(&str, &str)]) -> Arc<dyn SecretStore> {
        Arc::new(MemorySecretStore::from_pairs(pairs.iter().copied()).named("env"))
    }

    fn secrets(pairs: &[(&str, &str)]) -> Option<Arc<dyn SecretStore>> {
        Some(Arc::new(MemorySecretStore::from_pairs(pairs.iter().copied()).named("file")))
    }

    /// A secrets store that went away after startup
    struct Unavailable;

    impl SecretStore for Unavailable {
        fn name(&self) -> &str {
            "keychain"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn get(&self, _key: &str) -> Option<String> {
            Some("stale".to_string())
        }
    }

    #[test]
    fn test_secrets_beat_env() {
        let resolver = ConfigResolver::new(
            secrets(&[("GOOGLE_API_KEY", "S")]),
            env(&[("GOOGLE_API_KEY", "E")]),
        );
        let resolved = resolver.resolve_optional("GOOGLE_API_KEY", Lookup::SecretsThenEnv, Text);
        assert_eq!(resolved.value, Some("S".to_string()));
        assert_eq!(resolved.source, SettingSource::Secrets("file".to_string()));
    }

    #[test]
    fn test_env_only_ignores_secrets() {
        let resolver = ConfigResolver::new(
            secrets(&[("APP_NAME", "from secrets")]),
            env(&[("APP_NAME", "from env")]),
        );
        let resolved = resolver.resolve("APP_NAME", Lookup::EnvOnly, Text, "default".to_string());
        assert_eq!(resolved.value, "from env");
        assert_eq!(resolved.source, SettingSource::Environment);

        let resolver = ConfigResolver::new(secrets(&[("APP_NAME", "from secrets")]), env(&[]));
        let resolved = resolver.resolve("APP_NAME", Lookup::EnvOnly, Text, "default".to_string());
        assert_eq!(resolved.value, "default");
        assert_eq!(resolved.source, SettingSource::Default);
    }

    #[test]
    fn test_env_beats_default_without_secrets() {
        let resolver = ConfigResolver::new(None, env(&[("MAX_FILE_SIZE_MB", "25")]));
        let resolved = resolver.resolve("MAX_FILE_SIZE_MB", Lookup::EnvOnly, Integer, 10);
        assert_eq!(resolved.value, 25);
        assert_eq!(resolved.source, SettingSource::Environment);
    }

    #[test]
    fn test_default_when_all_absent() {
        let resolver = ConfigResolver::new(secrets(&[]), env(&[]));
        let resolved = resolver.resolve("MIN_RELEVANCE_SCORE", Lookup::SecretsThenEnv, Integer, 30);
        assert_eq!(resolved.value, 30);
        assert_eq!(resolved.source, SettingSource::Default);
        assert!(resolved.rejected.is_none());

        let missing = resolver.resolve_optional("GOOGLE_API_KEY", Lookup::SecretsThenEnv, Text);
        assert_eq!(missing.value, None);
    }

    #[test]
    fn test_empty_values_fall_through() {
        let resolver = ConfigResolver::new(
            secrets(&[("GOOGLE_API_KEY", "")]),
            env(&[("GOOGLE_API_KEY", "E")]),
        );
        let resolved = resolver.resolve_optional("GOOGLE_API_KEY", Lookup::SecretsThenEnv, Text);
        assert_eq!(resolved.value, Some("E".to_string()));
        assert_eq!(resolved.source, SettingSource::Environment);

        let resolver = ConfigResolver::new(None, env(&[("GOOGLE_API_KEY", "")]));
        let resolved = resolver.resolve_optional("GOOGLE_API_KEY", Lookup::SecretsThenEnv, Text);
        assert_eq!(resolved.value, None);
        assert_eq!(resolved.source, SettingSource::Default);
    }

    #[test]
    fn test_unavailable_secrets_store_degrades_to_env() {
        let resolver = ConfigResolver::new(
            Some(Arc::new(Unavailable)),
            env(&[("GOOGLE_API_KEY", "E")]),
        );
        let resolved = resolver.resolve_optional("GOOGLE_API_KEY", Lookup::SecretsThenEnv, Text);
        assert_eq!(resolved.value, Some("E".to_string()));
        assert_eq!(resolved.source, SettingSource::Environment);
    }

    #[test]
    fn test_rejected_value_uses_default() {
        let resolver = ConfigResolver::new(None, env(&[("KEYWORD_WEIGHT", "heavy")]));
        let resolved = resolver.resolve("KEYWORD_WEIGHT", Lookup::EnvOnly, Float, 0.4);
        assert_eq!(resolved.value, 0.4);
        assert_eq!(resolved.source, SettingSource::Default);
        assert!(matches!(resolved.rejected, Some(CoerceError::Float { .. })));
    }

    #[test]
    fn test_rejected_secret_does_not_fall_back_to_env() {
        let resolver = ConfigResolver::new(
            secrets(&[("MAX_FILE_SIZE_MB", "big")]),
            env(&[("MAX_FILE_SIZE_MB", "25")]),
        );
        let resolved = resolver.resolve("MAX_FILE_SIZE_MB", Lookup::SecretsThenEnv, Integer, 10);
        assert_eq!(resolved.value, 10);
        assert!(resolved.rejected.is_some());
    }

    #[test]
    fn test_flag_and_list_coercion() {
        let resolver = ConfigResolver::new(
            None,
            env(&[("DEBUG_MODE", "TRUE"), ("ALLOWED_EXTENSIONS", "pdf, docx ")]),
        );
        assert!(resolver.resolve("DEBUG_MODE", Lookup::EnvOnly, Flag, false).value);
        assert_eq!(
            resolver
                .resolve("ALLOWED_EXTENSIONS", Lookup::EnvOnly, List::verbatim(','), vec![])
                .value,
            vec!["pdf", " docx "]
        );
    }

    #[test]
    fn test_resolution_is_total() {
        // Every combination of secrets present/absent/empty and env present/absent/empty
        let secret_states: [Option<&[(&str, &str)]>; 3] =
            [None, Some(&[]), Some(&[("MIN_RELEVANCE_SCORE", "40")])];
        let env_states: [&[(&str, &str)]; 3] = [
            &[],
            &[("MIN_RELEVANCE_SCORE", "")],
            &[("MIN_RELEVANCE_SCORE", "50")],
        ];

        for secret_state in secret_states {
            for env_state in env_states {
                let resolver = ConfigResolver::new(secret_state.and_then(secrets), env(env_state));
                let resolved =
                    resolver.resolve("MIN_RELEVANCE_SCORE", Lookup::SecretsThenEnv, Integer, 30);
                let expected = match (secret_state, env_state.first()) {
                    (Some(s), _) if !s.is_empty() => 40,
                    (_, Some((_, "50"))) => 50,
                    _ => 30,
                };
                assert_eq!(resolved.value, expected);
            }
        }
    }

    #[test]
    fn test_provenance_and_display() {
        let resolver = ConfigResolver::new(secrets(&[("K", "v")]), env(&[]));
        let provenance = resolver.resolve("K", Lookup::SecretsThenEnv, Text, String::new()).provenance();
        assert_eq!(provenance.source.to_string(), "secrets:file");
        assert_eq!(SettingSource::Environment.to_string(), "env");
        assert_eq!(SettingSource::Default.to_string(), "default");
    }

    #[test]
    fn test_debug_names_stores() {
        let resolver = ConfigResolver::new(secrets(&[]), env(&[]));
        let debug = format!("{:?}", resolver);
        assert!(debug.contains("file"));
        assert!(debug.contains("env"));
        assert!(resolver.secrets().is_some());
    }
}
