//! Startup selection of the optional secrets store
//!
//! The secrets store is a collaborator that may be missing entirely or may
//! fail to come up (no secrets file, malformed TOML, no keychain daemon).
//! [`detect_secrets_store`] settles that question once, before any setting
//! is resolved, and hands back `None` instead of an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::file_store::FileSecretStore;
use super::registry::create_secret_store;
use super::traits::SecretStore;
use crate::debug_log;

/// Where to look for the secrets store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsSource {
    /// No secrets store; settings resolve from environment and defaults
    Disabled,
    /// A store from the registry, by name (`file`, `keychain`, ...)
    Registered(String),
    /// A TOML secrets file at an explicit path
    File(PathBuf),
}

impl Default for SecretsSource {
    /// The project's `.streamlit/secrets.toml`
    fn default() -> Self {
        SecretsSource::Registered("file".to_string())
    }
}

impl FromStr for SecretsSource {
    type Err = std::convert::Infallible;

    /// `none`/`off`/`disabled` turn the store off; `file:<path>` names a
    /// secrets file; anything else is a registry name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_lowercase().as_str() {
            "" | "none" | "off" | "disabled" => SecretsSource::Disabled,
            _ => match strip_file_prefix(trimmed) {
                Some(path) => SecretsSource::File(PathBuf::from(path)),
                None => SecretsSource::Registered(trimmed.to_string()),
            },
        })
    }
}

/// Path part of `file:<path>`, with the prefix matched in any letter case
fn strip_file_prefix(s: &str) -> Option<&str> {
    const PREFIX: &str = "file:";
    match s.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => Some(&s[PREFIX.len()..]),
        _ => None,
    }
}

impl fmt::Display for SecretsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretsSource::Disabled => write!(f, "none"),
            SecretsSource::Registered(name) => write!(f, "{}", name),
            SecretsSource::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Bring up the secrets store, or report it absent
///
/// Initialization failures are logged to the debug log and absorbed.
pub fn detect_secrets_store(source: &SecretsSource, root: &Path) -> Option<Arc<dyn SecretStore>> {
    let result = match source {
        SecretsSource::Disabled => return None,
        SecretsSource::Registered(name) => create_secret_store(name, root),
        SecretsSource::File(path) => {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                root.join(path)
            };
            FileSecretStore::open(path).map(|s| Arc::new(s) as Arc<dyn SecretStore>)
        }
    };

    match result {
        Ok(store) => {
            debug_log!("using secrets store '{}'", store.name());
            Some(store)
        }
        Err(e) => {
            debug_log!("secrets store '{}' unavailable, continuing without it: {}", source, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_file_prefix_any_case() {
        assert_eq!(
            "FILE:/etc/rrc/Secrets.toml".parse::<SecretsSource>().unwrap(),
            SecretsSource::File(PathBuf::from("/etc/rrc/Secrets.toml"))
        );
        assert_eq!(
            " File:conf/s.toml ".parse::<SecretsSource>().unwrap(),
            SecretsSource::File(PathBuf::from("conf/s.toml"))
        );
        assert_eq!(
            "filet".parse::<SecretsSource>().unwrap(),
            SecretsSource::Registered("filet".to_string())
        );
    }

    #[test]
    fn test_parse_source() {
        assert_eq!("none".parse::<SecretsSource>().unwrap(), SecretsSource::Disabled);
        assert_eq!("OFF".parse::<SecretsSource>().unwrap(), SecretsSource::Disabled);
        assert_eq!("".parse::<SecretsSource>().unwrap(), SecretsSource::Disabled);
        assert_eq!(
            "keychain".parse::<SecretsSource>().unwrap(),
            SecretsSource::Registered("keychain".to_string())
        );
        assert_eq!(
            "file:/etc/rrc/secrets.toml".parse::<SecretsSource>().unwrap(),
            SecretsSource::File(PathBuf::from("/etc/rrc/secrets.toml"))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let source = SecretsSource::File(PathBuf::from("conf/secrets.toml"));
        assert_eq!(source.to_string().parse::<SecretsSource>().unwrap(), source);
        assert_eq!(SecretsSource::default().to_string(), "file");
    }

    #[test]
    fn test_disabled_yields_none() {
        let dir = tempdir().unwrap();
        assert!(detect_secrets_store(&SecretsSource::Disabled, dir.path()).is_none());
    }

    #[test]
    fn test_missing_default_file_yields_none() {
        let dir = tempdir().unwrap();
        assert!(detect_secrets_store(&SecretsSource::default(), dir.path()).is_none());
    }

    #[test]
    fn test_malformed_file_yields_none() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("secrets.toml"), "this is = = not toml").unwrap();

        let source = SecretsSource::File(PathBuf::from("secrets.toml"));
        assert!(detect_secrets_store(&source, dir.path()).is_none());
    }

    #[test]
    fn test_unknown_registry_name_yields_none() {
        let dir = tempdir().unwrap();
        let source = SecretsSource::Registered("no_such_store".to_string());
        assert!(detect_secrets_store(&source, dir.path()).is_none());
    }

    #[test]
    fn test_relative_file_resolves_against_root() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("secrets.toml"), "GOOGLE_API_KEY = \"S\"\n").unwrap();

        let source = SecretsSource::File(PathBuf::from("secrets.toml"));
        let store = detect_secrets_store(&source, dir.path()).unwrap();
        assert_eq!(store.get("GOOGLE_API_KEY"), Some("S".to_string()));
    }
}
