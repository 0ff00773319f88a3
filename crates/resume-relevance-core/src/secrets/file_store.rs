//! TOML secrets file store
//!
//! Reads a `secrets.toml` in the layout used by Streamlit deployments:
//!
//! ```toml
//! GOOGLE_API_KEY = "AIza..."
//! LANGCHAIN_API_KEY = "ls__..."
//!
//! [database]
//! password = "hunter2"
//! ```
//!
//! Top-level scalars are looked up by their key; values inside tables are
//! looked up by dotted path (`database.password`).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};
use crate::logging::file_logger as log;

/// Default location of the secrets file, relative to the project root
pub const DEFAULT_SECRETS_FILE: &str = ".streamlit/secrets.toml";

/// Read-only store backed by a TOML file
///
/// The file is parsed once in [`FileSecretStore::open`]; lookups never touch
/// the filesystem again.
///
/// # Example
///
/// ```no_run
/// use resume_relevance_core::secrets::{FileSecretStore, SecretStore};
///
/// let store = FileSecretStore::open(".streamlit/secrets.toml").unwrap();
/// let key = store.get("GOOGLE_API_KEY");
/// ```
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileSecretStore {
    /// Open and parse a secrets file
    ///
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn open(path: impl AsRef<Path>) -> SecretStoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| SecretStoreError::Io {
            path: path.clone(),
            source,
        })?;
        let store = Self::from_toml_str(&content).map_err(|message| SecretStoreError::Parse {
            path: path.clone(),
            message,
        })?;
        log::debug(
            "FileSecretStore",
            &format!("loaded {} value(s) from {}", store.values.len(), path.display()),
        );
        Ok(Self { path, ..store })
    }

    /// Parse secrets from an in-memory TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
        let mut values = HashMap::new();
        flatten("", &table, &mut values);
        Ok(Self {
            path: PathBuf::new(),
            values,
        })
    }

    /// Path of the backing file (empty when parsed from a string)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of values read from the file
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::Table(inner) => flatten(&full_key, inner, out),
            toml::Value::String(s) => {
                out.insert(full_key, s.clone());
            }
            // Arrays have no single-string form; skip them
            toml::Value::Array(_) => {}
            other => {
                out.insert(full_key, other.to_string());
            }
        }
    }
}

impl SecretStore for FileSecretStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_top_level_and_tables() {
        let store = FileSecretStore::from_toml_str(
            r#"
GOOGLE_API_KEY = "AIza-test"
MAX_FILE_SIZE_MB = 25
DEBUG_MODE = false

[database]
password = "hunter2"
"#,
        )
        .unwrap();

        assert_eq!(store.name(), "file");
        assert_eq!(store.get("GOOGLE_API_KEY"), Some("AIza-test".to_string()));
        assert_eq!(store.get("MAX_FILE_SIZE_MB"), Some("25".to_string()));
        assert_eq!(store.get("DEBUG_MODE"), Some("false".to_string()));
        assert_eq!(store.get("database.password"), Some("hunter2".to_string()));
        assert_eq!(store.get("password"), None);
    }

    #[test]
    fn test_empty_string_is_absent() {
        let store = FileSecretStore::from_toml_str(r#"GOOGLE_API_KEY = """#).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("GOOGLE_API_KEY"), None);
    }

    #[test]
    fn test_arrays_are_skipped() {
        let store = FileSecretStore::from_toml_str(r#"ALLOWED = ["pdf", "docx"]"#).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "GOOGLE_API_KEY = \"from-file\"\n").unwrap();

        let store = FileSecretStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get("GOOGLE_API_KEY"), Some("from-file".to_string()));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let err = FileSecretStore::open(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SecretStoreError::Io { .. }));
    }

    #[test]
    fn test_open_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, "GOOGLE_API_KEY = \n[[[").unwrap();

        let err = FileSecretStore::open(&path).unwrap_err();
        assert!(matches!(err, SecretStoreError::Parse { .. }));
    }
}
