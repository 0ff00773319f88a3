//! Derived project directories
//!
//! These are fixed relative to the project root and are not settings. The
//! ingestion and storage layers use them; nothing here creates or checks
//! the directories.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Data directories under a project root
///
/// ```text
/// <root>/
///   data/
///     uploads/
///       resumes/
///       job_descriptions/
///     processed/
///     vector_db/
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub data: PathBuf,
    pub uploads: PathBuf,
    pub resumes: PathBuf,
    pub job_descriptions: PathBuf,
    pub processed: PathBuf,
    pub vector_db: PathBuf,
}

impl ProjectPaths {
    /// Derive all paths from a project root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join("data");
        let uploads = data.join("uploads");
        Self {
            resumes: uploads.join("resumes"),
            job_descriptions: uploads.join("job_descriptions"),
            processed: data.join("processed"),
            vector_db: data.join("vector_db"),
            uploads,
            data,
            root,
        }
    }

    /// Derive paths from a file two levels below the root
    ///
    /// `<root>/app/config.toml` anchors `<root>`. An anchor too shallow to
    /// have a grandparent falls back to the current directory (`.`).
    pub fn from_anchor(anchor: impl AsRef<Path>) -> Self {
        let root = anchor
            .as_ref()
            .parent()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    /// Every path with its name, root first
    pub fn entries(&self) -> [(&'static str, &Path); 7] {
        [
            ("root", self.root.as_path()),
            ("data", self.data.as_path()),
            ("uploads", self.uploads.as_path()),
            ("resumes", self.resumes.as_path()),
            ("job_descriptions", self.job_descriptions.as_path()),
            ("processed", self.processed.as_path()),
            ("vector_db", self.vector_db.as_path()),
        ]
    }
}
