//! Setting keys and their defaults
//!
//! Every key is both the environment variable name and the secrets-file key.

// =============================================================================
// API Keys
// =============================================================================

/// Primary external-service credential; required by `Config::validate`
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

pub const LANGCHAIN_API_KEY: &str = "LANGCHAIN_API_KEY";

pub const DEFAULT_LANGCHAIN_API_KEY: &str = "";

// =============================================================================
// App
// =============================================================================

pub const APP_NAME: &str = "APP_NAME";

pub const DEFAULT_APP_NAME: &str = "Resume Relevance Check System";

pub const APP_VERSION: &str = "APP_VERSION";

pub const DEFAULT_APP_VERSION: &str = "1.0.0";

pub const DEBUG_MODE: &str = "DEBUG_MODE";

pub const DEFAULT_DEBUG_MODE: bool = true;

// =============================================================================
// File Uploads
// =============================================================================

pub const MAX_FILE_SIZE_MB: &str = "MAX_FILE_SIZE_MB";

pub const DEFAULT_MAX_FILE_SIZE_MB: i64 = 10;

pub const ALLOWED_EXTENSIONS: &str = "ALLOWED_EXTENSIONS";

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Separator for list-valued settings
pub const LIST_DELIMITER: char = ',';

// =============================================================================
// Scoring
// =============================================================================

pub const KEYWORD_WEIGHT: &str = "KEYWORD_WEIGHT";

pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;

pub const SEMANTIC_WEIGHT: &str = "SEMANTIC_WEIGHT";

pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.6;

pub const MIN_RELEVANCE_SCORE: &str = "MIN_RELEVANCE_SCORE";

pub const DEFAULT_MIN_RELEVANCE_SCORE: i64 = 30;

// =============================================================================
// LangChain
// =============================================================================

pub const LANGCHAIN_TRACING_V2: &str = "LANGCHAIN_TRACING_V2";

pub const DEFAULT_LANGCHAIN_TRACING_V2: bool = false;

/// All setting keys, in the order they are resolved and reported
pub const ALL_KEYS: &[&str] = &[
    GOOGLE_API_KEY,
    LANGCHAIN_API_KEY,
    APP_NAME,
    APP_VERSION,
    DEBUG_MODE,
    MAX_FILE_SIZE_MB,
    ALLOWED_EXTENSIONS,
    KEYWORD_WEIGHT,
    SEMANTIC_WEIGHT,
    MIN_RELEVANCE_SCORE,
    LANGCHAIN_TRACING_V2,
];

/// Keys whose values are credentials and must never be printed
pub const SECRET_KEYS: &[&str] = &[GOOGLE_API_KEY, LANGCHAIN_API_KEY];

/// Check if a key holds a credential
pub fn is_secret_key(key: &str) -> bool {
    SECRET_KEYS.contains(&key)
}
