//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use resume_relevance_core::SecretsSource;

/// Inspect the Resume Relevance Check System configuration
#[derive(Parser, Debug)]
#[command(name = "resume-relevance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root; data directories and .streamlit/secrets.toml live under it
    #[arg(short, long, global = true, env = "RESUME_RELEVANCE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Secrets store: none, file, keychain, or file:<path>
    #[arg(short, long, global = true, default_value = "file")]
    pub secrets: SecretsSource,

    /// Print debug lines
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration (credentials redacted)
    Show(ShowArgs),

    /// Check that the required credential is present
    Check,

    /// Print the derived data directories
    Paths,

    /// List the registered secret stores
    Stores,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Also print where each value came from
    #[arg(long)]
    pub sources: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}
