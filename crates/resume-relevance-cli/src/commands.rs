//! Command implementations.
//!
//! Each command renders to a `String` so it can be tested without
//! capturing stdout.

use resume_relevance_core::config::keys;
use resume_relevance_core::{list_secret_stores, Config, ConfigResult, ValidationState};

use crate::args::{Format, ShowArgs};

/// Render the resolved configuration
pub fn show(config: &Config, args: &ShowArgs) -> ConfigResult<String> {
    let mut out = match args.format {
        Format::Json => config.to_json()?,
        Format::Yaml => config.to_yaml()?,
    };
    if args.sources {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&sources(config));
    }
    Ok(out)
}

/// One line per setting: key, source, and the rejected value if any
pub fn sources(config: &Config) -> String {
    let width = keys::ALL_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    let mut out = String::new();
    for key in keys::ALL_KEYS {
        let Some(provenance) = config.source_of(key) else {
            continue;
        };
        out.push_str(&format!("{:<width$}  {}", key, provenance.source, width = width));
        if let Some(rejected) = &provenance.rejected {
            out.push_str(&format!("  (rejected {})", rejected));
        }
        out.push('\n');
    }
    out
}

/// Summarize the credential check
///
/// The warning itself was already printed during startup.
pub fn check(config: &Config) -> String {
    match config.validation_state() {
        ValidationState::Validated(true) => format!("{}: present\n", keys::GOOGLE_API_KEY),
        ValidationState::Validated(false) => format!("{}: missing\n", keys::GOOGLE_API_KEY),
        ValidationState::Unvalidated => format!("{}: not checked\n", keys::GOOGLE_API_KEY),
    }
}

pub fn paths(config: &Config) -> String {
    config
        .paths
        .entries()
        .iter()
        .map(|(name, path)| format!("{:<16}  {}\n", name, path.display()))
        .collect()
}

pub fn stores() -> String {
    list_secret_stores()
        .into_iter()
        .map(|(name, description)| format!("{:<10}  {}\n", name, description))
        .collect()
}
