//! Application configuration
//!
//! Settings resolve through secrets store → environment → default and are
//! held in an immutable [`Config`]:
//! - `keys`: setting names and their defaults
//! - `coerce`: raw string to typed value conversions
//! - `resolver`: the layered lookup with source tracking
//! - `paths`: derived project directories

pub mod keys;
mod coerce;
mod resolver;
mod paths;
mod settings;
mod error;

pub use coerce::{Coercion, CoerceError, Text, Integer, Float, Flag, List};
pub use resolver::{ConfigResolver, Lookup, SettingSource, ResolvedSetting, Provenance};
pub use paths::ProjectPaths;
pub use settings::{Config, ScoringWeights, ValidationState, MISSING_GOOGLE_API_KEY_WARNING};
pub use error::{ConfigError, ConfigResult};
