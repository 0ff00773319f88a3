//! Conversion of raw string values into typed settings

use thiserror::Error;

/// A raw value that could not be converted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("'{value}' is not an integer: {message}")]
    Integer { value: String, message: String },

    #[error("'{value}' is not a number: {message}")]
    Float { value: String, message: String },
}

/// Conversion from a raw string to a typed value
pub trait Coercion {
    type Output;

    fn coerce(&self, raw: &str) -> Result<Self::Output, CoerceError>;
}

/// Keep the raw string as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Coercion for Text {
    type Output = String;

    fn coerce(&self, raw: &str) -> Result<String, CoerceError> {
        Ok(raw.to_string())
    }
}

/// Signed integer; surrounding whitespace is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Coercion for Integer {
    type Output = i64;

    fn coerce(&self, raw: &str) -> Result<i64, CoerceError> {
        raw.trim().parse().map_err(|e: std::num::ParseIntError| CoerceError::Integer {
            value: raw.to_string(),
            message: e.to_string(),
        })
    }
}

/// Floating point number; surrounding whitespace is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

impl Coercion for Float {
    type Output = f64;

    fn coerce(&self, raw: &str) -> Result<f64, CoerceError> {
        raw.trim().parse().map_err(|e: std::num::ParseFloatError| CoerceError::Float {
            value: raw.to_string(),
            message: e.to_string(),
        })
    }
}

/// Boolean: `"true"` in any letter case is true, every other string is false
#[derive(Debug, Clone, Copy, Default)]
pub struct Flag;

impl Coercion for Flag {
    type Output = bool;

    fn coerce(&self, raw: &str) -> Result<bool, CoerceError> {
        Ok(raw.eq_ignore_ascii_case("true"))
    }
}

/// Delimited list of strings
///
/// Splitting keeps empty elements, so `""` becomes `[""]` and `"a,,b"`
/// becomes `["a", "", "b"]`. Elements are trimmed only when `trim` is set.
#[derive(Debug, Clone, Copy)]
pub struct List {
    pub delimiter: char,
    pub trim: bool,
}

impl List {
    /// Split on `delimiter`, keeping elements exactly as written
    pub fn verbatim(delimiter: char) -> Self {
        Self { delimiter, trim: false }
    }

    /// Split on `delimiter` and trim whitespace around each element
    pub fn trimmed(delimiter: char) -> Self {
        Self { delimiter, trim: true }
    }
}

impl Coercion for List {
    type Output = Vec<String>;

    fn coerce(&self, raw: &str) -> Result<Vec<String>, CoerceError> {
        Ok(raw
            .split(self.delimiter)
            .map(|part| if self.trim { part.trim() } else { part })
            .map(str::to_string)
            .collect())
    }
}
