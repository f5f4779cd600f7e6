//! Elapsed-time parsing
//!
//! The benchmark harness records wall-clock time either as bare seconds
//! (`"45.5"`) or in `/usr/bin/time` style as `minutes:seconds` (`"1:30.25"`).

use std::num::ParseFloatError;
use thiserror::Error;

/// Why an elapsed-time cell could not be read
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeParseError {
    /// A component is not a floating-point number
    #[error("invalid number {component:?}: {source}")]
    InvalidNumber {
        /// The failing component
        component: String,
        /// Underlying parse error
        source: ParseFloatError,
    },

    /// More than one `:` separator
    #[error("expected minutes:seconds, found {parts} fields")]
    TooManyFields {
        /// Number of colon-separated fields found
        parts: usize,
    },
}

fn parse_component(component: &str) -> Result<f64, TimeParseError> {
    component
        .trim()
        .parse::<f64>()
        .map_err(|source| TimeParseError::InvalidNumber {
            component: component.to_string(),
            source,
        })
}

/// Parse an elapsed-time string into seconds
pub fn try_parse_time(value: &str) -> Result<f64, TimeParseError> {
    match value.split_once(':') {
        Some((minutes, seconds)) => {
            if seconds.contains(':') {
                return Err(TimeParseError::TooManyFields {
                    parts: value.split(':').count(),
                });
            }
            Ok(parse_component(minutes)? * 60.0 + parse_component(seconds)?)
        }
        None => parse_component(value),
    }
}

/// Parse an elapsed-time string, substituting `0.0` on failure
///
/// A malformed cell logs a warning naming the value and the cause instead
/// of aborting the report.
pub fn parse_time(value: &str) -> f64 {
    match try_parse_time(value) {
        Ok(seconds) => seconds,
        Err(err) => {
            tracing::warn!(value, error = %err, "Could not parse time value, using 0.0");
            0.0
        }
    }
}
