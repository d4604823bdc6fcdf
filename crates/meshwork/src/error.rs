//! Error types for Meshwork operations.
//!
//! This module provides the main error type [`MeshworkError`] returned at the
//! crate boundary, and [`ConfigError`] which describes why a configuration
//! value was rejected.

use thiserror::Error;

/// The main error type for Meshwork operations.
///
/// The layout algorithms themselves are total over valid input; errors only
/// arise when the caller builds an invalid configuration or graph, or asks
/// the router about nodes the simulator never placed.
#[derive(Debug, Error)]
pub enum MeshworkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Routing error: {0}")]
    Routing(String),
}

/// Reasons a configuration value is rejected.
///
/// Values are never clamped silently: any field outside its domain fails
/// construction with the field name and the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("`{field}` must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` must lie in {min}..{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(value)
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

/// Checks that `value` lies in the open interval `(min, max)`.
pub(crate) fn require_open_range(
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value <= min || value >= max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
