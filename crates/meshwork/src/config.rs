//! Configuration types for Meshwork layouts.
//!
//! This module groups the simulator and router parameters into a single
//! root that can be deserialised from an external source. Every field of
//! every section is optional and falls back to its default.
//!
//! The simulator settles connected nodes a few units apart, while the
//! router's lengths are drawing units. `scale` converts between the two: the
//! simulated positions are multiplied by it before the edges are routed.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining both stages and the
//!   layout scale.
//! - [`ForceConfig`] - Parameters of the force simulation, under `[force]`.
//! - [`RouterConfig`] - Parameters of the edge router, under `[routing]`.
//!
//! # Example
//!
//! ```
//! # use meshwork::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     scale = 50.0
//!
//!     [force]
//!     max_steps = 250
//!
//!     [routing]
//!     loop_distance = 60.0
//!     "#,
//! )?;
//! assert_eq!(config.scale(), 50.0);
//! assert_eq!(config.force().max_steps(), 250);
//! assert_eq!(config.routing().loop_distance(), 60.0);
//! assert_eq!(config.routing().fork_length(), 80.0);
//! # Ok::<(), toml::de::Error>(())
//! ```

use serde::Deserialize;

use crate::{
    error::{ConfigError, require_positive},
    force::ForceConfig,
    routing::RouterConfig,
};

/// Factor from simulation units to drawing units.
const DEFAULT_SCALE: f32 = 100.0;

/// Top-level configuration combining simulation and routing settings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "AppConfigFile")]
pub struct AppConfig {
    force: ForceConfig,
    routing: RouterConfig,
    scale: f32,
}

/// Serialized form of [`AppConfig`], validated on conversion.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AppConfigFile {
    /// Force simulation section.
    #[serde(default)]
    force: ForceConfig,

    /// Edge routing section.
    #[serde(default)]
    routing: RouterConfig,

    #[serde(default = "default_scale")]
    scale: f32,
}

fn default_scale() -> f32 {
    DEFAULT_SCALE
}

impl TryFrom<AppConfigFile> for AppConfig {
    type Error = ConfigError;

    fn try_from(file: AppConfigFile) -> Result<Self, Self::Error> {
        AppConfig::new(file.force, file.routing).with_scale(file.scale)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(ForceConfig::default(), RouterConfig::default())
    }
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its two sections.
    ///
    /// # Arguments
    ///
    /// * `force` - Force simulation parameters.
    /// * `routing` - Edge routing parameters.
    pub fn new(force: ForceConfig, routing: RouterConfig) -> Self {
        Self {
            force,
            routing,
            scale: DEFAULT_SCALE,
        }
    }

    /// Sets the factor applied to simulated positions before routing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `scale` is not finite and strictly positive.
    pub fn with_scale(mut self, scale: f32) -> Result<Self, ConfigError> {
        self.scale = require_positive("scale", scale)?;
        Ok(self)
    }

    /// Returns the force simulation configuration.
    pub fn force(&self) -> &ForceConfig {
        &self.force
    }

    /// Returns the edge routing configuration.
    pub fn routing(&self) -> &RouterConfig {
        &self.routing
    }

    /// Returns the factor from simulation units to drawing units.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}
