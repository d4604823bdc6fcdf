//! Edge routing parameters.

use serde::Deserialize;

use crate::error::{ConfigError, require_open_range, require_positive};

/// Validated parameters of the edge router.
///
/// Apertures are given in degrees and exposed in radians; lengths are in
/// layout units, the same units as the simulated positions.
///
/// # Examples
///
/// ```
/// use meshwork::routing::RouterConfig;
///
/// let config = RouterConfig::builder()
///     .with_fork_aperture(90.0)
///     .with_loop_distance(40.0)
///     .build()?;
/// assert_eq!(config.fork_aperture(), 90f32.to_radians());
/// assert_eq!(config.fork_length(), 80.0);
///
/// assert!(RouterConfig::builder().with_loop_aperture(360.0).build().is_err());
/// # Ok::<(), meshwork::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RouterConfigBuilder")]
pub struct RouterConfig {
    fork_aperture: f32,
    fork_length: f32,
    loop_aperture: f32,
    loop_distance: f32,
}

impl RouterConfig {
    /// Starts a builder initialised with the default values.
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    /// Angle spanned by a bundle of parallel edges, in radians
    pub fn fork_aperture(&self) -> f32 {
        self.fork_aperture
    }

    /// Distance from a node to the fork points of its bundled edges and loops
    pub fn fork_length(&self) -> f32 {
        self.fork_length
    }

    /// Angular footprint of one self-loop, in radians
    pub fn loop_aperture(&self) -> f32 {
        self.loop_aperture
    }

    /// Distance from a node to the midpoint of its self-loops
    pub fn loop_distance(&self) -> f32 {
        self.loop_distance
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        let defaults = RouterConfigBuilder::default();
        Self {
            fork_aperture: defaults.fork_aperture.to_radians(),
            fork_length: defaults.fork_length,
            loop_aperture: defaults.loop_aperture.to_radians(),
            loop_distance: defaults.loop_distance,
        }
    }
}

/// Builder for [`RouterConfig`], with apertures in degrees.
///
/// Also the serde representation of the configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfigBuilder {
    fork_aperture: f32,
    fork_length: f32,
    loop_aperture: f32,
    loop_distance: f32,
}

impl Default for RouterConfigBuilder {
    fn default() -> Self {
        Self {
            fork_aperture: 60.0,
            fork_length: 80.0,
            loop_aperture: 60.0,
            loop_distance: 120.0,
        }
    }
}

impl RouterConfigBuilder {
    /// Set the parallel-edge aperture in degrees
    pub fn with_fork_aperture(mut self, degrees: f32) -> Self {
        self.fork_aperture = degrees;
        self
    }

    /// Set the fork point distance
    pub fn with_fork_length(mut self, length: f32) -> Self {
        self.fork_length = length;
        self
    }

    /// Set the self-loop aperture in degrees
    pub fn with_loop_aperture(mut self, degrees: f32) -> Self {
        self.loop_aperture = degrees;
        self
    }

    /// Set the self-loop midpoint distance
    pub fn with_loop_distance(mut self, distance: f32) -> Self {
        self.loop_distance = distance;
        self
    }

    /// Validates the values and produces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an aperture is outside `(0, 360)` degrees or
    /// a length is not finite and strictly positive.
    pub fn build(self) -> Result<RouterConfig, ConfigError> {
        Ok(RouterConfig {
            fork_aperture: require_open_range("fork_aperture", self.fork_aperture, 0.0, 360.0)?
                .to_radians(),
            fork_length: require_positive("fork_length", self.fork_length)?,
            loop_aperture: require_open_range("loop_aperture", self.loop_aperture, 0.0, 360.0)?
                .to_radians(),
            loop_distance: require_positive("loop_distance", self.loop_distance)?,
        })
    }
}

impl TryFrom<RouterConfigBuilder> for RouterConfig {
    type Error = ConfigError;

    fn try_from(builder: RouterConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
