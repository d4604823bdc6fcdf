//! Force simulation parameters.

use serde::Deserialize;

use crate::error::{ConfigError, require_non_negative, require_positive};

/// Validated parameters of the force simulation.
///
/// Every field has a default and can be overridden independently through
/// [`ForceConfigBuilder`]. Deserialising a `ForceConfig` runs the same
/// validation as [`ForceConfigBuilder::build`].
///
/// # Examples
///
/// ```
/// use meshwork::force::ForceConfig;
///
/// let config = ForceConfig::builder()
///     .with_max_steps(200)
///     .with_repulsion(400.0)
///     .build()?;
/// assert_eq!(config.max_steps(), 200);
/// assert_eq!(config.friction(), 500.0);
///
/// assert!(ForceConfig::builder().with_friction(0.0).build().is_err());
/// # Ok::<(), meshwork::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "ForceConfigBuilder")]
pub struct ForceConfig {
    max_steps: usize,
    min_energy_threshold: f32,
    delta_time: f32,
    repulsion: f32,
    friction: f32,
    max_speed: f32,
}

impl ForceConfig {
    /// Starts a builder initialised with the default values.
    pub fn builder() -> ForceConfigBuilder {
        ForceConfigBuilder::default()
    }

    /// Maximum number of integration steps before the run stops
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// The run is stable once every point's energy is below this value
    pub fn min_energy_threshold(&self) -> f32 {
        self.min_energy_threshold
    }

    /// Integration timestep
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Coulomb-law strength constant, also scales the pull toward the origin
    pub fn repulsion(&self) -> f32 {
        self.repulsion
    }

    /// Damping constant of the velocity update
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Upper bound on the magnitude of any velocity
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }
}

impl Default for ForceConfig {
    fn default() -> Self {
        let defaults = ForceConfigBuilder::default();
        Self {
            max_steps: defaults.max_steps,
            min_energy_threshold: defaults.min_energy_threshold,
            delta_time: defaults.delta_time,
            repulsion: defaults.repulsion,
            friction: defaults.friction,
            max_speed: defaults.max_speed,
        }
    }
}

/// Builder for [`ForceConfig`].
///
/// Also the serde representation of the configuration: missing fields take
/// their default values and unknown fields are rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForceConfigBuilder {
    max_steps: usize,
    min_energy_threshold: f32,
    delta_time: f32,
    repulsion: f32,
    friction: f32,
    max_speed: f32,
}

impl Default for ForceConfigBuilder {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            min_energy_threshold: 0.001,
            delta_time: 1.0,
            repulsion: 800.0,
            friction: 500.0,
            max_speed: 100.0,
        }
    }
}

impl ForceConfigBuilder {
    /// Set the maximum number of integration steps
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Set the stability threshold on per-point energy
    pub fn with_min_energy_threshold(mut self, threshold: f32) -> Self {
        self.min_energy_threshold = threshold;
        self
    }

    /// Set the integration timestep
    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.delta_time = delta_time;
        self
    }

    /// Set the repulsion constant
    pub fn with_repulsion(mut self, repulsion: f32) -> Self {
        self.repulsion = repulsion;
        self
    }

    /// Set the friction constant
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Set the speed limit
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Validates the values and produces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first field that is not finite,
    /// is negative where it must not be (`min_energy_threshold`, `repulsion`),
    /// or is not strictly positive where a division or a scale depends on it
    /// (`delta_time`, `friction`, `max_speed`).
    pub fn build(self) -> Result<ForceConfig, ConfigError> {
        Ok(ForceConfig {
            max_steps: self.max_steps,
            min_energy_threshold: require_non_negative(
                "min_energy_threshold",
                self.min_energy_threshold,
            )?,
            delta_time: require_positive("delta_time", self.delta_time)?,
            repulsion: require_non_negative("repulsion", self.repulsion)?,
            friction: require_positive("friction", self.friction)?,
            max_speed: require_positive("max_speed", self.max_speed)?,
        })
    }
}

impl TryFrom<ForceConfigBuilder> for ForceConfig {
    type Error = ConfigError;

    fn try_from(builder: ForceConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
