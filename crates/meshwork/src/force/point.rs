//! Point masses integrated by the simulation.

use meshwork_core::geometry::Point;

use crate::force::ForceConfig;

/// Whether a point moves under the forces applied to it.
///
/// A fixed point still repels and attracts other points; only its own
/// integration step is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Motion {
    Free,
    Fixed,
}

/// Kinetic-energy proxy used by the stability test.
///
/// This is `mass * |velocity|²`, without the ½ factor of physical kinetic
/// energy; `min_energy_threshold` is calibrated against this value.
pub fn energy(mass: f32, velocity: Point) -> f32 {
    mass * velocity.hypot_squared()
}

/// Simulation state of one node.
#[derive(Debug, Clone)]
pub(super) struct PointMass {
    position: Point,
    velocity: Point,
    force: Point,
    mass: f32,
    motion: Motion,
}

impl PointMass {
    pub(super) fn new(position: Point, mass: f32, motion: Motion) -> Self {
        Self {
            position,
            velocity: Point::ZERO,
            force: Point::ZERO,
            mass,
            motion,
        }
    }

    pub(super) fn position(&self) -> Point {
        self.position
    }

    pub(super) fn velocity(&self) -> Point {
        self.velocity
    }

    pub(super) fn energy(&self) -> f32 {
        energy(self.mass, self.velocity)
    }

    /// Adds `force` to the accumulator for the current step.
    pub(super) fn apply_force(&mut self, force: Point) {
        self.force = self.force.add_point(force);
    }

    /// Turns the accumulated force into a velocity and moves the point.
    ///
    /// Uses the exact solution of a linearly damped system over one timestep,
    /// `v = F * (1 - e^(-dt * friction / mass)) / friction`, which stays
    /// bounded for any timestep. The accumulator is cleared in both motion
    /// states.
    pub(super) fn integrate(&mut self, config: &ForceConfig) {
        match self.motion {
            Motion::Free => {
                let damping = 1.0
                    - (-config.delta_time() * config.friction() / self.mass).exp();
                self.velocity = self
                    .force
                    .scale(damping / config.friction())
                    .clamp_length(config.max_speed());
                self.position = self
                    .position
                    .add_point(self.velocity.scale(config.delta_time()));
            }
            Motion::Fixed => {
                self.velocity = Point::ZERO;
            }
        }
        self.force = Point::ZERO;
    }
}
