//! Force-directed placement of graph nodes.
//!
//! Nodes are simulated as point masses and edges as springs. Each step
//! accumulates three forces on every point, all computed from the positions
//! of the previous step:
//!
//! 1. Coulomb repulsion between every ordered pair of points
//! 2. Hooke attraction along each spring toward its rest length
//! 3. A pull toward the origin proportional to the distance from it
//!
//! Velocities are then updated with exponential damping, clamped to the
//! configured speed limit, and positions advance by one timestep. The run
//! stops at the first step where every point's [`energy`] is below the
//! threshold, or when the step budget is exhausted.
//!
//! Results are reproducible for a given graph, configuration and set of
//! initial positions on one platform. Summation order is fixed by node and
//! edge insertion order, but bit-identical output across platforms or other
//! implementations of the same equations is not guaranteed.

mod config;
mod point;
mod simulation;
mod spring;

pub use config::{ForceConfig, ForceConfigBuilder};
pub use point::energy;
pub use simulation::{ForceSimulation, Layout, simulate};
