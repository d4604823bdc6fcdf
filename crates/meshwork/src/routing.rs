//! Edge geometry routing.
//!
//! Once nodes have positions, every edge is turned into two point lists that
//! meet at a shared midpoint:
//!
//! - a lone edge between two nodes is a straight line split at its middle;
//! - parallel edges between the same pair fan out across the fork aperture,
//!   each bent through a fork point near either node;
//! - self-loops are placed in the angular gaps left by the node's other
//!   edges (see [`place_loops`]) and drawn as a teardrop through two fork
//!   points.
//!
//! Routing never moves nodes and carries no state between calls.

mod bundle;
mod config;
mod loops;
mod route;
mod router;

pub use config::{RouterConfig, RouterConfigBuilder};
pub use loops::{LoopPlacement, place_loops};
pub use route::{RoutedEdge, Routes};
pub use router::{PositionLookup, Router, route};
