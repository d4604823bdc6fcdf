//! Abstract graph model consumed by the layout engine.
//!
//! The engine never looks inside node or edge handles: callers key their own
//! entities (substations, buses, lines...) by any small copyable value and
//! receive results keyed by the same handles.
//!
//! - [`Graph`]: nodes with mass and edges with spring parameters
//! - [`EdgeGroups`]: edges classified into single edges, parallel bundles and
//!   self-loops, the view the router works from

mod graph;
mod groups;

pub use graph::{Edge, Graph, SpringSpec};
pub use groups::{Bundle, BundleMember, EdgeGroups};

use std::{fmt, hash::Hash};

/// Opaque identity of a node or an edge.
///
/// Implemented for every `Copy + Eq + Hash + Debug` type, so integers,
/// `&str` and small newtypes all work as handles.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

impl<T> Handle for T where T: Copy + Eq + Hash + fmt::Debug {}
