//! Undirected multigraph keyed by caller handles.
//!
//! Nodes and edges are stored in insertion order, which makes every pass of
//! the simulator and the router deterministic for a given construction
//! sequence.

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::{ConfigError, MeshworkError, require_non_negative, require_positive},
    structure::Handle,
};

/// Spring parameters attached to an edge.
///
/// The simulator turns each distinct node pair into one spring pulling its
/// endpoints toward `rest_length` apart with strength `stiffness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    rest_length: f32,
    stiffness: f32,
}

impl SpringSpec {
    /// Creates spring parameters, rejecting negative lengths and non-positive stiffness.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either value is not finite, `rest_length`
    /// is negative or `stiffness` is not strictly positive.
    pub fn new(rest_length: f32, stiffness: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            rest_length: require_non_negative("rest_length", rest_length)?,
            stiffness: require_positive("stiffness", stiffness)?,
        })
    }

    /// Desired distance between the two endpoints
    pub fn rest_length(self) -> f32 {
        self.rest_length
    }

    /// Spring coefficient
    pub fn stiffness(self) -> f32 {
        self.stiffness
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            rest_length: 1.0,
            stiffness: 100.0,
        }
    }
}

/// An edge between two nodes. `node1 == node2` for a self-loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<N> {
    node1: N,
    node2: N,
    spring: SpringSpec,
}

impl<N: Handle> Edge<N> {
    /// First endpoint, the start of side 1 when routed
    pub fn node1(&self) -> N {
        self.node1
    }

    /// Second endpoint, the start of side 2 when routed
    pub fn node2(&self) -> N {
        self.node2
    }

    /// Spring parameters used by the simulator
    pub fn spring(&self) -> SpringSpec {
        self.spring
    }

    /// Returns `true` if both endpoints are the same node
    pub fn is_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Returns `true` if `node` is one of the endpoints
    pub fn touches(&self, node: N) -> bool {
        self.node1 == node || self.node2 == node
    }
}

/// Node and edge storage for a network diagram.
///
/// The graph is undirected for layout purposes, allows parallel edges
/// between the same pair of nodes and allows self-loops.
///
/// # Examples
///
/// ```
/// use meshwork::structure::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_node("north");
/// graph.add_node("south");
/// graph.add_edge("line-1", "north", "south")?;
/// graph.add_edge("line-2", "north", "south")?;
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), meshwork::MeshworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: IndexMap<N, f32>,
    edges: IndexMap<E, Edge<N>>,
}

impl<N: Handle, E: Handle> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Handle, E: Handle> Graph<N, E> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Adds a node with unit mass.
    ///
    /// If the node already exists its mass is reset to 1.0; its position in
    /// the iteration order is kept.
    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node, 1.0);
    }

    /// Adds a node with the given mass.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Graph`] if `mass` is not finite or not
    /// strictly positive.
    pub fn add_node_with_mass(&mut self, node: N, mass: f32) -> Result<(), MeshworkError> {
        let mass = require_positive("mass", mass)
            .map_err(|err| MeshworkError::Graph(format!("node {node:?}: {err}")))?;
        self.nodes.insert(node, mass);
        Ok(())
    }

    /// Adds an edge with default spring parameters.
    ///
    /// # Errors
    ///
    /// See [`Graph::add_edge_with_spring`].
    pub fn add_edge(&mut self, edge: E, node1: N, node2: N) -> Result<(), MeshworkError> {
        self.add_edge_with_spring(edge, node1, node2, SpringSpec::default())
    }

    /// Adds an edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Graph`] if either endpoint is not in the graph
    /// or if an edge with the same handle already exists.
    pub fn add_edge_with_spring(
        &mut self,
        edge: E,
        node1: N,
        node2: N,
        spring: SpringSpec,
    ) -> Result<(), MeshworkError> {
        for node in [node1, node2] {
            if !self.nodes.contains_key(&node) {
                return Err(MeshworkError::Graph(format!(
                    "edge {edge:?} references unknown node {node:?}"
                )));
            }
        }
        if self.edges.contains_key(&edge) {
            return Err(MeshworkError::Graph(format!(
                "edge {edge:?} is already in the graph"
            )));
        }

        trace!(edge:?, node1:?, node2:?; "Adding edge");
        self.edges.insert(
            edge,
            Edge {
                node1,
                node2,
                spring,
            },
        );
        Ok(())
    }

    /// Returns the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges in the graph, loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node exists in the graph.
    pub fn contains_node(&self, node: N) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Position of a node in the insertion order.
    pub(crate) fn node_index(&self, node: N) -> Option<usize> {
        self.nodes.get_index_of(&node)
    }

    /// Returns the mass of a node, if it exists.
    pub fn mass(&self, node: N) -> Option<f32> {
        self.nodes.get(&node).copied()
    }

    /// Returns the edge data for a handle, if it exists.
    pub fn edge(&self, edge: E) -> Option<&Edge<N>> {
        self.edges.get(&edge)
    }

    /// Iterates over node handles in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.keys().copied()
    }

    /// Iterates over nodes and their masses in insertion order.
    pub fn nodes_with_mass(&self) -> impl Iterator<Item = (N, f32)> + '_ {
        self.nodes.iter().map(|(node, mass)| (*node, *mass))
    }

    /// Iterates over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (E, &Edge<N>)> + '_ {
        self.edges.iter().map(|(handle, edge)| (*handle, edge))
    }

    /// Iterates over the edges touching `node`, loops included.
    pub fn incident_edges(&self, node: N) -> impl Iterator<Item = E> + '_ {
        self.edges
            .iter()
            .filter(move |(_, edge)| edge.touches(node))
            .map(|(handle, _)| *handle)
    }
}
