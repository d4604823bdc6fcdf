//! Edge multiplicity classification.
//!
//! The router draws an edge differently depending on how many siblings it
//! has: a lone edge is a straight line, edges sharing a node pair fan out as
//! a bundle, and self-loops are spread around their node. [`EdgeGroups`]
//! computes that classification once from a [`Graph`].

use indexmap::IndexMap;

use crate::structure::{Graph, Handle};

/// An edge inside a [`Bundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleMember<E> {
    edge: E,
    reversed: bool,
}

impl<E: Handle> BundleMember<E> {
    /// The edge handle
    pub fn edge(&self) -> E {
        self.edge
    }

    /// Returns `true` if the edge runs from the bundle's `node2` to its `node1`
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// All non-loop edges between one unordered pair of nodes.
///
/// The bundle's orientation is that of its first edge; later edges stored in
/// the opposite direction are flagged as reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle<N, E> {
    node1: N,
    node2: N,
    members: Vec<BundleMember<E>>,
}

impl<N: Handle, E: Handle> Bundle<N, E> {
    /// First node of the bundle orientation
    pub fn node1(&self) -> N {
        self.node1
    }

    /// Second node of the bundle orientation
    pub fn node2(&self) -> N {
        self.node2
    }

    /// Edges of the bundle in insertion order
    pub fn members(&self) -> &[BundleMember<E>] {
        &self.members
    }

    /// Number of edges in the bundle
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Bundles are never empty; provided for API completeness
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` if the pair is joined by exactly one edge
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }
}

/// Edges of a graph grouped by multiplicity.
///
/// # Examples
///
/// ```
/// use meshwork::structure::{EdgeGroups, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_node('a');
/// graph.add_node('b');
/// graph.add_edge(1, 'a', 'b')?;
/// graph.add_edge(2, 'b', 'a')?;
/// graph.add_edge(3, 'a', 'a')?;
///
/// let groups = EdgeGroups::from_graph(&graph);
/// assert_eq!(groups.bundles().len(), 1);
/// assert_eq!(groups.bundles()[0].len(), 2);
/// assert_eq!(groups.loops_at('a'), &[3]);
/// # Ok::<(), meshwork::MeshworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeGroups<N, E> {
    bundles: Vec<Bundle<N, E>>,
    loops: IndexMap<N, Vec<E>>,
}

impl<N: Handle, E: Handle> EdgeGroups<N, E> {
    /// Classifies every edge of `graph`.
    ///
    /// Bundles appear in the order their first edge was inserted, as do loop
    /// groups; edges inside a group keep insertion order.
    pub fn from_graph(graph: &Graph<N, E>) -> Self {
        let mut bundles: Vec<Bundle<N, E>> = Vec::new();
        let mut bundle_index: IndexMap<(N, N), usize> = IndexMap::new();
        let mut loops: IndexMap<N, Vec<E>> = IndexMap::new();

        for (handle, edge) in graph.edges() {
            let (node1, node2) = (edge.node1(), edge.node2());
            if edge.is_loop() {
                loops.entry(node1).or_default().push(handle);
                continue;
            }

            if let Some(&idx) = bundle_index.get(&(node1, node2)) {
                bundles[idx].members.push(BundleMember {
                    edge: handle,
                    reversed: false,
                });
            } else if let Some(&idx) = bundle_index.get(&(node2, node1)) {
                bundles[idx].members.push(BundleMember {
                    edge: handle,
                    reversed: true,
                });
            } else {
                bundle_index.insert((node1, node2), bundles.len());
                bundles.push(Bundle {
                    node1,
                    node2,
                    members: vec![BundleMember {
                        edge: handle,
                        reversed: false,
                    }],
                });
            }
        }

        Self { bundles, loops }
    }

    /// Non-loop edges grouped per node pair
    pub fn bundles(&self) -> &[Bundle<N, E>] {
        &self.bundles
    }

    /// Nodes carrying at least one self-loop, with their loops
    pub fn loops(&self) -> impl Iterator<Item = (N, &[E])> + '_ {
        self.loops.iter().map(|(node, edges)| (*node, edges.as_slice()))
    }

    /// Self-loops at `node`, empty if there are none
    pub fn loops_at(&self, node: N) -> &[E] {
        self.loops.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}
