//! Springs between point masses.

use std::collections::HashSet;

use crate::structure::{Graph, Handle, SpringSpec};

/// A spring between two point masses, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Spring {
    pub(super) point1: usize,
    pub(super) point2: usize,
    pub(super) spec: SpringSpec,
}

/// Builds one spring per distinct node pair of `graph`.
///
/// Parallel edges collapse into the spring of the first edge inserted for
/// that pair; self-loops carry no geometric information and produce none.
/// Indices follow the graph's node insertion order.
pub(super) fn springs_from_graph<N: Handle, E: Handle>(graph: &Graph<N, E>) -> Vec<Spring> {
    let mut seen = HashSet::new();

    graph
        .edges()
        .filter(|(_, edge)| !edge.is_loop())
        .filter_map(|(_, edge)| {
            let point1 = graph.node_index(edge.node1())?;
            let point2 = graph.node_index(edge.node2())?;
            let key = (point1.min(point2), point1.max(point2));
            seen.insert(key).then_some(Spring {
                point1,
                point2,
                spec: edge.spring(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_loops_produce_no_spring() {
        let mut graph: Graph<u8, u8> = Graph::new();
        graph.add_node(0);
        graph.add_edge(1, 0, 0).unwrap();

        assert!(springs_from_graph(&graph).is_empty());
    }

    #[test]
    fn test_parallel_edges_deduplicated() {
        let mut graph: Graph<u8, u8> = Graph::new();
        graph.add_node(0);
        graph.add_node(1);
        graph.add_node(2);
        graph
            .add_edge_with_spring(10, 0, 1, SpringSpec::new(5.0, 10.0).unwrap())
            .unwrap();
        graph.add_edge(11, 1, 0).unwrap();
        graph.add_edge(12, 0, 1).unwrap();
        graph.add_edge(13, 1, 2).unwrap();

        let springs = springs_from_graph(&graph);
        assert_eq!(springs.len(), 2);
        assert_eq!((springs[0].point1, springs[0].point2), (0, 1));
        assert_eq!(springs[0].spec.rest_length(), 5.0);
        assert_eq!((springs[1].point1, springs[1].point2), (1, 2));
    }
}
