//! The routing pass over a laid-out graph.

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;
use log::{debug, info};

use meshwork_core::geometry::Point;

use crate::{
    error::MeshworkError,
    force::Layout,
    routing::{
        RouterConfig,
        bundle::route_bundle,
        loops::{place_loops, route_loop},
        route::{RoutedEdge, Routes},
    },
    structure::{EdgeGroups, Graph, Handle},
};

/// Source of node positions for the router.
///
/// Implemented for the simulator's [`Layout`] and for hash maps keyed by
/// node handle, so positions can come from a simulation or from the caller.
pub trait PositionLookup<N> {
    /// Position of `node`, or `None` if it has none.
    fn position_of(&self, node: N) -> Option<Point>;
}

impl<N: Handle> PositionLookup<N> for Layout<N> {
    fn position_of(&self, node: N) -> Option<Point> {
        self.position(node)
    }
}

impl<N: Eq + Hash, S: BuildHasher> PositionLookup<N> for IndexMap<N, Point, S> {
    fn position_of(&self, node: N) -> Option<Point> {
        self.get(&node).copied()
    }
}

impl<N: Eq + Hash, S: BuildHasher> PositionLookup<N> for HashMap<N, Point, S> {
    fn position_of(&self, node: N) -> Option<Point> {
        self.get(&node).copied()
    }
}

/// Computes drawable point lists for every edge of a graph.
///
/// Routing is a pure function of the positions, the graph topology and the
/// configuration; a router can be reused across graphs.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use meshwork::{geometry::Point, routing::{Router, RouterConfig}, structure::Graph};
///
/// let mut graph = Graph::new();
/// graph.add_node("a");
/// graph.add_node("b");
/// graph.add_edge(1, "a", "b")?;
///
/// let positions = IndexMap::from([("a", Point::new(0.0, 0.0)), ("b", Point::new(2.0, 0.0))]);
/// let routes = Router::new(&RouterConfig::default()).route(&graph, &positions)?;
///
/// assert_eq!(routes.get(1).map(|r| r.midpoint()), Some(Point::new(1.0, 0.0)));
/// # Ok::<(), meshwork::MeshworkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    /// Create a router with the given parameters
    pub fn new(config: &RouterConfig) -> Self {
        Self { config: *config }
    }

    /// Routes every edge of `graph`.
    ///
    /// Non-loop edges are routed first, bundle by bundle. Their departure
    /// angles then decide where each node's self-loops go.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Routing`] if `positions` has no entry for a
    /// node that carries an edge.
    pub fn route<N, E, P>(
        &self,
        graph: &Graph<N, E>,
        positions: &P,
    ) -> Result<Routes<E>, MeshworkError>
    where
        N: Handle,
        E: Handle,
        P: PositionLookup<N>,
    {
        let groups = EdgeGroups::from_graph(graph);
        let mut routed: HashMap<E, RoutedEdge> = HashMap::with_capacity(graph.edge_count());
        let mut departures: IndexMap<N, Vec<f32>> = IndexMap::new();

        for bundle in groups.bundles() {
            let (node1, node2) = (bundle.node1(), bundle.node2());
            let start1 = position(positions, node1)?;
            let start2 = position(positions, node2)?;

            let routes = route_bundle(start1, start2, bundle.len(), &self.config);
            for (member, route) in bundle.members().iter().zip(routes) {
                departures
                    .entry(node1)
                    .or_default()
                    .push(start1.angle_to(route.after_start1()));
                departures
                    .entry(node2)
                    .or_default()
                    .push(start2.angle_to(route.after_start2()));

                let route = if member.is_reversed() {
                    route.swap_sides()
                } else {
                    route
                };
                routed.insert(member.edge(), route);
            }
        }

        for (node, loops) in groups.loops() {
            let center = position(positions, node)?;
            let edge_angles = departures.get(&node).map(Vec::as_slice).unwrap_or(&[]);
            let placement = place_loops(edge_angles, loops.len(), self.config.loop_aperture());
            debug!(
                node:?,
                loops = loops.len(),
                other_edges = edge_angles.len(),
                placement = placement.name();
                "Placed self-loops"
            );

            for (&edge, &angle) in loops.iter().zip(placement.angles()) {
                routed.insert(edge, route_loop(center, angle, &self.config));
            }
        }

        let routes: IndexMap<E, RoutedEdge> = graph
            .edges()
            .filter_map(|(edge, _)| routed.remove(&edge).map(|route| (edge, route)))
            .collect();

        info!(
            edges = routes.len(),
            bundles = groups.bundles().len(),
            loop_nodes = groups.loops().count();
            "Edges routed"
        );

        Ok(Routes::new(routes))
    }
}

/// Routes every edge of `graph` with the given parameters.
///
/// # Errors
///
/// See [`Router::route`].
pub fn route<N, E, P>(
    graph: &Graph<N, E>,
    positions: &P,
    config: &RouterConfig,
) -> Result<Routes<E>, MeshworkError>
where
    N: Handle,
    E: Handle,
    P: PositionLookup<N>,
{
    Router::new(config).route(graph, positions)
}

fn position<N, P>(positions: &P, node: N) -> Result<Point, MeshworkError>
where
    N: Handle,
    P: PositionLookup<N>,
{
    positions
        .position_of(node)
        .ok_or_else(|| MeshworkError::Routing(format!("node {node:?} has no position")))
}
