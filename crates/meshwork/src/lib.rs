//! Meshwork - automatic layout for network diagrams.
//!
//! A force-directed simulator places the nodes of an undirected multigraph,
//! then an edge router turns every edge, parallel edges and self-loops
//! included, into point lists a renderer can draw. The engine performs no
//! I/O; callers own graph construction and output.

pub mod config;
pub mod force;
pub mod routing;
pub mod structure;

mod error;

pub use meshwork_core::geometry;

pub use error::{ConfigError, MeshworkError};

use log::{debug, info};

use config::AppConfig;
use force::{ForceSimulation, Layout};
use routing::{Router, Routes};
use structure::{Graph, Handle};

/// Builder running the simulate → route pipeline over a graph.
///
/// # Examples
///
/// ```
/// use meshwork::{NetworkLayout, config::AppConfig, geometry::Point, structure::Graph};
///
/// let mut graph = Graph::new();
/// for node in ["plant", "north", "south"] {
///     graph.add_node(node);
/// }
/// graph.add_edge("feeder-1", "plant", "north")?;
/// graph.add_edge("feeder-2", "plant", "north")?;
/// graph.add_edge("tie", "north", "south")?;
/// graph.add_edge("bypass", "south", "south")?;
///
/// let builder = NetworkLayout::new(AppConfig::default());
/// let drawing = builder.run_with(&graph, |simulation| {
///     simulation.fix("plant", Point::new(0.0, 0.0))
/// })?;
///
/// assert_eq!(drawing.layout().position("plant"), Some(Point::new(0.0, 0.0)));
/// assert_eq!(drawing.routes().len(), 4);
///
/// // Or use default config
/// let drawing = NetworkLayout::default().run(&graph)?;
/// assert!(drawing.routes().get("bypass").is_some());
/// # Ok::<(), meshwork::MeshworkError>(())
/// ```
#[derive(Debug, Default)]
pub struct NetworkLayout {
    config: AppConfig,
}

impl NetworkLayout {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulation and routing settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Lays out `graph` from seeded starting positions with no fixed nodes.
    ///
    /// # Errors
    ///
    /// See [`NetworkLayout::run_with`].
    pub fn run<N: Handle, E: Handle>(
        &self,
        graph: &Graph<N, E>,
    ) -> Result<Drawing<N, E>, MeshworkError> {
        self.run_with(graph, Ok)
    }

    /// Lays out `graph` after `prepare` has configured the simulation.
    ///
    /// `prepare` receives the simulation before it runs, to supply starting
    /// positions or fix nodes in place. Those positions are in simulation
    /// units; the drawing holds them multiplied by [`AppConfig::scale`].
    ///
    /// # Errors
    ///
    /// Returns the error produced by `prepare`, or a
    /// [`MeshworkError::Routing`] error if routing fails.
    pub fn run_with<'g, N, E, F>(
        &self,
        graph: &'g Graph<N, E>,
        prepare: F,
    ) -> Result<Drawing<N, E>, MeshworkError>
    where
        N: Handle,
        E: Handle,
        F: FnOnce(ForceSimulation<'g, N, E>) -> Result<ForceSimulation<'g, N, E>, MeshworkError>,
    {
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Simulating node positions"
        );
        let simulation = prepare(ForceSimulation::new(graph, self.config.force()))?;
        let layout = simulation.run().scaled(self.config.scale());
        debug!(
            steps = layout.steps(),
            stable = layout.is_stable(),
            scale = self.config.scale();
            "Node positions computed"
        );

        let routes = Router::new(self.config.routing()).route(graph, &layout)?;
        debug!(routes = routes.len(); "Routing finished");

        Ok(Drawing { layout, routes })
    }
}

/// Node positions and edge routes of a laid-out graph, in drawing units.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing<N: Handle, E: Handle> {
    layout: Layout<N>,
    routes: Routes<E>,
}

impl<N: Handle, E: Handle> Drawing<N, E> {
    /// Returns the simulated node positions.
    pub fn layout(&self) -> &Layout<N> {
        &self.layout
    }

    /// Returns the routed edges.
    pub fn routes(&self) -> &Routes<E> {
        &self.routes
    }

    /// Consumes the drawing, returning positions and routes.
    pub fn into_parts(self) -> (Layout<N>, Routes<E>) {
        (self.layout, self.routes)
    }
}
