//! The simulation loop.

use indexmap::IndexMap;
use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use meshwork_core::geometry::Point;

use crate::{
    error::MeshworkError,
    force::{
        ForceConfig,
        point::{Motion, PointMass},
        spring::{Spring, springs_from_graph},
    },
    structure::{Graph, Handle},
};

/// Seed of the generator that scatters nodes without an initial position.
const INITIAL_POSITION_SEED: u64 = 0x6d65_7368_776f_726b;

/// Offset keeping the Coulomb term finite when two points coincide.
const REPULSION_SOFTENING: f32 = 0.1;

/// Divisor turning the repulsion constant into the strength of the pull toward the origin.
const CENTER_PULL_DIVISOR: f32 = 200.0;

/// A configured force simulation over a borrowed graph.
///
/// Nodes start at the position returned by the initial-position supplier,
/// or at a reproducible pseudo-random position in `[0, 1)²`. Fixed nodes
/// keep their position for the whole run while still pushing and pulling
/// the others.
///
/// # Examples
///
/// ```
/// use meshwork::{
///     force::{ForceConfig, ForceSimulation},
///     geometry::Point,
///     structure::Graph,
/// };
///
/// let mut graph = Graph::new();
/// graph.add_node("a");
/// graph.add_node("b");
/// graph.add_edge("ab", "a", "b")?;
///
/// let config = ForceConfig::default();
/// let layout = ForceSimulation::new(&graph, &config)
///     .initial_positions(|node| (node == "b").then(|| Point::new(0.5, 0.5)))
///     .fix("a", Point::new(0.0, 0.0))?
///     .run();
///
/// assert_eq!(layout.position("a"), Some(Point::new(0.0, 0.0)));
/// # Ok::<(), meshwork::MeshworkError>(())
/// ```
#[derive(Debug)]
pub struct ForceSimulation<'g, N, E> {
    graph: &'g Graph<N, E>,
    config: ForceConfig,
    initial: IndexMap<N, Point>,
    fixed: IndexMap<N, Point>,
}

impl<'g, N: Handle, E: Handle> ForceSimulation<'g, N, E> {
    /// Create a simulation of `graph` with the given parameters
    pub fn new(graph: &'g Graph<N, E>, config: &ForceConfig) -> Self {
        Self {
            graph,
            config: *config,
            initial: IndexMap::new(),
            fixed: IndexMap::new(),
        }
    }

    /// Supplies starting positions.
    ///
    /// `supplier` is called once per node, in insertion order; nodes for which
    /// it returns `None` keep any position supplied earlier, or fall back to
    /// the seeded pseudo-random placement.
    pub fn initial_positions<F>(mut self, supplier: F) -> Self
    where
        F: Fn(N) -> Option<Point>,
    {
        for node in self.graph.nodes() {
            if let Some(position) = supplier(node) {
                self.initial.insert(node, position);
            }
        }
        self
    }

    /// Anchors `node` at `position` for the whole run.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Graph`] if `node` is not in the graph.
    pub fn fix(mut self, node: N, position: Point) -> Result<Self, MeshworkError> {
        if !self.graph.contains_node(node) {
            return Err(MeshworkError::Graph(format!(
                "cannot fix unknown node {node:?}"
            )));
        }
        self.fixed.insert(node, position);
        Ok(self)
    }

    /// Runs the simulation until it is stable or `max_steps` is reached.
    pub fn run(self) -> Layout<N> {
        let mut rng = StdRng::seed_from_u64(INITIAL_POSITION_SEED);
        let points: Vec<PointMass> = self
            .graph
            .nodes_with_mass()
            .map(|(node, mass)| {
                if let Some(&position) = self.fixed.get(&node) {
                    return PointMass::new(position, mass, Motion::Fixed);
                }
                let position = self
                    .initial
                    .get(&node)
                    .copied()
                    .unwrap_or_else(|| Point::new(rng.random(), rng.random()));
                PointMass::new(position, mass, Motion::Free)
            })
            .collect();
        let springs = springs_from_graph(self.graph);

        debug!(
            nodes = points.len(),
            springs = springs.len(),
            fixed = self.fixed.len(),
            max_steps = self.config.max_steps();
            "Starting force simulation"
        );

        let mut state = State {
            points,
            springs,
            config: self.config,
        };
        let (steps, stable) = state.run();
        let energy = state.max_energy();

        info!(steps, stable, energy; "Force simulation finished");

        let positions = self
            .graph
            .nodes()
            .zip(state.points.iter().map(PointMass::position))
            .collect();

        Layout {
            positions,
            steps,
            stable,
            energy,
        }
    }
}

/// Runs a simulation of `graph` with default starting positions and no fixed nodes.
pub fn simulate<N: Handle, E: Handle>(graph: &Graph<N, E>, config: &ForceConfig) -> Layout<N> {
    ForceSimulation::new(graph, config).run()
}

/// Mutable simulation state for one run.
struct State {
    points: Vec<PointMass>,
    springs: Vec<Spring>,
    config: ForceConfig,
}

impl State {
    /// Steps until stable or out of budget; returns steps taken and stability.
    fn run(&mut self) -> (usize, bool) {
        if self.points.is_empty() {
            return (0, true);
        }

        for step in 1..=self.config.max_steps() {
            self.step();
            if self.is_stable() {
                return (step, true);
            }
            trace!(step, energy = self.max_energy(); "Force simulation step");
        }
        (self.config.max_steps(), false)
    }

    /// One integration step. All forces are accumulated from the positions
    /// of the previous step before any point moves.
    fn step(&mut self) {
        self.apply_coulombs_law();
        self.apply_hookes_law();
        self.attract_to_center();
        for point in &mut self.points {
            point.integrate(&self.config);
        }
    }

    /// Every point pushes every other point away.
    fn apply_coulombs_law(&mut self) {
        let repulsion = self.config.repulsion();
        for i in 0..self.points.len() {
            for j in 0..self.points.len() {
                if i == j {
                    continue;
                }
                let distance = self.points[i]
                    .position()
                    .sub_point(self.points[j].position());
                let magnitude =
                    repulsion / (distance.hypot_squared() * 0.5 + REPULSION_SOFTENING);
                self.points[i].apply_force(distance.normalize().scale(magnitude));
            }
        }
    }

    /// Springs pull or push their endpoints toward the rest length.
    fn apply_hookes_law(&mut self) {
        for spring in &self.springs {
            let distance = self.points[spring.point2]
                .position()
                .sub_point(self.points[spring.point1].position());
            let displacement = spring.spec.rest_length() - distance.hypot();
            let force = distance
                .normalize()
                .scale(spring.spec.stiffness() * displacement * 0.5);

            self.points[spring.point1].apply_force(force.neg());
            self.points[spring.point2].apply_force(force);
        }
    }

    /// Pulls every point toward the origin so disconnected parts do not drift apart.
    fn attract_to_center(&mut self) {
        let strength = self.config.repulsion() / CENTER_PULL_DIVISOR;
        for point in &mut self.points {
            let pull = point.position().scale(-strength);
            point.apply_force(pull);
        }
    }

    fn is_stable(&self) -> bool {
        let threshold = self.config.min_energy_threshold();
        self.points.iter().all(|point| point.energy() < threshold)
    }

    fn max_energy(&self) -> f32 {
        self.points
            .iter()
            .map(PointMass::energy)
            .fold(0.0, f32::max)
    }
}

/// Final node positions of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<N: Handle> {
    positions: IndexMap<N, Point>,
    steps: usize,
    stable: bool,
    energy: f32,
}

impl<N: Handle> Layout<N> {
    /// Position of `node`, or `None` if the node was not part of the simulated graph.
    pub fn position(&self, node: N) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    /// All positions, in node insertion order
    pub fn positions(&self) -> &IndexMap<N, Point> {
        &self.positions
    }

    /// Number of integration steps executed
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` if the run stopped because every point's energy fell below the threshold
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Highest per-point energy after the last step
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Multiplies every position by `factor`, keeping the run statistics.
    pub fn scaled(mut self, factor: f32) -> Self {
        for position in self.positions.values_mut() {
            *position = position.scale(factor);
        }
        self
    }

    /// Consumes the layout, returning the positions.
    pub fn into_positions(self) -> IndexMap<N, Point> {
        self.positions
    }
}
