//! Graph description files.
//!
//! A graph file lists nodes and edges as TOML arrays of tables:
//!
//! ```toml
//! [[nodes]]
//! id = "plant"
//! position = [0.0, 0.0]
//! fixed = true
//!
//! [[nodes]]
//! id = "city"
//! mass = 2.0
//!
//! [[edges]]
//! id = "line-1"
//! from = "plant"
//! to = "city"
//! length = 3.0
//! ```
//!
//! Node and edge ids become the graph handles, so they borrow from the
//! parsed file. Positions and lengths are in simulation units; the layout
//! file holds positions multiplied by the configured `scale`.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use meshwork::{
    MeshworkError,
    force::ForceSimulation,
    geometry::Point,
    structure::{Graph, SpringSpec},
};

use crate::error::CliError;

/// A parsed graph file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeEntry>,

    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeEntry {
    id: String,
    mass: Option<f32>,
    position: Option<[f32; 2]>,
    #[serde(default)]
    fixed: bool,
}

impl NodeEntry {
    fn position(&self) -> Option<Point> {
        self.position.map(|[x, y]| Point::new(x, y))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    id: String,
    from: String,
    to: String,
    length: Option<f32>,
    stiffness: Option<f32>,
}

impl EdgeEntry {
    fn spring(&self) -> Result<SpringSpec, MeshworkError> {
        let default = SpringSpec::default();
        SpringSpec::new(
            self.length.unwrap_or(default.rest_length()),
            self.stiffness.unwrap_or(default.stiffness()),
        )
        .map_err(|err| MeshworkError::Graph(format!("edge `{}`: {err}", self.id)))
    }
}

impl GraphFile {
    /// Parses a graph file, keeping `src` for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InputParse`] if `src` is not a valid graph file.
    pub fn parse(path: &Path, src: &str) -> Result<Self, CliError> {
        toml::from_str(src).map_err(|err| CliError::InputParse {
            path: path.to_path_buf(),
            src: src.to_string(),
            err,
        })
    }

    /// Builds the graph described by the file.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Graph`] for duplicate node ids, invalid
    /// masses or spring parameters, and edges that reference unknown nodes
    /// or reuse an edge id.
    pub fn to_graph(&self) -> Result<Graph<&str, &str>, MeshworkError> {
        let mut graph = Graph::new();

        for node in &self.nodes {
            let id = node.id.as_str();
            if graph.contains_node(id) {
                return Err(MeshworkError::Graph(format!("duplicate node `{id}`")));
            }
            match node.mass {
                Some(mass) => graph.add_node_with_mass(id, mass)?,
                None => graph.add_node(id),
            }
        }

        for edge in &self.edges {
            graph.add_edge_with_spring(
                edge.id.as_str(),
                edge.from.as_str(),
                edge.to.as_str(),
                edge.spring()?,
            )?;
        }

        Ok(graph)
    }

    /// Applies the file's starting positions and fixed nodes to a simulation.
    ///
    /// # Errors
    ///
    /// Returns [`MeshworkError::Graph`] if a fixed node has no position.
    pub fn prepare<'g, 'f>(
        &'f self,
        simulation: ForceSimulation<'g, &'f str, &'f str>,
    ) -> Result<ForceSimulation<'g, &'f str, &'f str>, MeshworkError> {
        let starts: IndexMap<&str, Point> = self
            .nodes
            .iter()
            .filter_map(|node| Some((node.id.as_str(), node.position()?)))
            .collect();
        let simulation = simulation.initial_positions(|id| starts.get(id).copied());

        self.nodes
            .iter()
            .filter(|node| node.fixed)
            .try_fold(simulation, |simulation, node| {
                let position = node.position().ok_or_else(|| {
                    MeshworkError::Graph(format!("fixed node `{}` has no position", node.id))
                })?;
                simulation.fix(node.id.as_str(), position)
            })
    }
}

#[cfg(test)]
mod tests {
    use meshwork::force::ForceConfig;

    use super::*;

    fn parse(src: &str) -> GraphFile {
        GraphFile::parse(Path::new("test.toml"), src).expect("Failed to parse graph file")
    }

    #[test]
    fn test_graph_from_file() {
        let file = parse(
            r#"
            [[nodes]]
            id = "a"

            [[nodes]]
            id = "b"
            mass = 3.0

            [[edges]]
            id = "ab"
            from = "a"
            to = "b"
            length = 4.0

            [[edges]]
            id = "bb"
            from = "b"
            to = "b"
            "#,
        );

        let graph = file.to_graph().unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.mass("b"), Some(3.0));
        assert_eq!(graph.edge("ab").unwrap().spring().rest_length(), 4.0);
        assert_eq!(graph.edge("ab").unwrap().spring().stiffness(), 100.0);
        assert!(graph.edge("bb").unwrap().is_loop());
    }

    #[test]
    fn test_empty_file() {
        let parsed = parse("");
        let graph = parsed.to_graph().unwrap();
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_syntax_error_keeps_source() {
        let result = GraphFile::parse(Path::new("bad.toml"), "[[nodes]]\nid = ");

        let Err(CliError::InputParse { src, err, .. }) = result else {
            panic!("expected a parse error");
        };
        assert_eq!(src, "[[nodes]]\nid = ");
        assert!(err.span().is_some());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GraphFile::parse(Path::new("bad.toml"), "[[nodes]]\nid = \"a\"\ncolor = 1\n");
        assert!(matches!(result, Err(CliError::InputParse { .. })));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let file = parse("[[nodes]]\nid = \"a\"\n\n[[nodes]]\nid = \"a\"\n");
        assert!(matches!(file.to_graph(), Err(MeshworkError::Graph(_))));
    }

    #[test]
    fn test_edge_to_unknown_node_rejected() {
        let file = parse("[[nodes]]\nid = \"a\"\n\n[[edges]]\nid = \"e\"\nfrom = \"a\"\nto = \"z\"\n");
        assert!(matches!(file.to_graph(), Err(MeshworkError::Graph(_))));
    }

    #[test]
    fn test_invalid_spring_rejected() {
        let file = parse(
            "[[nodes]]\nid = \"a\"\n\n[[edges]]\nid = \"e\"\nfrom = \"a\"\nto = \"a\"\nstiffness = 0.0\n",
        );
        let err = file.to_graph().unwrap_err();
        assert!(err.to_string().contains("stiffness"), "unexpected message: {err}");
    }

    #[test]
    fn test_prepare_fixes_and_places_nodes() {
        let file = parse(
            r#"
            [[nodes]]
            id = "anchor"
            position = [5.0, -5.0]
            fixed = true

            [[nodes]]
            id = "free"
            position = [1.0, 1.0]
            "#,
        );
        let graph = file.to_graph().unwrap();
        let config = ForceConfig::builder().with_max_steps(0).build().unwrap();

        let layout = file
            .prepare(ForceSimulation::new(&graph, &config))
            .unwrap()
            .run();

        assert_eq!(layout.position("anchor"), Some(Point::new(5.0, -5.0)));
        assert_eq!(layout.position("free"), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_fixed_node_without_position_rejected() {
        let file = parse("[[nodes]]\nid = \"a\"\nfixed = true\n");
        let graph = file.to_graph().unwrap();
        let config = ForceConfig::default();

        let result = file.prepare(ForceSimulation::new(&graph, &config));
        assert!(matches!(result, Err(MeshworkError::Graph(_))));
    }
}
