//! Layout output files.
//!
//! The output mirrors the graph file: one table per node with its final
//! position and one table per edge with its two sides and midpoint, all as
//! `[x, y]` pairs.

use serde::Serialize;

use meshwork::{Drawing, geometry::Point};

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct LayoutFile<'a> {
    steps: usize,
    stable: bool,
    energy: f32,
    nodes: Vec<NodeOutput<'a>>,
    edges: Vec<EdgeOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct NodeOutput<'a> {
    id: &'a str,
    position: [f32; 2],
}

#[derive(Debug, Serialize)]
struct EdgeOutput<'a> {
    id: &'a str,
    midpoint: [f32; 2],
    side1: Vec<[f32; 2]>,
    side2: Vec<[f32; 2]>,
}

fn pair(point: Point) -> [f32; 2] {
    [point.x(), point.y()]
}

/// Renders a drawing as a TOML document.
///
/// # Errors
///
/// Returns [`CliError::Output`] if serialisation fails.
pub fn render<'a>(drawing: &Drawing<&'a str, &'a str>) -> Result<String, CliError> {
    let layout = drawing.layout();
    let file = LayoutFile {
        steps: layout.steps(),
        stable: layout.is_stable(),
        energy: layout.energy(),
        nodes: layout
            .positions()
            .iter()
            .map(|(id, position)| NodeOutput {
                id: *id,
                position: pair(*position),
            })
            .collect(),
        edges: drawing
            .routes()
            .iter()
            .map(|(id, route)| EdgeOutput {
                id,
                midpoint: pair(route.midpoint()),
                side1: route.side1().iter().copied().map(pair).collect(),
                side2: route.side2().iter().copied().map(pair).collect(),
            })
            .collect(),
    };

    toml::to_string(&file).map_err(|err| CliError::Output(err.to_string()))
}
