//! Example: Laying out a small power network
//!
//! This example builds a graph programmatically, anchors one node, runs the
//! simulate → route pipeline and prints where everything ended up.

use meshwork::{
    NetworkLayout,
    config::AppConfig,
    force::ForceConfig,
    geometry::Point,
    routing::RouterConfig,
    structure::{Graph, SpringSpec},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building network graph...\n");

    let mut graph = Graph::new();

    // Substations, the plant is heavier so it moves less when not fixed
    graph.add_node_with_mass("plant", 3.0)?;
    for name in ["north", "east", "south", "west"] {
        graph.add_node(name);
    }

    // A doubled feeder from the plant fans out as a bundle
    let feeder = SpringSpec::new(2.0, 100.0)?;
    graph.add_edge_with_spring("feeder-a", "plant", "north", feeder)?;
    graph.add_edge_with_spring("feeder-b", "north", "plant", feeder)?;

    // The ring
    graph.add_edge("ring-ne", "north", "east")?;
    graph.add_edge("ring-es", "east", "south")?;
    graph.add_edge("ring-sw", "south", "west")?;
    graph.add_edge("ring-wn", "west", "north")?;

    // Transformer bays drawn as self-loops
    graph.add_edge("bay-1", "south", "south")?;
    graph.add_edge("bay-2", "south", "south")?;

    // Narrower bundles than the defaults, drawn at a larger scale
    let config = AppConfig::new(
        ForceConfig::builder().with_max_steps(2000).build()?,
        RouterConfig::builder().with_fork_aperture(40.0).build()?,
    )
    .with_scale(120.0)?;

    let builder = NetworkLayout::new(config);
    let drawing = builder.run_with(&graph, |simulation| {
        simulation.fix("plant", Point::new(0.0, 0.0))
    })?;

    let layout = drawing.layout();
    println!(
        "Simulation finished after {} steps (stable: {})\n",
        layout.steps(),
        layout.is_stable()
    );

    println!("Nodes:");
    for (node, position) in layout.positions() {
        println!("  {node:>8}: ({:>7.3}, {:>7.3})", position.x(), position.y());
    }

    println!("\nEdges:");
    for (edge, route) in drawing.routes().iter() {
        let points: Vec<String> = route
            .polyline()
            .iter()
            .map(|point| format!("({:.2}, {:.2})", point.x(), point.y()))
            .collect();
        println!("  {edge:>8}: {}", points.join(" → "));
    }

    Ok(())
}
