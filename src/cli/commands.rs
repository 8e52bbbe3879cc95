//! CLI command implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use crate::graph::{GraphGenerator, GreedyWalk, StepOutcome, WeightedGraph};
use crate::layout::{circular_layout, CanvasGeometry};
use crate::render::{RenderOptions, SceneRenderer, SvgCanvas};
use crate::trace::{ConsoleTrace, TraceSink};
use crate::types::{GraphConfig, WalkResult};

/// Derived parameters and counts for a configuration.
pub fn cmd_info(config: GraphConfig, json_out: bool) -> WalkResult<()> {
    let generator = GraphGenerator::new(config)?;
    let graph = generator.generate();

    if json_out {
        let info = json!({
            "seed": config.seed,
            "vertices": graph.vertex_count(),
            "density_factor": config.density_factor(),
            "edges": graph.edge_count(),
            "self_loops": graph.self_loop_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Seed: {}", config.seed);
        println!("Vertices: {}", graph.vertex_count());
        println!("Density factor: {:.3}", config.density_factor());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", graph.self_loop_count());
    }
    Ok(())
}

/// Print the generated adjacency and weight matrices.
pub fn cmd_generate(config: GraphConfig, json_out: bool) -> WalkResult<()> {
    let generator = GraphGenerator::new(config)?;
    let graph = generator.generate();

    if json_out {
        let out = json!({
            "adjacency": graph.adjacency().to_rows(),
            "weights": graph.weights().to_rows(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        let mut trace = ConsoleTrace::new();
        dump_matrices(&graph, &mut trace);
    }
    Ok(())
}

/// Matrix dump in the console trace layout.
fn dump_matrices(graph: &WeightedGraph, trace: &mut dyn TraceSink) {
    trace.line("Undirected graph matrix:");
    trace.line(&graph.adjacency().to_string());
    trace.line("Weight graph matrix:");
    trace.line(&graph.weights().to_string());
}

/// Run the greedy walk, printing one step at a time.
pub fn cmd_walk(
    config: GraphConfig,
    steps: Option<usize>,
    interactive: bool,
    json_out: bool,
) -> WalkResult<()> {
    let generator = GraphGenerator::new(config)?;
    let graph = generator.generate();
    let mut walk = GreedyWalk::new(&graph);
    let limit = steps.unwrap_or(usize::MAX);

    if json_out {
        let mut recorded = Vec::new();
        while recorded.len() < limit {
            match walk.advance() {
                StepOutcome::Advanced(edge) => recorded.push(edge),
                StepOutcome::Exhausted => break,
            }
        }
        let out = json!({
            "visited": walk.visited(),
            "steps": recorded,
            "total_weight": walk.total_weight(),
            "complete": walk.is_complete(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    let mut trace = ConsoleTrace::new();
    dump_matrices(&graph, &mut trace);

    let stdin = io::stdin();
    let mut taken = 0;
    while taken < limit {
        if interactive {
            print!("-- press Enter for the next step --");
            io::stdout().flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
        }
        match walk.advance() {
            StepOutcome::Advanced(edge) => {
                taken += 1;
                trace.value(&json!({
                    "step": taken,
                    "from": edge.from,
                    "to": edge.to,
                    "weight": edge.weight,
                }));
                trace.line("Visited vertices:");
                trace.value(&json!(walk.visited()));
                trace.line(&format!("Total weight: {}", walk.total_weight()));
            }
            StepOutcome::Exhausted => {
                trace.line("No unvisited vertex is reachable; walk finished.");
                break;
            }
        }
    }
    trace.line(&format!(
        "Walk covered {} of {} vertices with total weight {}",
        walk.visited().len(),
        graph.vertex_count(),
        walk.total_weight()
    ));
    Ok(())
}

/// Render the graph, optionally with the completed walk overlay, to an SVG
/// file.
pub fn cmd_render(
    config: GraphConfig,
    out: &Path,
    with_walk: bool,
    edge_start_limit: Option<usize>,
    json_out: bool,
) -> WalkResult<()> {
    let generator = GraphGenerator::new(config)?;
    let graph = generator.generate();
    let geometry = CanvasGeometry::default();
    let layout = circular_layout(graph.vertex_count(), &geometry);
    let renderer = SceneRenderer::new(&graph, &layout, geometry)?;

    let base = RenderOptions {
        edge_start_limit,
        ..RenderOptions::default()
    };
    let mut canvas = SvgCanvas::new(&geometry);
    canvas.draw_all(&renderer.draw_graph(&base));

    let mut steps_drawn = 0;
    if with_walk {
        let mut walk = GreedyWalk::new(&graph);
        walk.run_to_end();
        let highlight = RenderOptions {
            edge_start_limit,
            ..RenderOptions::walk_highlight()
        };
        for edge in walk.chosen_edges() {
            canvas.draw_all(&renderer.draw_step(edge, &highlight));
        }
        steps_drawn = walk.chosen_edges().len();
    }

    canvas.write_to_file(out)?;

    if json_out {
        let info = json!({
            "out": out.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "walk_steps": steps_drawn,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "Rendered {} vertices and {} edges to {}",
            graph.vertex_count(),
            graph.edge_count(),
            out.display()
        );
    }
    Ok(())
}
