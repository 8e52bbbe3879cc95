//! Draw-command renderer — the core emits commands, backends own pixels.

pub mod svg;

pub use svg::SvgCanvas;

use serde::Serialize;

use crate::graph::{ChosenEdge, WeightedGraph};
use crate::layout::{CanvasGeometry, Point};
use crate::types::{WalkError, WalkResult};

/// Radius of a drawn vertex circle.
pub const VERTEX_RADIUS: f64 = 40.0;

/// Horizontal offset of a self-loop arc from its vertex.
pub const LOOP_OFFSET: f64 = 32.0;

/// Vertical lift of a self-loop arc above its vertex.
pub const LOOP_LIFT: f64 = 15.0;

/// Radius of a self-loop arc.
pub const LOOP_RADIUS: f64 = 20.0;

/// Default edge stroke.
pub const EDGE_COLOR: &str = "green";

/// Stroke for edges claimed by the walk.
pub const WALK_COLOR: &str = "white";

/// Vertex fill.
pub const VERTEX_COLOR: &str = "#FF5733";

/// One drawing instruction for a 2D backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Filled circle with a centered 1-based numeric label.
    Vertex {
        index: usize,
        at: Point,
        radius: f64,
        fill: String,
        label: String,
    },
    /// Straight edge with its weight label at the midpoint.
    Edge {
        from: Point,
        to: Point,
        stroke: String,
        width: f64,
        label: String,
        label_at: Point,
    },
    /// Self-loop arc beside a vertex, weight label past the arc.
    SelfLoop {
        at: Point,
        radius: f64,
        stroke: String,
        width: f64,
        label: String,
        label_at: Point,
    },
}

/// Styling and iteration options for one scene pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Edge stroke color.
    pub edge_stroke: String,
    /// Edge stroke width.
    pub edge_width: f64,
    /// Vertex fill color.
    pub vertex_fill: String,
    /// Upper bound on the start index of emitted edges. `None` draws every
    /// edge; `Some(k)` skips edges whose lower endpoint exceeds `k`,
    /// reproducing the historical rim-bounded iteration.
    pub edge_start_limit: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            edge_stroke: EDGE_COLOR.to_string(),
            edge_width: 1.0,
            vertex_fill: VERTEX_COLOR.to_string(),
            edge_start_limit: None,
        }
    }
}

impl RenderOptions {
    /// Options for re-stroking an edge claimed by the walk.
    pub fn walk_highlight() -> Self {
        Self {
            edge_stroke: WALK_COLOR.to_string(),
            edge_width: 2.0,
            ..Self::default()
        }
    }
}

/// Emits draw commands for a graph laid out on a canvas.
pub struct SceneRenderer<'a> {
    graph: &'a WeightedGraph,
    layout: &'a [Point],
    geometry: CanvasGeometry,
}

impl<'a> SceneRenderer<'a> {
    /// Borrow graph and layout; the layout must hold one point per vertex.
    pub fn new(
        graph: &'a WeightedGraph,
        layout: &'a [Point],
        geometry: CanvasGeometry,
    ) -> WalkResult<Self> {
        if layout.len() != graph.vertex_count() {
            return Err(WalkError::SizeMismatch {
                expected: graph.vertex_count(),
                got: layout.len(),
            });
        }
        Ok(Self {
            graph,
            layout,
            geometry,
        })
    }

    /// Commands for the full initial scene: every edge once, then every
    /// vertex on top.
    pub fn draw_graph(&self, opts: &RenderOptions) -> Vec<DrawCommand> {
        let n = self.graph.vertex_count();
        let mut commands = Vec::new();
        for i in 0..n {
            for j in i..n {
                if let Some(command) = self.edge_command(i, j, opts) {
                    commands.push(command);
                }
            }
        }
        for index in 0..n {
            commands.push(self.vertex_command(index, opts));
        }
        commands
    }

    /// Commands highlighting one claimed walk edge: the edge re-stroked plus
    /// both endpoint vertices re-drawn on top of it.
    pub fn draw_step(&self, edge: &ChosenEdge, opts: &RenderOptions) -> Vec<DrawCommand> {
        let (i, j) = if edge.from > edge.to {
            (edge.to, edge.from)
        } else {
            (edge.from, edge.to)
        };
        let mut commands = Vec::new();
        if let Some(command) = self.edge_command(i, j, opts) {
            commands.push(command);
        }
        commands.push(self.vertex_command(i, opts));
        if j != i {
            commands.push(self.vertex_command(j, opts));
        }
        commands
    }

    fn vertex_command(&self, index: usize, opts: &RenderOptions) -> DrawCommand {
        DrawCommand::Vertex {
            index,
            at: self.layout[index],
            radius: VERTEX_RADIUS,
            fill: opts.vertex_fill.clone(),
            label: (index + 1).to_string(),
        }
    }

    /// `None` when `(i, j)` carries no edge or the start index falls outside
    /// the configured bound. Callers pass `i <= j`.
    fn edge_command(&self, i: usize, j: usize, opts: &RenderOptions) -> Option<DrawCommand> {
        if i > j || !self.graph.has_edge(i, j) {
            return None;
        }
        if let Some(limit) = opts.edge_start_limit {
            if i > limit {
                return None;
            }
        }
        let label = self.graph.weight(i, j).to_string();
        let a = self.layout[i];
        if i == j {
            // The arc leans toward the nearer side of the canvas.
            let offset = if a.x > self.geometry.width / 2.0 {
                LOOP_OFFSET
            } else {
                -LOOP_OFFSET
            };
            let at = Point {
                x: a.x + offset,
                y: a.y - LOOP_LIFT,
            };
            Some(DrawCommand::SelfLoop {
                at,
                radius: LOOP_RADIUS,
                stroke: opts.edge_stroke.clone(),
                width: opts.edge_width,
                label,
                label_at: Point {
                    x: at.x + offset,
                    y: at.y,
                },
            })
        } else {
            let b = self.layout[j];
            Some(DrawCommand::Edge {
                from: a,
                to: b,
                stroke: opts.edge_stroke.clone(),
                width: opts.edge_width,
                label,
                label_at: Point {
                    x: (a.x + b.x) / 2.0,
                    y: (a.y + b.y) / 2.0,
                },
            })
        }
    }
}
