//! graphwalk — deterministic weighted graph generation with a step-by-step
//! Prim-style traversal.
//!
//! An LCG-seeded generator derives symmetric adjacency and weight matrices,
//! the layout places the vertices on a circle with the last one at its
//! center, and a greedy walk claims the cheapest edge out of the visited set
//! one step at a time. Rendering is expressed as draw commands consumed by a
//! backend (SVG ships in-crate).

pub mod cli;
pub mod graph;
pub mod layout;
pub mod render;
pub mod rng;
pub mod trace;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{ChosenEdge, GraphGenerator, GreedyWalk, StepOutcome, WeightedGraph};
pub use layout::{circular_layout, CanvasGeometry, Point};
pub use render::{DrawCommand, RenderOptions, SceneRenderer, SvgCanvas};
pub use rng::Lcg;
pub use trace::{ConsoleTrace, MemoryTrace, TraceSink};
pub use types::{GraphConfig, Matrix, WalkError, WalkResult, DEFAULT_SEED};
