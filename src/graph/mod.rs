//! Graph construction and traversal.

pub mod generator;
pub mod traversal;
pub mod weighted_graph;

pub use generator::GraphGenerator;
pub use traversal::{ChosenEdge, GreedyWalk, StepOutcome};
pub use weighted_graph::WeightedGraph;
