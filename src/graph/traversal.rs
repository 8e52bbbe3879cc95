//! Greedy nearest-expansion traversal (Prim-style).

use log::debug;
use serde::Serialize;

use super::WeightedGraph;

/// One edge claimed by the walk: `from` was already visited, `to` is new.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChosenEdge {
    /// Visited endpoint the edge was reached from.
    pub from: usize,
    /// Newly visited endpoint.
    pub to: usize,
    /// Weight of the claimed edge.
    pub weight: u32,
}

/// Result of one [`GreedyWalk::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new vertex was reached over this edge.
    Advanced(ChosenEdge),
    /// No positive-weight edge leads out of the visited set; the walk is
    /// terminal and every further call returns this again.
    Exhausted,
}

/// Incremental greedy walk over an immutable graph.
///
/// Seeds the visited set with the graph's first connected vertex and, per
/// step, claims the cheapest positive-weight edge from a visited vertex to
/// an unvisited one. Ties break on the lowest vertex index, then the lowest
/// neighbor index, so a given graph always replays the same walk.
pub struct GreedyWalk<'a> {
    graph: &'a WeightedGraph,
    visited: Vec<usize>,
    is_visited: Vec<bool>,
    chosen: Vec<ChosenEdge>,
    total_weight: u64,
    terminal: bool,
}

impl<'a> GreedyWalk<'a> {
    /// Start a walk seeded with the graph's first connected vertex
    /// (vertex 0 when the graph has no edges at all).
    pub fn new(graph: &'a WeightedGraph) -> Self {
        let n = graph.vertex_count();
        let mut visited = Vec::new();
        let mut is_visited = vec![false; n];
        if n > 0 {
            let seed = graph.first_connected_vertex().unwrap_or(0);
            is_visited[seed] = true;
            visited.push(seed);
        }
        Self {
            graph,
            visited,
            is_visited,
            chosen: Vec::new(),
            total_weight: 0,
            terminal: n == 0,
        }
    }

    /// Claim the next cheapest edge out of the visited set.
    ///
    /// Scans visited vertices in ascending index order and each weight row in
    /// ascending column order; the strict comparison keeps the first-seen
    /// pair on equal weights.
    pub fn advance(&mut self) -> StepOutcome {
        if self.terminal {
            return StepOutcome::Exhausted;
        }

        let mut best: Option<ChosenEdge> = None;
        for from in 0..self.graph.vertex_count() {
            if !self.is_visited[from] {
                continue;
            }
            for (to, &weight) in self.graph.weight_row(from).iter().enumerate() {
                if weight == 0 || self.is_visited[to] {
                    continue;
                }
                if best.map_or(true, |b| weight < b.weight) {
                    best = Some(ChosenEdge { from, to, weight });
                }
            }
        }

        match best {
            Some(edge) => {
                self.is_visited[edge.to] = true;
                self.visited.push(edge.to);
                self.total_weight += u64::from(edge.weight);
                self.chosen.push(edge);
                debug!(
                    "step {}: {} -> {} (weight {}, total {})",
                    self.chosen.len(),
                    edge.from,
                    edge.to,
                    edge.weight,
                    self.total_weight
                );
                StepOutcome::Advanced(edge)
            }
            None => {
                self.terminal = true;
                StepOutcome::Exhausted
            }
        }
    }

    /// Drive [`advance`] until exhaustion; returns the number of edges
    /// claimed by this call.
    ///
    /// [`advance`]: GreedyWalk::advance
    pub fn run_to_end(&mut self) -> usize {
        let before = self.chosen.len();
        while let StepOutcome::Advanced(_) = self.advance() {}
        self.chosen.len() - before
    }

    /// Vertices in visit order, the seed first.
    pub fn visited(&self) -> &[usize] {
        &self.visited
    }

    /// Edges in the order they were claimed.
    pub fn chosen_edges(&self) -> &[ChosenEdge] {
        &self.chosen
    }

    /// Sum of claimed edge weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// True once no further vertex can be reached.
    pub fn is_terminal(&self) -> bool {
        self.terminal || self.is_complete()
    }

    /// True when every vertex has been visited.
    pub fn is_complete(&self) -> bool {
        self.visited.len() == self.graph.vertex_count()
    }
}
