//! Random graph construction — the matrix pipeline.

use log::debug;

use crate::rng::Lcg;
use crate::types::{GraphConfig, Matrix, WalkResult};

use super::WeightedGraph;

/// Builds a [`WeightedGraph`] from a validated configuration.
///
/// Draws are consumed row-major, first one matrix of edge draws, then one
/// matrix of weight draws, so the output is fully determined by the seed.
pub struct GraphGenerator {
    config: GraphConfig,
}

impl GraphGenerator {
    /// Create a generator, failing fast on invalid parameters.
    pub fn new(config: GraphConfig) -> WalkResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Generate the graph. Infallible for a validated configuration.
    pub fn generate(&self) -> WeightedGraph {
        let n = self.config.vertex_count() as usize;
        let factor = self.config.density_factor();
        let mut rng = Lcg::new(self.config.seed);

        // Draws land in [0, 2); scaled by the sub-unit factor and floored
        // they collapse to 0 or 1.
        let raw = Matrix::from_fn(n, |_, _| (rng.next() * factor).floor() as u32);

        // An edge exists if either direction's draw produced one, which
        // makes the matrix symmetric and biases it toward connectivity.
        let adjacency = Matrix::from_fn(n, |i, j| raw.get(i, j).max(raw.get(j, i)));

        // Second pass of draws, unscaled, one per cell.
        let weight_draws: Vec<f64> = (0..n * n).map(|_| rng.next()).collect();

        // Integer weights on edges, zero elsewhere.
        let weighted = Matrix::from_fn(n, |i, j| {
            (weight_draws[i * n + j] * 100.0 * f64::from(adjacency.get(i, j))).ceil() as u32
        });

        let bin = Matrix::from_fn(n, |i, j| u32::from(weighted.get(i, j) > 0));

        // Always zero while the adjacency matrix is symmetric; still feeds
        // the blend below so a direction-skewed bin matrix would keep exactly
        // one canonical orientation.
        let asymmetry = Matrix::from_fn(n, |i, j| u32::from(bin.get(i, j) != bin.get(j, i)));
        let upper_triangular = Matrix::from_fn(n, |i, j| u32::from(i < j));

        let mut weights = Matrix::zeros(n);
        for i in 0..n {
            for j in i..n {
                let w = (bin.get(i, j) + asymmetry.get(i, j) * upper_triangular.get(i, j))
                    * weighted.get(i, j);
                weights.set(i, j, w);
                weights.set(j, i, w);
            }
        }

        let graph = WeightedGraph::new_unchecked(adjacency, weights);
        debug!(
            "generated graph: seed={} vertices={} edges={} self_loops={}",
            self.config.seed,
            n,
            graph.edge_count(),
            graph.self_loop_count()
        );
        graph
    }
}
