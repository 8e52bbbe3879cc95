//! Immutable weighted undirected graph — adjacency + weight matrices.

use crate::types::{Matrix, WalkError, WalkResult};

/// An undirected graph over vertices `0..n`, backed by symmetric matrices.
///
/// Constructed once by the generator (or [`from_matrices`] for hand-built
/// graphs) and never mutated afterwards. Vertex `i` relates to vertex `j`
/// through `adjacency[i][j]` (0/1) and `weights[i][j]` (0 where no edge).
///
/// [`from_matrices`]: WeightedGraph::from_matrices
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Matrix,
    weights: Matrix,
}

impl WeightedGraph {
    /// Build from pre-computed matrices, validating the pair.
    ///
    /// Both matrices must be the same size and symmetric, and a positive
    /// weight must always sit on an adjacency edge.
    pub fn from_matrices(adjacency: Matrix, weights: Matrix) -> WalkResult<Self> {
        if adjacency.size() != weights.size() {
            return Err(WalkError::SizeMismatch {
                expected: adjacency.size(),
                got: weights.size(),
            });
        }
        let n = adjacency.size();
        for i in 0..n {
            for j in i..n {
                if adjacency.get(i, j) != adjacency.get(j, i) {
                    return Err(WalkError::AsymmetricMatrix { i, j });
                }
                if weights.get(i, j) != weights.get(j, i) {
                    return Err(WalkError::AsymmetricMatrix { i, j });
                }
                if weights.get(i, j) > 0 && adjacency.get(i, j) == 0 {
                    return Err(WalkError::WeightWithoutEdge { i, j });
                }
            }
        }
        Ok(Self { adjacency, weights })
    }

    /// Constructor for the generator, which produces symmetric matrices by
    /// construction.
    pub(crate) fn new_unchecked(adjacency: Matrix, weights: Matrix) -> Self {
        debug_assert!(adjacency.is_symmetric());
        debug_assert!(weights.is_symmetric());
        Self { adjacency, weights }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.size()
    }

    /// The 0/1 adjacency matrix.
    pub fn adjacency(&self) -> &Matrix {
        &self.adjacency
    }

    /// The non-negative weight matrix.
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// True when an edge connects `i` and `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency.get(i, j) == 1
    }

    /// Weight of the edge between `i` and `j` (0 where no edge).
    pub fn weight(&self, i: usize, j: usize) -> u32 {
        self.weights.get(i, j)
    }

    /// Full weight row for one vertex — what the traversal scans.
    pub fn weight_row(&self, v: usize) -> &[u32] {
        self.weights.row(v)
    }

    /// Number of distinct edges, counting each unordered pair and each
    /// self-loop once.
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        let mut count = 0;
        for i in 0..n {
            for j in i..n {
                if self.adjacency.get(i, j) == 1 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of vertices carrying a self-loop.
    pub fn self_loop_count(&self) -> usize {
        (0..self.vertex_count())
            .filter(|&i| self.adjacency.get(i, i) == 1)
            .count()
    }

    /// First vertex whose adjacency row contains an edge.
    pub fn first_connected_vertex(&self) -> Option<usize> {
        (0..self.vertex_count()).find(|&i| self.adjacency.row(i).iter().any(|&v| v == 1))
    }
}
