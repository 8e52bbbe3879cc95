//! Generation parameters and their derived quantities.

use super::{
    WalkError, WalkResult, BASE_VERTEX_COUNT, DEFAULT_DENSITY_A, DEFAULT_DENSITY_B, DEFAULT_SEED,
};

/// Construction-time parameters for one run.
///
/// The same configuration always reproduces the same graph, the same layout,
/// and the same traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// RNG seed.
    pub seed: u64,
    /// Offset added to the base vertex count of 10.
    pub vertex_offset: i64,
    /// First density parameter; each unit removes 0.01 from the factor.
    pub density_a: u32,
    /// Second density parameter; each unit removes 0.005 from the factor.
    pub density_b: u32,
}

impl GraphConfig {
    /// Total number of vertices.
    pub fn vertex_count(&self) -> i64 {
        BASE_VERTEX_COUNT + self.vertex_offset
    }

    /// Scalar in (0, 1) scaling the probability that a raw draw becomes an
    /// edge. Smaller values produce sparser graphs.
    pub fn density_factor(&self) -> f64 {
        1.0 - f64::from(self.density_a) * 0.01 - f64::from(self.density_b) * 0.005 - 0.05
    }

    /// Validate the configuration, failing fast on out-of-range parameters.
    pub fn validate(&self) -> WalkResult<()> {
        let n = self.vertex_count();
        if n < 1 {
            return Err(WalkError::InvalidConfig(format!(
                "vertex count must be at least 1, got {}",
                n
            )));
        }
        let factor = self.density_factor();
        if factor <= 0.0 || factor >= 1.0 {
            return Err(WalkError::InvalidConfig(format!(
                "density factor must lie in (0, 1), got {}",
                factor
            )));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            vertex_offset: 0,
            density_a: DEFAULT_DENSITY_A,
            density_b: DEFAULT_DENSITY_B,
        }
    }
}
