//! All data types for the graphwalk library.

pub mod config;
pub mod error;
pub mod matrix;

pub use config::GraphConfig;
pub use error::{WalkError, WalkResult};
pub use matrix::Matrix;

/// Base vertex count before the configured offset is applied.
pub const BASE_VERTEX_COUNT: i64 = 10;

/// Default RNG seed for the demonstration build.
pub const DEFAULT_SEED: u64 = 3307;

/// Default first density parameter.
pub const DEFAULT_DENSITY_A: u32 = 0;

/// Default second density parameter.
pub const DEFAULT_DENSITY_B: u32 = 7;

/// Returns the current time as Unix epoch milliseconds.
pub fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
