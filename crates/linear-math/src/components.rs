use derive_more::{Constructor, From};
use serde::{Deserialize, Serialize};

/// Structural form of a 2D vector
///
/// This is the plain record the free functions operate on, and the
/// interchange format with anything outside the crate. It serializes as a
/// mapping with exactly the keys `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor, From, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Components {
    pub x: f64,
    pub y: f64,
}

impl From<[f64; 2]> for Components {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}
