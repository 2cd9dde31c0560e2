use crate::{Components, MathError, Result};
use tracing::debug;

/// Angle of `a` with respect to the x axis, in radians within (-π, π]
pub fn angle(a: Components) -> f64 {
    // Fold -0.0 into +0.0 so the negative x axis maps to π
    (a.y + 0.0).atan2(a.x)
}

/// Euclidean length of `a`, without intermediate overflow or underflow
pub fn magnitude(a: Components) -> f64 {
    a.x.hypot(a.y)
}

/// Rescale `a` to unit length, keeping its direction
///
/// # Errors
/// Returns [`MathError::InvalidArgument`] if `a` has zero magnitude
pub fn normalize(a: Components) -> Result<Components> {
    let mag = magnitude(a);
    if mag == 0.0 {
        debug!("Rejecting normalization of {a:?}");
        return Err(MathError::InvalidArgument("cannot normalize a zero vector"));
    }

    if mag.is_infinite() && a.x.is_finite() && a.y.is_finite() {
        // The length itself exceeds f64, bring the components down first
        let largest = a.x.abs().max(a.y.abs());
        return normalize(Components::new(a.x / largest, a.y / largest));
    }

    Ok(Components::new(a.x / mag, a.y / mag))
}
