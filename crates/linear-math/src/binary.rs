use crate::{Components, MathError, Result};
use tracing::debug;

/// Add two vectors
pub fn add(a: Components, b: Components) -> Components {
    Components::new(a.x + b.x, a.y + b.y)
}

/// Subtract `b` from `a`
pub fn subtract(a: Components, b: Components) -> Components {
    Components::new(a.x - b.x, a.y - b.y)
}

/// Multiply two vectors component-wise
pub fn multiply(a: Components, b: Components) -> Components {
    Components::new(a.x * b.x, a.y * b.y)
}

/// Divide `a` by `b` component-wise
///
/// # Errors
/// Returns [`MathError::DivisionByZero`] if either component of `b` is zero
pub fn divide(a: Components, b: Components) -> Result<Components> {
    if b.x == 0.0 || b.y == 0.0 {
        debug!("Rejecting division of {a:?} by {b:?}");
        return Err(MathError::DivisionByZero(
            "cannot divide by a vector with zero components",
        ));
    }

    Ok(Components::new(a.x / b.x, a.y / b.y))
}

/// Scale `a` uniformly by `ratio`
pub fn scale(a: Components, ratio: f64) -> Components {
    Components::new(a.x * ratio, a.y * ratio)
}

/// 2D cross product, the signed area spanned by `a` and `b`
pub fn cross(a: Components, b: Components) -> f64 {
    a.x * b.y - a.y * b.x
}

pub fn dot(a: Components, b: Components) -> f64 {
    a.x * b.x + a.y * b.y
}
