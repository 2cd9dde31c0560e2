use crate::{binary, unary, Components, MathError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::debug;

/// Build a vector from its structural form
pub fn vector_from_components(data: Components) -> Vector2D {
    Vector2D::new(data.x, data.y)
}

/// Get the structural form of a vector
pub fn vector_to_components(vector: Vector2D) -> Components {
    Components::new(vector.x, vector.y)
}

/// 2D vector with f64 components
///
/// Every operation returns a new vector. The arithmetic itself is done by the
/// free functions on [`Components`]; this type only converts in and out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Components", into = "Components")]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// Create a new vector
    ///
    /// Accepts anything that widens losslessly to `f64`, so integer literals
    /// work as well as floats.
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Create a zero vector
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    pub fn to_components(self) -> Components {
        vector_to_components(self)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        binary::add(self.into(), other.into()).into()
    }

    pub fn subtract(self, other: Self) -> Self {
        binary::subtract(self.into(), other.into()).into()
    }

    /// Component-wise product
    pub fn multiply(self, other: Self) -> Self {
        binary::multiply(self.into(), other.into()).into()
    }

    /// Uniform product with a scalar
    pub fn scale(self, ratio: f64) -> Self {
        binary::scale(self.into(), ratio).into()
    }

    /// Component-wise quotient
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if either component of `other`
    /// is zero
    pub fn divide(self, other: Self) -> Result<Self> {
        binary::divide(self.into(), other.into()).map(Self::from)
    }

    /// Scale by the reciprocal of `divisor`
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `divisor` is zero
    pub fn divide_scalar(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            debug!("Rejecting division of {} by zero", self);
            return Err(MathError::DivisionByZero("cannot divide by zero"));
        }
        Ok(self.scale(1.0 / divisor))
    }

    pub fn magnitude(self) -> f64 {
        unary::magnitude(self.into())
    }

    /// Angle with respect to the x axis, in radians
    pub fn angle(self) -> f64 {
        unary::angle(self.into())
    }

    /// # Errors
    /// Returns [`MathError::InvalidArgument`] for the zero vector
    pub fn normalize(self) -> Result<Self> {
        unary::normalize(self.into()).map(Self::from)
    }

    pub fn cross(self, other: Self) -> f64 {
        binary::cross(self.into(), other.into())
    }

    pub fn dot(self, other: Self) -> f64 {
        binary::dot(self.into(), other.into())
    }
}

impl From<Components> for Vector2D {
    fn from(data: Components) -> Self {
        vector_from_components(data)
    }
}

impl From<Vector2D> for Components {
    fn from(vector: Vector2D) -> Self {
        vector_to_components(vector)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul for Vector2D {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

// Division can fail, so the operators hand back a Result
impl Div for Vector2D {
    type Output = Result<Self>;
    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Result<Self>;
    fn div(self, rhs: f64) -> Self::Output {
        self.divide_scalar(rhs)
    }
}

// Integer scalars widen losslessly to f64, as in `Vector2D::new`
macro_rules! integer_scalar {
    ($($scalar:ty),*) => {
        $(
            impl Mul<$scalar> for Vector2D {
                type Output = Self;
                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.scale(f64::from(rhs))
                }
            }

            impl Div<$scalar> for Vector2D {
                type Output = Result<Self>;
                fn div(self, rhs: $scalar) -> Self::Output {
                    self.divide_scalar(f64::from(rhs))
                }
            }
        )*
    };
}

integer_scalar!(i8, i16, i32, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use test_log::test;

    #[test]
    fn test_construction() {
        let v = Vector2D::new(2, 3);
        assert_eq!(v.x(), 2.0);
        assert_eq!(v.y(), 3.0);
        assert_eq!(v, Vector2D::new(2.0, 3.0));
        assert_eq!(Vector2D::new(0.1f32, 0u8), Vector2D::new(f64::from(0.1f32), 0.0));
        assert_eq!(Vector2D::zero(), Vector2D::default());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vector2D::new(0.1, 0.2) + Vector2D::new(0.2, 0.1);
        assert_ne!(a, Vector2D::new(0.3, 0.3));
        assert_ne!(Vector2D::new(1, 2), Vector2D::new(2, 1));
    }

    #[test]
    fn test_components_round_trip() {
        for v in [
            Vector2D::new(2, 3),
            Vector2D::new(-0.1, 1e300),
            Vector2D::new(f64::MIN_POSITIVE, -f64::MAX),
        ] {
            assert_eq!(vector_from_components(vector_to_components(v)), v);
            assert_eq!(Vector2D::from(v.to_components()), v);
        }
        assert_eq!(
            vector_to_components(Vector2D::new(2, 3)),
            Components { x: 2.0, y: 3.0 }
        );
    }

    #[test]
    fn test_serde_uses_components() {
        let v: Vector2D = ron::from_str("(x: 2.0, y: 3.0)").unwrap();
        assert_eq!(v, Vector2D::new(2, 3));

        let c: Components = ron::from_str(&ron::to_string(&v).unwrap()).unwrap();
        assert_eq!(c, Components::new(2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2D::new(2, 3).to_string(), "(2.00, 3.00)");
        assert_eq!(Vector2D::new(0.1, -1.005).to_string(), "(0.10, -1.00)");
        assert_eq!(Vector2D::new(2.1, 3).to_string(), "(2.10, 3.00)");
    }

    #[test]
    fn test_operators() {
        let a = Vector2D::new(2, 3);
        let b = Vector2D::new(4, -0.5);

        assert_eq!(a + b, Vector2D::new(6, 2.5));
        assert_eq!(a - b, Vector2D::new(-2, 3.5));
        assert_eq!(-a, Vector2D::new(-2, -3));
        assert_eq!(a + -a, Vector2D::zero());
        assert_eq!(a * b, Vector2D::new(8, -1.5));
        assert_eq!(a * 2.0, Vector2D::new(4, 6));
        assert_eq!(a / b, Ok(Vector2D::new(0.5, -6)));
        assert_eq!(a / 2.0, Ok(Vector2D::new(1, 1.5)));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Vector2D::new(-1.5, 0.25);
        let b = Vector2D::new(3, 7);

        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * b, a.multiply(b));
        assert_eq!(a * 0.3, a.scale(0.3));
        assert_eq!(a / b, a.divide(b));
        assert_eq!(a / 0.3, a.divide_scalar(0.3));
    }

    #[test]
    fn test_vector_division_by_zero() {
        let one = Vector2D::new(1, 1);
        assert!(matches!(one / Vector2D::new(0, 1), Err(MathError::DivisionByZero(_))));
        assert!(matches!(one / Vector2D::new(1, 0), Err(MathError::DivisionByZero(_))));
    }

    #[test]
    fn test_scalar_division_by_zero() {
        let v = Vector2D::new(1, 1);
        assert_eq!(v / 0.0, Err(MathError::DivisionByZero("cannot divide by zero")));
        assert!(matches!(v / -0.0, Err(MathError::DivisionByZero(_))));

        let large = (v / 1e-10).unwrap();
        assert!(large.magnitude() > 1e10);
        assert!(large.x().is_finite());
    }

    #[test]
    fn test_derived_quantities() {
        let i = Vector2D::new(1, 0);
        let j = Vector2D::new(0, 1);

        assert_eq!(Vector2D::new(3, 4).magnitude(), 5.0);
        assert_eq!(i.cross(j), 1.0);
        assert_eq!(i.dot(j), 0.0);
        assert_eq!(j.angle(), std::f64::consts::FRAC_PI_2);
        assert_eq!(Vector2D::new(3, 4).normalize(), Ok(Vector2D::new(0.6, 0.8)));

        let unit = Vector2D::new(2, 3).normalize().unwrap();
        assert!(unit.magnitude().approx_eq(1.0, F64Margin::default()));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(matches!(
            Vector2D::zero().normalize(),
            Err(MathError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_integer_scalars() {
        let v = Vector2D::new(1.5, -3);

        assert_eq!(v * 2, Vector2D::new(3, -6));
        assert_eq!(v * 2, v * 2.0);
        assert_eq!(v * 4u8, v.scale(4.0));
        assert_eq!(v * -1i16, -v);
        assert_eq!(v / 2, Ok(Vector2D::new(0.75, -1.5)));
        assert_eq!(v / 3u32, v / 3.0);
        assert!(matches!(v / 0, Err(MathError::DivisionByZero(_))));
        assert!(matches!(v / 0u8, Err(MathError::DivisionByZero(_))));
    }

    #[test]
    fn test_extreme_components() {
        let huge = Vector2D::new(1e200, -1e200);
        assert!(huge.magnitude().is_finite());

        let unit = huge.normalize().unwrap();
        assert!(unit.magnitude().approx_eq(1.0, F64Margin::default()));
        assert!(unit.angle().approx_eq(huge.angle(), F64Margin::default()));

        let tiny = Vector2D::new(1e-200, 1e-200);
        assert!(tiny.normalize().is_ok());
    }
}
