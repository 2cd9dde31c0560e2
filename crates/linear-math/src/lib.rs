//! Minimal 2D vector arithmetic
//!
//! The algebra lives in free functions over the plain [`Components`] record,
//! and [`Vector2D`] exposes the same operations as operators and methods.
//!
//! # Example
//!
//! ```
//! use linear_math::{vector_from_components, Components, Vector2D};
//!
//! let position = vector_from_components(Components::new(2.0, 3.0));
//! let velocity = Vector2D::new(0, 0) + Vector2D::new(0.1, 0);
//!
//! assert_eq!((position + velocity).to_string(), "(2.10, 3.00)");
//!
//! // Degenerate inputs are reported, never approximated
//! assert!((position / 0.0).is_err());
//! assert!(Vector2D::zero().normalize().is_err());
//! ```

mod binary;
mod components;
mod error;
mod unary;
mod vector;

// Re-export the free-function algebra
pub use binary::{add, cross, divide, dot, multiply, scale, subtract};
pub use unary::{angle, magnitude, normalize};

// Re-export core types
pub use components::Components;
pub use error::{MathError, Result};
pub use vector::{vector_from_components, vector_to_components, Vector2D};
