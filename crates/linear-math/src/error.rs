use thiserror::Error;

/// Errors raised by operations on degenerate inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A divisor, or one of its components, is exactly zero
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    /// The argument is outside the domain of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, MathError>;
