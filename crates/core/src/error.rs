//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic failures caused by the caller's input. The HTTP layer maps
/// every variant to a client error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Division requested with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// The operands overflow the floating-point range for this operation.
    #[error("Result is not a finite number")]
    NonFiniteResult,

    /// The operation selector is not one of the supported operations.
    #[error("Unsupported operation: {0}. Use 'add', 'subtract', 'multiply', or 'divide'")]
    UnsupportedOperation(String),
}

impl DomainError {
    pub fn unsupported_operation(op: impl Into<String>) -> Self {
        Self::UnsupportedOperation(op.into())
    }

    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::NonFiniteResult => "non_finite_result",
            Self::UnsupportedOperation(_) => "unsupported_operation",
        }
    }
}
