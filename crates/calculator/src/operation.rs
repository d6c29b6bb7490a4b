use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fullstack_core::{DomainError, DomainResult};

/// Supported binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation.
    ///
    /// A zero divisor is rejected up front; the result never relies on
    /// infinity/NaN propagation.
    pub fn apply(self, num1: f64, num2: f64) -> DomainResult<f64> {
        match self {
            Operation::Add => Ok(num1 + num2),
            Operation::Subtract => Ok(num1 - num2),
            Operation::Multiply => Ok(num1 * num2),
            Operation::Divide => {
                if num2 == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                Ok(num1 / num2)
            }
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse. Only lowercasing is applied: surrounding whitespace
/// or synonyms ("div", "division") are rejected.
impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(DomainError::unsupported_operation(other)),
        }
    }
}

/// Outcome of a successful computation, echoing the normalized inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub result: f64,
    pub operation: Operation,
    pub num1: f64,
    pub num2: f64,
}

/// Parse `operation` and apply it to the operands.
///
/// A result outside the finite `f64` range is rejected rather than returned.
pub fn compute(num1: f64, num2: f64, operation: &str) -> DomainResult<Calculation> {
    let operation: Operation = operation.parse()?;
    let result = operation.apply(num1, num2)?;
    if !result.is_finite() {
        return Err(DomainError::NonFiniteResult);
    }
    Ok(Calculation {
        result,
        operation,
        num1,
        num2,
    })
}
