use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation { Add, Subtract, Multiply, Divide }

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(CalculatorError::UnknownOperation(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct Calculation {
    pub a: i32,
    pub b: i32,
    pub operation: String,
    pub result: f64,
}

/// Applies `operation` to `a` and `b`. The operation name is matched
/// case-insensitively and echoed back as given.
pub fn calculate(a: i32, b: i32, operation: &str) -> Result<Calculation, CalculatorError> {
    let (x, y) = (f64::from(a), f64::from(b));
    let result = match operation.parse::<Operation>()? {
        Operation::Add => x + y,
        Operation::Subtract => x - y,
        Operation::Multiply => x * y,
        Operation::Divide if b == 0 => return Err(CalculatorError::DivideByZero),
        Operation::Divide => x / y,
    };
    Ok(Calculation { a, b, operation: operation.to_string(), result })
}
