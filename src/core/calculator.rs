use crate::core::Operation;
use crate::utils::error::{CalcError, Result};

/// Stateless arithmetic over `f64`.
///
/// All operations follow IEEE-754; the only failure is `divide` with a zero
/// divisor (`0.0` or `-0.0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(CalcError::division_by_zero(a));
        }
        Ok(a / b)
    }

    pub fn apply(op: Operation, a: f64, b: f64) -> Result<f64> {
        match op {
            Operation::Add => Ok(Self::add(a, b)),
            Operation::Subtract => Ok(Self::subtract(a, b)),
            Operation::Multiply => Ok(Self::multiply(a, b)),
            Operation::Divide => Self::divide(a, b),
        }
    }
}
