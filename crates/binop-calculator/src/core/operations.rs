//! The four binary operations and the `calculate` entry point

use std::fmt;

use crate::core::{round_result, CalcError, CalcResult};

/// Type-safe operation enum, one variant per operation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in button order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol, also used as the button's `data-op` value
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Looks up an operation by its symbol token
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Looks up an operation by a typed character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Applies the operation to two operands without rounding
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `operation` (given by symbol) to `a` and `b`.
///
/// NaN operands yield [`CalcError::InvalidInput`], unknown symbols
/// [`CalcError::InvalidOperation`]. Successful results are passed through
/// [`round_result`].
pub fn calculate(a: f64, b: f64, operation: &str) -> CalcResult<f64> {
    if a.is_nan() || b.is_nan() {
        return Err(CalcError::InvalidInput);
    }

    let op = Operation::from_symbol(operation).ok_or(CalcError::InvalidOperation)?;
    op.apply(a, b).map(round_result)
}
