//! Core arithmetic: operations, rounding, operand parsing and display formatting
//!
//! Everything in here is a pure function of its inputs. Session state and
//! presentation live in [`crate::controller`].

mod numeric;
mod operations;

pub use numeric::{format_number, format_result, parse_operand, round_result, DECIMAL_PLACES};
pub use operations::{calculate, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - a closed set, every variant is user facing
///
/// The display text is exactly what the result display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// One or both operand fields were blank
    #[error("Error: Please enter both numbers")]
    EmptyInput,
    /// An operand did not parse as a number
    #[error("Error: Invalid input")]
    InvalidInput,
    /// Divide with a zero divisor
    #[error("Error: Division by zero")]
    DivisionByZero,
    /// Operation symbol outside `+ - * /`
    #[error("Error: Invalid operation")]
    InvalidOperation,
    /// Replay requested before any successful calculation
    #[error("Error: No previous operation")]
    NoPreviousOperation,
}

impl CalcError {
    /// All error kinds, in taxonomy order
    pub const ALL: [Self; 5] = [
        Self::EmptyInput,
        Self::InvalidInput,
        Self::DivisionByZero,
        Self::InvalidOperation,
        Self::NoPreviousOperation,
    ];

    /// Stable machine-readable name, used in JSON output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidInput => "invalid_input",
            Self::DivisionByZero => "division_by_zero",
            Self::InvalidOperation => "invalid_operation",
            Self::NoPreviousOperation => "no_previous_operation",
        }
    }
}
