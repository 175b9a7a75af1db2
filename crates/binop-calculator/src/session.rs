//! Session state: the single remembered operation
//!
//! Owned by the top-level application and lent to the controller's entry
//! points. Only a successful calculation may write it.

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// How Enter replays the remembered operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Each empty input falls back to the operand remembered from the last
    /// successful calculation
    #[default]
    RememberedOperands,
    /// Re-run the remembered operation against whatever the inputs hold now
    CurrentInputs,
}

impl ReplayPolicy {
    /// Kebab-case name, as used in config files and on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RememberedOperands => "remembered-operands",
            Self::CurrentInputs => "current-inputs",
        }
    }
}

/// The most recent successful calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastOperation {
    /// Operation that succeeded
    pub operation: Operation,
    /// Operands it was applied to
    pub operands: (f64, f64),
}

/// Per-application calculator session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    last_operation: Option<LastOperation>,
}

impl SessionState {
    /// Creates an empty session (no remembered operation)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remembered operation, if any calculation has succeeded
    #[must_use]
    pub fn last_operation(&self) -> Option<&LastOperation> {
        self.last_operation.as_ref()
    }

    /// Records a successful calculation, replacing the previous one
    pub fn record_success(&mut self, operation: Operation, a: f64, b: f64) {
        self.last_operation = Some(LastOperation {
            operation,
            operands: (a, b),
        });
    }
}
