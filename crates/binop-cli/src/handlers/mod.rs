//! Command handlers - extracted from main.rs for testability
//!
//! Handlers write to a caller-supplied writer so tests can capture output.

pub mod calc;
pub mod config;
pub mod tui;

pub use calc::{evaluate, execute_calc, CalcReport};
pub use config::execute_config;
pub use tui::run_tui;
