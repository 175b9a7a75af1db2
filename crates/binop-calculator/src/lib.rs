//! binop calculator
//!
//! A two-operand calculator: two numeric inputs, four operation buttons, a
//! result display and keyboard shortcuts. One event-driven controller sits
//! behind three front ends: an in-memory mock DOM, a ratatui terminal UI
//! (feature `tui`) and a wasm-bindgen browser binding (feature `wasm`).
//!
//! # Example
//!
//! ```rust
//! use binop_calculator::prelude::*;
//!
//! assert_eq!(calculate(1.0, 3.0, "/"), Ok(0.3333333333));
//! assert_eq!(calculate(1.0, 0.0, "/"), Err(CalcError::DivisionByZero));
//!
//! let mut app = CalculatorApp::default();
//! let mut dom = MockDom::calculator();
//! app.start(&mut dom);
//!
//! dom.fill(&mut app, OperandField::First, "6");
//! dom.fill(&mut app, OperandField::Second, "3");
//! assert_eq!(dom.click(&mut app, Operation::Divide), Ok(2.0));
//! assert_eq!(dom.result_text(), "2");
//!
//! // Enter repeats the last successful operation
//! dom.fill(&mut app, OperandField::First, "");
//! assert!(dom.key_down(&mut app, "Enter").prevent_default);
//! assert_eq!(dom.result_text(), "2");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod app;
pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod session;
pub mod surface;
pub mod timer;

#[cfg(feature = "tui")]
pub mod tui;

/// Web front end; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::CalculatorApp;
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::controller::{sanitize_input, CalculatorController, Key, KeyOutcome};
    pub use crate::core::{
        calculate, format_number, format_result, parse_operand, round_result, CalcError,
        CalcResult, Operation,
    };
    pub use crate::driver::{CalculatorDriver, DomDriver};
    pub use crate::session::{LastOperation, ReplayPolicy, SessionState};
    pub use crate::surface::{DeferredTask, DisplayState, OperandField, Scheduler, Surface};
    pub use crate::timer::DeferredQueue;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::TuiApp;

    pub use crate::wasm::{DomElement, DomEvent, MockDom};
}
