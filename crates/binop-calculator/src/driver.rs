//! Unified calculator driver
//!
//! **Write the scenario once, run it on every front end.** Both the mock
//! DOM and the terminal app implement [`CalculatorDriver`]; the `verify_*`
//! functions below hold the behavioural scenarios and panic on the first
//! mismatch, so they can be called straight from tests.

use crate::app::CalculatorApp;
use crate::config::CalculatorConfig;
use crate::core::{CalcError, CalcResult, Operation};
use crate::surface::{OperandField, ANIMATE_CLASS, ERROR_CLASS};
use crate::wasm::MockDom;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use binop_calculator::driver::{verify_division_scenario, DomDriver};
///
/// let mut driver = DomDriver::new();
/// verify_division_scenario(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Replaces the text of both operand inputs
    fn set_operands(&mut self, first: &str, second: &str);

    /// Presses the button for `op`
    fn press(&mut self, op: Operation) -> CalcResult<f64>;

    /// Presses Enter
    fn press_enter(&mut self) -> CalcResult<f64>;

    /// Current display text
    fn display_text(&self) -> String;

    /// Whether the display shows an error
    fn is_error(&self) -> bool;

    /// Whether the display is animating
    fn is_animating(&self) -> bool;

    /// Whether the button for `op` is highlighted
    fn is_highlighted(&self, op: Operation) -> bool;

    /// Operation remembered for replay
    fn last_operation(&self) -> Option<Operation>;

    /// Runs all pending cosmetic timers
    fn settle(&mut self);
}

/// Driver over the mock DOM, going through DOM events
#[derive(Debug)]
pub struct DomDriver {
    app: CalculatorApp,
    dom: MockDom,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a started driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a started driver with `config`
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut app = CalculatorApp::new(config);
        let mut dom = MockDom::calculator();
        app.start(&mut dom);
        Self { app, dom }
    }

    /// The mock DOM
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The application instance
    #[must_use]
    pub const fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

impl CalculatorDriver for DomDriver {
    fn set_operands(&mut self, first: &str, second: &str) {
        self.dom.fill(&mut self.app, OperandField::First, first);
        self.dom.fill(&mut self.app, OperandField::Second, second);
    }

    fn press(&mut self, op: Operation) -> CalcResult<f64> {
        self.dom.click(&mut self.app, op)
    }

    fn press_enter(&mut self) -> CalcResult<f64> {
        self.dom
            .key_down(&mut self.app, "Enter")
            .result
            .unwrap_or(Err(CalcError::NoPreviousOperation))
    }

    fn display_text(&self) -> String {
        self.dom.result_text().to_string()
    }

    fn is_error(&self) -> bool {
        self.dom.result_has_class(ERROR_CLASS)
    }

    fn is_animating(&self) -> bool {
        self.dom.result_has_class(ANIMATE_CLASS)
    }

    fn is_highlighted(&self, op: Operation) -> bool {
        self.dom.button_active(op)
    }

    fn last_operation(&self) -> Option<Operation> {
        self.app.session().last_operation().map(|last| last.operation)
    }

    fn settle(&mut self) {
        self.dom.settle(&mut self.app);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcError, CalcResult, CalculatorConfig, CalculatorDriver, Operation};
    use crate::surface::OperandField;
    use crate::tui::{KeyAction, TuiApp};

    /// Driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: TuiApp,
    }

    impl TuiDriver {
        /// Creates a driver with the default configuration
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver with `config`
        #[must_use]
        pub fn with_config(config: CalculatorConfig) -> Self {
            Self {
                app: TuiApp::new(config),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &TuiApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut TuiApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn set_operands(&mut self, first: &str, second: &str) {
            self.app.set_operand(OperandField::First, first);
            self.app.set_operand(OperandField::Second, second);
        }

        fn press(&mut self, op: Operation) -> CalcResult<f64> {
            self.app.press(op)
        }

        fn press_enter(&mut self) -> CalcResult<f64> {
            self.app
                .apply(KeyAction::Replay)
                .unwrap_or(Err(CalcError::NoPreviousOperation))
        }

        fn display_text(&self) -> String {
            self.app.display().text.clone()
        }

        fn is_error(&self) -> bool {
            self.app.display().error
        }

        fn is_animating(&self) -> bool {
            self.app.display().animate
        }

        fn is_highlighted(&self, op: Operation) -> bool {
            self.app.display().is_active(op)
        }

        fn last_operation(&self) -> Option<Operation> {
            self.app.session().last_operation().map(|last| last.operation)
        }

        fn settle(&mut self) {
            self.app.settle();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each runs against ANY CalculatorDriver implementation

/// All four operations on plain operands
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        (Operation::Add, "2", "3", "5"),
        (Operation::Subtract, "10", "4", "6"),
        (Operation::Multiply, "6", "7", "42"),
        (Operation::Divide, "1", "3", "0.3333333333"),
    ];

    for (op, a, b, shown) in cases {
        driver.set_operands(a, b);
        assert!(driver.press(op).is_ok(), "{a} {op} {b}");
        assert_eq!(driver.display_text(), shown, "{a} {op} {b}");
        assert!(!driver.is_error());
    }
}

/// "6" / "3" shows "2" and remembers divide
pub fn verify_division_scenario<D: CalculatorDriver>(driver: &mut D) {
    driver.set_operands("6", "3");
    assert_eq!(driver.press(Operation::Divide), Ok(2.0));
    assert_eq!(driver.display_text(), "2");
    assert!(!driver.is_error());
    assert!(driver.is_animating());
    assert!(driver.is_highlighted(Operation::Divide));
    assert_eq!(driver.last_operation(), Some(Operation::Divide));
}

/// An empty operand is reported and leaves the remembered operation alone
pub fn verify_empty_input_scenario<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.last_operation();
    driver.set_operands("", "5");
    assert_eq!(driver.press(Operation::Add), Err(CalcError::EmptyInput));
    assert_eq!(driver.display_text(), CalcError::EmptyInput.to_string());
    assert!(driver.is_error());
    assert_eq!(driver.last_operation(), before);
}

/// After a division, Enter with both inputs cleared shows "2" again.
///
/// Assumes the default replay policy.
pub fn verify_replay_scenario<D: CalculatorDriver>(driver: &mut D) {
    verify_division_scenario(driver);
    driver.set_operands("", "");
    assert_eq!(driver.press_enter(), Ok(2.0));
    assert_eq!(driver.display_text(), "2");
    assert!(!driver.is_error());
}

/// Each failure shows its message with the error flag set
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.set_operands("1", "0");
    assert_eq!(driver.press(Operation::Divide), Err(CalcError::DivisionByZero));
    assert_eq!(driver.display_text(), "Error: Division by zero");
    assert!(driver.is_error());

    driver.set_operands("abc", "1");
    assert_eq!(driver.press(Operation::Add), Err(CalcError::InvalidInput));
    assert_eq!(driver.display_text(), "Error: Invalid input");
    assert!(driver.is_error());

    driver.set_operands("4", "2");
    assert_eq!(driver.press(Operation::Multiply), Ok(8.0));
    assert!(!driver.is_error());
}

/// Highlight and animation wear off once timers run
pub fn verify_cosmetic_timers<D: CalculatorDriver>(driver: &mut D) {
    driver.set_operands("1", "1");
    assert!(driver.press(Operation::Add).is_ok());
    assert!(driver.is_animating());
    assert!(driver.is_highlighted(Operation::Add));

    driver.settle();
    assert!(!driver.is_animating());
    assert!(!driver.is_highlighted(Operation::Add));
    assert_eq!(driver.display_text(), "2");
}

/// Runs every scenario in sequence on a fresh driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_division_scenario(driver);
    verify_empty_input_scenario(driver);
    verify_replay_scenario(driver);
    verify_error_handling(driver);
    verify_cosmetic_timers(driver);
}
