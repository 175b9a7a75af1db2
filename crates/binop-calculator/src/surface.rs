//! Host interfaces the controller talks to
//!
//! A presentation layer (mock DOM, terminal, browser) implements
//! [`Surface`] and [`Scheduler`]; the controller never touches a UI toolkit
//! directly.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::core::Operation;

/// CSS class marking the display as showing an error
pub const ERROR_CLASS: &str = "error";
/// CSS class present on the display while the result animates
pub const ANIMATE_CLASS: &str = "animate";
/// CSS class present on a button while it is highlighted
pub const ACTIVE_CLASS: &str = "active";

/// One of the two operand inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperandField {
    /// Left operand (`#num1`)
    #[default]
    First,
    /// Right operand (`#num2`)
    Second,
}

impl OperandField {
    /// Both fields in display order
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// DOM element id
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::First => "num1",
            Self::Second => "num2",
        }
    }

    /// Looks a field up by DOM element id
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::BOTH.into_iter().find(|f| f.element_id() == id)
    }

    /// The other field
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Everything the presentation layer needs to draw the display and buttons
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Text of the result display
    pub text: String,
    /// Display carries the `error` class
    pub error: bool,
    /// Display carries the `animate` class
    pub animate: bool,
    /// Buttons currently carrying the `active` class
    pub active: BTreeSet<Operation>,
}

impl DisplayState {
    /// Initial state: `"0"` with no visual flags
    #[must_use]
    pub fn initial() -> Self {
        Self {
            text: "0".to_string(),
            ..Self::default()
        }
    }

    /// Whether the button for `op` is highlighted
    #[must_use]
    pub fn is_active(&self, op: Operation) -> bool {
        self.active.contains(&op)
    }

    /// Classes the display element should carry, in a stable order
    #[must_use]
    pub fn display_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.error {
            classes.push(ERROR_CLASS);
        }
        if self.animate {
            classes.push(ANIMATE_CLASS);
        }
        classes
    }
}

/// Cosmetic work deferred to a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeferredTask {
    /// Drop the display's `animate` class
    ClearAnimation,
    /// Drop a button's `active` class
    ClearHighlight(Operation),
}

/// Operand inputs and result display
pub trait Surface {
    /// Current raw text of an operand input
    fn operand_text(&self, field: OperandField) -> String;

    /// Replaces the text of an operand input
    fn set_operand_text(&mut self, field: OperandField, text: &str);

    /// Pushes the latest display state to the screen
    fn render(&mut self, state: &DisplayState);
}

/// Deferred-callback facility
///
/// Scheduling a task that is still pending replaces its deadline.
pub trait Scheduler {
    /// Runs `task` through the controller once `delay` has elapsed
    fn schedule(&mut self, task: DeferredTask, delay: Duration);
}
