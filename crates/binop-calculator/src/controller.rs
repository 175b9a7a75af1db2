//! Calculator controller
//!
//! Turns presentation events (operation requested, replay requested, input
//! changed, key pressed, deferred task due) into display updates. Session
//! state is lent in by the owner on every call; the controller itself only
//! owns the display model and the configuration.

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::{
    calculate, format_number, format_result, parse_operand, CalcError, CalcResult, Operation,
};
use crate::session::{ReplayPolicy, SessionState};
use crate::surface::{DeferredTask, DisplayState, OperandField, Scheduler, Surface};

/// A key delivered by the host's keyboard stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Enter key
    Enter,
    /// A printable character
    Char(char),
    /// Anything else
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        if key == "Enter" {
            return Self::Enter;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// What the controller did with a key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyOutcome {
    /// The host should suppress its default handling of the key
    pub prevent_default: bool,
    /// Result of the calculation the key triggered, if any
    pub result: Option<CalcResult<f64>>,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        prevent_default: false,
        result: None,
    };

    /// Whether the key triggered a calculation or replay
    #[must_use]
    pub const fn handled(&self) -> bool {
        self.result.is_some()
    }
}

/// Whether `text` is acceptable operand-field content: empty, a lone
/// minus sign, or something with a numeric prefix.
#[must_use]
pub fn is_acceptable_operand(text: &str) -> bool {
    text.is_empty() || text == "-" || !parse_operand(text).is_nan()
}

/// Sanitizes operand-field text after a keystroke.
///
/// Unacceptable text loses its last character, reverting the keystroke.
#[must_use]
pub fn sanitize_input(text: &str) -> String {
    if is_acceptable_operand(text) {
        return text.to_string();
    }
    let mut reverted = text.to_string();
    reverted.pop();
    reverted
}

/// Event-driven calculator controller
#[derive(Debug, Clone)]
pub struct CalculatorController {
    config: CalculatorConfig,
    display: DisplayState,
}

impl Default for CalculatorController {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl CalculatorController {
    /// Creates a controller with the given configuration
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            display: DisplayState::initial(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Current display model
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Resets the display to `"0"` and renders it
    pub fn start<H: Surface>(&mut self, host: &mut H) {
        self.display = DisplayState::initial();
        host.render(&self.display);
    }

    /// An operation button was activated (or its key pressed)
    pub fn on_operation_requested<H: Surface + Scheduler>(
        &mut self,
        session: &mut SessionState,
        host: &mut H,
        symbol: &str,
    ) -> CalcResult<f64> {
        if let Some(op) = Operation::from_symbol(symbol) {
            self.highlight(host, op);
        }
        self.perform_calculation(session, host, symbol)
    }

    /// Reads both inputs, calculates and renders the outcome
    pub fn perform_calculation<H: Surface + Scheduler>(
        &mut self,
        session: &mut SessionState,
        host: &mut H,
        symbol: &str,
    ) -> CalcResult<f64> {
        let first = host.operand_text(OperandField::First);
        let second = host.operand_text(OperandField::Second);
        self.calculate_texts(session, host, symbol, &first, &second)
    }

    /// Enter was pressed: repeat the last successful operation
    pub fn on_replay_requested<H: Surface + Scheduler>(
        &mut self,
        session: &mut SessionState,
        host: &mut H,
    ) -> CalcResult<f64> {
        let Some(last) = session.last_operation().copied() else {
            return self.show_error(host, CalcError::NoPreviousOperation);
        };

        self.highlight(host, last.operation);

        let mut first = host.operand_text(OperandField::First);
        let mut second = host.operand_text(OperandField::Second);
        if self.config.replay_policy == ReplayPolicy::RememberedOperands {
            if first.is_empty() {
                first = format_number(last.operands.0);
            }
            if second.is_empty() {
                second = format_number(last.operands.1);
            }
        }

        debug!(operation = %last.operation, policy = self.config.replay_policy.name(), "replaying");
        self.calculate_texts(session, host, last.operation.symbol(), &first, &second)
    }

    /// An operand input changed; returns the sanitized text
    pub fn on_input_changed<H: Surface>(
        &mut self,
        host: &mut H,
        field: OperandField,
        text: &str,
    ) -> String {
        let sanitized = sanitize_input(text);
        if sanitized != text {
            debug!(field = field.element_id(), rejected = text, "reverted keystroke");
            host.set_operand_text(field, &sanitized);
        }

        if self.display.error {
            self.display.error = false;
            host.render(&self.display);
        }
        sanitized
    }

    /// A key was pressed anywhere on the page
    pub fn on_key<H: Surface + Scheduler>(
        &mut self,
        session: &mut SessionState,
        host: &mut H,
        key: Key,
    ) -> KeyOutcome {
        match key {
            Key::Enter => KeyOutcome {
                prevent_default: true,
                result: Some(self.on_replay_requested(session, host)),
            },
            Key::Char(c) => match Operation::from_char(c) {
                Some(op) => KeyOutcome {
                    prevent_default: false,
                    result: Some(self.on_operation_requested(session, host, op.symbol())),
                },
                None => KeyOutcome::IGNORED,
            },
            Key::Other => KeyOutcome::IGNORED,
        }
    }

    /// A previously scheduled cosmetic task is due
    pub fn on_deferred<H: Surface>(&mut self, host: &mut H, task: DeferredTask) {
        match task {
            DeferredTask::ClearAnimation => self.display.animate = false,
            DeferredTask::ClearHighlight(op) => {
                self.display.active.remove(&op);
            }
        }
        host.render(&self.display);
    }

    fn calculate_texts<H: Surface + Scheduler>(
        &mut self,
        session: &mut SessionState,
        host: &mut H,
        symbol: &str,
        first: &str,
        second: &str,
    ) -> CalcResult<f64> {
        if first.is_empty() || second.is_empty() {
            return self.show_error(host, CalcError::EmptyInput);
        }

        let a = parse_operand(first);
        let b = parse_operand(second);
        let result = calculate(a, b, symbol);
        self.display.text = format_result(&result);

        match result {
            Ok(value) => {
                debug!(a, b, symbol, value, "calculation succeeded");
                self.display.error = false;
                if let Some(op) = Operation::from_symbol(symbol) {
                    session.record_success(op, a, b);
                }
                self.display.animate = true;
                host.schedule(DeferredTask::ClearAnimation, self.config.animation_delay());
            }
            Err(err) => {
                debug!(a, b, symbol, error = %err, "calculation failed");
                self.display.error = true;
            }
        }

        host.render(&self.display);
        result
    }

    fn show_error<H: Surface>(&mut self, host: &mut H, err: CalcError) -> CalcResult<f64> {
        debug!(error = %err, "request rejected");
        self.display.text = err.to_string();
        self.display.error = true;
        host.render(&self.display);
        Err(err)
    }

    fn highlight<H: Scheduler>(&mut self, host: &mut H, op: Operation) {
        self.display.active.insert(op);
        host.schedule(DeferredTask::ClearHighlight(op), self.config.highlight_delay());
    }
}
