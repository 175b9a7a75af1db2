//! TUI application state

use std::time::Duration;

use crate::app::CalculatorApp;
use crate::config::CalculatorConfig;
use crate::controller::Key;
use crate::core::{CalcResult, Operation};
use crate::session::SessionState;
use crate::surface::{DeferredTask, DisplayState, OperandField, Scheduler, Surface};
use crate::timer::DeferredQueue;

use super::input::KeyAction;

/// Operand buffers, focus and the last rendered display
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    first: String,
    second: String,
    focus: OperandField,
    display: DisplayState,
    timers: DeferredQueue,
}

impl TerminalSurface {
    /// Text of an operand buffer
    #[must_use]
    pub fn operand(&self, field: OperandField) -> &str {
        match field {
            OperandField::First => &self.first,
            OperandField::Second => &self.second,
        }
    }

    /// Focused operand
    #[must_use]
    pub const fn focus(&self) -> OperandField {
        self.focus
    }

    /// Display as last rendered by the controller
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Pending cosmetic timers
    #[must_use]
    pub const fn timers(&self) -> &DeferredQueue {
        &self.timers
    }

    fn operand_mut(&mut self, field: OperandField) -> &mut String {
        match field {
            OperandField::First => &mut self.first,
            OperandField::Second => &mut self.second,
        }
    }
}

impl Surface for TerminalSurface {
    fn operand_text(&self, field: OperandField) -> String {
        self.operand(field).to_string()
    }

    fn set_operand_text(&mut self, field: OperandField, text: &str) {
        *self.operand_mut(field) = text.to_string();
    }

    fn render(&mut self, state: &DisplayState) {
        self.display.clone_from(state);
    }
}

impl Scheduler for TerminalSurface {
    fn schedule(&mut self, task: DeferredTask, delay: Duration) {
        self.timers.schedule(task, delay);
    }
}

/// Calculator application state for the terminal
#[derive(Debug, Clone)]
pub struct TuiApp {
    app: CalculatorApp,
    surface: TerminalSurface,
    should_quit: bool,
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl TuiApp {
    /// Creates a started app with the given configuration
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        let mut app = CalculatorApp::new(config);
        let mut surface = TerminalSurface::default();
        app.start(&mut surface);
        Self {
            app,
            surface,
            should_quit: false,
        }
    }

    /// The terminal surface
    #[must_use]
    pub const fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    /// Display as last rendered
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        self.surface.display()
    }

    /// Text of an operand buffer
    #[must_use]
    pub fn operand(&self, field: OperandField) -> &str {
        self.surface.operand(field)
    }

    /// Focused operand
    #[must_use]
    pub const fn focus(&self) -> OperandField {
        self.surface.focus
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        self.app.session()
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        self.app.config()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves focus to `field`
    pub fn set_focus(&mut self, field: OperandField) {
        self.surface.focus = field;
    }

    /// Replaces an operand's text as a single edit
    pub fn set_operand(&mut self, field: OperandField, text: &str) {
        self.surface.set_operand_text(field, text);
        self.app.input_changed(&mut self.surface, field, text);
    }

    /// Types a character into the focused operand
    pub fn type_char(&mut self, c: char) {
        let field = self.surface.focus;
        let mut text = self.surface.operand(field).to_string();
        text.push(c);
        self.set_operand(field, &text);
    }

    /// Deletes the last character of the focused operand
    pub fn backspace(&mut self) {
        let field = self.surface.focus;
        let mut text = self.surface.operand(field).to_string();
        if text.pop().is_some() {
            self.set_operand(field, &text);
        }
    }

    /// Empties the focused operand
    pub fn clear_field(&mut self) {
        self.set_operand(self.surface.focus, "");
    }

    /// Runs an operation, as a button press would
    pub fn press(&mut self, op: Operation) -> CalcResult<f64> {
        self.app.operation(&mut self.surface, op.symbol())
    }

    /// Repeats the last successful operation
    pub fn replay(&mut self) -> CalcResult<f64> {
        self.app.replay(&mut self.surface)
    }

    /// Applies a key action, returning the calculation it triggered
    pub fn apply(&mut self, action: KeyAction) -> Option<CalcResult<f64>> {
        match action {
            KeyAction::InsertChar(c) => self.type_char(c),
            KeyAction::Operator(Operation::Subtract) if self.minus_is_sign() => {
                self.type_char('-');
            }
            KeyAction::Operator(op) => {
                let symbol = op.symbol().chars().next()?;
                return self.app.key(&mut self.surface, Key::Char(symbol)).result;
            }
            KeyAction::Replay => return self.app.key(&mut self.surface, Key::Enter).result,
            KeyAction::NextField | KeyAction::PrevField => {
                self.surface.focus = self.surface.focus.other();
            }
            KeyAction::Backspace => self.backspace(),
            KeyAction::ClearField => self.clear_field(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        None
    }

    /// Applies a key action arriving at `now` (time since start).
    ///
    /// The timer clock is caught up first so anything the action schedules
    /// is measured from the moment of the key press.
    pub fn apply_at(&mut self, now: Duration, action: KeyAction) -> Option<CalcResult<f64>> {
        self.tick_at(now);
        self.apply(action)
    }

    /// `-` starts a number or an exponent rather than subtracting
    fn minus_is_sign(&self) -> bool {
        let text = self.surface.operand(self.surface.focus);
        text.is_empty() || text.ends_with(['e', 'E'])
    }

    /// Time until the next cosmetic timer is due
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.surface.timers.time_until_next()
    }

    /// Lets `elapsed` pass, running every timer that comes due
    pub fn tick(&mut self, elapsed: Duration) {
        for task in self.surface.timers.advance(elapsed) {
            self.app.deferred(&mut self.surface, task);
        }
    }

    /// Moves the timer clock to `now` (time since start)
    pub fn tick_at(&mut self, now: Duration) {
        for task in self.surface.timers.advance_to(now) {
            self.app.deferred(&mut self.surface, task);
        }
    }

    /// Runs every pending timer
    pub fn settle(&mut self) {
        for task in self.surface.timers.drain_all() {
            self.app.deferred(&mut self.surface, task);
        }
    }
}
