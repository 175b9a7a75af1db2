//! Top-level application instance
//!
//! Owns the session state and hands it to the controller on every event,
//! so front ends only ever hold one value.

use crate::config::CalculatorConfig;
use crate::controller::{CalculatorController, Key, KeyOutcome};
use crate::core::CalcResult;
use crate::session::SessionState;
use crate::surface::{DeferredTask, DisplayState, OperandField, Scheduler, Surface};

/// Calculator application: controller plus session
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    controller: CalculatorController,
    session: SessionState,
}

impl CalculatorApp {
    /// Creates an application with the given configuration
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            controller: CalculatorController::new(config),
            session: SessionState::new(),
        }
    }

    /// Session state (remembered operation)
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        self.controller.config()
    }

    /// Current display model
    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        self.controller.display()
    }

    /// Presentation layer is ready
    pub fn start<H: Surface>(&mut self, host: &mut H) {
        self.controller.start(host);
    }

    /// An operation button was activated
    pub fn operation<H: Surface + Scheduler>(
        &mut self,
        host: &mut H,
        symbol: &str,
    ) -> CalcResult<f64> {
        self.controller.on_operation_requested(&mut self.session, host, symbol)
    }

    /// Replay of the last successful operation was requested
    pub fn replay<H: Surface + Scheduler>(&mut self, host: &mut H) -> CalcResult<f64> {
        self.controller.on_replay_requested(&mut self.session, host)
    }

    /// An operand input changed; returns the sanitized text
    pub fn input_changed<H: Surface>(
        &mut self,
        host: &mut H,
        field: OperandField,
        text: &str,
    ) -> String {
        self.controller.on_input_changed(host, field, text)
    }

    /// A key was pressed
    pub fn key<H: Surface + Scheduler>(&mut self, host: &mut H, key: Key) -> KeyOutcome {
        self.controller.on_key(&mut self.session, host, key)
    }

    /// A deferred cosmetic task is due
    pub fn deferred<H: Surface>(&mut self, host: &mut H, task: DeferredTask) {
        self.controller.on_deferred(host, task);
    }
}
