//! Terminal front end
//!
//! Same controller as the web page, rendered with ratatui. Cosmetic timers
//! run on a [`DeferredQueue`](crate::timer::DeferredQueue) fed with
//! wall-clock time by the event loop.

mod app;
mod input;
mod ui;

pub use app::{TerminalSurface, TuiApp};
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, HELP_SHORTCUTS, TITLE};
