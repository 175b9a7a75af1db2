//! Web front end
//!
//! [`MockDom`] models the calculator page in memory and is always compiled
//! so the controller can be exercised headlessly. The real browser binding
//! needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;

#[cfg(feature = "wasm")]
pub use browser::{init, mount, BrowserCalculator};
pub use dom::{button_id, DomElement, DomEvent, MockDom, RESULT_ID};
