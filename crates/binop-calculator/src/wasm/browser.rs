//! Browser bindings
//!
//! Wires a [`CalculatorApp`] to the real page: `#num1`, `#num2`,
//! `#calc-result` and every `button[data-op]`. Cosmetic timers go through
//! `setTimeout`; rescheduling a pending task clears its previous handle.

// Compiled only with the `wasm` feature (see mod.rs)

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event, HtmlInputElement, KeyboardEvent, Window};

use crate::app::CalculatorApp;
use crate::config::CalculatorConfig;
use crate::controller::Key;
use crate::core::Operation;
use crate::surface::{
    DeferredTask, DisplayState, OperandField, Scheduler, Surface, ACTIVE_CLASS, ANIMATE_CLASS,
    ERROR_CLASS,
};
use crate::wasm::dom::RESULT_ID;

/// Page elements plus live timeout handles
#[derive(Debug)]
struct DomHost {
    window: Window,
    first: HtmlInputElement,
    second: HtmlInputElement,
    result: Element,
    buttons: Vec<(String, Element)>,
    timeouts: HashMap<DeferredTask, i32>,
    state: Weak<RefCell<BrowserState>>,
}

#[derive(Debug)]
struct BrowserState {
    app: CalculatorApp,
    host: DomHost,
    listening: bool,
}

impl BrowserState {
    fn fire(&mut self, task: DeferredTask) {
        self.host.timeouts.remove(&task);
        self.app.deferred(&mut self.host, task);
    }
}

fn timeout_millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        console::warn_2(&format!("could not toggle .{class}").into(), &err);
    }
}

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("calculator page is missing {what}"))
}

fn input_by_id(document: &Document, field: OperandField) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(field.element_id())
        .ok_or_else(|| missing(&format!("#{}", field.element_id())))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| missing(&format!("an <input> with id {}", field.element_id())))
}

fn operation_buttons(document: &Document) -> Result<Vec<(String, Element)>, JsValue> {
    let nodes = document.query_selector_all("button[data-op]")?;
    let mut buttons = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let symbol = element.get_attribute("data-op").unwrap_or_default();
        buttons.push((symbol, element));
    }
    Ok(buttons)
}

impl Surface for DomHost {
    fn operand_text(&self, field: OperandField) -> String {
        match field {
            OperandField::First => self.first.value(),
            OperandField::Second => self.second.value(),
        }
    }

    fn set_operand_text(&mut self, field: OperandField, text: &str) {
        match field {
            OperandField::First => self.first.set_value(text),
            OperandField::Second => self.second.set_value(text),
        }
    }

    fn render(&mut self, state: &DisplayState) {
        self.result.set_text_content(Some(&state.text));
        toggle_class(&self.result, ERROR_CLASS, state.error);
        toggle_class(&self.result, ANIMATE_CLASS, state.animate);

        for (symbol, button) in &self.buttons {
            let active = Operation::from_symbol(symbol).is_some_and(|op| state.is_active(op));
            toggle_class(button, ACTIVE_CLASS, active);
        }
    }
}

impl Scheduler for DomHost {
    fn schedule(&mut self, task: DeferredTask, delay: Duration) {
        if let Some(handle) = self.timeouts.remove(&task) {
            self.window.clear_timeout_with_handle(handle);
        }

        let state = self.state.clone();
        let callback = Closure::once_into_js(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().fire(task);
            }
        });

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout_millis(delay),
            ) {
            Ok(handle) => {
                self.timeouts.insert(task, handle);
            }
            Err(err) => console::warn_2(&"setTimeout failed".into(), &err),
        }
    }
}

/// Calculator bound to the live page
#[derive(Debug, Clone)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    state: Rc<RefCell<BrowserState>>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds to the page elements with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::with_config(CalculatorConfig::default())
    }

    /// Binds to the page elements with a YAML configuration
    pub fn from_yaml(yaml: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config)
    }

    /// Renders the initial display and installs the event listeners.
    ///
    /// Calling it again re-renders but never adds a second set of listeners.
    pub fn start(&self) -> Result<(), JsValue> {
        let install = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            state.app.start(&mut state.host);
            !std::mem::replace(&mut state.listening, true)
        };
        if install {
            self.install_listeners()?;
        }
        Ok(())
    }

    /// Runs an operation by symbol and returns the display text
    pub fn calculate(&self, symbol: &str) -> String {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        // The outcome is on the display; callers read it from there
        let _ = state.app.operation(&mut state.host, symbol);
        state.app.display().text.clone()
    }

    /// Replays the last successful operation and returns the display text
    pub fn replay(&self) -> String {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let _ = state.app.replay(&mut state.host);
        state.app.display().text.clone()
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.state.borrow().app.display().text.clone()
    }

    /// Whether the display is in the error state
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> bool {
        self.state.borrow().app.display().error
    }
}

impl BrowserCalculator {
    /// Binds to the page elements with `config`
    pub fn with_config(config: CalculatorConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| missing("a window"))?;
        let document = window.document().ok_or_else(|| missing("a document"))?;
        let first = input_by_id(&document, OperandField::First)?;
        let second = input_by_id(&document, OperandField::Second)?;
        let result = document
            .get_element_by_id(RESULT_ID)
            .ok_or_else(|| missing(&format!("#{RESULT_ID}")))?;
        let buttons = operation_buttons(&document)?;

        let state = Rc::new_cyclic(|weak| {
            RefCell::new(BrowserState {
                app: CalculatorApp::new(config),
                host: DomHost {
                    window,
                    first,
                    second,
                    result,
                    buttons,
                    timeouts: HashMap::new(),
                    state: weak.clone(),
                },
                listening: false,
            })
        });
        Ok(Self { state })
    }

    fn install_listeners(&self) -> Result<(), JsValue> {
        let (buttons, inputs, document) = {
            let state = self.state.borrow();
            let host = &state.host;
            let document = host.window.document().ok_or_else(|| missing("a document"))?;
            (
                host.buttons.clone(),
                [
                    (OperandField::First, host.first.clone()),
                    (OperandField::Second, host.second.clone()),
                ],
                document,
            )
        };

        for (symbol, button) in buttons {
            let weak = Rc::downgrade(&self.state);
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Some(state) = weak.upgrade() {
                    let mut guard = state.borrow_mut();
                    let state = &mut *guard;
                    let _ = state.app.operation(&mut state.host, &symbol);
                }
            });
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            listener.forget();
        }

        for (field, input) in inputs {
            let weak = Rc::downgrade(&self.state);
            let source = input.clone();
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Some(state) = weak.upgrade() {
                    let mut guard = state.borrow_mut();
                    let state = &mut *guard;
                    state.app.input_changed(&mut state.host, field, &source.value());
                }
            });
            input.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())?;
            listener.forget();
        }

        let weak = Rc::downgrade(&self.state);
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(state) = weak.upgrade() {
                let mut guard = state.borrow_mut();
                let state = &mut *guard;
                let outcome = state.app.key(&mut state.host, Key::from_dom_key(&event.key()));
                if outcome.prevent_default {
                    event.prevent_default();
                }
            }
        });
        document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())?;
        listener.forget();

        Ok(())
    }
}

/// Creates a calculator bound to the page and starts it
#[wasm_bindgen]
pub fn mount() -> Result<BrowserCalculator, JsValue> {
    let calculator = BrowserCalculator::new()?;
    calculator.start()?;
    Ok(calculator)
}

/// Module initialisation
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"binop calculator initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_millis(300)), 300);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), i32::MAX);
    }
}
