//! Mock DOM for headless testing
//!
//! Models the calculator page (`#num1`, `#num2`, `#calc-result` and four
//! `button[data-op]`) closely enough to drive a [`CalculatorApp`] exactly
//! the way the browser binding does, without web-sys.

use std::collections::HashMap;
use std::time::Duration;

use crate::app::CalculatorApp;
use crate::controller::{Key, KeyOutcome};
use crate::core::{CalcResult, Operation};
use crate::surface::{
    DeferredTask, DisplayState, OperandField, Scheduler, Surface, ACTIVE_CLASS, ANIMATE_CLASS,
    ERROR_CLASS,
};
use crate::timer::DeferredQueue;

/// Id of the result display element
pub const RESULT_ID: &str = "calc-result";

/// Element id of the button for `op`, e.g. `btn-divide`
#[must_use]
pub fn button_id(op: Operation) -> String {
    format!("btn-{}", op.label().to_lowercase())
}

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Input value (the `value` attribute), empty when unset
    #[must_use]
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Input event carrying the field's new value
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value
        value: String,
    },
    /// Global keydown
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM hosting the calculator page
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    timers: DeferredQueue,
    render_count: usize,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        for field in OperandField::BOTH {
            dom.register_element(
                DomElement::new("input")
                    .with_id(field.element_id())
                    .with_attr("type", "text")
                    .with_attr("value", ""),
            );
        }

        dom.register_element(
            DomElement::new("div")
                .with_id(RESULT_ID)
                .with_class("result-display"),
        );

        for op in Operation::ALL {
            dom.register_element(
                DomElement::new("button")
                    .with_id(&button_id(op))
                    .with_attr("data-op", op.symbol())
                    .with_text(op.symbol()),
            );
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Text of the result display
    #[must_use]
    pub fn result_text(&self) -> &str {
        self.get_element_text(RESULT_ID).unwrap_or_default()
    }

    /// Whether the result display has `class`
    #[must_use]
    pub fn result_has_class(&self, class: &str) -> bool {
        self.get_element(RESULT_ID)
            .is_some_and(|e| e.has_class(class))
    }

    /// Whether the button for `op` is highlighted
    #[must_use]
    pub fn button_active(&self, op: Operation) -> bool {
        self.get_element(&button_id(op))
            .is_some_and(|e| e.has_class(ACTIVE_CLASS))
    }

    /// Current value of an operand input
    #[must_use]
    pub fn value(&self, field: OperandField) -> &str {
        self.get_element(field.element_id())
            .map(DomElement::value)
            .unwrap_or_default()
    }

    /// Sets an input's value without firing events (like a script would)
    pub fn set_value(&mut self, field: OperandField, value: &str) {
        if let Some(elem) = self.elements.get_mut(field.element_id()) {
            elem.attributes.insert("value".to_string(), value.to_string());
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Number of renders pushed by the controller
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_count
    }

    /// Pending cosmetic timers
    #[must_use]
    pub const fn timers(&self) -> &DeferredQueue {
        &self.timers
    }

    /// Dispatches an event to the app, returning the calculation result it
    /// triggered, if any
    pub fn dispatch(&mut self, app: &mut CalculatorApp, event: DomEvent) -> Option<CalcResult<f64>> {
        match &event {
            DomEvent::Click { element_id } => {
                self.event_history.push(event.clone());
                let symbol = self
                    .get_element(element_id)
                    .and_then(|e| e.get_attr("data-op"))?
                    .to_string();
                Some(app.operation(self, &symbol))
            }
            DomEvent::Input { element_id, value } => {
                self.event_history.push(event.clone());
                let field = OperandField::from_element_id(element_id)?;
                self.set_value(field, value);
                app.input_changed(self, field, value);
                None
            }
            DomEvent::KeyDown { key } => self.key_down(app, key).result,
        }
    }

    /// Clicks the button for `op`
    pub fn click(&mut self, app: &mut CalculatorApp, op: Operation) -> CalcResult<f64> {
        self.event_history.push(DomEvent::click(&button_id(op)));
        app.operation(self, op.symbol())
    }

    /// Types `text` into a field one keystroke at a time
    pub fn type_text(&mut self, app: &mut CalculatorApp, field: OperandField, text: &str) {
        for c in text.chars() {
            let mut value = self.value(field).to_string();
            value.push(c);
            self.dispatch(app, DomEvent::input(field.element_id(), &value));
        }
    }

    /// Replaces a field's content as a single input event
    pub fn fill(&mut self, app: &mut CalculatorApp, field: OperandField, text: &str) {
        self.dispatch(app, DomEvent::input(field.element_id(), text));
    }

    /// Fires a global keydown
    pub fn key_down(&mut self, app: &mut CalculatorApp, key: &str) -> KeyOutcome {
        self.event_history.push(DomEvent::key_down(key));
        app.key(self, Key::from_dom_key(key))
    }

    /// Lets `elapsed` pass, running every timer that comes due
    pub fn advance(&mut self, app: &mut CalculatorApp, elapsed: Duration) {
        for task in self.timers.advance(elapsed) {
            app.deferred(self, task);
        }
    }

    /// Runs every pending timer
    pub fn settle(&mut self, app: &mut CalculatorApp) {
        for task in self.timers.drain_all() {
            app.deferred(self, task);
        }
    }
}

impl Surface for MockDom {
    fn operand_text(&self, field: OperandField) -> String {
        self.value(field).to_string()
    }

    fn set_operand_text(&mut self, field: OperandField, text: &str) {
        self.set_value(field, text);
    }

    fn render(&mut self, state: &DisplayState) {
        self.render_count += 1;

        if let Some(result) = self.elements.get_mut(RESULT_ID) {
            result.set_text(&state.text);
            result.toggle_class(ERROR_CLASS, state.error);
            result.toggle_class(ANIMATE_CLASS, state.animate);
        }

        for op in Operation::ALL {
            if let Some(button) = self.elements.get_mut(&button_id(op)) {
                button.toggle_class(ACTIVE_CLASS, state.is_active(op));
            }
        }
    }
}

impl Scheduler for MockDom {
    fn schedule(&mut self, task: DeferredTask, delay: Duration) {
        self.timers.schedule(task, delay);
    }
}
