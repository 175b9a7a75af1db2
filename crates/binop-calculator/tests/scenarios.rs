//! End-to-end calculator scenarios
//!
//! Drives the public API the way a page or terminal would: fill inputs,
//! press buttons, press Enter, let timers run.

use std::time::Duration;

use binop_calculator::driver::{
    run_all_scenarios, verify_empty_input_scenario, verify_replay_scenario, CalculatorDriver,
    DomDriver,
};
use binop_calculator::prelude::*;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn started(config: CalculatorConfig) -> (CalculatorApp, MockDom) {
    let mut app = CalculatorApp::new(config);
    let mut dom = MockDom::calculator();
    app.start(&mut dom);
    (app, dom)
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_divide_six_by_three() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.type_text(&mut app, OperandField::First, "6");
    dom.type_text(&mut app, OperandField::Second, "3");

    assert_eq!(dom.click(&mut app, Operation::Divide), Ok(2.0));
    assert_eq!(dom.result_text(), "2");

    let last = app.session().last_operation().copied();
    assert_eq!(last.map(|l| l.operation), Some(Operation::Divide));
}

#[test]
fn test_empty_first_operand_keeps_last_operation() {
    let mut driver = DomDriver::new();
    driver.set_operands("2", "2");
    assert_eq!(driver.press(Operation::Multiply), Ok(4.0));

    verify_empty_input_scenario(&mut driver);
    assert_eq!(driver.last_operation(), Some(Operation::Multiply));
}

#[test]
fn test_enter_after_clearing_inputs_remembered_operands() {
    verify_replay_scenario(&mut DomDriver::new());
}

#[test]
fn test_enter_after_clearing_inputs_current_inputs() {
    let config = CalculatorConfig::new().with_replay_policy(ReplayPolicy::CurrentInputs);
    let (mut app, mut dom) = started(config);
    dom.fill(&mut app, OperandField::First, "6");
    dom.fill(&mut app, OperandField::Second, "3");
    dom.click(&mut app, Operation::Divide).unwrap();

    dom.fill(&mut app, OperandField::First, "");
    dom.fill(&mut app, OperandField::Second, "");
    let outcome = dom.key_down(&mut app, "Enter");

    assert!(outcome.prevent_default);
    assert_eq!(outcome.result, Some(Err(CalcError::EmptyInput)));
    assert_eq!(dom.result_text(), "Error: Please enter both numbers");
    assert!(dom.result_has_class("error"));
}

#[test]
fn test_full_run_on_mock_dom() {
    run_all_scenarios(&mut DomDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn test_full_run_on_terminal() {
    run_all_scenarios(&mut binop_calculator::driver::TuiDriver::new());
}

// =============================================================================
// Replay details
// =============================================================================

#[test]
fn test_replay_failure_keeps_remembered_operation() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "6");
    dom.fill(&mut app, OperandField::Second, "3");
    dom.click(&mut app, Operation::Divide).unwrap();

    dom.fill(&mut app, OperandField::Second, "0");
    assert_eq!(
        dom.key_down(&mut app, "Enter").result,
        Some(Err(CalcError::DivisionByZero))
    );

    let last = app.session().last_operation().copied().unwrap();
    assert_eq!(last.operation, Operation::Divide);
    assert_eq!(last.operands, (6.0, 3.0));
}

#[test]
fn test_replay_uses_remembered_operand_text_exactly() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "0.1");
    dom.fill(&mut app, OperandField::Second, "3");
    dom.click(&mut app, Operation::Multiply).unwrap();
    assert_eq!(dom.result_text(), "0.3");

    dom.fill(&mut app, OperandField::First, "");
    dom.fill(&mut app, OperandField::Second, "");
    dom.key_down(&mut app, "Enter");
    assert_eq!(dom.result_text(), "0.3");
}

#[test]
fn test_operator_key_does_not_prevent_default() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "4");
    dom.fill(&mut app, OperandField::Second, "2");

    let outcome = dom.key_down(&mut app, "/");
    assert!(!outcome.prevent_default);
    assert_eq!(outcome.result, Some(Ok(2.0)));

    let outcome = dom.key_down(&mut app, "a");
    assert!(!outcome.handled());
}

// =============================================================================
// Inputs
// =============================================================================

#[test]
fn test_typing_reverts_only_bad_keystrokes() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.type_text(&mut app, OperandField::First, "a-1.5e3");
    assert_eq!(dom.value(OperandField::First), "-1.5e3");

    dom.type_text(&mut app, OperandField::Second, "2");
    assert_eq!(dom.click(&mut app, Operation::Divide), Ok(-750.0));
}

#[test]
fn test_editing_clears_error_but_keeps_text() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.key_down(&mut app, "Enter");
    assert!(dom.result_has_class("error"));

    dom.type_text(&mut app, OperandField::First, "1");
    assert!(!dom.result_has_class("error"));
    assert_eq!(dom.result_text(), "Error: No previous operation");
}

#[test]
fn test_large_and_tiny_results_use_exponent_notation() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "1e20");
    dom.fill(&mut app, OperandField::Second, "100");
    dom.click(&mut app, Operation::Multiply).unwrap();
    assert_eq!(dom.result_text(), "1e+22");

    dom.fill(&mut app, OperandField::First, "1");
    dom.fill(&mut app, OperandField::Second, "-0");
    assert_eq!(
        dom.click(&mut app, Operation::Divide),
        Err(CalcError::DivisionByZero)
    );
}

// =============================================================================
// Cosmetic timers
// =============================================================================

#[test]
fn test_animation_clears_after_latest_success() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "1");
    dom.fill(&mut app, OperandField::Second, "1");

    dom.click(&mut app, Operation::Add).unwrap();
    dom.advance(&mut app, ms(299));
    dom.click(&mut app, Operation::Add).unwrap();

    dom.advance(&mut app, ms(299));
    assert!(dom.result_has_class("animate"));
    dom.advance(&mut app, ms(1));
    assert!(!dom.result_has_class("animate"));
}

#[test]
fn test_errors_do_not_animate() {
    let (mut app, mut dom) = started(CalculatorConfig::default());
    dom.fill(&mut app, OperandField::First, "1");
    dom.fill(&mut app, OperandField::Second, "0");
    dom.click(&mut app, Operation::Divide).unwrap_err();

    assert!(!dom.result_has_class("animate"));
    assert!(dom.button_active(Operation::Divide));
    assert!(!dom.timers().is_pending(DeferredTask::ClearAnimation));
}

#[test]
fn test_configured_delays_are_honoured() {
    let config = CalculatorConfig::new()
        .with_animation_ms(50)
        .with_highlight_ms(10);
    let (mut app, mut dom) = started(config);
    dom.fill(&mut app, OperandField::First, "3");
    dom.fill(&mut app, OperandField::Second, "4");
    dom.click(&mut app, Operation::Subtract).unwrap();

    dom.advance(&mut app, ms(10));
    assert!(!dom.button_active(Operation::Subtract));
    dom.advance(&mut app, ms(40));
    assert!(!dom.result_has_class("animate"));
    assert_eq!(dom.result_text(), "-1");
}
