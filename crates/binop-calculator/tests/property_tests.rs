//! Property-based tests for arithmetic, formatting and input sanitizing

use binop_calculator::controller::is_acceptable_operand;
use binop_calculator::prelude::*;
use proptest::prelude::*;

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Text a user could type into an operand field
fn keystrokes_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('0'),
            Just('1'),
            Just('7'),
            Just('.'),
            Just('-'),
            Just('e'),
            Just('x'),
            Just(' '),
        ],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Division by zero is reported for every finite dividend
    #[test]
    fn prop_divide_by_zero(a in -1e12f64..1e12) {
        prop_assert_eq!(calculate(a, 0.0, "/"), Err(CalcError::DivisionByZero));
    }

    /// NaN in either position is invalid input, whatever the operation
    #[test]
    fn prop_nan_is_invalid(b in -1e6f64..1e6, op in operation_strategy()) {
        prop_assert_eq!(calculate(f64::NAN, b, op.symbol()), Err(CalcError::InvalidInput));
        prop_assert_eq!(calculate(b, f64::NAN, op.symbol()), Err(CalcError::InvalidInput));
    }

    /// Multiplication is commutative after rounding
    #[test]
    fn prop_multiply_commutes(a in -1e4f64..1e4, b in -1e4f64..1e4) {
        prop_assert_eq!(calculate(a, b, "*"), calculate(b, a, "*"));
    }

    /// Unknown symbols never calculate
    #[test]
    fn prop_unknown_symbol(symbol in "[^+*/-]{1,3}") {
        prop_assert_eq!(calculate(1.0, 2.0, &symbol), Err(CalcError::InvalidOperation));
    }

    /// Displayed integers round-trip through the operand parser
    #[test]
    fn prop_integer_display_parses_back(n in -1_000_000_000i64..1_000_000_000) {
        #[allow(clippy::cast_precision_loss)]
        let value = n as f64;
        prop_assert_eq!(parse_operand(&format_number(value)), value);
    }

    /// Acceptable text passes untouched, anything else loses one character
    #[test]
    fn prop_sanitize_reverts_one_keystroke(text in keystrokes_strategy()) {
        let sanitized = sanitize_input(&text);
        if is_acceptable_operand(&text) {
            prop_assert_eq!(sanitized, text);
        } else {
            prop_assert_eq!(sanitized.len() + 1, text.len());
            prop_assert!(text.starts_with(&sanitized));
        }
    }

    /// Typing one key at a time keeps the field acceptable after every key
    #[test]
    fn prop_typed_field_stays_acceptable(text in keystrokes_strategy()) {
        let mut app = CalculatorApp::default();
        let mut dom = MockDom::calculator();
        dom.type_text(&mut app, OperandField::First, &text);

        let value = dom.value(OperandField::First);
        prop_assert!(is_acceptable_operand(value));
    }

    /// Failed calculations never touch the remembered operation
    #[test]
    fn prop_failures_keep_session(a in "[a-z ]{0,4}", op in operation_strategy()) {
        let mut driver = DomDriver::new();
        driver.set_operands("8", "4");
        prop_assert!(driver.press(Operation::Subtract).is_ok());

        driver.set_operands(&a, "1");
        prop_assert!(driver.press(op).is_err());
        prop_assert_eq!(driver.last_operation(), Some(Operation::Subtract));
    }
}
