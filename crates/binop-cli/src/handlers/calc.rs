//! Calc command handler

use std::io::Write;

use binop_calculator::core::{calculate, format_result, parse_operand, CalcError, CalcResult};
use serde::Serialize;
use tracing::debug;

use crate::commands::{CalcArgs, CalcOutputFormat};
use crate::error::CliResult;

/// Evaluates operand texts exactly as the page does: blank text is an
/// empty-input error, anything else goes through the lenient parser.
pub fn evaluate(a: &str, op: &str, b: &str) -> CalcResult<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(CalcError::EmptyInput);
    }
    calculate(parse_operand(a), parse_operand(b), op)
}

/// JSON shape of a calc result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcReport {
    /// First operand text
    pub a: String,
    /// Operation symbol
    pub op: String,
    /// Second operand text
    pub b: String,
    /// Numeric result (absent on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// Error kind (absent on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    /// Text the result display would show
    pub display: String,
}

impl CalcReport {
    /// Builds a report for an evaluated calculation
    #[must_use]
    pub fn new(args: &CalcArgs, outcome: &CalcResult<f64>) -> Self {
        Self {
            a: args.a.clone(),
            op: args.op.clone(),
            b: args.b.clone(),
            result: outcome.ok(),
            error: outcome.err().map(|e| e.kind()),
            display: format_result(outcome),
        }
    }
}

/// Execute the calc command.
///
/// The display text (or JSON report) is always written; a failed calculation
/// is then returned as an error so the process exits non-zero.
pub fn execute_calc<W: Write>(args: &CalcArgs, out: &mut W) -> CliResult<()> {
    debug!(a = %args.a, op = %args.op, b = %args.b, "evaluating");
    let outcome = evaluate(&args.a, &args.op, &args.b);

    match args.format {
        CalcOutputFormat::Text => writeln!(out, "{}", format_result(&outcome))?,
        CalcOutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &CalcReport::new(args, &outcome))?;
            writeln!(out)?;
        }
    }

    outcome.map(|_| ()).map_err(Into::into)
}
