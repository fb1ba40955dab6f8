//! Driver - runs the sample computations and reports their results
//!
//! Emits four lines through a [`LineSink`], in this order:
//!
//! ```text
//! running...
//! 1 + 1 = 2
//! ABS(-2) = 2
//! finished
//! ```

use log::debug;

use super::math::{self, MathError};
use super::ports::LineSink;

/// Operands passed to the sum
pub const SUM_OPERANDS: (i64, i64) = (1, 1);

/// Operand passed to the absolute value
pub const ABS_OPERAND: i64 = -2;

/// Run the sample computations, emitting each result to `sink`
///
/// Overflow is fatal: the error is returned as soon as it happens and the
/// finish marker is not emitted.
pub fn run<S: LineSink + ?Sized>(sink: &mut S) -> Result<(), MathError> {
    sink.emit("running...");

    let (a, b) = SUM_OPERANDS;
    debug!("sum operands: a={a}, b={b}");
    let total = math::checked_sum(a, b)?;
    sink.emit(&format!("{a} + {b} = {total}"));

    debug!("abs operand: a={ABS_OPERAND}");
    let magnitude = math::checked_abs(ABS_OPERAND)?;
    sink.emit(&format!("ABS({ABS_OPERAND}) = {magnitude}"));

    sink.emit("finished");
    Ok(())
}
