//! Arithmetic operations
//!
//! All values are `i64`. Each operation comes in two flavours:
//!
//! - [`sum`] and [`abs`] are total: `sum` wraps around on overflow and
//!   `abs` saturates `i64::MIN` to `i64::MAX`.
//! - [`checked_sum`] and [`checked_abs`] report overflow as a [`MathError`].
//!
//! ```
//! use ci_math::core::math::{abs, checked_abs, sum};
//!
//! assert_eq!(sum(1, 1), 2);
//! assert_eq!(abs(-2), 2);
//! assert_eq!(abs(i64::MIN), i64::MAX);
//! assert!(checked_abs(i64::MIN).is_err());
//! ```

use thiserror::Error;

/// Errors raised by the checked operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// `a + b` does not fit in an `i64`
    #[error("overflow: {a} + {b} does not fit in i64")]
    SumOverflow {
        /// Left operand
        a: i64,
        /// Right operand
        b: i64,
    },

    /// The absolute value of `a` does not fit in an `i64`
    #[error("overflow: ABS({a}) does not fit in i64")]
    AbsOverflow {
        /// Operand
        a: i64,
    },
}

/// Sum of `a` and `b`, wrapping around at the bounds of `i64`
#[must_use]
pub const fn sum(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Absolute value of `a`
///
/// `i64::MIN` has no positive counterpart and saturates to `i64::MAX`, so the
/// result is never negative.
#[must_use]
pub const fn abs(a: i64) -> i64 {
    a.saturating_abs()
}

/// Sum of `a` and `b`, or an error if it overflows
pub const fn checked_sum(a: i64, b: i64) -> Result<i64, MathError> {
    match a.checked_add(b) {
        Some(result) => Ok(result),
        None => Err(MathError::SumOverflow { a, b }),
    }
}

/// Absolute value of `a`, or an error for `i64::MIN`
pub const fn checked_abs(a: i64) -> Result<i64, MathError> {
    match a.checked_abs() {
        Some(result) => Ok(result),
        None => Err(MathError::AbsOverflow { a }),
    }
}
