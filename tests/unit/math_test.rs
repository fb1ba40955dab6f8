//! Tests for the arithmetic operations

use ci_math::core::{MathError, abs, checked_abs, checked_sum, sum};

mod sum {
    use super::*;

    #[test]
    fn one_plus_one() {
        assert_eq!(sum(1, 1), 2);
    }

    #[test]
    fn negative_operands() {
        assert_eq!(sum(-1, -1), -2);
    }

    #[test]
    fn wraps_past_max() {
        assert_eq!(sum(i64::MAX, 2), i64::MIN + 1);
    }

    #[test]
    fn checked_rejects_overflow() {
        let err = checked_sum(i64::MIN, -1).unwrap_err();
        assert_eq!(err, MathError::SumOverflow { a: i64::MIN, b: -1 });
    }
}

mod abs {
    use super::*;

    #[test]
    fn negative_two() {
        assert_eq!(abs(-2), 2);
    }

    #[test]
    fn zero() {
        assert_eq!(abs(0), 0);
    }

    #[test]
    fn negative_one_is_not_negative_one() {
        assert_ne!(abs(-1), -1);
    }

    #[test]
    fn min_saturates_to_max() {
        assert_eq!(abs(i64::MIN), i64::MAX);
    }

    #[test]
    fn checked_rejects_min() {
        let err = checked_abs(i64::MIN).unwrap_err();
        assert_eq!(err, MathError::AbsOverflow { a: i64::MIN });
        assert!(err.to_string().contains("ABS(-9223372036854775808)"));
    }

    #[test]
    fn checked_accepts_min_plus_one() {
        assert_eq!(checked_abs(i64::MIN + 1), Ok(i64::MAX));
    }
}
