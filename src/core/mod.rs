//! Core domain for ci-math
//!
//! - [`math`] - the two arithmetic operations and their overflow errors
//! - [`driver`] - sequences the sample computations and emits the results
//! - [`ports`] - the output boundary the driver writes through

pub mod driver;
pub mod math;
pub mod ports;

pub use driver::run;
pub use math::{MathError, abs, checked_abs, checked_sum, sum};
