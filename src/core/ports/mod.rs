//! Port traits (interfaces) for external dependencies
//!
//! The driver depends only on these traits. Implementations that talk to
//! the outside world live in the `adapters` module.

mod line_sink;

pub use line_sink::LineSink;
