//! Adapter implementations for port traits
//!
//! - `console` - forwards driver output to the `log` facade

pub mod console;

pub use console::LogSink;
