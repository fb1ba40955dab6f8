//! Console adapter
//!
//! Routes driver output through the `log` facade. Whatever logger the binary
//! installs decides where the lines end up.

use log::info;

use crate::core::ports::LineSink;

/// [`LineSink`] that logs every line at `info` level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LineSink for LogSink {
    fn emit(&mut self, line: &str) {
        info!("{line}");
    }
}
