//! Line output port
//!
//! Defines where the driver's result lines go.

/// Destination for the driver's output lines
///
/// Lines are emitted in order and without a trailing newline.
pub trait LineSink {
    /// Emit a single line
    fn emit(&mut self, line: &str);
}

/// Collects lines in memory
impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
