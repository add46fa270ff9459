//! Error reporting hook.
//!
//! A [`Reporter`] is told about an error once, at the point where a run
//! gives up. Reporting never consumes the error: [`report_and_raise`]
//! reports and then hands the error back for propagation.

use std::io::{self, Write};

use crate::HulkError;

/// Receiver for errors that end a run.
pub trait Reporter {
    fn report(&mut self, error: &HulkError);
}

/// Report `error`, then return it as the failure of the current operation.
pub fn report_and_raise<T>(reporter: &mut dyn Reporter, error: HulkError) -> Result<T, HulkError> {
    reporter.report(&error);
    Err(error)
}

/// Writes `! <ERROR TYPE>: <message> (at offset N)` lines to a writer,
/// stderr by default. The offset suffix is omitted when there is none.
pub struct TerminalReporter<W: Write> {
    writer: W,
}

impl TerminalReporter<io::Stderr> {
    pub fn stderr() -> Self {
        TerminalReporter {
            writer: io::stderr(),
        }
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(writer: W) -> Self {
        TerminalReporter { writer }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, error: &HulkError) {
        // Write failures are ignored.
        let _ = writeln!(self.writer, "! {error}");
        let _ = self.writer.flush();
    }
}

/// Collects reported errors in memory.
#[derive(Debug, Default)]
pub struct BufferReporter {
    errors: Vec<HulkError>,
}

impl BufferReporter {
    pub fn new() -> Self {
        BufferReporter::default()
    }

    pub fn errors(&self) -> &[HulkError] {
        &self.errors
    }

    /// Reported errors in terminal format, one per line.
    pub fn output(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("! {e}\n"))
            .collect()
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, error: &HulkError) {
        self.errors.push(error.clone());
    }
}
