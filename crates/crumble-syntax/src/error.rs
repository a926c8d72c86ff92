//! Diagnostic sink and the parser's error signal.
//!
//! Errors are delivered through an explicit [`Diagnostics`] value owned
//! by the driver and passed `&mut` into every scan and parse call. The
//! driver resets it between independent runs; nothing in this crate
//! clears it mid-run.

use std::fmt;

/// One recorded report: a line number and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Accumulates reports from the scanner and parser.
///
/// The failure flag stays set until [`clear`](Diagnostics::clear) is
/// called, and is how a driver learns that the tokens or tree it got
/// back may be incomplete or absent.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<Diagnostic>,
    had_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a report and durably marks the failure flag.
    pub fn report(&mut self, line: usize, message: impl Into<String>) {
        self.reports.push(Diagnostic {
            line,
            message: message.into(),
        });
        self.had_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reports(&self) -> &[Diagnostic] {
        &self.reports
    }

    /// Drops all reports and resets the failure flag. Call between
    /// independent scan/parse runs, never in the middle of one.
    pub fn clear(&mut self) {
        self.reports.clear();
        self.had_error = false;
    }
}

/// The parser's unwinding signal.
///
/// By the time one of these is raised the report has already reached
/// the [`Diagnostics`] sink; the error then propagates with `?` up to
/// the top-level [`parse`](crate::parser::parse) call, which
/// synchronizes and returns no tree.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for SyntaxError {}
