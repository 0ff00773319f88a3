//! Console logger implementation

use super::file_logger::LogLevel;
use super::traits::Logger;

/// Default prefix for console output
pub const DEFAULT_PREFIX: &str = "[ResumeRelevance]";

/// Standard stream a console line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// A logger that outputs to the console
///
/// Info and warning lines go to stdout, where the operator running the app
/// sees them next to its normal output. Debug and error lines go to stderr.
/// Tools whose stdout is machine-readable move warnings to stderr with
/// [`ConsoleLogger::warnings_to_stderr`].
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    verbose: bool,
    warn_stream: ConsoleStream,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            verbose: false,
            warn_stream: ConsoleStream::Stdout,
        }
    }

    /// Emit debug lines too (they are dropped by default)
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Write warnings to stderr instead of stdout
    pub fn warnings_to_stderr(mut self, enabled: bool) -> Self {
        self.warn_stream = if enabled { ConsoleStream::Stderr } else { ConsoleStream::Stdout };
        self
    }

    /// The stream lines of `level` are written to
    pub fn stream_for(&self, level: LogLevel) -> ConsoleStream {
        match level {
            LogLevel::Info => ConsoleStream::Stdout,
            LogLevel::Warn => self.warn_stream,
            LogLevel::Trace | LogLevel::Debug | LogLevel::Error => ConsoleStream::Stderr,
        }
    }

    fn line(&self, level: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }

    fn emit(&self, level: LogLevel, label: &str, message: &str) {
        let line = self.line(label, message);
        match self.stream_for(level) {
            ConsoleStream::Stdout => println!("{}", line),
            ConsoleStream::Stderr => eprintln!("{}", line),
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.verbose {
            self.emit(LogLevel::Debug, "DEBUG", message);
        }
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, "INFO", message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, "WARNING", message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, "ERROR", message);
    }
}
