//! Logger trait definition

/// Sink for operator-facing messages
///
/// `ConsoleLogger` is what the application uses; `MemoryLogger` records
/// lines for assertions.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    /// Warnings are the only level the configuration layer emits itself
    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
