//! User-facing output.
//!
//! Separates concerns:
//! - `formatter` - Pure message builders
//! - `terminal` - Terminal output with `console` styling and `indicatif` spinners
//! - `mock` - Recording implementation for tests
//! - This module - The [Notifier] and [Spinner] ports the core logic talks to

pub mod formatter;
pub mod mock;
pub mod terminal;

pub use mock::{Event, RecordingNotifier};
pub use terminal::ConsoleNotifier;

/// Leveled message sink plus a progress indicator factory.
///
/// Callers never inspect results; every method is a side-effecting notification.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);

    /// Start a progress indicator showing `text`
    fn spinner(&self, text: &str) -> Box<dyn Spinner + '_>;
}

/// A running progress indicator.
///
/// `succeed`, `fail` and `info` stop it and leave a final line behind.
pub trait Spinner {
    fn set_text(&mut self, text: &str);
    fn succeed(&mut self, text: &str);
    fn fail(&mut self, text: &str);
    fn info(&mut self, text: &str);
}
