use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::{Notifier, Spinner};

/// [Notifier] that writes to the terminal
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        ConsoleNotifier
    }
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("{} {}", style("✔").green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), style(message).red());
    }

    fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").cyan(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), style(message).yellow());
    }

    fn spinner(&self, text: &str) -> Box<dyn Spinner + '_> {
        Box::new(ConsoleSpinner::start(text))
    }
}

/// indicatif spinner that prints a styled final line when stopped
struct ConsoleSpinner {
    bar: ProgressBar,
}

impl ConsoleSpinner {
    fn start(text: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        let template = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(template);
        bar.set_message(text.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        ConsoleSpinner { bar }
    }

    fn finish(&mut self, symbol: console::StyledObject<&str>, text: &str) {
        self.bar.finish_and_clear();
        println!("{} {}", symbol, text);
    }
}

impl Spinner for ConsoleSpinner {
    fn set_text(&mut self, text: &str) {
        self.bar.set_message(text.to_string());
    }

    fn succeed(&mut self, text: &str) {
        self.finish(style("✔").green(), text);
    }

    fn fail(&mut self, text: &str) {
        self.finish(style("✖").red(), text);
    }

    fn info(&mut self, text: &str) {
        self.finish(style("ℹ").cyan(), text);
    }
}

impl Drop for ConsoleSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
