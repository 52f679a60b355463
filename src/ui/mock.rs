use std::sync::Mutex;

use crate::ui::{Notifier, Spinner};

/// A notification captured by [RecordingNotifier]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Success(String),
    Error(String),
    Info(String),
    Warning(String),
    SpinnerStart(String),
    SpinnerText(String),
    SpinnerSucceed(String),
    SpinnerFail(String),
    SpinnerInfo(String),
}

impl Event {
    /// The message carried by the event
    pub fn text(&self) -> &str {
        match self {
            Event::Success(t)
            | Event::Error(t)
            | Event::Info(t)
            | Event::Warning(t)
            | Event::SpinnerStart(t)
            | Event::SpinnerText(t)
            | Event::SpinnerSucceed(t)
            | Event::SpinnerFail(t)
            | Event::SpinnerInfo(t) => t,
        }
    }
}

/// [Notifier] that records every call instead of printing
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, in order
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Error and spinner-failure messages
    pub fn errors(&self) -> Vec<String> {
        self.collect(|e| matches!(e, Event::Error(_) | Event::SpinnerFail(_)))
    }

    /// Warning messages
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|e| matches!(e, Event::Warning(_)))
    }

    /// True if any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.events().iter().any(|e| e.text().contains(needle))
    }

    fn collect(&self, keep: impl Fn(&Event) -> bool) -> Vec<String> {
        self.events()
            .iter()
            .filter(|e| keep(e))
            .map(|e| e.text().to_string())
            .collect()
    }

    fn push(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Event::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(Event::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Event::Warning(message.to_string()));
    }

    fn spinner(&self, text: &str) -> Box<dyn Spinner + '_> {
        self.push(Event::SpinnerStart(text.to_string()));
        Box::new(RecordingSpinner { owner: self })
    }
}

struct RecordingSpinner<'a> {
    owner: &'a RecordingNotifier,
}

impl Spinner for RecordingSpinner<'_> {
    fn set_text(&mut self, text: &str) {
        self.owner.push(Event::SpinnerText(text.to_string()));
    }

    fn succeed(&mut self, text: &str) {
        self.owner.push(Event::SpinnerSucceed(text.to_string()));
    }

    fn fail(&mut self, text: &str) {
        self.owner.push(Event::SpinnerFail(text.to_string()));
    }

    fn info(&mut self, text: &str) {
        self.owner.push(Event::SpinnerInfo(text.to_string()));
    }
}
