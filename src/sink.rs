//! Pluggable display surface for answers.
//!
//! Pairs with the acquisition pipeline for input — the sink is where one
//! run's outcome lands. At most one run writes to the sink at a time.

use crate::defaults;
use owo_colors::OwoColorize;

/// Display surface the orchestrator writes into.
pub trait AnswerSink: Send {
    /// Transient indicator while the answer request is in flight.
    fn pending(&mut self);

    /// Final answer text for the run.
    fn answer(&mut self, text: &str);

    /// User-visible failure message for the run.
    fn error(&mut self, message: &str);
}

/// Writes answers to stdout and errors to stderr.
pub struct StdoutSink {
    quiet: bool,
}

impl StdoutSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl AnswerSink for StdoutSink {
    fn pending(&mut self) {
        if !self.quiet {
            eprintln!("{}", defaults::PENDING_MESSAGE.dimmed());
        }
    }

    fn answer(&mut self, text: &str) {
        println!("{text}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("{} {message}", "tubeask:".red());
    }
}

/// Event recorded by [`CollectorSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Pending,
    Answer(String),
    Error(String),
}

/// Records sink events for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct CollectorSink {
    pub events: Vec<SinkEvent>,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Answer(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Error(message) => Some(message.as_str()),
            _ => None,
        })
    }
}

impl AnswerSink for CollectorSink {
    fn pending(&mut self) {
        self.events.push(SinkEvent::Pending);
    }

    fn answer(&mut self, text: &str) {
        self.events.push(SinkEvent::Answer(text.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(SinkEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_records_events_in_order() {
        let mut sink = CollectorSink::new();
        sink.pending();
        sink.answer("the answer");

        assert_eq!(
            sink.events,
            vec![SinkEvent::Pending, SinkEvent::Answer("the answer".to_string())]
        );
    }

    #[test]
    fn test_collector_last_answer_and_error() {
        let mut sink = CollectorSink::new();
        assert_eq!(sink.last_answer(), None);

        sink.error("first failure");
        sink.answer("eventual answer");

        assert_eq!(sink.last_answer(), Some("eventual answer"));
        assert_eq!(sink.last_error(), Some("first failure"));
    }

    #[test]
    fn test_sink_trait_is_object_safe() {
        let mut sink: Box<dyn AnswerSink> = Box::new(CollectorSink::new());
        sink.answer("boxed");
    }
}
