//! tubeask - transcript question answering for video pages
//!
//! Acquires a video's transcript (from the answer backend, or by polling a
//! rendered transcript panel), chunks it into bounded word windows, and asks
//! a local LLM backend questions about the most recent chunk.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod backend;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod orchestrator;
pub mod page;
pub mod sink;
pub mod transcript;

// Core traits (acquire → chunk → ask → sink)
pub use sink::{AnswerSink, CollectorSink, SinkEvent, StdoutSink};
pub use transcript::TranscriptSource;
pub use transcript::extractor::{MockSegmentSource, SegmentSource, TranscriptExtractor};

// Pipeline
pub use backend::client::{BackendClient, BackendTranscriptSource};
pub use orchestrator::QuestionOrchestrator;
pub use transcript::chunker::chunk_words;
pub use transcript::dom::{DomSegmentSource, SnapshotFileSource};
pub use transcript::poller::{PollConfig, PollState, TranscriptPoller};

// Error handling
pub use error::{Result, TubeaskError};

// Config
pub use config::Config;
