//! Transcript acquisition pipeline: extraction, polling, chunking.

pub mod chunker;
pub mod dom;
pub mod extractor;
pub mod poller;

use crate::error::Result;
use async_trait::async_trait;

/// Common contract for the two transcript acquisition paths: polling the
/// rendered panel and fetching from the backend.
///
/// `Ok(None)` means the transcript is not available — the panel never
/// rendered, or the backend has no text for the video. Callers treat that
/// as "transcript unavailable" and degrade gracefully; it is not an error.
#[async_trait]
pub trait TranscriptSource {
    async fn transcript(&mut self) -> Result<Option<String>>;
}
