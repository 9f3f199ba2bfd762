//! Question orchestration: resolve the video, fetch, chunk, ask, display.
//!
//! One run executes strictly sequentially — the transcript fetch completes
//! before chunking, chunking before the answer request. A second run started
//! while one is in flight is not guarded against and may race on a shared
//! sink; callers own that serialization.

use crate::backend::client::BackendClient;
use crate::defaults;
use crate::error::{Result, TubeaskError};
use crate::page;
use crate::sink::AnswerSink;
use crate::transcript::chunker::chunk_words;

/// Drives one question through the pipeline and routes the outcome to the
/// display sink. Failures are caught here, converted to one user-visible
/// message, and logged; they never propagate past `run`.
pub struct QuestionOrchestrator<S: AnswerSink> {
    client: BackendClient,
    sink: S,
    max_chunk_words: usize,
}

impl<S: AnswerSink> QuestionOrchestrator<S> {
    pub fn new(client: BackendClient, sink: S) -> Self {
        Self {
            client,
            sink,
            max_chunk_words: defaults::MAX_CHUNK_WORDS,
        }
    }

    pub fn with_chunk_words(mut self, max_words: usize) -> Self {
        self.max_chunk_words = max_words;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one question against the video identified by the watch-page URL.
    ///
    /// Returns `true` when an answer (or the explicit no-answer placeholder)
    /// was displayed.
    pub async fn run(&mut self, page_url: &str, question: &str) -> bool {
        let outcome = self.execute(page_url, question).await;
        self.display(outcome)
    }

    /// Run one question against a known video id, skipping URL resolution.
    pub async fn run_video(&mut self, video_id: &str, question: &str) -> bool {
        let outcome = self.execute_video(video_id, question).await;
        self.display(outcome)
    }

    async fn execute(&mut self, page_url: &str, question: &str) -> Result<Option<String>> {
        let question = validate_question(question)?;
        let video_id =
            page::video_id_from_url(page_url).ok_or_else(|| TubeaskError::MissingVideoId {
                url: page_url.to_string(),
            })?;
        self.answer_for(&video_id, question).await
    }

    async fn execute_video(&mut self, video_id: &str, question: &str) -> Result<Option<String>> {
        let question = validate_question(question)?;
        self.answer_for(video_id, question).await
    }

    async fn answer_for(&mut self, video_id: &str, question: &str) -> Result<Option<String>> {
        let transcript = self.client.fetch_transcript(video_id).await?;

        // Last chunk: the most recent content is the best bet for a
        // question about "now". Empty transcript → empty chunk.
        let chunks = chunk_words(&transcript, self.max_chunk_words);
        let recent = chunks.last().cloned().unwrap_or_default();

        self.sink.pending();
        self.client.ask(&recent, question).await
    }

    fn display(&mut self, outcome: Result<Option<String>>) -> bool {
        match outcome {
            Ok(Some(answer)) => {
                self.sink.answer(&answer);
                true
            }
            Ok(None) => {
                self.sink.answer(defaults::NO_ANSWER_PLACEHOLDER);
                true
            }
            Err(err) => {
                // Full error to stderr for diagnostics, shorter message to the sink
                eprintln!("tubeask: {err}");
                self.sink.error(&user_message(&err));
                false
            }
        }
    }
}

fn validate_question(question: &str) -> Result<&str> {
    let question = question.trim();
    if question.is_empty() {
        return Err(TubeaskError::EmptyQuestion);
    }
    Ok(question)
}

/// One user-visible message per failure class.
fn user_message(err: &TubeaskError) -> String {
    match err {
        TubeaskError::EmptyQuestion => "Please enter a question.".to_string(),
        TubeaskError::MissingVideoId { .. } => {
            "Cannot find a video id in the page URL.".to_string()
        }
        TubeaskError::Backend { status, detail } => format!("Error: {detail} (status {status})"),
        TubeaskError::Network { .. } => {
            "Failed to reach the backend. Check that it is running.".to_string()
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CollectorSink, SinkEvent};

    fn orchestrator(base_url: &str) -> QuestionOrchestrator<CollectorSink> {
        QuestionOrchestrator::new(BackendClient::new(base_url), CollectorSink::new())
    }

    #[tokio::test]
    async fn test_blank_question_fails_before_any_network_activity() {
        // Unroutable backend: any network attempt would surface as a
        // network error instead of the validation message.
        let mut orch = orchestrator("http://127.0.0.1:1");

        let ok = orch
            .run("https://www.youtube.com/watch?v=xyz", "   ")
            .await;

        assert!(!ok);
        assert_eq!(
            orch.sink().events,
            vec![SinkEvent::Error("Please enter a question.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_missing_video_id_fails_before_any_network_activity() {
        let mut orch = orchestrator("http://127.0.0.1:1");

        let ok = orch
            .run("https://www.youtube.com/feed/library", "What is said?")
            .await;

        assert!(!ok);
        assert_eq!(
            orch.sink().events,
            vec![SinkEvent::Error(
                "Cannot find a video id in the page URL.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_surfaces_network_message() {
        let mut orch = orchestrator("http://127.0.0.1:1");

        let ok = orch
            .run("https://www.youtube.com/watch?v=xyz", "What is said?")
            .await;

        assert!(!ok);
        let error = orch.sink().last_error().expect("error displayed");
        assert!(error.contains("Failed to reach the backend"));
        // Failure happened during the fetch, before the pending indicator
        assert!(!orch.sink().events.contains(&SinkEvent::Pending));
    }

    #[test]
    fn test_user_message_for_backend_error_carries_status_phrase() {
        let message = user_message(&TubeaskError::Backend {
            status: 500,
            detail: "Internal Server Error".to_string(),
        });
        assert!(message.contains("Internal Server Error"));
        assert!(message.contains("500"));
    }
}
