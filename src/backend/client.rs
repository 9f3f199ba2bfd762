//! Client for the backend's transcript and question endpoints.

use crate::backend::protocol::{AskRequest, AskResponse, TranscriptResponse};
use crate::config::BackendConfig;
use crate::error::{Result, TubeaskError};
use crate::transcript::TranscriptSource;
use async_trait::async_trait;
use std::time::Duration;

/// HTTP/JSON client for the answer backend.
///
/// Both operations fail with typed errors; deciding what the user sees is
/// the orchestrator's job.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    /// Creates a client from configuration, applying the configured timeout.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TubeaskError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: normalize_base_url(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full transcript for a video.
    ///
    /// `GET /transcript?video_id=<id>`. On a non-success status the error
    /// detail is the raw response body text, which carries the
    /// server-provided reason.
    pub async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        let url = format!("{}/transcript", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("video_id", video_id)])
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TubeaskError::Backend {
                status: status.as_u16(),
                detail,
            });
        }

        let body: TranscriptResponse = response.json().await.map_err(decode_error)?;
        Ok(body.transcript)
    }

    /// Ask a question about one transcript chunk.
    ///
    /// `POST /ask` with JSON `{transcript, question}`. Returns `None` when
    /// the backend answered 200 but sent no usable answer text; non-success
    /// statuses fail with the status phrase as the detail.
    pub async fn ask(&self, chunk: &str, question: &str) -> Result<Option<String>> {
        let url = format!("{}/ask", self.base_url);
        let request = AskRequest {
            transcript: chunk.to_string(),
            question: question.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TubeaskError::Backend {
                status: status.as_u16(),
                detail: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        let body: AskResponse = response.json().await.map_err(decode_error)?;
        Ok(body.answer.filter(|answer| !answer.is_empty()))
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

fn network_error(e: reqwest::Error) -> TubeaskError {
    TubeaskError::Network {
        message: e.to_string(),
    }
}

fn decode_error(e: reqwest::Error) -> TubeaskError {
    if e.is_decode() {
        TubeaskError::MalformedResponse {
            message: e.to_string(),
        }
    } else {
        network_error(e)
    }
}

/// Backend-backed transcript acquisition.
///
/// Same contract as the panel poller, so callers can swap acquisition
/// paths without caring where the text comes from.
pub struct BackendTranscriptSource {
    client: BackendClient,
    video_id: String,
}

impl BackendTranscriptSource {
    pub fn new(client: BackendClient, video_id: impl Into<String>) -> Self {
        Self {
            client,
            video_id: video_id.into(),
        }
    }
}

#[async_trait]
impl TranscriptSource for BackendTranscriptSource {
    async fn transcript(&mut self) -> Result<Option<String>> {
        let text = self.client.fetch_transcript(&self.video_id).await?;
        let text = text.trim().to_string();
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}
