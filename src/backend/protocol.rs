//! JSON wire types for the answer backend.

use serde::{Deserialize, Serialize};

/// Body of a successful `GET /transcript` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

/// Body of a `POST /ask` request: one transcript chunk plus the question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub transcript: String,
    pub question: String,
}

/// Body of a successful `POST /ask` response.
///
/// `answer` may be missing entirely; that means "no answer received",
/// not a protocol error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
}
