//! Default configuration constants for tubeask.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Maximum number of words in a transcript chunk.
///
/// 200 words keeps a chunk comfortably inside a small chat model's context
/// window once the question and prompt scaffolding are added.
pub const MAX_CHUNK_WORDS: usize = 200;

/// Default number of extraction probes before giving up on the panel.
pub const POLL_MAX_ATTEMPTS: u32 = 10;

/// Default delay between extraction probes in milliseconds.
///
/// Together with [`POLL_MAX_ATTEMPTS`] this bounds the worst-case wait at
/// 5 seconds before the transcript is reported unavailable.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Default base URL of the answer backend.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Default request timeout for backend calls in seconds.
pub const BACKEND_TIMEOUT_SECS: u64 = 60;

/// CSS selector for the transcript panel's content region.
pub const PANEL_SELECTOR: &str = "ytd-transcript-renderer #body";

/// CSS selector for one transcript segment inside the panel.
pub const SEGMENT_SELECTOR: &str = "ytd-transcript-segment-renderer";

/// CSS selector for the text sub-element inside a segment.
pub const SEGMENT_TEXT_SELECTOR: &str = "#text";

/// Query parameter holding the video identifier on the watch page.
pub const VIDEO_ID_PARAM: &str = "v";

/// Shown when the backend answered 200 but sent no answer text.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer received.";

/// Transient indicator while the answer request is in flight.
pub const PENDING_MESSAGE: &str = "Thinking...";
