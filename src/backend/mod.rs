//! HTTP client for the transcript answer backend.

pub mod client;
pub mod protocol;
