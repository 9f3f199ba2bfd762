//! Command-line interface for tubeask
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Ask questions about a video's transcript
#[derive(Parser, Debug)]
#[command(name = "tubeask", version, about = "Ask questions about a video's transcript")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a question about a video's transcript
    Ask {
        /// The question to ask
        question: String,

        /// Watch-page URL to resolve the video id from
        #[arg(long, value_name = "URL", conflicts_with = "video")]
        url: Option<String>,

        /// Video id (skips URL resolution)
        #[arg(long, value_name = "ID")]
        video: Option<String>,

        /// Maximum words per transcript chunk
        #[arg(long, value_name = "WORDS")]
        chunk_words: Option<usize>,

        /// Backend base URL override
        #[arg(long, value_name = "URL")]
        backend: Option<String>,
    },

    /// Fetch and print a video's full transcript
    Transcript {
        /// Video id
        #[arg(long, value_name = "ID")]
        video: String,

        /// Backend base URL override
        #[arg(long, value_name = "URL")]
        backend: Option<String>,
    },

    /// Extract transcript text from a saved watch-page snapshot
    Extract {
        /// Path to an HTML snapshot of the watch page
        snapshot: PathBuf,

        /// Keep probing until the panel renders or the budget runs out
        #[arg(long)]
        poll: bool,

        /// Maximum number of probes
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,

        /// Delay between probes. Bare numbers are milliseconds; otherwise
        /// any humantime format (500ms, 2s, 1m)
        #[arg(long, value_name = "DURATION", value_parser = parse_interval)]
        interval: Option<Duration>,

        /// Print a word/chunk summary to stderr
        #[arg(long)]
        summary: bool,
    },
}

/// Parse a probe interval string into a duration.
fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    // Bare number → milliseconds
    if let Ok(ms) = s.parse::<u64>() {
        return Ok(Duration::from_millis(ms));
    }
    humantime::parse_duration(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interval_bare_number_is_millis() {
        assert_eq!(parse_interval("500"), Ok(Duration::from_millis(500)));
    }

    #[test]
    fn test_parse_interval_humantime_formats() {
        assert_eq!(parse_interval("500ms"), Ok(Duration::from_millis(500)));
        assert_eq!(parse_interval("2s"), Ok(Duration::from_secs(2)));
    }

    #[test]
    fn test_parse_interval_rejects_garbage() {
        assert!(parse_interval("soon").is_err());
    }

    #[test]
    fn test_cli_parses_ask_command() {
        let cli = Cli::try_parse_from([
            "tubeask",
            "ask",
            "What is said?",
            "--url",
            "https://www.youtube.com/watch?v=xyz",
        ])
        .expect("parse args");

        match cli.command {
            Commands::Ask { question, url, video, .. } => {
                assert_eq!(question, "What is said?");
                assert_eq!(url.as_deref(), Some("https://www.youtube.com/watch?v=xyz"));
                assert_eq!(video, None);
            }
            other => panic!("expected ask command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_url_and_video_conflict() {
        let result = Cli::try_parse_from([
            "tubeask", "ask", "q", "--url", "u", "--video", "v",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_extract_with_poll_budget() {
        let cli = Cli::try_parse_from([
            "tubeask", "extract", "page.html", "--poll", "--attempts", "3", "--interval", "250ms",
        ])
        .expect("parse args");

        match cli.command {
            Commands::Extract { snapshot, poll, attempts, interval, .. } => {
                assert_eq!(snapshot, PathBuf::from("page.html"));
                assert!(poll);
                assert_eq!(attempts, Some(3));
                assert_eq!(interval, Some(Duration::from_millis(250)));
            }
            other => panic!("expected extract command, got {other:?}"),
        }
    }
}
