use anyhow::{Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;
use std::time::Duration;
use tubeask::backend::client::BackendClient;
use tubeask::cli::{Cli, Commands};
use tubeask::config::Config;
use tubeask::orchestrator::QuestionOrchestrator;
use tubeask::sink::StdoutSink;
use tubeask::transcript::chunker::chunk_words;
use tubeask::transcript::dom::SnapshotFileSource;
use tubeask::transcript::extractor::TranscriptExtractor;
use tubeask::transcript::poller::{PollConfig, TranscriptPoller};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Ask {
            question,
            url,
            video,
            chunk_words,
            backend,
        } => {
            let client = build_client(&config, backend)?;
            let sink = StdoutSink::new(cli.quiet);
            let mut orchestrator = QuestionOrchestrator::new(client, sink)
                .with_chunk_words(chunk_words.unwrap_or(config.transcript.max_chunk_words));

            let answered = match (url, video) {
                (_, Some(id)) => orchestrator.run_video(&id, &question).await,
                (Some(url), None) => orchestrator.run(&url, &question).await,
                (None, None) => bail!("either --url or --video is required"),
            };
            if !answered {
                std::process::exit(1);
            }
        }
        Commands::Transcript { video, backend } => {
            let client = build_client(&config, backend)?;
            let transcript = client.fetch_transcript(&video).await?;
            println!("{transcript}");
        }
        Commands::Extract {
            snapshot,
            poll,
            attempts,
            interval,
            summary,
        } => {
            run_extract(&config, &snapshot, poll, attempts, interval, summary, cli.quiet).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };
    Ok(config.with_env_overrides())
}

fn build_client(config: &Config, backend_override: Option<String>) -> Result<BackendClient> {
    match backend_override {
        Some(url) => Ok(BackendClient::new(url)),
        None => Ok(BackendClient::from_config(&config.backend)?),
    }
}

async fn run_extract(
    config: &Config,
    snapshot: &Path,
    poll: bool,
    attempts: Option<u32>,
    interval: Option<Duration>,
    summary: bool,
    quiet: bool,
) -> Result<()> {
    let source = SnapshotFileSource::new(snapshot, &config.panel)?;

    let text = if poll {
        let poll_config = PollConfig {
            max_attempts: attempts.unwrap_or(config.transcript.poll_max_attempts),
            interval: interval
                .unwrap_or(Duration::from_millis(config.transcript.poll_interval_ms)),
        };
        if !quiet {
            eprintln!(
                "{}",
                format!(
                    "Probing {} (up to {} attempts, {} apart)...",
                    snapshot.display(),
                    poll_config.max_attempts,
                    humantime::format_duration(poll_config.interval)
                )
                .dimmed()
            );
        }
        TranscriptPoller::with_config(source, poll_config).poll().await
    } else {
        TranscriptExtractor::new(source).extract()
    };

    match text {
        Some(text) => {
            println!("{text}");
            if summary {
                let words = text.split_whitespace().count();
                let chunks = chunk_words(&text, config.transcript.max_chunk_words);
                eprintln!(
                    "{} words, {} chunk(s) of at most {} words",
                    words,
                    chunks.len(),
                    config.transcript.max_chunk_words
                );
            }
            Ok(())
        }
        None => bail!(
            "no transcript found in {} (panel not rendered or empty)",
            snapshot.display()
        ),
    }
}
