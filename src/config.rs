use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub transcript: TranscriptConfig,
    pub panel: PanelConfig,
}

/// Answer backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Transcript acquisition configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscriptConfig {
    pub max_chunk_words: usize,
    pub poll_max_attempts: u32,
    pub poll_interval_ms: u64,
}

/// CSS selectors describing where transcript text lives in a page snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    pub panel_selector: String,
    pub segment_selector: String,
    pub text_selector: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BACKEND_URL.to_string(),
            timeout_secs: defaults::BACKEND_TIMEOUT_SECS,
        }
    }
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            max_chunk_words: defaults::MAX_CHUNK_WORDS,
            poll_max_attempts: defaults::POLL_MAX_ATTEMPTS,
            poll_interval_ms: defaults::POLL_INTERVAL_MS,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_selector: defaults::PANEL_SELECTOR.to_string(),
            segment_selector: defaults::SEGMENT_SELECTOR.to_string(),
            text_selector: defaults::SEGMENT_TEXT_SELECTOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, or return defaults if the file
    /// doesn't exist. Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - TUBEASK_BACKEND_URL → backend.base_url
    /// - TUBEASK_CHUNK_WORDS → transcript.max_chunk_words
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("TUBEASK_BACKEND_URL")
            && !url.is_empty()
        {
            self.backend.base_url = url;
        }

        if let Ok(words) = std::env::var("TUBEASK_CHUNK_WORDS")
            && let Ok(words) = words.parse::<usize>()
            && words > 0
        {
            self.transcript.max_chunk_words = words;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/tubeask/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tubeask").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_matches_constants() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, defaults::BACKEND_URL);
        assert_eq!(config.transcript.max_chunk_words, defaults::MAX_CHUNK_WORDS);
        assert_eq!(
            config.transcript.poll_max_attempts,
            defaults::POLL_MAX_ATTEMPTS
        );
        assert_eq!(config.panel.panel_selector, defaults::PANEL_SELECTOR);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[backend]\nbase_url = \"http://127.0.0.1:9000\"").expect("write config");

        let config = Config::load(file.path()).expect("load config");
        assert_eq!(config.backend.base_url, "http://127.0.0.1:9000");
        // Unset fields fall back to defaults
        assert_eq!(config.backend.timeout_secs, defaults::BACKEND_TIMEOUT_SECS);
        assert_eq!(config.transcript.max_chunk_words, defaults::MAX_CHUNK_WORDS);
    }

    #[test]
    fn test_load_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "backend = not toml").expect("write config");

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config =
            Config::load_or_default(&dir.path().join("missing.toml")).expect("defaults for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_invalid_toml_still_fails() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[[backend").expect("write config");

        assert!(Config::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).expect("serialize config");
        let parsed: Config = toml::from_str(&serialized).expect("parse config");
        assert_eq!(config, parsed);
    }
}
