//! Segment sources backed by an HTML snapshot of the watch page.
//!
//! The live page renders the transcript panel asynchronously, so a snapshot
//! taken too early contains no panel at all. These sources report that case
//! as an absent panel, which the poller turns into a retry.

use crate::config::PanelConfig;
use crate::error::{Result, TubeaskError};
use crate::transcript::extractor::SegmentSource;
use scraper::{Html, Selector};
use std::fs;
use std::path::PathBuf;

fn parse_selector(key: &str, raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| TubeaskError::ConfigInvalidValue {
        key: key.to_string(),
        message: format!("{raw}: {e:?}"),
    })
}

/// Parsed selector set describing the transcript panel structure.
#[derive(Debug, Clone)]
struct PanelSelectors {
    panel: Selector,
    segment: Selector,
    text: Selector,
}

impl PanelSelectors {
    fn from_config(config: &PanelConfig) -> Result<Self> {
        Ok(Self {
            panel: parse_selector("panel.panel_selector", &config.panel_selector)?,
            segment: parse_selector("panel.segment_selector", &config.segment_selector)?,
            text: parse_selector("panel.text_selector", &config.text_selector)?,
        })
    }
}

/// Collect segment texts from an HTML document, in document order.
///
/// `None` when the panel container is missing. Segments without a text
/// sub-element are skipped; inner whitespace is collapsed to single spaces.
fn segments_in(html: &str, selectors: &PanelSelectors) -> Option<Vec<String>> {
    let document = Html::parse_document(html);
    let panel = document.select(&selectors.panel).next()?;

    let mut segments = Vec::new();
    for segment in panel.select(&selectors.segment) {
        if let Some(text_el) = segment.select(&selectors.text).next() {
            let text = text_el.text().collect::<String>();
            segments.push(text.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
    Some(segments)
}

/// Segment source over an in-memory HTML document.
pub struct DomSegmentSource {
    html: String,
    selectors: PanelSelectors,
}

impl DomSegmentSource {
    pub fn new(html: impl Into<String>) -> Result<Self> {
        Self::with_config(html, &PanelConfig::default())
    }

    pub fn with_config(html: impl Into<String>, config: &PanelConfig) -> Result<Self> {
        Ok(Self {
            html: html.into(),
            selectors: PanelSelectors::from_config(config)?,
        })
    }
}

impl SegmentSource for DomSegmentSource {
    fn segments(&self) -> Option<Vec<String>> {
        segments_in(&self.html, &self.selectors)
    }
}

/// Segment source that re-reads a snapshot file on every probe.
///
/// Lets the poller observe a snapshot that another process keeps updating
/// while the panel fills in. A missing or unreadable file counts as an
/// absent panel.
pub struct SnapshotFileSource {
    path: PathBuf,
    selectors: PanelSelectors,
}

impl SnapshotFileSource {
    pub fn new(path: impl Into<PathBuf>, config: &PanelConfig) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            selectors: PanelSelectors::from_config(config)?,
        })
    }
}

impl SegmentSource for SnapshotFileSource {
    fn segments(&self) -> Option<Vec<String>> {
        let html = fs::read_to_string(&self.path).ok()?;
        segments_in(&html, &self.selectors)
    }
}
