//! Transcript extraction over an abstract segment source.
//!
//! The extractor never touches the page itself; it only sees an ordered
//! sequence of segment texts. The host-integration layer (see
//! [`crate::transcript::dom`]) decides where those come from.

/// Ordered view over the transcript panel's rendered segments.
///
/// `None` means the panel is not present at all — it renders asynchronously
/// after the user opens it, so absence is expected, not an error.
/// `Some(vec![])` means the panel exists but holds no segments yet.
pub trait SegmentSource: Send + Sync {
    fn segments(&self) -> Option<Vec<String>>;
}

/// Reads the currently-rendered transcript segments into a single text blob.
pub struct TranscriptExtractor<S: SegmentSource> {
    source: S,
}

impl<S: SegmentSource> TranscriptExtractor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Concatenate all segment texts in order, separated by single spaces.
    ///
    /// Returns `None` when the panel is absent, holds no segments, or every
    /// segment is blank — an empty blob is never returned.
    pub fn extract(&self) -> Option<String> {
        let segments = self.source.segments()?;

        let mut text = String::new();
        for segment in &segments {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(segment);
        }

        if text.is_empty() { None } else { Some(text) }
    }
}

/// Mock segment source for testing
#[derive(Debug, Clone, Default)]
pub struct MockSegmentSource {
    segments: Option<Vec<String>>,
}

impl MockSegmentSource {
    /// A source whose panel never renders.
    pub fn absent() -> Self {
        Self { segments: None }
    }

    /// A source with a rendered panel holding the given segment texts.
    pub fn with_segments(segments: &[&str]) -> Self {
        Self {
            segments: Some(segments.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl SegmentSource for MockSegmentSource {
    fn segments(&self) -> Option<Vec<String>> {
        self.segments.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_joins_segments_with_single_spaces() {
        let source = MockSegmentSource::with_segments(&["hello", "world", "again"]);
        let extractor = TranscriptExtractor::new(source);

        assert_eq!(extractor.extract(), Some("hello world again".to_string()));
    }

    #[test]
    fn test_extract_absent_panel_returns_none() {
        let extractor = TranscriptExtractor::new(MockSegmentSource::absent());
        assert_eq!(extractor.extract(), None);
    }

    #[test]
    fn test_extract_empty_panel_returns_none() {
        let extractor = TranscriptExtractor::new(MockSegmentSource::with_segments(&[]));
        assert_eq!(extractor.extract(), None);
    }

    #[test]
    fn test_extract_all_blank_segments_returns_none() {
        let source = MockSegmentSource::with_segments(&["", "   ", "\t"]);
        let extractor = TranscriptExtractor::new(source);
        assert_eq!(extractor.extract(), None);
    }

    #[test]
    fn test_extract_skips_blank_segments_between_text() {
        let source = MockSegmentSource::with_segments(&["first line", "", "second line"]);
        let extractor = TranscriptExtractor::new(source);
        assert_eq!(
            extractor.extract(),
            Some("first line second line".to_string())
        );
    }

    #[test]
    fn test_extract_trims_segment_whitespace() {
        let source = MockSegmentSource::with_segments(&["  padded  ", " text "]);
        let extractor = TranscriptExtractor::new(source);
        assert_eq!(extractor.extract(), Some("padded text".to_string()));
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let source = MockSegmentSource::with_segments(&["c", "a", "b"]);
        let extractor = TranscriptExtractor::new(source);
        assert_eq!(extractor.extract(), Some("c a b".to_string()));
    }
}
