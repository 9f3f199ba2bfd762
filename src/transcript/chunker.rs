//! Word-window chunking of transcript text.

/// Split `text` into consecutive windows of at most `max_words`
/// whitespace-delimited words, each rejoined with single spaces.
///
/// Windows are contiguous and never overlap, so re-splitting the
/// concatenated chunks reproduces the original word sequence. The last
/// window may be shorter than `max_words`. Blank input yields no chunks
/// rather than a single empty one. A `max_words` of zero is treated as one.
pub fn chunk_words(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(max_words).map(|w| w.join(" ")).collect()
}
