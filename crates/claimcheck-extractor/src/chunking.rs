//! Word-window chunking for large documents
//!
//! Token counts are approximated rather than computed: a budget of
//! `max_tokens` becomes `max_tokens / token_divisor` words per chunk.

use crate::config::DEFAULT_TOKEN_DIVISOR;
use crate::error::ExtractorError;
use claimcheck_domain::Chunk;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Splits lower-cased documents into fixed-size, non-overlapping word windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordChunker {
    token_divisor: usize,
}

impl WordChunker {
    /// Create a new chunker with the given tokens-to-words divisor
    pub fn new(token_divisor: usize) -> Self {
        Self { token_divisor }
    }

    /// Number of words each chunk holds for a token budget
    ///
    /// # Errors
    ///
    /// `InvalidChunkSize` when the budget rounds down to zero words.
    pub fn words_per_chunk(&self, max_tokens: usize) -> Result<usize, ExtractorError> {
        match max_tokens.checked_div(self.token_divisor) {
            Some(size) if size > 0 => Ok(size),
            _ => Err(ExtractorError::InvalidChunkSize {
                max_tokens,
                token_divisor: self.token_divisor,
            }),
        }
    }

    /// Chunk the given text
    ///
    /// The text is lower-cased and split on runs of whitespace. Chunk `i`
    /// starts at word `i * words_per_chunk`; only the last chunk may be short.
    pub fn chunk(&self, text: &str, max_tokens: usize) -> Result<Vec<Chunk>, ExtractorError> {
        let size = self.words_per_chunk(max_tokens)?;

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(is_word_separator)
            .filter(|word| !word.is_empty())
            .collect();

        let chunks: Vec<Chunk> = words
            .chunks(size)
            .enumerate()
            .map(|(idx, window)| Chunk::new(idx * size, window.join(" ")))
            .collect();

        debug!(
            words = words.len(),
            words_per_chunk = size,
            chunks = chunks.len(),
            "Chunked document"
        );

        Ok(chunks)
    }

    /// Read a UTF-8 file and chunk its contents
    pub fn chunk_file(
        &self,
        path: impl AsRef<Path>,
        max_tokens: usize,
    ) -> Result<Vec<Chunk>, ExtractorError> {
        // Reject a bad budget before touching the filesystem
        self.words_per_chunk(max_tokens)?;

        let text = fs::read_to_string(path.as_ref())?;
        self.chunk(&text, max_tokens)
    }
}

impl Default for WordChunker {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_DIVISOR)
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Chunk text with the default divisor
///
/// # Examples
///
/// ```
/// use claimcheck_extractor::chunk_text;
///
/// let chunks = chunk_text("One two Three four five", 8).unwrap();
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].text, "one two");
/// assert_eq!(chunks[2].start, 4);
/// assert_eq!(chunks[2].text, "five");
/// ```
pub fn chunk_text(text: &str, max_tokens: usize) -> Result<Vec<Chunk>, ExtractorError> {
    WordChunker::default().chunk(text, max_tokens)
}

/// Read and chunk a file with the default divisor
pub fn chunk_file(path: impl AsRef<Path>, max_tokens: usize) -> Result<Vec<Chunk>, ExtractorError> {
    WordChunker::default().chunk_file(path, max_tokens)
}
