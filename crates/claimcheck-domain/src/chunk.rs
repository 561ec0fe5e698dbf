//! Chunk module - a fixed-size window over a document's word sequence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous run of words taken from a lower-cased document
///
/// `start` is the index of the chunk's first word in the document's word
/// sequence, and `text` is the window's words joined by single spaces.
///
/// # Examples
///
/// ```
/// use claimcheck_domain::Chunk;
///
/// let chunk = Chunk::new(4, "the quick brown fox");
/// assert_eq!(chunk.start, 4);
/// assert_eq!(chunk.word_count(), 4);
/// assert_eq!(chunk.end(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Index of the first word of this chunk within the document
    pub start: usize,

    /// Space-joined words of the chunk
    pub text: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }

    /// Number of words in this chunk
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Index one past the last word of this chunk
    pub fn end(&self) -> usize {
        self.start + self.word_count()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.start, self.text)
    }
}
