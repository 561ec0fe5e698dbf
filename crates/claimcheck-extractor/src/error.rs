//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during chunking and claim extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (transport, auth, rate limit, ...)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Token budget too small to hold a single word per chunk
    #[error("Invalid chunk size: max_tokens {max_tokens} gives zero words per chunk (divisor: {token_divisor})")]
    InvalidChunkSize {
        /// Token budget supplied by the caller
        max_tokens: usize,
        /// Tokens-to-words divisor in effect
        token_divisor: usize,
    },

    /// Reply was JSON but not in the expected shape
    #[error("Invalid claim format: {0}")]
    InvalidFormat(String),

    /// Reply was not JSON at all
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
