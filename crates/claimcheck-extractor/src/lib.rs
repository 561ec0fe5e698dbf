//! Claimcheck Extractor
//!
//! Splits documents into word-bounded chunks and asks an LLM which claims
//! each chunk makes.
//!
//! # Overview
//!
//! A completion service only accepts so many tokens per request, so a long
//! document is cut into fixed-size word windows first. Each window is sent
//! with a caller-supplied instruction, the reply is parsed as a JSON object,
//! and its `claims` array is collected.
//!
//! # Architecture
//!
//! ```text
//! Document → WordChunker → [Chunk] → ClaimExtractor → LLM → ChunkReport
//! ```
//!
//! # Modes
//!
//! - **Chunked**: one request per chunk. Failures are contained to their chunk
//!   and chunks without claims are dropped.
//! - **Whole document**: one request for the full text with a larger response
//!   ceiling. Failure is reported as `None`, distinct from an empty claim list.
//!
//! # Example Usage
//!
//! ```
//! use claimcheck_extractor::{ClaimExtractor, ExtractorConfig};
//! use claimcheck_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{"claims": [{"claim": "the sky is green"}]}"#);
//! let extractor = ClaimExtractor::new(llm, ExtractorConfig::default());
//!
//! let chunks = extractor.chunk("The sky is green. Grass is blue.", 12).unwrap();
//! let report = extractor.check_chunks(&chunks, "gpt-3.5-turbo", "List the claims.");
//!
//! assert_eq!(report.claims.len(), 3);
//! assert!(report.failures.is_empty());
//!
//! let whole = extractor.check_document("The sky is green.", "gpt-4", "List the claims.");
//! assert_eq!(whole.map(|c| c.len()), Some(1));
//! ```

#![warn(missing_docs)]

mod chunking;
mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;


pub use chunking::{chunk_file, chunk_text, WordChunker};
pub use config::{
    ExtractorConfig, DEFAULT_CHUNK_RESPONSE_TOKENS, DEFAULT_DOCUMENT_RESPONSE_TOKENS,
    DEFAULT_TOKEN_DIVISOR,
};
pub use error::ExtractorError;
pub use extractor::ClaimExtractor;
pub use parser::parse_claims;
pub use prompt::{PromptBuilder, DEFAULT_INSTRUCTION, PROMPT_SEPARATOR};
pub use types::{ChunkFailure, ChunkReport, FailureKind};

pub use claimcheck_domain::{Chunk, ChunkClaims, Claim};
