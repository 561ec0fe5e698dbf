//! Claimcheck Domain Layer
//!
//! Core value types and trait interfaces shared by every other claimcheck crate.
//! Infrastructure (HTTP providers, file I/O, CLI) lives elsewhere.
//!
//! ## Key Concepts
//!
//! - **Chunk**: a window of a lower-cased document, tagged with its starting word offset
//! - **Claim**: an opaque JSON record reported by the language model
//! - **ChunkClaims**: the claims found in one chunk, together with the chunk itself
//! - **LlmProvider**: the seam between extraction logic and a completion service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod claim;
pub mod traits;

// Re-exports for convenience
pub use chunk::Chunk;
pub use claim::{ChunkClaims, Claim};
pub use traits::{CompletionRequest, LlmProvider};
