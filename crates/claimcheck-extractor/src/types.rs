//! Result types for chunked claim checking

use crate::error::ExtractorError;
use claimcheck_domain::ChunkClaims;
use serde::{Deserialize, Serialize};

/// Outcome of checking a sequence of chunks
///
/// `claims` holds only chunks whose reply carried at least one claim, in
/// chunk order. Chunks that failed are listed in `failures` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkReport {
    /// Chunks with at least one claim
    pub claims: Vec<ChunkClaims>,

    /// Chunks whose request or reply failed
    pub failures: Vec<ChunkFailure>,

    /// Total number of chunks submitted
    pub chunks_processed: usize,
}

impl ChunkReport {
    /// Total number of claims across all chunks
    pub fn claim_count(&self) -> usize {
        self.claims.iter().map(|c| c.claims.len()).sum()
    }

    /// True if no chunk failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Broad category of a per-chunk failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The completion call itself failed
    Service,
    /// The call succeeded but the reply could not be used
    MalformedResponse,
}

/// A chunk that produced no usable reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkFailure {
    /// Start word index of the failed chunk
    pub start: usize,

    /// Failure category
    pub kind: FailureKind,

    /// Human-readable reason
    pub reason: String,
}

impl ChunkFailure {
    /// Record a failure for the chunk starting at `start`
    pub fn new(start: usize, error: &ExtractorError) -> Self {
        let kind = match error {
            ExtractorError::Llm(_) => FailureKind::Service,
            _ => FailureKind::MalformedResponse,
        };
        Self {
            start,
            kind,
            reason: error.to_string(),
        }
    }
}
