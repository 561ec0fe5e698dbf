//! Core claim extractor implementation

use crate::chunking::WordChunker;
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_claims;
use crate::prompt::PromptBuilder;
use crate::types::{ChunkFailure, ChunkReport};
use claimcheck_domain::{Chunk, ChunkClaims, Claim, CompletionRequest, LlmProvider};
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sends chunks or whole documents to an LLM and collects the claims it reports
///
/// The provider is injected once and reused for every request. Calls are
/// made one at a time, in chunk order, and are never retried.
pub struct ClaimExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    chunker: WordChunker,
    config: ExtractorConfig,
}

impl<L> ClaimExtractor<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            chunker: WordChunker::new(config.token_divisor),
            config,
        }
    }

    /// The injected provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Chunk text using this extractor's divisor
    pub fn chunk(&self, text: &str, max_tokens: usize) -> Result<Vec<Chunk>, ExtractorError> {
        self.chunker.chunk(text, max_tokens)
    }

    /// Check every chunk, one request per chunk
    ///
    /// A failing chunk is logged and recorded in the report's `failures`;
    /// it never stops the remaining chunks. Chunks whose reply has no claims
    /// are dropped.
    pub fn check_chunks(&self, chunks: &[Chunk], model: &str, system_prompt: &str) -> ChunkReport {
        info!(chunks = chunks.len(), model, "Checking chunks");

        let mut report = ChunkReport {
            chunks_processed: chunks.len(),
            ..ChunkReport::default()
        };

        for chunk in chunks {
            debug!(start = chunk.start, words = chunk.word_count(), "Processing chunk");

            match self.request_claims(model, system_prompt, &chunk.text, self.config.chunk_response_tokens) {
                Ok(claims) if claims.is_empty() => {
                    debug!(start = chunk.start, "No claims in chunk");
                }
                Ok(claims) => {
                    debug!(start = chunk.start, claims = claims.len(), "Found claims");
                    report.claims.push(ChunkClaims::new(chunk, claims));
                }
                Err(e) => {
                    warn!(
                        start = chunk.start,
                        "Failed on chunk starting at {}: {}",
                        chunk.start,
                        e
                    );
                    report.failures.push(ChunkFailure::new(chunk.start, &e));
                }
            }
        }

        info!(
            "Chunk check complete: {} with claims, {} claims total, {} failed",
            report.claims.len(),
            report.claim_count(),
            report.failures.len()
        );

        report
    }

    /// Chunk a file and check every chunk
    ///
    /// # Errors
    ///
    /// Only chunking errors (bad budget, unreadable file) are returned;
    /// per-chunk failures are reported inside the `ChunkReport`.
    pub fn check_file(
        &self,
        path: impl AsRef<Path>,
        max_tokens: usize,
        model: &str,
        system_prompt: &str,
    ) -> Result<ChunkReport, ExtractorError> {
        let path = path.as_ref();
        let chunks = self.chunker.chunk_file(path, max_tokens)?;

        info!("Split {} into {} chunks", path.display(), chunks.len());

        Ok(self.check_chunks(&chunks, model, system_prompt))
    }

    /// Check a whole document in a single request, reporting any failure
    pub fn try_check_document(
        &self,
        document: &str,
        model: &str,
        system_prompt: &str,
    ) -> Result<Vec<Claim>, ExtractorError> {
        info!(model, document_len = document.len(), "Checking whole document");
        self.request_claims(model, system_prompt, document, self.config.document_response_tokens)
    }

    /// Check a whole document in a single request
    ///
    /// Returns `None` if the request or its reply failed, and `Some` (possibly
    /// empty) otherwise, so "no claims" and "failed" stay distinguishable.
    pub fn check_document(&self, document: &str, model: &str, system_prompt: &str) -> Option<Vec<Claim>> {
        match self.try_check_document(document, model, system_prompt) {
            Ok(claims) => {
                info!(claims = claims.len(), "Document check complete");
                Some(claims)
            }
            Err(e) => {
                warn!("Failed with error: {}", e);
                None
            }
        }
    }

    /// Send one prompt and parse the reply
    fn request_claims(
        &self,
        model: &str,
        system_prompt: &str,
        content: &str,
        max_tokens: u32,
    ) -> Result<Vec<Claim>, ExtractorError> {
        let prompt = PromptBuilder::new(system_prompt, content).build();

        debug!("Prompt length: {} chars", prompt.len());

        let request = CompletionRequest::new(model, prompt, max_tokens);
        let response = self
            .llm_provider
            .complete(&request)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        parse_claims(&response)
    }
}
