//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use claimcheck_domain::{Chunk, Claim};
use claimcheck_extractor::ChunkReport;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest excerpt of chunk text shown in a table cell.
const EXCERPT_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a chunk listing.
    pub fn format_chunks(&self, chunks: &[Chunk]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(chunks)?),
            OutputFormat::Quiet => Ok(chunks
                .iter()
                .map(|c| c.start.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if chunks.is_empty() {
                    return Ok(self.colorize("No chunks (document is empty).", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Start", "Words", "Text"]);
                for chunk in chunks {
                    builder.push_record([
                        chunk.start.to_string(),
                        chunk.word_count().to_string(),
                        excerpt(&chunk.text),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the outcome of a chunked check.
    pub fn format_report(&self, report: &ChunkReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => self.format_claims_quiet(
                report.claims.iter().flat_map(|c| c.claims.iter()),
            ),
            OutputFormat::Table => {
                if report.claims.is_empty() {
                    return Ok(self.colorize("No claims found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Start", "Claim", "Chunk"]);
                for record in &report.claims {
                    for claim in &record.claims {
                        builder.push_record([
                            record.start.to_string(),
                            claim.to_string(),
                            excerpt(&record.text),
                        ]);
                    }
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the claims from a whole-document check.
    pub fn format_claims(&self, claims: &[Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(claims)?),
            OutputFormat::Quiet => self.format_claims_quiet(claims.iter()),
            OutputFormat::Table => {
                if claims.is_empty() {
                    return Ok(self.colorize("No claims found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Claim"]);
                for (idx, claim) in claims.iter().enumerate() {
                    builder.push_record([(idx + 1).to_string(), claim.to_string()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// One compact JSON claim per line.
    fn format_claims_quiet<'a>(&self, claims: impl Iterator<Item = &'a Claim>) -> Result<String> {
        let lines = claims
            .map(serde_json::to_string)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// Summary line for a chunked check.
    pub fn report_summary(&self, report: &ChunkReport) -> String {
        let msg = format!(
            "{} claim(s) in {} of {} chunk(s)",
            report.claim_count(),
            report.claims.len(),
            report.chunks_processed
        );
        if report.is_clean() {
            self.success(&msg)
        } else {
            self.warning(&format!("{}, {} failed", msg, report.failures.len()))
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Shorten text for a table cell, on a character boundary.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", head)
}
