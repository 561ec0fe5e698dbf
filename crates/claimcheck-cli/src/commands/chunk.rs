//! Chunk command implementation.

use crate::cli::ChunkArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use claimcheck_extractor::WordChunker;

/// Execute the chunk command.
pub fn execute_chunk(args: ChunkArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let max_tokens = args.max_tokens.unwrap_or(config.settings.max_tokens);
    let chunker = WordChunker::new(config.extractor.token_divisor);

    let chunks = chunker.chunk_file(&args.file, max_tokens)?;

    println!("{}", formatter.format_chunks(&chunks)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;

    #[test]
    fn test_chunk_rejects_small_budget() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "a b c").unwrap();

        let args = ChunkArgs {
            file: path,
            max_tokens: Some(3),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_chunk(args, &Config::default(), &formatter).is_err());
    }

    #[test]
    fn test_chunk_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "a b c d e").unwrap();

        let args = ChunkArgs {
            file: path,
            max_tokens: Some(8),
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_chunk(args, &Config::default(), &formatter).is_ok());
    }
}
