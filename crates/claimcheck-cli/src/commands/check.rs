//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use claimcheck_domain::LlmProvider;
use claimcheck_extractor::ClaimExtractor;
use std::fmt::Display;

/// Execute the check command.
///
/// Per-chunk failures are logged by the extractor and counted in the
/// summary; they do not fail the command.
pub fn execute_check<L>(
    args: CheckArgs,
    extractor: &ClaimExtractor<L>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider,
    L::Error: Display,
{
    let max_tokens = args.max_tokens.unwrap_or(config.settings.max_tokens);
    let model = args
        .model
        .unwrap_or_else(|| config.models.chunk_model.clone());
    let prompt = args.prompt.resolve()?;

    eprintln!(
        "{}",
        formatter.info(&format!("Checking {} with {}", args.file.display(), model))
    );

    let report = extractor.check_file(&args.file, max_tokens, &model, &prompt)?;

    println!("{}", formatter.format_report(&report)?);
    eprintln!("{}", formatter.report_summary(&report));

    Ok(())
}
