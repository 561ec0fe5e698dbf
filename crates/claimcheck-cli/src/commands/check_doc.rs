//! Check-doc command implementation.

use crate::cli::CheckDocArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimcheck_domain::LlmProvider;
use claimcheck_extractor::ClaimExtractor;
use std::fmt::Display;
use std::fs;

/// Execute the check-doc command.
pub fn execute_check_doc<L>(
    args: CheckDocArgs,
    extractor: &ClaimExtractor<L>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    L: LlmProvider,
    L::Error: Display,
{
    let document = fs::read_to_string(&args.file)?;
    let model = args
        .model
        .unwrap_or_else(|| config.models.document_model.clone());
    let prompt = args.prompt.resolve()?;

    eprintln!(
        "{}",
        formatter.info(&format!("Checking {} with {}", args.file.display(), model))
    );

    let claims = extractor
        .check_document(&document, &model, &prompt)
        .ok_or_else(|| CliError::DocumentCheckFailed(args.file.display().to_string()))?;

    println!("{}", formatter.format_claims(&claims)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PromptArgs;
    use crate::config::OutputFormat;
    use claimcheck_llm::MockProvider;

    fn args(file: std::path::PathBuf) -> CheckDocArgs {
        CheckDocArgs {
            file,
            model: Some("gpt-4o".to_string()),
            prompt: PromptArgs {
                prompt: Some("Find claims.".to_string()),
                prompt_file: None,
            },
        }
    }

    #[test]
    fn test_check_doc_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "The Moon orbits Earth.").unwrap();

        let extractor = ClaimExtractor::new(
            MockProvider::new(r#"{"claims": [{"claim": "moon orbits earth"}]}"#),
            Default::default(),
        );
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_check_doc(args(path), &extractor, &Config::default(), &formatter).unwrap();

        let requests = extractor.provider().requests();
        assert_eq!(requests[0].model, "gpt-4o");
        assert_eq!(requests[0].max_tokens, 300);
        assert_eq!(requests[0].prompt, "Find claims.\n\nThe Moon orbits Earth.");
    }

    #[test]
    fn test_check_doc_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "text").unwrap();

        let extractor = ClaimExtractor::new(MockProvider::new("not json"), Default::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_check_doc(args(path), &extractor, &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::DocumentCheckFailed(_))));
    }
}
