//! Claimcheck CLI - find the factual claims in a document with an LLM.

use claimcheck_cli::commands;
use claimcheck_cli::{init_tracing, Cli, Command, Config, Formatter};
use claimcheck_extractor::ClaimExtractor;
use claimcheck_llm::OpenAiProvider;
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> claimcheck_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!(path = ?cli.config, "Configuration loaded");

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Chunk(args) => {
            commands::execute_chunk(args, &config, &formatter)?;
        }
        Command::Check(args) => {
            let extractor = build_extractor(&config, cli.api_key)?;
            commands::execute_check(args, &extractor, &config, &formatter)?;
        }
        Command::CheckDoc(args) => {
            let extractor = build_extractor(&config, cli.api_key)?;
            commands::execute_check_doc(args, &extractor, &config, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, cli.config.as_deref(), &config, &formatter)?;
        }
    }

    Ok(())
}

/// Connect to the completion service for the commands that call it.
fn build_extractor(
    config: &Config,
    api_key: Option<String>,
) -> claimcheck_cli::Result<ClaimExtractor<OpenAiProvider>> {
    let api_key = config.api_key(api_key)?;
    let provider = OpenAiProvider::with_config(api_key, config.openai.connection.clone())?;
    debug!(endpoint = %provider.config().endpoint, "Completion provider ready");
    Ok(ClaimExtractor::new(provider, config.extractor.clone()))
}
