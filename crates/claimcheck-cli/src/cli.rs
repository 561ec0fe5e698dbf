//! CLI command definitions and argument parsing.

use crate::error::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use claimcheck_extractor::DEFAULT_INSTRUCTION;
use std::fs;
use std::path::PathBuf;

/// Claimcheck - find the factual claims in a document with an LLM.
#[derive(Debug, Parser)]
#[command(name = "claimcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a file into chunks without contacting the service
    Chunk(ChunkArgs),

    /// Check a file chunk by chunk
    Check(CheckArgs),

    /// Check a whole file in a single request
    CheckDoc(CheckDocArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the chunk command.
#[derive(Debug, Parser)]
pub struct ChunkArgs {
    /// UTF-8 text file to split
    pub file: PathBuf,

    /// Token budget per chunk (words per chunk = budget / 4)
    #[arg(short = 't', long)]
    pub max_tokens: Option<usize>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// UTF-8 text file to check
    pub file: PathBuf,

    /// Token budget per chunk (words per chunk = budget / 4)
    #[arg(short = 't', long)]
    pub max_tokens: Option<usize>,

    /// Model identifier (defaults to the configured chunk model)
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(flatten)]
    pub prompt: PromptArgs,
}

/// Arguments for the check-doc command.
#[derive(Debug, Parser)]
pub struct CheckDocArgs {
    /// UTF-8 text file to check
    pub file: PathBuf,

    /// Model identifier (defaults to the configured document model)
    #[arg(short, long)]
    pub model: Option<String>,

    #[command(flatten)]
    pub prompt: PromptArgs,
}

/// Where the instruction prompt comes from.
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Instruction prompt text
    #[arg(short, long, conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Read the instruction prompt from a file
    #[arg(long)]
    pub prompt_file: Option<PathBuf>,
}

impl PromptArgs {
    /// The instruction to send: inline text, file contents, or the built-in default.
    pub fn resolve(&self) -> Result<String> {
        if let Some(prompt) = &self.prompt {
            return Ok(prompt.clone());
        }
        if let Some(path) = &self.prompt_file {
            return Ok(fs::read_to_string(path)?.trim_end().to_string());
        }
        Ok(DEFAULT_INSTRUCTION.to_string())
    }
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration (API key masked)
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
