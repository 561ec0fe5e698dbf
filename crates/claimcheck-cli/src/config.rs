//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use claimcheck_extractor::ExtractorConfig;
use claimcheck_llm::OpenAiConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion service connection
    #[serde(default)]
    pub openai: OpenAiSection,

    /// Model selection per mode
    #[serde(default)]
    pub models: ModelSettings,

    /// Chunking and response ceilings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// `[openai]` section: credential plus connection settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAiSection {
    /// API key; `--api-key` and `OPENAI_API_KEY` take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Endpoint, timeout and request options
    #[serde(flatten)]
    pub connection: OpenAiConfig,
}

/// `[models]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model used for each chunk in chunked mode
    #[serde(default = "default_chunk_model")]
    pub chunk_model: String,

    /// Model used for whole-document mode
    #[serde(default = "default_document_model")]
    pub document_model: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default token budget per chunk
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".claimcheck").join("config.toml"))
    }

    /// Resolve the file to use: an explicit override or the default path.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => Self::path(),
        }
    }

    /// Load configuration from file, falling back to defaults if it does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(path)?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.extractor.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Pick the API key: command line / environment first, then the config file.
    pub fn api_key(&self, from_cli: Option<String>) -> Result<String> {
        from_cli
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.openai.api_key.clone())
            .ok_or_else(|| {
                CliError::Config(
                    "No API key. Pass --api-key, set OPENAI_API_KEY, or add api_key under [openai]".into(),
                )
            })
    }

    /// Copy of this configuration that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.openai.api_key = config.openai.api_key.as_deref().map(mask_key);
        config
    }
}

/// Keep the first few characters of a secret and hide the rest.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(3).collect();
    format!("{}****", visible)
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            chunk_model: default_chunk_model(),
            document_model: default_document_model(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_chunk_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_document_model() -> String {
    "gpt-4".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_max_tokens() -> usize {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.models.chunk_model, "gpt-3.5-turbo");
        assert_eq!(config.models.document_model, "gpt-4");
        assert_eq!(config.settings.max_tokens, 2000);
        assert!(config.settings.color);
        assert!(config.openai.api_key.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [openai]
            api_key = "sk-file"
            endpoint = "http://localhost:8000/v1"
            json_mode = true

            [models]
            chunk_model = "gpt-4o-mini"

            [extractor]
            chunk_response_tokens = 200

            [settings]
            format = "json"
            max_tokens = 1000
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-file"));
        assert_eq!(config.openai.connection.endpoint, "http://localhost:8000/v1");
        assert!(config.openai.connection.json_mode);
        assert_eq!(config.models.chunk_model, "gpt-4o-mini");
        assert_eq!(config.models.document_model, "gpt-4");
        assert_eq!(config.extractor.chunk_response_tokens, 200);
        assert_eq!(config.extractor.document_response_tokens, 300);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.max_tokens, 1000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.settings.max_tokens, 2000);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.models.document_model = "gpt-4o".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.models.document_model, "gpt-4o");
    }

    #[test]
    fn test_invalid_extractor_section_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[extractor]\ntoken_divisor = 0\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_api_key_precedence() {
        let mut config = Config::default();
        assert!(config.api_key(None).is_err());

        config.openai.api_key = Some("sk-file".to_string());
        assert_eq!(config.api_key(None).unwrap(), "sk-file");
        assert_eq!(config.api_key(Some("sk-cli".to_string())).unwrap(), "sk-cli");
        assert_eq!(config.api_key(Some("  ".to_string())).unwrap(), "sk-file");
    }

    #[test]
    fn test_redacted() {
        let mut config = Config::default();
        config.openai.api_key = Some("sk-abcdefgh".to_string());

        let shown = toml::to_string(&config.redacted()).unwrap();
        assert!(!shown.contains("abcdefgh"));
        assert!(shown.contains("sk-****"));
    }
}
