//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Default divisor turning a token budget into words per chunk
pub const DEFAULT_TOKEN_DIVISOR: usize = 4;

/// Default response ceiling for a single chunk (tokens)
pub const DEFAULT_CHUNK_RESPONSE_TOKENS: u32 = 150;

/// Default response ceiling for a whole document (tokens)
pub const DEFAULT_DOCUMENT_RESPONSE_TOKENS: u32 = 300;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Words per chunk = `max_tokens / token_divisor`
    #[serde(default = "default_token_divisor")]
    pub token_divisor: usize,

    /// Response ceiling for each chunk request, independent of chunk size
    #[serde(default = "default_chunk_response_tokens")]
    pub chunk_response_tokens: u32,

    /// Response ceiling for a whole-document request
    #[serde(default = "default_document_response_tokens")]
    pub document_response_tokens: u32,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.token_divisor == 0 {
            return Err(ExtractorError::Config(
                "token_divisor must be greater than 0".to_string(),
            ));
        }
        if self.chunk_response_tokens == 0 {
            return Err(ExtractorError::Config(
                "chunk_response_tokens must be greater than 0".to_string(),
            ));
        }
        if self.document_response_tokens == 0 {
            return Err(ExtractorError::Config(
                "document_response_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            token_divisor: DEFAULT_TOKEN_DIVISOR,
            chunk_response_tokens: DEFAULT_CHUNK_RESPONSE_TOKENS,
            document_response_tokens: DEFAULT_DOCUMENT_RESPONSE_TOKENS,
        }
    }
}

fn default_token_divisor() -> usize {
    DEFAULT_TOKEN_DIVISOR
}

fn default_chunk_response_tokens() -> u32 {
    DEFAULT_CHUNK_RESPONSE_TOKENS
}

fn default_document_response_tokens() -> u32 {
    DEFAULT_DOCUMENT_RESPONSE_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.token_divisor, 4);
        assert_eq!(config.chunk_response_tokens, 150);
        assert_eq!(config.document_response_tokens, 300);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let config = ExtractorConfig {
            token_divisor: 0,
            ..ExtractorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_zero_response_ceiling_rejected() {
        let mut config = ExtractorConfig::default();
        config.chunk_response_tokens = 0;
        assert!(config.validate().is_err());

        let mut config = ExtractorConfig::default();
        config.document_response_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("chunk_response_tokens = 200").unwrap();
        assert_eq!(config.chunk_response_tokens, 200);
        assert_eq!(config.token_divisor, DEFAULT_TOKEN_DIVISOR);
        assert_eq!(config.document_response_tokens, DEFAULT_DOCUMENT_RESPONSE_TOKENS);
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        assert!(ExtractorConfig::from_toml("token_divisor = 0").is_err());
        assert!(ExtractorConfig::from_toml("token_divisor = \"four\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            token_divisor: 3,
            chunk_response_tokens: 100,
            document_response_tokens: 500,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
