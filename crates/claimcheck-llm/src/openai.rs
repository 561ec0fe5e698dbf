//! OpenAI Provider Implementation
//!
//! Sends prompts to an OpenAI-compatible chat completions endpoint.
//!
//! # Features
//!
//! - Async HTTP communication via a single long-lived `reqwest::Client`
//! - Blocking `LlmProvider` implementation driven by a runtime owned by the provider
//! - Configurable endpoint, timeout, temperature and JSON response mode
//! - HTTP status codes mapped onto `LlmError` variants
//!
//! Requests are never retried; a failed call is reported to the caller as-is.
//!
//! # Examples
//!
//! ```no_run
//! use claimcheck_llm::OpenAiProvider;
//! use claimcheck_domain::{CompletionRequest, LlmProvider};
//!
//! let provider = OpenAiProvider::new("sk-...").unwrap();
//! let request = CompletionRequest::new("gpt-4", "List the claims in: ...", 300);
//! let reply = provider.complete(&request).unwrap();
//! ```

use crate::LlmError;
use claimcheck_domain::{CompletionRequest, LlmProvider};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for an OpenAI-compatible service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL; `/chat/completions` is appended
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Transport timeout per request (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the service to constrain replies to a JSON object
    #[serde(default)]
    pub json_mode: bool,

    /// Sampling temperature; the service default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl OpenAiConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            json_mode: false,
            temperature: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// OpenAI chat completions provider
///
/// Build one per process and share it; it owns the HTTP connection pool and
/// the runtime that drives it.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    api_key: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider for the public OpenAI endpoint
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Authentication` for a blank key, or `LlmError::Other`
    /// if the HTTP client or runtime cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_config(api_key, OpenAiConfig::default())
    }

    /// Create a provider with explicit connection settings
    pub fn with_config(api_key: impl Into<String>, config: OpenAiConfig) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Authentication("API key is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            config,
            api_key,
            client,
            runtime,
        })
    }

    /// Connection settings in use
    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Send a chat completion request and return the first choice's text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service cannot be reached or times out
    /// - The key is rejected (401/403)
    /// - The rate limit is hit (429)
    /// - The model does not exist (404)
    /// - The reply body is not a chat completion
    pub async fn complete_async(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        let body = self.request_body(request);

        debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            max_tokens = request.max_tokens,
            "Sending chat completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, &request.model, error_text));
        }

        let completion = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        first_choice_text(completion)
    }

    fn request_body<'a>(&self, request: &'a CompletionRequest) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: self.config.temperature,
            response_format: self
                .config
                .json_mode
                .then_some(ResponseFormat { kind: "json_object" }),
        }
    }
}

impl fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    /// Blocking completion on the provider's own runtime.
    ///
    /// # Panics
    ///
    /// Panics if called from within an async tokio context, since the
    /// provider's runtime cannot block inside another runtime. Async callers
    /// should use [`OpenAiProvider::complete_async`] instead.
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.runtime.block_on(self.complete_async(request))
    }
}

fn status_error(status: StatusCode, model: &str, body: String) -> LlmError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LlmError::Authentication(format!("HTTP {}: {}", status, body))
        }
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        _ => LlmError::Communication(format!("HTTP {}: {}", status, body)),
    }
}

fn first_choice_text(completion: ChatCompletionResponse) -> Result<String, LlmError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAiProvider::new("sk-test").unwrap();
        assert_eq!(provider.config().endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.config().timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!provider.config().json_mode);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = OpenAiProvider::new("   ");
        assert!(matches!(result, Err(LlmError::Authentication(_))));
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = OpenAiProvider::new("sk-very-secret").unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_request_body_shape() {
        let provider = OpenAiProvider::new("sk-test").unwrap();
        let request = CompletionRequest::new("gpt-3.5-turbo", "prompt\n\nchunk", 150);
        let body = serde_json::to_value(provider.request_body(&request)).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 150);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "prompt\n\nchunk");
        assert!(body.get("response_format").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_request_body_json_mode() {
        let config = OpenAiConfig {
            json_mode: true,
            temperature: Some(0.0),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::with_config("sk-test", config).unwrap();
        let request = CompletionRequest::new("gpt-4", "p", 300);
        let body = serde_json::to_value(provider.request_body(&request)).unwrap();

        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["temperature"], 0.0);
    }

    #[test]
    fn test_first_choice_text() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"claims\": []}"}}
            ]
        }"#;
        let completion: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice_text(completion).unwrap(), r#"{"claims": []}"#);
    }

    #[test]
    fn test_first_choice_text_missing() {
        let completion: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            first_choice_text(completion),
            Err(LlmError::InvalidResponse(_))
        ));

        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(first_choice_text(completion).is_err());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, "m", String::new()),
            LlmError::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "m", String::new()),
            LlmError::RateLimitExceeded
        ));
        match status_error(StatusCode::NOT_FOUND, "gpt-9", String::new()) {
            LlmError::ModelNotAvailable(model) => assert_eq!(model, "gpt-9"),
            other => panic!("Expected ModelNotAvailable, got {:?}", other),
        }
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, "m", "boom".to_string()),
            LlmError::Communication(_)
        ));
    }

    #[test]
    fn test_config_toml_defaults() {
        let config: OpenAiConfig = toml::from_str("json_mode = true").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.json_mode);
    }

    #[test]
    fn test_openai_error_handling() {
        // Invalid port makes the request fail before it leaves the process
        let config = OpenAiConfig {
            endpoint: "http://localhost:99999".to_string(),
            timeout_secs: 5,
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::with_config("sk-test", config).unwrap();

        let result = provider.complete(&CompletionRequest::new("gpt-4", "test", 10));
        match result {
            Err(LlmError::Communication(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    // Integration test (requires a real key)
    #[test]
    #[ignore] // Only run when OPENAI_API_KEY is set
    fn test_openai_complete_integration() {
        let Ok(key) = std::env::var("OPENAI_API_KEY") else {
            return;
        };
        let provider = OpenAiProvider::new(key).unwrap();
        let request = CompletionRequest::new(
            "gpt-3.5-turbo",
            r#"Reply with exactly {"claims": []}"#,
            20,
        );
        let reply = provider.complete(&request).unwrap();
        assert!(!reply.is_empty());
    }
}
