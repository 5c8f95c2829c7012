//! OpenAI-compatible provider implementation for CaseCoach
//!
//! This module implements the Provider trait against an OpenAI-compatible
//! chat-completions endpoint. One request per invocation; no retries and no
//! caching, so a failure is always surfaced to the orchestrator.

use crate::config::ProviderConfig;
use crate::error::{CaseCoachError, Result};
use crate::providers::{validate_history, CompletionResponse, Message, Provider, TokenUsage};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible chat completion provider
///
/// Connects to `{api_base}/chat/completions` with the configured model and
/// sampling temperature. Both are policy values; callers never vary them
/// per call.
///
/// # Examples
///
/// ```no_run
/// use casecoach::config::ProviderConfig;
/// use casecoach::providers::{Message, OpenAiProvider, Provider};
///
/// # async fn example() -> casecoach::error::Result<()> {
/// let config = ProviderConfig {
///     api_key: Some("sk-test".to_string()),
///     ..Default::default()
/// };
/// let provider = OpenAiProvider::new(config)?;
/// let messages = vec![Message::user("Hello!")];
/// let completion = provider.complete(&messages).await?;
/// println!("{}", completion.message.content);
/// # Ok(())
/// # }
/// ```
pub struct OpenAiProvider {
    client: Client,
    config: ProviderConfig,
}

/// Request structure for the chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

/// Response structure from the chat completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// Choice in a chat completions response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
    #[allow(dead_code)]
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Message payload within a choice
#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[allow(dead_code)]
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: String,
}

/// Token usage information from the service
#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

impl OpenAiProvider {
    /// Create a new provider instance
    ///
    /// # Arguments
    ///
    /// * `config` - Provider configuration containing model, API base,
    ///   credentials, and temperature
    ///
    /// # Returns
    ///
    /// Returns a new OpenAiProvider instance
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::config::ProviderConfig;
    /// use casecoach::providers::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::new(ProviderConfig::default());
    /// assert!(provider.is_ok());
    /// ```
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("casecoach/0.1.0")
            .build()
            .map_err(|e| CaseCoachError::Completion(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized completion provider: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self { client, config })
    }

    /// Get the configured model name
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::config::ProviderConfig;
    /// use casecoach::providers::OpenAiProvider;
    ///
    /// let provider = OpenAiProvider::new(ProviderConfig::default()).unwrap();
    /// assert_eq!(provider.model(), "gpt-4o-mini");
    /// ```
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'))
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| {
                CaseCoachError::MissingCredentials(
                    "set OPENAI_API_KEY or CASECOACH_API_KEY".to_string(),
                )
                .into()
            })
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        validate_history(messages)?;
        let api_key = self.api_key()?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            temperature: self.config.temperature,
        };

        tracing::debug!(
            "Sending completion request: {} messages, model={}",
            request.messages.len(),
            request.model
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion request failed: {}", e);
                CaseCoachError::Completion(format!("Completion request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Completion service returned error {}: {}", status, error_text);
            return Err(CaseCoachError::Completion(format!(
                "Completion service returned {}: {}",
                status, error_text
            ))
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            CaseCoachError::Completion(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            CaseCoachError::Completion("No choices in completion response".to_string())
        })?;

        tracing::debug!("Completion response received successfully");

        let message = Message::assistant(choice.message.content);
        let usage = chat_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens));

        let response = match usage {
            Some(u) => CompletionResponse::with_usage(message, u),
            None => CompletionResponse::new(message),
        };
        Ok(response)
    }
}
