//! Base provider trait and common types for CaseCoach
//!
//! This module defines the Provider trait the completion client implements,
//! along with the message types and response structures shared between the
//! orchestrator and the wire layer.

use crate::error::{CaseCoachError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message sender in a conversation
///
/// Matches the completion-service wire roles, so `Message` serializes
/// directly into the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions (the interviewer persona)
    System,
    /// Candidate input
    User,
    /// Interviewer response
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message structure for conversation
///
/// Represents a single conversational turn exchanged with the completion
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: Role,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::providers::{Message, Role};
    ///
    /// let msg = Message::system("You are an experienced consulting interviewer");
    /// assert_eq!(msg.role, Role::System);
    /// ```
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a new user message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::providers::{Message, Role};
    ///
    /// let msg = Message::user("Let's segment by region");
    /// assert_eq!(msg.role, Role::User);
    /// ```
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates a new assistant message
    ///
    /// # Arguments
    ///
    /// * `content` - The message content
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::providers::{Message, Role};
    ///
    /// let msg = Message::assistant("Good. Which region would you start with?");
    /// assert_eq!(msg.role, Role::Assistant);
    /// ```
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Token usage information from a completion
///
/// Tracks the number of tokens used in prompts and completions,
/// as reported by the completion service.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: usize,
    /// Number of tokens in the completion
    pub completion_tokens: usize,
    /// Total tokens used (prompt + completion)
    pub total_tokens: usize,
}

impl TokenUsage {
    /// Create a new TokenUsage instance
    ///
    /// # Arguments
    ///
    /// * `prompt_tokens` - Number of prompt tokens
    /// * `completion_tokens` - Number of completion tokens
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::providers::TokenUsage;
    ///
    /// let usage = TokenUsage::new(100, 50);
    /// assert_eq!(usage.total_tokens, 150);
    /// ```
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        let total_tokens = prompt_tokens + completion_tokens;
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

/// Completion response with message and optional token usage
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The response message from the interviewer model
    pub message: Message,
    /// Optional token usage information
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Create a new CompletionResponse
    ///
    /// # Arguments
    ///
    /// * `message` - The response message
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::providers::{CompletionResponse, Message, Role};
    ///
    /// let response = CompletionResponse::new(Message::assistant("Hello!"));
    /// assert_eq!(response.message.role, Role::Assistant);
    /// assert!(response.usage.is_none());
    /// ```
    pub fn new(message: Message) -> Self {
        Self {
            message,
            usage: None,
        }
    }

    /// Create a new CompletionResponse with token usage
    ///
    /// # Arguments
    ///
    /// * `message` - The response message
    /// * `usage` - Token usage information
    pub fn with_usage(message: Message, usage: TokenUsage) -> Self {
        Self {
            message,
            usage: Some(usage),
        }
    }
}

/// Validate a message history before sending it to the completion service
///
/// The orchestrator never issues a completion with an empty history, so a
/// violation here indicates a programming error rather than user input.
///
/// # Arguments
///
/// * `messages` - Conversation history, ordered oldest-first
///
/// # Errors
///
/// Returns `EmptyHistory` if the slice is empty
pub fn validate_history(messages: &[Message]) -> Result<()> {
    if messages.is_empty() {
        return Err(CaseCoachError::EmptyHistory.into());
    }
    Ok(())
}

/// Trait for completion service providers
///
/// A provider performs exactly one outbound call per `complete` invocation;
/// failures are surfaced to the caller and never retried internally.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Completes a conversation with the given messages
    ///
    /// # Arguments
    ///
    /// * `messages` - Conversation history, ordered oldest-first, non-empty
    ///
    /// # Returns
    ///
    /// Returns the assistant's response message along with token usage
    /// information when the service reports it
    ///
    /// # Errors
    ///
    /// Returns error if the API call fails or the response is unusable
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse>;
}
