//! Provider module for CaseCoach
//!
//! This module contains the completion-service abstraction and the
//! OpenAI-compatible implementation.

pub mod base;
pub mod openai;

pub use base::{
    validate_history, CompletionResponse, Message, Provider, Role, TokenUsage,
};
pub use openai::OpenAiProvider;

use crate::config::ProviderConfig;
use crate::error::Result;

/// Create a provider instance based on configuration
///
/// # Arguments
///
/// * `config` - Provider configuration
///
/// # Returns
///
/// Returns a boxed provider instance
///
/// # Errors
///
/// Returns error if provider initialization fails
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn Provider>> {
    Ok(Box::new(OpenAiProvider::new(config.clone())?))
}
