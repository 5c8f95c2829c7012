//! Test utilities for CaseCoach
//!
//! This module provides common test utilities, including a scripted
//! completion provider and assertion helpers.

use crate::config::Config;
use crate::error::{CaseCoachError, Result};
use crate::providers::{CompletionResponse, Message, Provider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A completion provider that replays a scripted sequence of outcomes
///
/// Each `complete` call pops the next scripted entry: `Ok(text)` becomes an
/// assistant message, `Err(reason)` becomes a `Completion` error. The
/// provider also records the history length of every call so tests can
/// assert on the context that was sent.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<std::result::Result<String, String>>>,
    observed_history_lens: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedProvider {
    /// Create a provider that replays the given outcomes in order
    pub fn new(responses: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            observed_history_lens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the per-call history lengths recorded by `complete`
    pub fn observed_history_lens(&self) -> Arc<Mutex<Vec<usize>>> {
        Arc::clone(&self.observed_history_lens)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        crate::providers::validate_history(messages)?;
        self.observed_history_lens
            .lock()
            .unwrap()
            .push(messages.len());

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("scripted provider exhausted".to_string()));

        match next {
            Ok(text) => Ok(CompletionResponse::new(Message::assistant(text))),
            Err(reason) => Err(CaseCoachError::Completion(reason).into()),
        }
    }
}

/// Create a test configuration with default values
///
/// # Returns
///
/// Returns a Config instance suitable for testing
pub fn test_config() -> Config {
    Config::default()
}

/// Assert that an error contains the expected message
///
/// # Arguments
///
/// * `result` - Result to check
/// * `expected` - Expected error message substring
///
/// # Panics
///
/// Panics if the result is Ok or if the error doesn't contain the expected message
pub fn assert_error_contains<T>(result: Result<T>, expected: &str) {
    match result {
        Ok(_) => panic!("Expected error containing '{}' but got Ok", expected),
        Err(e) => {
            let error_msg = e.to_string();
            assert!(
                error_msg.contains(expected),
                "Error message '{}' does not contain '{}'",
                error_msg,
                expected
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_provider_replays_in_order() {
        let provider = ScriptedProvider::new(vec![
            Ok("first".to_string()),
            Ok("second".to_string()),
        ]);
        let messages = vec![Message::user("hi")];

        let first = provider.complete(&messages).await.unwrap();
        let second = provider.complete(&messages).await.unwrap();

        assert_eq!(first.message.content, "first");
        assert_eq!(second.message.content, "second");
    }

    #[tokio::test]
    async fn test_scripted_provider_surfaces_failures() {
        let provider = ScriptedProvider::new(vec![Err("boom".to_string())]);
        let result = provider.complete(&[Message::user("hi")]).await;
        assert_error_contains(result, "boom");
    }

    #[tokio::test]
    async fn test_scripted_provider_errors_when_exhausted() {
        let provider = ScriptedProvider::new(vec![]);
        let result = provider.complete(&[Message::user("hi")]).await;
        assert_error_contains(result, "exhausted");
    }

    #[test]
    fn test_test_config_is_valid() {
        assert!(test_config().validate().is_ok());
    }
}
