use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use casecoach::providers::{validate_history, CompletionResponse, Message, Provider};
use casecoach::CaseCoachError;

/// A completion provider that replays a scripted sequence of outcomes.
///
/// `Ok(text)` becomes an assistant reply; `Err(reason)` becomes a
/// `Completion` error. Every call's message history is recorded so tests
/// can assert on the context that was sent.
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Result<String, String>>>,
    observed_histories: Arc<Mutex<Vec<Vec<Message>>>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new(responses: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            observed_histories: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the histories recorded by `complete`, one per call.
    pub fn observed_histories(&self) -> Arc<Mutex<Vec<Vec<Message>>>> {
        Arc::clone(&self.observed_histories)
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(&self, messages: &[Message]) -> casecoach::Result<CompletionResponse> {
        validate_history(messages)?;
        self.observed_histories
            .lock()
            .unwrap()
            .push(messages.to_vec());

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
