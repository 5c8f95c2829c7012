//! Mental-math drill requests
//!
//! A drill is a one-shot request for practice questions. The drill exchange
//! is appended to the same session history the interview uses, so it becomes
//! part of the context sent on all subsequent turns; DESIGN.md discusses the
//! tradeoff of keeping that coupling.

use crate::error::Result;
use crate::interview::session::Session;
use crate::providers::Provider;

/// Fixed drill instruction appended as a candidate message
pub const DRILL_PROMPT: &str = "Give me 5 quick mental math questions relevant to consulting interviews with increasing difficulty.";

/// Requests a mental-math drill against the session's history
///
/// Appends the drill instruction, completes with the full resulting history,
/// appends the response, and returns its text. On failure the instruction
/// stays appended and no response message is added.
///
/// # Arguments
///
/// * `provider` - Completion service provider
/// * `session` - The caller-owned session
///
/// # Errors
///
/// Returns `Completion` if the completion service call fails
pub(crate) async fn request_drill(provider: &dyn Provider, session: &mut Session) -> Result<String> {
    tracing::info!("Requesting mental math drill");
    session.add_user_message(DRILL_PROMPT);

    let completion = provider.complete(session.messages()).await?;
    let questions = completion.message.content;

    session.add_assistant_message(questions.clone());
    Ok(questions)
}
