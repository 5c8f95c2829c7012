//! Interview orchestration
//!
//! This module implements the interview state machine: starting a case,
//! processing candidate turns, detecting the completion signal, and routing
//! drill requests. All completion-service traffic goes through here, and the
//! session is only ever mutated on this path.
//!
//! On a completion failure the session keeps the input side of the turn:
//! the triggering message stays appended, no assistant message is added, and
//! the stage is not advanced past the point already reached.

use crate::case_type::CaseType;
use crate::error::{CaseCoachError, Result};
use crate::interview::drill;
use crate::interview::session::Session;
use crate::interview::stage::InterviewStage;
use crate::prompts::build_system_prompt;
use crate::providers::Provider;

/// Substring that marks a candidate turn as a completion signal
///
/// Matched case-insensitively anywhere in the input, so "I'm done" and
/// "seldom used" both conclude the interview. The loose match is the
/// documented historical behavior; see DESIGN.md before tightening it.
const COMPLETION_SIGNAL: &str = "done";

/// Returns true if the input contains the completion signal
///
/// # Examples
///
/// ```
/// use casecoach::interview::contains_completion_signal;
///
/// assert!(contains_completion_signal("I'm done here"));
/// assert!(contains_completion_signal("seldom used"));
/// assert!(!contains_completion_signal("let's continue"));
/// ```
pub fn contains_completion_signal(input: &str) -> bool {
    input.to_lowercase().contains(COMPLETION_SIGNAL)
}

/// The interview orchestrator
///
/// Owns the completion provider and drives a caller-owned [`Session`]
/// through the interview lifecycle. One instance serves one session at a
/// time; sessions are never shared between orchestrator calls in flight.
pub struct Interviewer {
    provider: Box<dyn Provider>,
}

impl Interviewer {
    /// Creates a new interviewer with the given completion provider
    ///
    /// # Arguments
    ///
    /// * `provider` - Completion service provider
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Starts a case: records the system prompt and fetches the opening statement
    ///
    /// On success the session holds exactly the system prompt plus the
    /// interviewer's opening statement, and the stage is `Analysis`.
    ///
    /// If the completion fails, the system prompt stays recorded and the
    /// stage remains `Opening`; calling `start_case` again with the same
    /// case type retries the opening completion without recording a second
    /// system prompt.
    ///
    /// # Arguments
    ///
    /// * `session` - The caller-owned session to start
    /// * `case_type` - The case category to practice
    ///
    /// # Returns
    ///
    /// Returns the interviewer's opening statement
    ///
    /// # Errors
    ///
    /// - `CaseAlreadyStarted` if the session is past `Opening`, or a retry
    ///   names a different case type
    /// - `Completion` if the completion service call fails
    pub async fn start_case(&self, session: &mut Session, case_type: CaseType) -> Result<String> {
        match session.stage() {
            InterviewStage::NotStarted => {
                tracing::info!("Starting {} case", case_type);
                session.begin_case(case_type, build_system_prompt(case_type));
            }
            InterviewStage::Opening => {
                // A previous start failed after the system prompt was
                // recorded; reuse it rather than violating the
                // one-system-message invariant.
                if session.case_type() != Some(case_type) {
                    return Err(CaseCoachError::CaseAlreadyStarted.into());
                }
                tracing::info!("Resuming {} case opening", case_type);
            }
            _ => return Err(CaseCoachError::CaseAlreadyStarted.into()),
        }

        let completion = self.provider.complete(session.messages()).await?;
        let opening_statement = completion.message.content;

        session.add_assistant_message(opening_statement.clone());
        session.set_stage(InterviewStage::Analysis);

        Ok(opening_statement)
    }

    /// Submits one candidate turn and returns the interviewer's reply
    ///
    /// The turn is appended before the completion request, so on failure the
    /// history grows by exactly one message and the stage is unchanged. On
    /// success the history grows by exactly two, and a turn containing the
    /// completion signal moves the session to `Conclusion`.
    ///
    /// # Arguments
    ///
    /// * `session` - The caller-owned session
    /// * `input` - The candidate's turn text
    ///
    /// # Returns
    ///
    /// Returns the interviewer's reply (the closing performance summary when
    /// the turn signaled completion)
    ///
    /// # Errors
    ///
    /// - `CaseNotStarted` if no case has produced an opening statement yet
    /// - `InterviewComplete` if the session already concluded
    /// - `Completion` if the completion service call fails
    pub async fn submit_turn(&self, session: &mut Session, input: &str) -> Result<String> {
        match session.stage() {
            InterviewStage::NotStarted | InterviewStage::Opening => {
                return Err(CaseCoachError::CaseNotStarted.into());
            }
            InterviewStage::Conclusion => {
                return Err(CaseCoachError::InterviewComplete.into());
            }
            InterviewStage::Analysis => {}
        }

        let concluding = contains_completion_signal(input);
        session.add_user_message(input);

        // The stage transition is advisory: the full history is sent either
        // way, and the system prompt already tells the model to emit the
        // closing summary on a completion cue.
        let completion = self.provider.complete(session.messages()).await?;
        let reply = completion.message.content;

        session.add_assistant_message(reply.clone());
        if concluding {
            session.set_stage(InterviewStage::Conclusion);
        }

        Ok(reply)
    }

    /// Requests a mental-math drill, available in every stage
    ///
    /// The drill exchange is appended to the same history used by interview
    /// turns and therefore rides along in later completion context.
    ///
    /// # Arguments
    ///
    /// * `session` - The caller-owned session
    ///
    /// # Returns
    ///
    /// Returns the drill questions text
    ///
    /// # Errors
    ///
    /// Returns `Completion` if the completion service call fails
    pub async fn request_drill(&self, session: &mut Session) -> Result<String> {
        drill::request_drill(self.provider.as_ref(), session).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::Role;
    use crate::test_utils::ScriptedProvider;

    fn interviewer_with(responses: Vec<std::result::Result<String, String>>) -> Interviewer {
        Interviewer::new(Box::new(ScriptedProvider::new(responses)))
    }

    #[test]
    fn test_completion_signal_loose_matching() {
        assert!(contains_completion_signal("done"));
        assert!(contains_completion_signal("I'm DONE here"));
        assert!(contains_completion_signal("seldom used"));
        assert!(contains_completion_signal("abandoned"));
        assert!(!contains_completion_signal("let's keep going"));
        assert!(!contains_completion_signal(""));
    }

    #[tokio::test]
    async fn test_start_case_records_system_and_opening() {
        let interviewer = interviewer_with(vec![Ok("Welcome to the case.".to_string())]);
        let mut session = Session::new();

        let opening = interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();

        assert_eq!(opening, "Welcome to the case.");
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].role, Role::System);
        assert_eq!(session.messages()[1].role, Role::Assistant);
        assert_eq!(session.stage(), InterviewStage::Analysis);
        assert_eq!(session.case_type(), Some(CaseType::Profitability));
    }

    #[tokio::test]
    async fn test_start_case_twice_is_rejected() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("unused".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        let result = interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CaseCoachError>(),
            Some(CaseCoachError::CaseAlreadyStarted)
        ));
        assert_eq!(session.len(), 2);
    }

    #[tokio::test]
    async fn test_start_case_failure_keeps_system_prompt_and_opening_stage() {
        let interviewer = interviewer_with(vec![Err("service unavailable".to_string())]);
        let mut session = Session::new();

        let result = interviewer
            .start_case(&mut session, CaseType::MarketEntry)
            .await;

        assert!(result.is_err());
        assert_eq!(session.len(), 1);
        assert!(session.starts_with_system_prompt());
        assert_eq!(session.stage(), InterviewStage::Opening);
    }

    #[tokio::test]
    async fn test_start_case_retry_after_failure_does_not_duplicate_system_prompt() {
        let interviewer = interviewer_with(vec![
            Err("flaky".to_string()),
            Ok("opening".to_string()),
        ]);
        let mut session = Session::new();

        assert!(interviewer
            .start_case(&mut session, CaseType::MarketEntry)
            .await
            .is_err());
        let opening = interviewer
            .start_case(&mut session, CaseType::MarketEntry)
            .await
            .unwrap();

        assert_eq!(opening, "opening");
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].role, Role::System);
        assert_eq!(session.stage(), InterviewStage::Analysis);
    }

    #[tokio::test]
    async fn test_start_case_retry_with_different_case_type_is_rejected() {
        let interviewer = interviewer_with(vec![
            Err("flaky".to_string()),
            Ok("unused".to_string()),
        ]);
        let mut session = Session::new();

        assert!(interviewer
            .start_case(&mut session, CaseType::MarketEntry)
            .await
            .is_err());
        let result = interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CaseCoachError>(),
            Some(CaseCoachError::CaseAlreadyStarted)
        ));
    }

    #[tokio::test]
    async fn test_submit_turn_appends_user_and_assistant() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("Which region would you start with?".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        let reply = interviewer
            .submit_turn(&mut session, "Let's segment by region")
            .await
            .unwrap();

        assert_eq!(reply, "Which region would you start with?");
        assert_eq!(session.len(), 4);
        assert_eq!(session.messages()[2].role, Role::User);
        assert_eq!(session.messages()[2].content, "Let's segment by region");
        assert_eq!(session.messages()[3].role, Role::Assistant);
        assert_eq!(session.stage(), InterviewStage::Analysis);
    }

    #[tokio::test]
    async fn test_submit_turn_before_start_is_rejected() {
        let interviewer = interviewer_with(vec![]);
        let mut session = Session::new();

        let result = interviewer.submit_turn(&mut session, "hello").await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CaseCoachError>(),
            Some(CaseCoachError::CaseNotStarted)
        ));
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_completion_signal_concludes_interview() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("Here is your performance summary.".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        interviewer
            .submit_turn(&mut session, "I'm done here")
            .await
            .unwrap();

        assert_eq!(session.stage(), InterviewStage::Conclusion);
        assert_eq!(session.len(), 4);
    }

    #[tokio::test]
    async fn test_seldom_triggers_loose_completion_match() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("summary".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::GrowthStrategy)
            .await
            .unwrap();
        interviewer
            .submit_turn(&mut session, "seldom used channels matter")
            .await
            .unwrap();

        assert_eq!(session.stage(), InterviewStage::Conclusion);
    }

    #[tokio::test]
    async fn test_turn_after_conclusion_is_rejected() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("summary".to_string()),
            Ok("unused".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        interviewer
            .submit_turn(&mut session, "I'm done")
            .await
            .unwrap();
        let result = interviewer.submit_turn(&mut session, "one more thing").await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CaseCoachError>(),
            Some(CaseCoachError::InterviewComplete)
        ));
        assert_eq!(session.len(), 4);
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_user_message_and_stage() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Ok("reply".to_string()),
            Err("service unavailable".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        interviewer
            .submit_turn(&mut session, "first turn")
            .await
            .unwrap();
        let result = interviewer.submit_turn(&mut session, "second turn").await;

        assert!(result.is_err());
        assert_eq!(session.len(), 5);
        assert_eq!(session.messages()[4].role, Role::User);
        assert_eq!(session.messages()[4].content, "second turn");
        assert_eq!(session.stage(), InterviewStage::Analysis);
    }

    #[tokio::test]
    async fn test_failed_concluding_turn_does_not_advance_stage() {
        let interviewer = interviewer_with(vec![
            Ok("opening".to_string()),
            Err("service unavailable".to_string()),
        ]);
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        let result = interviewer.submit_turn(&mut session, "I'm done").await;

        assert!(result.is_err());
        assert_eq!(session.stage(), InterviewStage::Analysis);
        assert_eq!(session.len(), 3);
    }

    #[tokio::test]
    async fn test_full_history_sent_to_provider() {
        let provider = ScriptedProvider::new(vec![
            Ok("opening".to_string()),
            Ok("reply".to_string()),
        ]);
        let histories = provider.observed_history_lens();
        let interviewer = Interviewer::new(Box::new(provider));
        let mut session = Session::new();

        interviewer
            .start_case(&mut session, CaseType::Profitability)
            .await
            .unwrap();
        interviewer
            .submit_turn(&mut session, "turn")
            .await
            .unwrap();

        let lens = histories.lock().unwrap();
        // Opening request carries just the system prompt; the turn request
        // carries system + opening + user.
        assert_eq!(*lens, vec![1, 3]);
    }
}
