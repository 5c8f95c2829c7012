//! Session state for one candidate's practice run
//!
//! A `Session` holds the ordered message history and the current interview
//! stage. It is created by the caller (the UI boundary) and passed by
//! mutable reference into every orchestrator operation; there is no global
//! or ambient session state. Mutation is restricted to this crate so the
//! orchestrator is the only writer.

use crate::case_type::CaseType;
use crate::interview::stage::InterviewStage;
use crate::providers::{Message, Role};

/// The state for one candidate's practice run
///
/// # Invariants
///
/// - The first message, if present, has `Role::System` and is recorded
///   exactly once, when the case starts.
/// - `messages` is append-only: prior messages are never removed, reordered,
///   or mutated.
/// - `case_type` is set once and is immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct Session {
    case_type: Option<CaseType>,
    messages: Vec<Message>,
    stage: InterviewStage,
}

impl Session {
    /// Creates an empty session
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::interview::{InterviewStage, Session};
    ///
    /// let session = Session::new();
    /// assert!(session.is_empty());
    /// assert_eq!(session.stage(), InterviewStage::NotStarted);
    /// assert!(session.case_type().is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the case type, if a case has been started
    pub fn case_type(&self) -> Option<CaseType> {
        self.case_type
    }

    /// Returns the current interview stage
    pub fn stage(&self) -> InterviewStage {
        self.stage
    }

    /// Returns the ordered message history, oldest-first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages in the history
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the history is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Records the case type and the system prompt, entering `Opening`
    ///
    /// The caller (orchestrator) guarantees this runs at most once per
    /// session; the debug assertions document that contract.
    pub(crate) fn begin_case(&mut self, case_type: CaseType, system_prompt: impl Into<String>) {
        debug_assert!(self.messages.is_empty());
        debug_assert_eq!(self.stage, InterviewStage::NotStarted);
        self.case_type = Some(case_type);
        self.messages.push(Message::system(system_prompt));
        self.stage = InterviewStage::Opening;
    }

    /// Appends a candidate message to the history
    pub(crate) fn add_user_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Appends an interviewer message to the history
    pub(crate) fn add_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Advances the interview stage
    pub(crate) fn set_stage(&mut self, stage: InterviewStage) {
        tracing::debug!("Stage transition: {} -> {}", self.stage, stage);
        self.stage = stage;
    }

    /// Returns true if the first message is the system prompt
    ///
    /// Holds for every non-empty session; exposed for tests and status
    /// display.
    pub fn starts_with_system_prompt(&self) -> bool {
        self.messages
            .first()
            .map(|m| m.role == Role::System)
            .unwrap_or(false)
    }
}
