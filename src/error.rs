//! Error types for CaseCoach
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for CaseCoach operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, completion requests, and interview
/// orchestration.
#[derive(Error, Debug)]
pub enum CaseCoachError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Completion service errors (failed request, bad status, unusable response)
    #[error("Completion error: {0}")]
    Completion(String),

    /// Case type outside the fixed enumeration
    #[error("Invalid case type: {0}\n\nValid case types: profitability, market-entry, growth-strategy, m&a")]
    InvalidCaseType(String),

    /// Completion client invoked with an empty message history
    ///
    /// This is a programming-contract violation; the orchestrator never
    /// issues a completion before at least one message is recorded.
    #[error("Completion requested with an empty message history")]
    EmptyHistory,

    /// A case was already started for this session
    #[error("A case is already in progress for this session")]
    CaseAlreadyStarted,

    /// A turn was submitted before any case was started
    #[error("No case has been started yet")]
    CaseNotStarted,

    /// A turn was submitted after the interview concluded
    #[error("The interview has concluded; start a new session to practice another case")]
    InterviewComplete,

    /// Missing API credentials for the completion service
    #[error("Missing credentials for the completion service: {0}")]
    MissingCredentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for CaseCoach operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
