//! CaseCoach - Consulting case interview practice library
//!
//! This library provides the core functionality for CaseCoach: the
//! interview orchestrator, the session state, the interviewer prompts, and
//! the completion-service client.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `interview`: Session state, interview stages, and the orchestrator
//! - `providers`: Completion-service abstraction and the OpenAI-compatible client
//! - `prompts`: Interviewer persona system prompts
//! - `case_type`: The fixed set of practice case categories
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: CLI command handlers (the UI boundary)
//!
//! # Example
//!
//! ```no_run
//! use casecoach::case_type::CaseType;
//! use casecoach::config::Config;
//! use casecoach::interview::{Interviewer, Session};
//! use casecoach::providers::create_provider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let interviewer = Interviewer::new(create_provider(&config.provider)?);
//!     let mut session = Session::new();
//!
//!     let opening = interviewer
//!         .start_case(&mut session, CaseType::Profitability)
//!         .await?;
//!     println!("{}", opening);
//!     Ok(())
//! }
//! ```

pub mod case_type;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interview;
pub mod prompts;
pub mod providers;

// Re-export commonly used types
pub use case_type::CaseType;
pub use config::Config;
pub use error::{CaseCoachError, Result};
pub use interview::{Interviewer, InterviewStage, Session};

#[cfg(test)]
pub mod test_utils;
