//! System prompts for the interviewer persona
//!
//! This module provides the system prompt that guides the AI interviewer's
//! behavior for a chosen case category.

pub mod interviewer_prompt;

use crate::case_type::CaseType;

/// Builds the interviewer system prompt for a case type
///
/// Returns the system-level instruction text that establishes the
/// interviewer persona, its behavioral rules, and the closing performance
/// summary. The text is a pure, deterministic function of the case type.
///
/// # Arguments
///
/// * `case_type` - The case category being practiced
///
/// # Returns
///
/// A string containing the system prompt for the given case type
///
/// # Examples
///
/// ```
/// use casecoach::case_type::CaseType;
/// use casecoach::prompts::build_system_prompt;
///
/// let prompt = build_system_prompt(CaseType::Profitability);
/// assert!(prompt.contains("Profitability"));
/// assert!(prompt.contains("Structure"));
/// ```
pub fn build_system_prompt(case_type: CaseType) -> String {
    interviewer_prompt::generate_interviewer_prompt(case_type)
}
