//! Interviewer persona system prompt
//!
//! This module provides the system prompt that turns the completion model
//! into a case interviewer: it presents a problem, drip-feeds facts, pushes
//! for structure, and scores the candidate at the end.

use crate::case_type::CaseType;

/// Generates the interviewer system prompt for a case type
///
/// The interviewer is constrained to reveal at most one fact or one probing
/// question per turn and must never hand over a full solution. The closing
/// summary behavior is part of the same prompt: the model switches to the
/// performance summary when the candidate signals they are finished.
///
/// # Arguments
///
/// * `case_type` - The case category being practiced
///
/// # Returns
///
/// A system prompt string tailored to the case type
///
/// # Examples
///
/// ```
/// use casecoach::case_type::CaseType;
/// use casecoach::prompts::interviewer_prompt::generate_interviewer_prompt;
///
/// let prompt = generate_interviewer_prompt(CaseType::MergersAcquisitions);
/// assert!(prompt.contains("M&A"));
/// ```
pub fn generate_interviewer_prompt(case_type: CaseType) -> String {
    let case_focus = match case_type {
        CaseType::Profitability => {
            "The client's profits are declining. Expect the candidate to break the problem into revenue and cost drivers before diving into either side."
        }
        CaseType::MarketEntry => {
            "The client is weighing entry into a new market. Expect the candidate to examine market attractiveness, competitive dynamics, and entry economics."
        }
        CaseType::GrowthStrategy => {
            "The client wants to grow. Expect the candidate to separate organic levers (products, segments, channels, pricing) from inorganic ones."
        }
        CaseType::MergersAcquisitions => {
            "The client is considering an acquisition. Expect the candidate to assess standalone value, synergies, and deal risks."
        }
    };

    format!(
        r#"You are an experienced consulting interviewer conducting a {case_type} case interview.

CASE FOCUS:
{case_focus}

CONDUCT THE INTERVIEW AS FOLLOWS:
1. Open with a realistic problem statement, as in a live case interview.
2. Reveal at most one fact or ask at most one probing question per turn. Never present a full solution.
3. Require the candidate to state or imply a structure before advancing. When their approach is ambiguous, ask a clarifying follow-up instead of moving on.
4. When the candidate asks for data, invent contextually plausible figures rather than declining.
5. Be strict but supportive. Do not give away answers.

Keep your tone professional, like a McKinsey or Bain interviewer.

When the candidate indicates they are done, close the interview with a summary of their performance and rate them on:
- Structure
- Math
- Creativity
- Communication"#
    )
}
