//! Case type definitions
//!
//! This module defines the fixed set of consulting case categories a
//! candidate can practice. The enumeration is closed: any other selection
//! is rejected at parse time, before any session state is touched.

use crate::error::CaseCoachError;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consulting case interview category
///
/// Chosen once per session; immutable once the case starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    /// Diagnose and fix a decline in client profits
    Profitability,

    /// Assess whether a client should enter a new market
    MarketEntry,

    /// Identify growth levers for an existing business
    GrowthStrategy,

    /// Evaluate a merger or acquisition target
    MergersAcquisitions,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profitability => write!(f, "Profitability"),
            Self::MarketEntry => write!(f, "Market Entry"),
            Self::GrowthStrategy => write!(f, "Growth Strategy"),
            Self::MergersAcquisitions => write!(f, "M&A"),
        }
    }
}

impl CaseType {
    /// All case types, in presentation order
    pub const ALL: [CaseType; 4] = [
        Self::Profitability,
        Self::MarketEntry,
        Self::GrowthStrategy,
        Self::MergersAcquisitions,
    ];

    /// Parse a case type from a string
    ///
    /// Accepts the display name or the common CLI spellings, case-insensitively.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the case type
    ///
    /// # Returns
    ///
    /// Returns the parsed CaseType, or `InvalidCaseType` if the string is
    /// outside the fixed enumeration
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::case_type::CaseType;
    ///
    /// let case = CaseType::parse_str("profitability").unwrap();
    /// assert_eq!(case, CaseType::Profitability);
    ///
    /// let case = CaseType::parse_str("Market Entry").unwrap();
    /// assert_eq!(case, CaseType::MarketEntry);
    ///
    /// assert!(CaseType::parse_str("trivia").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self, CaseCoachError> {
        match s.to_lowercase().as_str() {
            "profitability" => Ok(Self::Profitability),
            "market entry" | "market-entry" | "market_entry" => Ok(Self::MarketEntry),
            "growth strategy" | "growth-strategy" | "growth_strategy" => Ok(Self::GrowthStrategy),
            "m&a" | "ma" | "mergers-acquisitions" | "mergers_acquisitions" => {
                Ok(Self::MergersAcquisitions)
            }
            other => Err(CaseCoachError::InvalidCaseType(other.to_string())),
        }
    }

    /// Get a user-friendly description of this case type
    ///
    /// # Returns
    ///
    /// A description of what the case covers
    pub fn description(&self) -> &'static str {
        match self {
            Self::Profitability => "Diagnose why a client's profits are declining",
            Self::MarketEntry => "Assess whether a client should enter a new market",
            Self::GrowthStrategy => "Find growth levers for an existing business",
            Self::MergersAcquisitions => "Evaluate a merger or acquisition target",
        }
    }

    /// Get a colored tag representation of this case type
    ///
    /// # Returns
    ///
    /// A colored string suitable for display in terminal output
    pub fn colored_tag(&self) -> String {
        format!("[{}]", self.to_string().cyan())
    }
}
