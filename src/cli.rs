//! Command-line interface definition for CaseCoach
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interview practice and drills.

use clap::{Parser, Subcommand};

/// CaseCoach - Consulting case interview practice
///
/// Practice case interviews through conversation with an AI interviewer,
/// with stage tracking and quick mental math drills.
#[derive(Parser, Debug, Clone)]
#[command(name = "casecoach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the configured model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for CaseCoach
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive case interview session
    Chat {
        /// Case type to practice (profitability, market-entry, growth-strategy, m&a)
        ///
        /// When omitted, the session starts with an interactive selection.
        #[arg(long)]
        case: Option<String>,
    },

    /// Get 5 quick mental math questions
    Drill,

    /// List the available case types
    Cases,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            model: None,
            verbose: false,
            command: Commands::Cases,
        }
    }
}
