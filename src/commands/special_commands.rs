//! Special commands parser for interactive chat mode
//!
//! This module parses and handles special commands that can be entered during
//! an interview session. Special commands allow users to:
//! - Request a mental-math drill
//! - View current session status
//! - Display help information
//! - Exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),
}

/// Special commands that can be executed during an interview session
///
/// These commands act on the session or print information, rather than
/// being sent to the interviewer as a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Request a mental-math drill
    ///
    /// Issues the drill request against the current session history.
    Drill,

    /// Display current session status
    ///
    /// Shows the case type, interview stage, and history length.
    ShowStatus,

    /// Display the conversation so far, keyed by role
    Transcript,

    /// Display help information
    ///
    /// Shows all available special commands and their usage.
    Help,

    /// Exit the interactive session
    ///
    /// Gracefully closes the interview session.
    Exit,

    /// Not a special command
    ///
    /// The input should be submitted as a regular interview turn.
    None,
}

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern.
/// Commands are case-insensitive.
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Returns
///
/// Returns Ok(SpecialCommand) for valid commands or SpecialCommand::None
/// for non-commands
///
/// # Errors
///
/// Returns CommandError::UnknownCommand if input starts with "/" but is not
/// a valid command
///
/// # Examples
///
/// ```
/// use casecoach::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/drill").unwrap();
/// assert_eq!(cmd, SpecialCommand::Drill);
///
/// let cmd = parse_special_command("Let's segment by region").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/drill" => Ok(SpecialCommand::Drill),
        "/status" => Ok(SpecialCommand::ShowStatus),
        "/history" | "/transcript" => Ok(SpecialCommand::Transcript),
        "/help" => Ok(SpecialCommand::Help),
        "/exit" | "/quit" | "exit" | "quit" => Ok(SpecialCommand::Exit),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Print help information for the interactive session
pub fn print_help() {
    println!("\nAvailable commands:");
    println!("  /drill   - Get 5 quick mental math questions");
    println!("  /status  - Show case type, stage, and transcript length");
    println!("  /history - Replay the conversation so far");
    println!("  /help    - Show this help");
    println!("  exit     - Leave the session (also: quit, /exit, /quit)");
    println!();
    println!("Anything else is sent to the interviewer as your next turn.");
    println!("Say you are done when you want your performance summary.\n");
}
