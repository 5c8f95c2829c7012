/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`  - Interactive case interview session
- `drill` - One-shot mental math drill
- `cases` - List the available case types

These handlers are intentionally small and use the library components:
the provider, the prompts, and the interview orchestrator.
*/

use crate::case_type::CaseType;
use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};
use crate::config::Config;
use crate::error::Result;
use crate::interview::{Interviewer, Session};
use crate::providers::create_provider;

// Special commands parser for the interactive session
pub mod special_commands;

// Chat command handler
pub mod chat {
    //! Interactive interview session handler.
    //!
    //! Instantiates the provider and the orchestrator, then runs a
    //! readline-based loop that submits candidate turns and renders the
    //! interviewer's replies.

    use super::*;
    use crate::providers::Role;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive interview session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `case` - Optional case type given on the command line; when absent
    ///   the user picks one interactively
    ///
    /// # Examples
    ///
    /// ```
    /// use casecoach::commands::chat;
    /// use casecoach::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default(), Some("profitability".to_string())).await?;
    /// ```
    pub async fn run_chat(config: Config, case: Option<String>) -> Result<()> {
        tracing::info!("Starting interactive interview session");

        // Reject an invalid case type at selection time, before any
        // session resources are created.
        let cli_case = case.map(|name| CaseType::parse_str(&name)).transpose()?;

        let provider = create_provider(&config.provider)?;
        let interviewer = Interviewer::new(provider);
        let mut session = Session::new();

        let mut rl = DefaultEditor::new()?;

        let case_type = match cli_case {
            Some(case_type) => case_type,
            None => select_case_type(&mut rl)?,
        };

        print_welcome_banner(case_type);

        let opening = interviewer.start_case(&mut session, case_type).await?;
        print_interviewer(&opening);

        loop {
            let line = match rl.readline("You> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            rl.add_history_entry(trimmed)?;

            match parse_special_command(trimmed) {
                Ok(SpecialCommand::Drill) => {
                    // Runs against the shared session history: the drill
                    // exchange becomes part of later interview context.
                    match interviewer.request_drill(&mut session).await {
                        Ok(questions) => println!("\n{}\n{}\n", "Drill:".yellow().bold(), questions),
                        Err(e) => eprintln!("{}", format!("Error: {:#}", e).red()),
                    }
                    continue;
                }
                Ok(SpecialCommand::ShowStatus) => {
                    print_status_display(&session);
                    continue;
                }
                Ok(SpecialCommand::Transcript) => {
                    print_transcript(&session);
                    continue;
                }
                Ok(SpecialCommand::Help) => {
                    print_help();
                    continue;
                }
                Ok(SpecialCommand::Exit) => break,
                Ok(SpecialCommand::None) => {}
                Err(e) => {
                    eprintln!("{}", e.to_string().red());
                    continue;
                }
            }

            match interviewer.submit_turn(&mut session, trimmed).await {
                Ok(reply) => {
                    print_interviewer(&reply);
                    if session.stage().is_terminal() {
                        println!(
                            "{}",
                            "The interview has concluded. Run `casecoach chat` to practice another case.".green()
                        );
                        break;
                    }
                }
                Err(e) => eprintln!("{}", format!("Error: {:#}", e).red()),
            }
        }

        Ok(())
    }

    /// Prompt the user to pick a case type from a numbered menu
    fn select_case_type(rl: &mut DefaultEditor) -> Result<CaseType> {
        println!("\nChoose a case type to practice:\n");
        for (idx, case_type) in CaseType::ALL.iter().enumerate() {
            println!(
                "  {}. {:<16} {}",
                idx + 1,
                case_type.to_string(),
                case_type.description()
            );
        }
        println!();

        loop {
            let line = rl.readline("Case [1-4 or name]: ")?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Ok(idx) = trimmed.parse::<usize>() {
                if (1..=CaseType::ALL.len()).contains(&idx) {
                    return Ok(CaseType::ALL[idx - 1]);
                }
            }

            match CaseType::parse_str(trimmed) {
                Ok(case_type) => return Ok(case_type),
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
        }
    }

    /// Display the welcome banner for a new interview session
    fn print_welcome_banner(case_type: CaseType) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║          CaseCoach - Case Interview Practice                 ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!(
            "Case: {} ({})",
            case_type.colored_tag(),
            case_type.description()
        );
        println!("Type '/help' for available commands, 'exit' to quit");
        println!("Say you are done when you want your performance summary\n");
    }

    /// Display detailed status information about the current session
    fn print_status_display(session: &Session) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  CaseCoach Session Status                    ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        match session.case_type() {
            Some(case_type) => println!(
                "Case Type:       {} ({})",
                case_type.colored_tag(),
                case_type.description()
            ),
            None => println!("Case Type:       (not selected)"),
        }
        println!("Stage:           {}", session.stage());
        println!("Transcript Size: {} messages", session.len());
        println!();
    }

    /// Replay the conversation so far, keyed by role
    ///
    /// The system prompt is instruction text, not dialogue, and is not shown.
    fn print_transcript(session: &Session) {
        let turns = session
            .messages()
            .iter()
            .filter(|m| m.role != Role::System)
            .count();
        if turns == 0 {
            println!("\nNo conversation yet.\n");
            return;
        }

        println!();
        for message in session.messages() {
            let tag = match message.role {
                Role::System => continue,
                Role::User => "You:".green().bold(),
                Role::Assistant => "Interviewer:".cyan().bold(),
            };
            println!("{}\n{}\n", tag, message.content);
        }
    }

    /// Render one interviewer reply
    fn print_interviewer(reply: &str) {
        println!("\n{}\n{}\n", "Interviewer:".cyan().bold(), reply);
    }
}

// Drill command handler
pub mod drill {
    //! One-shot mental math drill handler.
    //!
    //! Runs a drill against a fresh session, outside any interview.

    use super::*;
    use colored::Colorize;

    /// Request a mental math drill and print the questions
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    pub async fn run_drill(config: Config) -> Result<()> {
        tracing::info!("Running standalone mental math drill");

        let provider = create_provider(&config.provider)?;
        let interviewer = Interviewer::new(provider);
        let mut session = Session::new();

        let questions = interviewer.request_drill(&mut session).await?;
        println!("\n{}\n{}\n", "Drill:".yellow().bold(), questions);
        Ok(())
    }
}

// Cases listing handler
pub mod cases {
    //! Case type listing handler.

    use super::*;

    /// Print the available case types with descriptions
    pub fn run_cases() {
        println!("\nAvailable case types:\n");
        for case_type in CaseType::ALL {
            println!("  {:<16} {}", case_type.to_string(), case_type.description());
        }
        println!("\nStart one with: casecoach chat --case <type>\n");
    }
}
