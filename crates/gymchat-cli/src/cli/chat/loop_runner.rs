//! Main chat loop orchestration.
//!
//! Restores saved history, prints the banner, then reads lines until Ctrl+D
//! or `/exit`. Plain lines go to the session; slash commands are handled
//! locally.

use std::time::Instant;

use chrono::Local;
use console::style;
use tracing::{info, warn};

use gymchat_core::chat::quick::{QUICK_PROMPTS, quick_prompt};
use gymchat_core::chat::SubmitOutcome;
use gymchat_core::transport::ChatTransport;
use gymchat_infra::filesystem::storage_dir;
use gymchat_types::chat::Role;
use gymchat_types::error::SessionError;

use crate::state::{AppState, ConcreteSession};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::view::TerminalView;

/// Longest transcript line shown by `/history` before truncation.
const HISTORY_PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop against the configured backend.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let session = state.session(TerminalView::new())?;

    let storage = state.config.persist.then(|| {
        storage_dir(&state.data_dir)
            .join(format!("{}.json", state.config.storage_key))
            .display()
            .to_string()
    });
    print_welcome_banner(
        &state.config.backend_url,
        storage.as_deref(),
        state.config.effective_retention(),
    );

    let restored = session.initialize().await;
    info!(restored, "Chat session started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Clear => {
                            chat_input.clear();
                            if let Err(SessionError::Busy) = session.clear().await {
                                print_busy();
                            }
                        }
                        ChatCommand::History => print_history(&session),
                        ChatCommand::Quick(None) => commands::print_quick_prompts(),
                        ChatCommand::Quick(Some(number)) => match quick_prompt(number) {
                            Some(prompt) => {
                                println!("\n  {} {}", style("You >").green().bold(), prompt);
                                send(&session, prompt).await;
                            }
                            None => println!(
                                "\n  {} No quick prompt {}. Choose 1-{}.\n",
                                style("?").yellow().bold(),
                                style(number).dim(),
                                QUICK_PROMPTS.len()
                            ),
                        },
                        ChatCommand::Unknown(cmd_name) => println!(
                            "\n  {} Unknown command: {}. Type /help for available commands.\n",
                            style("?").yellow().bold(),
                            style(cmd_name).dim()
                        ),
                    }
                    continue;
                }

                send(&session, &text).await;
            }
        }
    }

    Ok(())
}

/// Submit one message and print the response footer.
async fn send(session: &ConcreteSession<TerminalView>, text: &str) {
    let start = Instant::now();
    let outcome = session.submit(text).await;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match outcome {
        Ok(SubmitOutcome::Ignored) => {}
        Ok(SubmitOutcome::Replied(_)) => {
            session
                .view()
                .renderer()
                .print_footer(elapsed_ms, session.transport().endpoint());
            println!();
        }
        Ok(SubmitOutcome::Failed { error, .. }) => {
            warn!(error = %error, elapsed_ms, "Chat request failed");
            println!();
        }
        Err(SessionError::Busy) => print_busy(),
    }
}

fn print_busy() {
    println!(
        "\n  {} Still waiting for the previous reply.\n",
        style("!").yellow().bold()
    );
}

fn print_history(session: &ConcreteSession<TerminalView>) {
    let turns = session.transcript();
    println!();
    if turns.is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for turn in &turns {
        let label = match turn.role {
            Role::User => style("You").green().bold(),
            Role::Assistant if turn.is_error => style("GymAI").red().bold(),
            Role::Assistant => style("GymAI").cyan().bold(),
        };
        match turn.timestamp {
            Some(at) => println!(
                "  {} {} {}",
                style(at.with_timezone(&Local).format("%H:%M")).dim(),
                label,
                preview(&turn.content)
            ),
            None => println!("  {} {}", label, preview(&turn.content)),
        }
    }
    println!();
}

/// Single-line preview of a message, cut on a character boundary.
fn preview(content: &str) -> String {
    let flat = content.replace('\n', " ");
    if flat.chars().count() > HISTORY_PREVIEW_CHARS {
        let cut: String = flat.chars().take(HISTORY_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
