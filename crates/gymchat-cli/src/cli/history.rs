//! Saved chat history subcommands (show, clear, export).
//!
//! All three go through a `ChatSession` with a `NullView`, so they see the
//! history exactly as the chat loop would restore it: decoded, with legacy
//! records normalized, and cut to the retention limit.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use gymchat_core::render::{NullView, render};
use gymchat_types::chat::{Role, Turn};

use crate::state::AppState;

/// Longest message preview shown in the history table.
const PREVIEW_CHARS: usize = 60;

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Show the saved conversation.
    Show {
        /// Only show the most recent N messages.
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Delete the saved conversation.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Write the saved conversation as a standalone HTML page.
    Export {
        /// Output file path.
        path: PathBuf,
    },
}

/// Handle a history subcommand.
pub async fn handle_history_command(cmd: HistoryCommand, state: &AppState, json: bool) -> Result<()> {
    if !state.config.persist {
        anyhow::bail!("History is disabled (persist = false or --no-persist)");
    }

    match cmd {
        HistoryCommand::Show { limit } => show_history(state, limit, json).await,
        HistoryCommand::Clear { force } => clear_history(state, force, json).await,
        HistoryCommand::Export { path } => export_history(state, &path, json).await,
    }
}

async fn load_turns(state: &AppState) -> Result<Vec<Turn>> {
    let session = state.session(NullView)?;
    session.initialize().await;
    Ok(session.transcript())
}

async fn show_history(state: &AppState, limit: Option<usize>, json: bool) -> Result<()> {
    let turns = load_turns(state).await?;
    let skip = limit.map_or(0, |n| turns.len().saturating_sub(n));
    let shown = &turns[skip..];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!();
        println!("  {} No saved conversation.", style("i").blue().bold());
        println!("     Start one with: gymchat chat");
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  Saved conversation ({} of {} messages)",
        shown.len(),
        turns.len()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("From").fg(Color::White),
        Cell::new("Message").fg(Color::White),
    ]);

    for (i, turn) in shown.iter().enumerate() {
        let (from, color) = match turn.role {
            Role::User => ("You", Color::Green),
            Role::Assistant if turn.is_error => ("GymAI", Color::Red),
            Role::Assistant => ("GymAI", Color::Cyan),
        };
        table.add_row(vec![
            Cell::new(skip + i + 1).fg(Color::DarkGrey),
            Cell::new(from).fg(color),
            Cell::new(preview(&turn.content)),
        ]);
    }

    println!("{table}");
    println!();
    Ok(())
}

async fn clear_history(state: &AppState, force: bool, json: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete the saved conversation?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    let session = state.session(NullView)?;
    session.clear().await?;

    if json {
        let result = serde_json::json!({ "cleared": state.config.storage_key });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!("  {} Saved conversation deleted", style("ok").green());
        println!();
    }
    Ok(())
}

async fn export_history(state: &AppState, path: &Path, json: bool) -> Result<()> {
    let turns = load_turns(state).await?;
    write_export(path, &turns).await?;

    if json {
        let result = serde_json::json!({
            "path": path.display().to_string(),
            "messages": turns.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!(
            "  {} Exported {} messages to {}",
            style("ok").green(),
            turns.len(),
            style(path.display()).cyan(),
        );
        println!();
    }
    Ok(())
}

async fn write_export(path: &Path, turns: &[Turn]) -> Result<()> {
    tokio::fs::write(path, export_html(turns))
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Build a standalone HTML page from the rendered bubbles.
pub fn export_html(turns: &[Turn]) -> String {
    let bubbles: String = turns
        .iter()
        .map(|turn| format!("    {}\n", render(turn).to_html()))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>GymAI conversation</title>
  <style>
    body {{ font-family: system-ui, sans-serif; background: #f4f6fb; margin: 0; }}
    .chat-messages {{ max-width: 760px; margin: 2rem auto; display: flex; flex-direction: column; gap: 12px; }}
    .message {{ display: flex; gap: 8px; align-items: flex-start; }}
    .user-msg {{ flex-direction: row-reverse; }}
    .message-avatar {{ font-size: 1.4rem; }}
    .message-content {{ padding: 10px 14px; border-radius: 12px; background: #fff; max-width: 75%; }}
    .user-msg .message-content {{ background: #4f46e5; color: #fff; }}
    .error-msg {{ background: #fee2e2; color: #991b1b; }}
  </style>
</head>
<body>
  <div class="chat-messages">
{bubbles}  </div>
</body>
</html>
"#
    )
}

fn preview(content: &str) -> String {
    let flat = content.replace('\n', " ");
    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_html_contains_rendered_bubbles() {
        let turns = vec![
            Turn::user("What is **BMI**?"),
            Turn::assistant("It is <weight> over height squared."),
            Turn::error_notice("Error: The server returned an error."),
        ];

        let html = export_html(&turns);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div class="message user-msg">"#));
        assert!(html.contains("<strong>BMI</strong>"));
        assert!(html.contains("&lt;weight&gt;"));
        assert!(html.contains(r#"<div class="message-content error-msg">"#));
        assert_eq!(html.matches(r#"class="message-avatar""#).count(), 3);
    }

    #[test]
    fn test_export_html_empty_conversation() {
        let html = export_html(&[]);
        assert!(html.contains(r#"<div class="chat-messages">"#));
        assert!(!html.contains(r#"class="message-avatar""#));
    }

    #[tokio::test]
    async fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.html");

        write_export(&path, &[Turn::assistant("Drink water.")]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Drink water."));
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(80);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS);
    }
}
