//! One-shot question: `gymchat ask "How many rest days?"`.
//!
//! Runs a single submit through the same session as the chat loop, so the
//! saved history is sent along and the exchange is saved afterwards.

use std::time::Instant;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gymchat_core::chat::SubmitOutcome;
use gymchat_core::chat::quick::{QUICK_PROMPTS, quick_prompt};
use gymchat_core::render::NullView;
use gymchat_core::transport::ChatTransport;

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

/// Resolve the message text from the positional argument or `--quick N`.
fn resolve_message(message: Option<String>, quick: Option<usize>) -> Result<String> {
    match (message, quick) {
        (Some(text), None) => Ok(text),
        (None, Some(number)) => quick_prompt(number).map(str::to_string).ok_or_else(|| {
            anyhow::anyhow!("No quick prompt {number}. Choose 1-{}", QUICK_PROMPTS.len())
        }),
        (Some(_), Some(_)) => anyhow::bail!("Pass either a message or --quick, not both"),
        (None, None) => anyhow::bail!("Nothing to ask. Pass a message or --quick N"),
    }
}

/// Send one message and print the reply.
pub async fn ask(
    state: &AppState,
    message: Option<String>,
    quick: Option<usize>,
    json: bool,
) -> Result<()> {
    let text = resolve_message(message, quick)?;

    let session = state.session(NullView)?;
    session.initialize().await;

    let spinner = (!json).then(|| {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message("thinking...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        spinner
    });

    let start = Instant::now();
    let outcome = session.submit(&text).await?;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        SubmitOutcome::Ignored => anyhow::bail!("Message is empty"),
        SubmitOutcome::Replied(reply) => {
            if json {
                let result = serde_json::json!({
                    "message": text,
                    "reply": reply.content,
                    "elapsed_ms": elapsed_ms,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let renderer = ChatRenderer::new();
                println!();
                println!("{}", renderer.render(&reply.content));
                println!();
                renderer.print_footer(elapsed_ms, session.transport().endpoint());
            }
            Ok(())
        }
        SubmitOutcome::Failed { notice, error } => {
            if json {
                let result = serde_json::json!({
                    "message": text,
                    "error": notice.content,
                    "category": format!("{:?}", error.category()),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let renderer = ChatRenderer::new();
                println!();
                println!("{}", style(renderer.render(&notice.content)).red());
                println!();
            }
            Err(error.into())
        }
    }
}
