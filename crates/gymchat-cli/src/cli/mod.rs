//! CLI command definitions for the `gymchat` binary.
//!
//! Uses clap derive macros for argument parsing. Running `gymchat` with no
//! subcommand starts the interactive chat.

pub mod ask;
pub mod chat;
pub mod health;
pub mod history;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with the GymAI fitness assistant from your terminal.
#[derive(Parser)]
#[command(name = "gymchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Backend origin, e.g. http://localhost:8000.
    #[arg(long, global = true, env = "GYMCHAT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Do not read or write saved history.
    #[arg(long, global = true)]
    pub no_persist: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (the default).
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// The question to send.
        message: Option<String>,

        /// Send quick prompt N instead (see `/quick` in chat).
        #[arg(long)]
        quick: Option<usize>,
    },

    /// Manage the saved conversation (show, clear, export).
    History {
        #[command(subcommand)]
        action: history::HistoryCommand,
    },

    /// Check whether the backend is running.
    Health,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
