//! GymChat terminal client entry point.
//!
//! Binary name: `gymchat`
//!
//! Parses CLI arguments, sets up tracing, resolves configuration, then
//! dispatches to the chat loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use gymchat_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::{AppState, ConfigOverrides};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(default_filter(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    let command = match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "gymchat", &mut std::io::stdout());
            return Ok(());
        }
        command => command,
    };

    let overrides = ConfigOverrides {
        backend_url: cli.backend_url,
        no_persist: cli.no_persist,
    };
    let state = AppState::init(&overrides).await?;

    match command {
        None | Some(Commands::Chat) => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }
        Some(Commands::Ask { message, quick }) => {
            cli::ask::ask(&state, message, quick, cli.json).await?;
        }
        Some(Commands::History { action }) => {
            cli::history::handle_history_command(action, &state, cli.json).await?;
        }
        Some(Commands::Health) => {
            cli::health::health(&state, cli.json).await?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
