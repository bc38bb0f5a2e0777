//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for history,
//! quick prompts, and help.

use console::style;

use gymchat_core::chat::quick::QUICK_PROMPTS;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the conversation and its saved history.
    Clear,
    /// Show the conversation so far.
    History,
    /// List quick prompts, or send the numbered one.
    Quick(Option<usize>),
    /// Exit the chat session.
    Exit,
    /// Unknown or malformed command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/clear" | "/reset" => ChatCommand::Clear,
        "/history" => ChatCommand::History,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/quick" | "/tips" => match arg {
            None => ChatCommand::Quick(None),
            Some(n) => match n.parse::<usize>() {
                Ok(number) => ChatCommand::Quick(Some(number)),
                Err(_) => ChatCommand::Unknown(format!("/quick expects a number, got '{n}'")),
            },
        },
        other => ChatCommand::Unknown(other.to_string()),
    };
    Some(command)
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}      {}", style("/help").cyan(), "Show this help message");
    println!("  {}     {}", style("/clear").cyan(), "Clear the conversation and saved history");
    println!("  {}   {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {} {}", style("/quick [N]").cyan(), "List suggested questions, or send number N");
    println!("  {}      {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit, Ctrl+C safe (no message loss)").dim());
    println!();
}

/// Print the numbered quick prompts.
pub fn print_quick_prompts() {
    println!();
    println!("  {}", style("Try asking:").bold());
    println!();
    for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).cyan(), prompt);
    }
    println!();
    println!("  {}", style("Send one with /quick N").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear_and_history() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/reset"), Some(ChatCommand::Clear));
        assert_eq!(parse("  /history  "), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_quick() {
        assert_eq!(parse("/quick"), Some(ChatCommand::Quick(None)));
        assert_eq!(parse("/quick 2"), Some(ChatCommand::Quick(Some(2))));
        assert_eq!(
            parse("/quick two"),
            Some(ChatCommand::Unknown("/quick expects a number, got 'two'".to_string()))
        );
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("How do squats work?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
