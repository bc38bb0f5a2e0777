//! Banner and welcome message display for chat sessions.

use console::style;

/// Print the banner at the start of an interactive session.
///
/// Shows the backend origin, where history is kept, and the command hints.
pub fn print_welcome_banner(backend_url: &str, storage: Option<&str>, retention: usize) {
    println!();
    println!("  {} {}", "🏋️", style("GymAI Fitness Assistant").cyan().bold());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(backend_url).dim());
    match storage {
        Some(path) => println!(
            "  {}  {} {}",
            style("History:").bold(),
            style(path).dim(),
            style(format!("(last {retention} messages)")).dim()
        ),
        None => println!(
            "  {}  {}",
            style("History:").bold(),
            style("not saved (--no-persist)").dim()
        ),
    }
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /quick for suggestions, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
}

/// Print the placeholder shown while the conversation is empty.
pub fn print_welcome_message() {
    println!();
    println!(
        "  {} {}",
        "🤖",
        style("Hi! I'm GymAI, your fitness assistant. Ask me about workouts, nutrition, or your BMI.")
            .dim()
    );
    println!();
}
