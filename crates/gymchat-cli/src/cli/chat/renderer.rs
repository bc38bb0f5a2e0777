//! Terminal markdown rendering for chat turns.
//!
//! The HTML produced by the core formatter is for web views; in the terminal
//! the raw markdown source of a bubble is rendered through `termimad`.

use termimad::MadSkin;
use termimad::crossterm::style::Color;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);
        Self { skin }
    }

    /// Render markdown for display, indented to sit under the speaker label.
    pub fn render(&self, markdown: &str) -> String {
        let rendered = self.skin.term_text(markdown).to_string();
        rendered
            .trim_end()
            .lines()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Print the footer after a reply: "| 1.2s . http://localhost:8000".
    pub fn print_footer(&self, response_ms: u64, endpoint: &str) {
        let seconds = response_ms as f64 / 1000.0;
        println!(
            "  {} {} {} {}",
            console::style("|").dim(),
            console::style(format!("{seconds:.1}s")).dim(),
            console::style("\u{00b7}").dim(),
            console::style(endpoint).dim(),
        );
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}
