//! Terminal implementation of `ChatView`.
//!
//! Bubbles are printed as labelled blocks; the busy state shows a spinner.
//! User turns appended while a reply is awaited were just typed at the
//! prompt and are already on screen, so they are not printed again.

use std::sync::Mutex;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use gymchat_core::render::{Bubble, ChatView, Side};

use super::banner::print_welcome_message;
use super::renderer::ChatRenderer;

/// Chat view drawing to stdout.
pub struct TerminalView {
    renderer: ChatRenderer,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            renderer: ChatRenderer::new(),
            spinner: Mutex::new(None),
        }
    }

    pub fn renderer(&self) -> &ChatRenderer {
        &self.renderer
    }

    fn is_busy(&self) -> bool {
        self.spinner.lock().map(|s| s.is_some()).unwrap_or(false)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for TerminalView {
    fn show_welcome(&self) {
        print_welcome_message();
    }

    fn append(&self, bubble: &Bubble) {
        if bubble.side == Side::Right && self.is_busy() {
            return;
        }

        // Keep the spinner from drawing over the reply.
        if let Ok(guard) = self.spinner.lock() {
            if let Some(spinner) = guard.as_ref() {
                spinner.finish_and_clear();
            }
        }

        let label = match bubble.side {
            Side::Right => style("You").green().bold(),
            Side::Left => style("GymAI").cyan().bold(),
        };
        let body = self.renderer.render(&bubble.source);

        println!();
        println!("  {} {}", bubble.avatar, label);
        if bubble.is_error {
            println!("{}", style(body).red());
        } else {
            println!("{body}");
        }
    }

    fn set_busy(&self, busy: bool) {
        let Ok(mut guard) = self.spinner.lock() else {
            return;
        };

        if busy {
            let spinner = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
                spinner.set_style(spinner_style);
            }
            spinner.set_message("thinking...");
            spinner.enable_steady_tick(Duration::from_millis(80));
            *guard = Some(spinner);
        } else if let Some(spinner) = guard.take() {
            spinner.finish_and_clear();
        }
    }

    fn focus_input(&self) {
        // The readline prompt reclaims the cursor on the next read.
    }
}
