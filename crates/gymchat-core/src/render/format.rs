//! Markdown-subset to HTML formatting for message bubbles.
//!
//! Supported: line breaks, numbered list lines, `**bold**`, `` `code` `` and
//! `[label](url)` links. Each line is HTML-escaped and formatted on its own,
//! so no span ever crosses a line or a list item. Lines are then joined with
//! `<br>`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+\S.*$").expect("valid numbered-line pattern"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").expect("valid bold pattern"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("valid code pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\s]+)\)").expect("valid link pattern"));

const LIST_ITEM_OPEN: &str = "<div style='margin: 4px 0; padding-left: 10px;'>";
const CODE_OPEN: &str = "<code style='background: rgba(0,0,0,0.1); padding: 2px 6px; border-radius: 4px; font-family: monospace;'>";

/// Format message text as HTML.
pub fn format_message(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split('\n')
        .map(format_line)
        .collect::<Vec<_>>()
        .join("<br>")
}

fn format_line(line: &str) -> String {
    let escaped = escape_html(line);
    let numbered = NUMBERED_LINE.is_match(&escaped);

    let bolded = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let coded = CODE.replace_all(&bolded, format!("{CODE_OPEN}$1</code>").as_str());
    let linked = LINK.replace_all(&coded, |caps: &Captures<'_>| {
        let label = &caps[1];
        let url = &caps[2];
        if is_safe_url(url) {
            format!("<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>")
        } else {
            caps[0].to_string()
        }
    });

    if numbered {
        format!("{LIST_ITEM_OPEN}{}</div>", linked.trim_start())
    } else {
        linked.into_owned()
    }
}

/// Escape the characters that carry meaning in HTML text and quoted
/// attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Only web, mail and relative targets become links.
fn is_safe_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:") {
        return true;
    }
    // Relative references carry no scheme.
    !lower.contains(':')
}
