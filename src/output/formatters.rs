//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterMatch};
use colored::Colorize;

/// Render bot HTML for a terminal
///
/// `<b>`/`<strong>` become bold, other tags are dropped and the basic
/// entities are unescaped.
#[must_use]
pub fn html_to_terminal(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut bold = false;
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        push_text(&mut out, &rest[..start], bold);

        let Some(end) = rest[start..].find('>') else {
            push_text(&mut out, &rest[start..], bold);
            return out;
        };

        match rest[start + 1..start + end].trim().to_ascii_lowercase().as_str() {
            "b" | "strong" => bold = true,
            "/b" | "/strong" => bold = false,
            _ => {}
        }

        rest = &rest[start + end + 1..];
    }

    push_text(&mut out, rest, bold);
    out
}

fn push_text(out: &mut String, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }

    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");

    if bold {
        out.push_str(&text.bold().to_string());
    } else {
        out.push_str(&text);
    }
}

/// Guess letters colored by their match
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.matches())
        .map(|(letter, m)| {
            let letter = format!(" {} ", letter.to_uppercase());
            match m {
                LetterMatch::Exact => letter.black().on_green().to_string(),
                LetterMatch::Present => letter.black().on_yellow().to_string(),
                LetterMatch::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}
