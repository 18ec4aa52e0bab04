//! Display functions for command results

use super::formatters::colored_guess;
use crate::commands::{CheckResult, DailyWordResult};
use colored::Colorize;

/// Print the word of the day
pub fn print_daily_word(result: &DailyWordResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word of the day for {}: {}",
        result.date.format("%Y-%m-%d"),
        result.word.original().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("  Language:    {}", result.language);
    println!("  Seed:        {}", result.seed);
    println!("  Sample:      {:.6}", result.sample);
    println!(
        "  Index:       {} of {}",
        result.index, result.dictionary_size
    );
    println!("  Difficulty:  {}", result.word.difficulty());
}

/// Print the result of a word lookup
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} → {} ({})",
        result.input,
        result.normalized.bright_yellow().bold(),
        result.language
    );

    if result.present {
        println!("{}", "✅ In the dictionary".green().bold());
    } else {
        println!("{}", "❌ Not in the dictionary".red().bold());
    }

    if let Some(feedback) = &result.feedback {
        println!(
            "\n{}  {}",
            colored_guess(&result.normalized, feedback),
            feedback.to_emoji()
        );
    }
}

/// Print the console chat instructions
pub fn print_play_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     WordIn - Console Chat                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("  /start       start a game");
    println!("  /help        show the help message");
    println!("  /settings    open the settings menu");
    println!("  @<action>    press a button, e.g. @settings/language");
    println!("  /quit        leave\n");
    println!("Any other line is a reply to the game message.\n");
}
