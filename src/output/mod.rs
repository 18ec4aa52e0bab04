//! Terminal output formatting
//!
//! Display utilities for CLI results and the console chat.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_daily_word, print_play_banner};
