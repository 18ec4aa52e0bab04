//! Command implementations

pub mod check;
pub mod daily;
pub mod play;

pub use check::{CheckResult, check_word};
pub use daily::{DailyWordResult, daily_word};
pub use play::{CONSOLE_CHAT, ConsoleInput, parse_line, run_play};
