//! WordIn - CLI
//!
//! Play the word game and its settings menus in the terminal, or inspect
//! dictionaries.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wordin::{
    bot::Bot,
    commands::{check_word, daily_word, run_play},
    config::{BotConfig, DEFAULT_LANGUAGE, DEFAULT_LANGUAGES_DIR},
    frontend::ConsoleMessenger,
    game::{DEFAULT_MAX_TRIES, GameMode},
    language::LanguageRegistry,
    logging,
    output::{print_check_result, print_daily_word},
    settings::{ChatSource, MemorySettingsStore},
};

#[derive(Parser)]
#[command(
    name = "wordin",
    about = "Wordle-style word game with chat-style settings menus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding <code>.json language files
    #[arg(long, global = true, env = "WORDIN_LANGUAGES_DIR", default_value = DEFAULT_LANGUAGES_DIR)]
    languages_dir: PathBuf,

    /// Default language code
    #[arg(short, long, global = true, env = "WORDIN_DEFAULT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// How new games pick their word
    #[arg(short, long, global = true, value_enum, default_value_t = ModeArg::Daily)]
    mode: ModeArg,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TRIES)]
    max_tries: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Name shown when you win
        #[arg(short, long, default_value = "player")]
        name: String,
    },

    /// Print the word of the day
    Daily {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Normalize a word and look it up in the dictionary
    Check {
        /// The word to look up
        word: String,

        /// Score the word against this secret
        #[arg(short, long)]
        against: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Same word for everyone on a given day
    Daily,
    /// A new random word every game
    Random,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Daily => Self::DailyWord,
            ModeArg::Random => Self::RandomWord,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = BotConfig {
        languages_dir: cli.languages_dir,
        default_language: cli.language,
        mode: cli.mode.into(),
        max_tries: cli.max_tries,
        source: ChatSource::Console,
    };

    let languages = LanguageRegistry::load(&config.languages_dir, &config.default_language)
        .with_context(|| {
            format!(
                "failed to load languages from {}",
                config.languages_dir.display()
            )
        })?;

    match cli.command {
        None => run_play_command(config, languages, "player").await,
        Some(Commands::Play { name }) => run_play_command(config, languages, &name).await,
        Some(Commands::Daily { date }) => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let result = daily_word(&languages.default_language(), date)?;
            print_daily_word(&result);
            Ok(())
        }
        Some(Commands::Check { word, against }) => {
            let result = check_word(&languages.default_language(), &word, against.as_deref());
            print_check_result(&result);
            Ok(())
        }
    }
}

async fn run_play_command(config: BotConfig, languages: LanguageRegistry, name: &str) -> Result<()> {
    info!(
        "starting console chat in {} mode, default language {}",
        config.mode, config.default_language
    );

    let settings = MemorySettingsStore::new(languages.default_code());
    let bot = Bot::new(config, Arc::new(languages), ConsoleMessenger::new(), settings);

    run_play(bot, name).await
}
