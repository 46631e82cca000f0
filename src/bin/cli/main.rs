mod app;
mod commands;
mod render;
mod study_view;
#[cfg(feature = "tui")]
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recall-cli", about = "Word groups and interleaved study sessions", version)]
struct Cli {
    /// Use a specific data directory (default: from config, then platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all word groups
    Groups,

    /// Show the words in a group
    Show {
        /// Group name (case-insensitive prefix match)
        group: String,
    },

    /// Add a word or phrase to a group, creating the group if needed
    Add {
        /// Group name (exact)
        group: String,
        /// The word or phrase
        text: String,
        /// Translation shown on the back of the card
        #[arg(long)]
        translation: Option<String>,
        /// Sentence the word came from
        #[arg(long)]
        sentence: Option<String>,
        /// Mark as a phrase rather than a single word
        #[arg(long)]
        phrase: bool,
        /// Stable identity for deduplication (defaults to the text)
        #[arg(long)]
        key: Option<String>,
    },

    /// Add a JSON array of words to a group
    Import {
        /// Group name (exact)
        group: String,
        /// JSON file to read ("-" for stdin)
        source: String,
    },

    /// Remove a word from a group
    Remove {
        /// Group name (case-insensitive prefix match)
        group: String,
        /// Word key, or its text when it has no key
        word: String,
    },

    /// Delete a group and all its words
    Delete {
        /// Group name (case-insensitive prefix match)
        group: String,
    },

    /// Study a group
    Study {
        /// Group name (case-insensitive prefix match)
        group: String,
        /// Use the line-based prompt instead of the full-screen view
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Groups => {
            commands::groups::run(&app, &cli.format, use_color)?;
        }
        Command::Show { group } => {
            commands::show::run(&app, &group, &cli.format, use_color)?;
        }
        Command::Add { group, text, translation, sentence, phrase, key } => {
            let word = commands::add::NewWord { text, translation, sentence, phrase, key };
            commands::add::run_add(&app, &group, word, &cli.format)?;
        }
        Command::Import { group, source } => {
            commands::add::run_import(&app, &group, &source, &cli.format)?;
        }
        Command::Remove { group, word } => {
            commands::remove::run_remove(&app, &group, &word, &cli.format)?;
        }
        Command::Delete { group } => {
            commands::remove::run_delete(&app, &group, &cli.format)?;
        }
        Command::Study { group, plain } => {
            run_study(&app, &group, plain, use_color)?;
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_study(app: &app::App, group: &str, plain: bool, use_color: bool) -> anyhow::Result<()> {
    if plain || !atty_check() {
        return commands::study::run_plain(app, group, use_color);
    }
    let view = commands::study::start(app, group)?;
    let progress = tui::run(view)?;
    commands::study::print_summary(&progress, use_color);
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_study(app: &app::App, group: &str, _plain: bool, use_color: bool) -> anyhow::Result<()> {
    commands::study::run_plain(app, group, use_color)
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}
