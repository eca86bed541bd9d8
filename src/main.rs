//! Dumile - vocabulary builder for the terminal
//!
//! Look up synonyms for any word, or draw a word of the day from a fixed
//! list of uncommon words. Synonyms come from a local WordNet dictionary.

mod clipboard;
mod config;
mod core;
mod data;
mod frontend;
mod lexicon;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use config::Config;
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use lexicon::WordNet;
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "dumile")]
#[command(about = "Synonym lookup and word of the day", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// WordNet dictionary directory (the one holding index.noun, data.noun, ...)
    #[arg(long, value_name = "DIR")]
    wordnet_dir: Option<PathBuf>,

    /// Custom data directory (default: ~/.dumile)
    /// Can also be set via DUMILE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print what the input panel would show for WORD
    Lookup {
        #[arg(value_name = "WORD")]
        word: String,
    },
    /// Draw one word of the day and print its synonyms
    Word,
}

fn init_logging() -> Result<()> {
    let log_path = Config::log_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    // Log to a file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // The TUI owns stdout, so nothing goes to the terminal
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // The data directory decides where the log and config live, so set it first
    if let Some(ref data_dir) = cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }

    init_logging()?;
    tracing::info!("Starting Dumile {}", env!("CARGO_PKG_VERSION"));
    if let Some(ref data_dir) = cli.data_dir {
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()?
    };

    // Without the dictionary there is nothing to show
    let explicit_dir = cli.wordnet_dir.clone().or_else(|| config.wordnet.dir.clone());
    let wordnet_dir = WordNet::locate(explicit_dir.as_deref())
        .context("WordNet dictionary not found; pass --wordnet-dir or set [wordnet] dir in config.toml")?;
    let wordnet = WordNet::open(&wordnet_dir)
        .with_context(|| format!("Failed to load WordNet from {:?}", wordnet_dir))?;
    tracing::info!(
        "Loaded WordNet from {:?} ({} lemmas)",
        wordnet.dir(),
        wordnet.lemma_count()
    );

    match cli.command {
        Some(Commands::Lookup { word }) => {
            let word = word.trim();
            if !word.is_empty() {
                for line in core::input_panel::lines_for(&wordnet, word) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Some(Commands::Word) => {
            let word = lexicon::vocabulary::pick();
            println!("Word of the Day: {}", word);
            println!("{}", core::word_panel::line_for(&wordnet, word));
            Ok(())
        }
        None => run_tui(config, wordnet),
    }
}

fn run_tui(config: Config, wordnet: WordNet) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);
    let mut app_core = core::AppCore::new(config, Box::new(wordnet));

    let mut frontend = TuiFrontend::new(poll_timeout)?;
    let (width, height) = frontend.size();
    tracing::debug!("Terminal size {}x{}", width, height);

    let result = event_loop(&mut frontend, &mut app_core);
    frontend.cleanup()?;
    tracing::info!("Dumile exited");
    result
}

fn event_loop(frontend: &mut impl Frontend, app_core: &mut core::AppCore) -> Result<()> {
    while app_core.is_running() {
        frontend.render(app_core)?;
        for event in frontend.poll_events()? {
            dispatch(app_core, event);
        }
    }
    Ok(())
}

fn dispatch(app_core: &mut core::AppCore, event: FrontendEvent) {
    match event {
        FrontendEvent::Key { code, modifiers } => app_core.handle_key(code, modifiers),
        FrontendEvent::Mouse { kind, x, y } => app_core.handle_mouse(kind, x, y),
        FrontendEvent::Paste { text } => app_core.paste(&text),
        // Next render lays the window out against the new size
        FrontendEvent::Resize { width, height } => {
            tracing::debug!("Terminal resized to {}x{}", width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::test_support::StubThesaurus;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["dumile", "--wordnet-dir", "/tmp/wn", "lookup", "happy"])
            .unwrap();
        assert_eq!(cli.wordnet_dir, Some(PathBuf::from("/tmp/wn")));
        assert!(matches!(cli.command, Some(Commands::Lookup { ref word }) if word == "happy"));

        let cli = Cli::try_parse_from(["dumile"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_dispatch_routes_events() {
        let thesaurus = StubThesaurus::new().with("happy", &["happy", "glad"]);
        let mut app_core = core::AppCore::new(Config::default(), Box::new(thesaurus));

        dispatch(&mut app_core, FrontendEvent::Paste { text: "happy".to_string() });
        dispatch(
            &mut app_core,
            FrontendEvent::Key {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app_core.input_panel.results.lines(), ["glad"]);

        dispatch(
            &mut app_core,
            FrontendEvent::Key {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(!app_core.is_running());
    }
}
