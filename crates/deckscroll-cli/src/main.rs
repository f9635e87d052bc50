//! deckscroll - scroll-driven slide decks in the terminal
//!
//! Opens a JSON deck as one long scrolling document with:
//! - A progress bar and active-section tracking
//! - A minimap of sections that jumps on click
//! - Carousels, card grids and steppers drawn with box characters

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deckscroll_core::constants::ui::LOG_FILE_NAME;
use deckscroll_core::{paths, DeckConfig, Document};

mod outline;
mod tui;

/// deckscroll - terminal slide deck viewer
#[derive(Parser)]
#[command(name = "deckscroll", version)]
#[command(about = "Scroll-driven slide deck viewer for the terminal", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck to open (same as `deckscroll view FILE`)
    file: Option<PathBuf>,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(clap::Args, Clone, Default)]
struct ViewArgs {
    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Section key to open on
    #[arg(short, long)]
    section: Option<String>,

    /// Start with the minimap closed
    #[arg(long)]
    no_minimap: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a deck in the viewer
    View {
        file: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Print a deck's sections and cards without opening the viewer
    Outline { file: PathBuf },

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file, never to the terminal the viewer draws on.
/// Logging is skipped when neither the log file nor the null device opens.
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
        .or_else(|_| std::fs::File::create(null_device))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load(file: &Path) -> Result<Document> {
    Document::load(file).with_context(|| format!("could not open deck {}", file.display()))
}

async fn view(file: PathBuf, args: ViewArgs) -> Result<()> {
    let document = load(&file)?;
    let config = DeckConfig::load();
    let options = tui::ViewOptions {
        theme: args.theme,
        section: args.section,
        hide_minimap: args.no_minimap,
    };

    let theme = options.theme.as_deref().unwrap_or(&config.theme);
    if !tui::THEME_REGISTRY.contains(theme) {
        eprintln!("Unknown theme '{}', using the default", theme);
    }

    let mut app = tui::App::new(document, Some(file), config, options);
    app.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::View { file, view: args }) => view(file, args).await,
        Some(Commands::Outline { file }) => {
            let document = load(&file)?;
            let icons = DeckConfig::load().icon_registry();
            print!("{}", outline::render_outline(&document, &icons));
            Ok(())
        }
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
            Ok(())
        }
        None => match cli.file {
            Some(file) => view(file, cli.view).await,
            None => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_shapes() {
        let cli = Cli::try_parse_from(["deckscroll", "deck.json", "--theme", "paper"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("deck.json")));
        assert_eq!(cli.view.theme.as_deref(), Some("paper"));

        let cli = Cli::try_parse_from(["deckscroll", "view", "deck.json", "--section", "intro", "--no-minimap"])
            .unwrap();
        match cli.command {
            Some(Commands::View { file, view }) => {
                assert_eq!(file, PathBuf::from("deck.json"));
                assert_eq!(view.section.as_deref(), Some("intro"));
                assert!(view.no_minimap);
            }
            _ => panic!("expected view"),
        }

        let cli = Cli::try_parse_from(["deckscroll", "outline", "deck.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Outline { .. })));
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
