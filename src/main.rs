use anyhow::{Context, Result};
use clap::Parser;
use paint_territory::render::board_to_string;
use paint_territory::territory::{DeckRng, EmptyDeckPolicy, GameConfig, GameState};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser, Debug)]
#[command(name = "paint-territory")]
#[command(about = "Two-team territory painting simulation", long_about = None)]
struct Cli {
    /// Number of board rows
    #[arg(long)]
    height: Option<usize>,

    /// Number of board columns
    #[arg(long)]
    width: Option<usize>,

    /// Number of turns before the game ends
    #[arg(short, long)]
    max_turns: Option<u32>,

    /// Seed for the random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with game settings. Flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What happens when a team runs out of cards: "end-game" or "skip-turn"
    #[arg(long)]
    empty_deck: Option<EmptyDeckPolicy>,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,

    /// Don't print the final board
    #[arg(long)]
    quiet_board: bool,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,

    /// Write JSON logs to a daily rolling file in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    match &cli.log_dir {
        Some(dir) => {
            let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
            let file_appender = tracing_appender::rolling::daily(dir, "paint-territory.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let subscriber = tracing_subscriber::fmt()
                .json()
                .with_max_level(level)
                .with_writer(non_blocking)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install the file logger")?;
            Ok(Some(guard))
        }
        None => {
            let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install the logger")?;
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(height) = cli.height {
        config.board_height = height;
    }
    if let Some(width) = cli.width {
        config.board_width = width;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }
    if let Some(policy) = cli.empty_deck {
        config.empty_deck_policy = policy;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli)?;

    let config = load_config(&cli)?;
    let rng = match cli.seed {
        Some(seed) => DeckRng::seeded(seed),
        None => DeckRng::default(),
    };
    let mut game_state = GameState::new(config, rng).context("Failed to set up the game")?;
    info!("Starting game with {:?}", config);

    let report = game_state.run_game();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !cli.quiet_board {
            println!("{}\n", board_to_string(&report.board));
        }
        println!("{}", report);
    }
    Ok(())
}
