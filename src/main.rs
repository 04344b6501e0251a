//! Grid Skirmish - Entry Point
//!
//! Plays the game in a terminal. Cells are numbered 0..63 row by row.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_skirmish::battle::GameController;
use grid_skirmish::core::error::Result;
use grid_skirmish::core::{load_config, Cell, GameConfig};
use grid_skirmish::persistence::JsonFileStore;
use grid_skirmish::presentation::TerminalPresenter;

/// Turn-based tactics on an 8x8 board
#[derive(Parser, Debug)]
#[command(name = "grid-skirmish")]
#[command(about = "Turn-based tactics on an 8x8 board")]
struct Args {
    /// Random seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where saved games are written
    #[arg(long)]
    save_path: Option<PathBuf>,
}

enum Command {
    Click(Cell),
    Hover(Cell),
    Save,
    Load,
    New,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    let mut words = input.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("quit" | "q", None) => Command::Quit,
        ("save", None) => Command::Save,
        ("load", None) => Command::Load,
        ("new", None) => Command::New,
        ("help" | "h", None) => Command::Help,
        ("hover", Some(cell)) => Command::Hover(cell.parse().ok()?),
        (cell, None) => Command::Click(cell.parse().ok()?),
        _ => return None,
    };
    Some(command)
}

fn print_help() {
    println!("Commands:");
    println!("  <cell>        - Select, move or attack (0..63)");
    println!("  hover <cell>  - Inspect a cell");
    println!("  save / load   - Save or restore the game");
    println!("  new           - Start a new game");
    println!("  quit / q      - Exit");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grid_skirmish=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(path) = args.save_path {
        config.save_path = path;
    }

    let presenter = TerminalPresenter::stdout(Duration::from_millis(config.damage_delay_ms));
    let store = JsonFileStore::new(config.save_path.clone());
    let mut game = GameController::new(presenter, store, config)?;

    println!("\n=== GRID SKIRMISH ===");
    print_help();
    game.init()?;

    let mut hovered: Option<Cell> = None;
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let Some(command) = parse_command(input) else {
            println!("Unknown command: {input}");
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Click(cell) => game.on_cell_click(cell).await,
            Command::Hover(cell) => {
                if let Some(previous) = hovered.replace(cell) {
                    game.on_cell_leave(previous);
                }
                game.on_cell_enter(cell);
                Ok(())
            }
            Command::Save => game.save_game(),
            Command::Load => game.load_game().await,
            Command::New => game.new_game(),
        };

        if let Err(e) = result {
            tracing::error!("{}", e);
        }
    }

    tracing::info!("Grid Skirmish exiting");
    Ok(())
}
