//! CLI interface for Airdate.
//!
//! `airdate` with no subcommand opens the day's game in the terminal.
//! The other commands are non-interactive:
//!
//! - `airdate status`: where today's game stands, one line per ring.
//! - `airdate reset`: clear saved progress.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::model::{DailyGame, GameState, RingKind};
use crate::puzzle;
use crate::storage::Storage;
use crate::store::Store;
use crate::tui;

/// Airdate: guess the broadcast date of the day's headlines.
#[derive(Debug, Parser)]
#[command(name = "airdate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the day's game in the terminal (the default).
    Play {
        /// Load a specific puzzle file instead of today's.
        #[arg(long)]
        puzzle: Option<PathBuf>,

        /// Discard any saved progress and start over.
        #[arg(long)]
        fresh: bool,
    },

    /// Show where today's game stands.
    Status,

    /// Clear saved progress.
    Reset,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Play {
        puzzle: None,
        fresh: false,
    });

    match command {
        Command::Play { puzzle, fresh } => cmd_play(config, puzzle.as_deref(), fresh),
        Command::Status => cmd_status(config),
        Command::Reset => cmd_reset(config),
    }
}

fn cmd_play(config: &Config, puzzle_path: Option<&Path>, fresh: bool) -> Result<(), String> {
    let storage = open_storage(config)?;
    let game = load_puzzle(config, puzzle_path)?;

    if fresh {
        storage
            .clear()
            .map_err(|e| format!("failed to clear save: {e}"))?;
    }

    let state = storage
        .load_for_day(&game.id)
        .map_err(|e| format!("failed to load save: {e}"))?
        .unwrap_or_else(|| GameState::new(&game));

    let mut store = Store::new(state);
    tui::run(&mut store, &storage, &game).map_err(|e| format!("terminal error: {e}"))?;

    storage
        .save(store.state())
        .map_err(|e| format!("failed to save game: {e}"))?;

    Ok(())
}

fn cmd_status(config: &Config) -> Result<(), String> {
    let storage = open_storage(config)?;
    let id = puzzle::today_id();

    let Some(state) = storage
        .load_for_day(&id)
        .map_err(|e| format!("failed to load save: {e}"))?
    else {
        println!("No game for {id} yet — run `airdate` to play");
        return Ok(());
    };

    println!(
        "{id}  [{}]  headlines {}/3",
        state.game_status.label(),
        state.headlines_heard
    );
    for ring in RingKind::ALL {
        let rs = state.ring_states.get(ring);
        let marker = if rs.is_locked { rs.color.label() } else { "open" };
        println!(
            "  {:<6}  {:<5}  [{marker}]  {} wrong",
            ring.label(),
            rs.selected_value,
            rs.incorrect_guesses.len()
        );
    }

    Ok(())
}

fn cmd_reset(config: &Config) -> Result<(), String> {
    let storage = open_storage(config)?;
    storage
        .clear()
        .map_err(|e| format!("failed to clear save: {e}"))?;
    eprintln!("Cleared saved progress");
    Ok(())
}

fn open_storage(config: &Config) -> Result<Storage, String> {
    let root = config
        .data_dir
        .clone()
        .or_else(Storage::default_root)
        .ok_or("could not determine home directory")?;
    Storage::new(root).map_err(|e| format!("failed to initialize storage: {e}"))
}

fn load_puzzle(config: &Config, explicit: Option<&Path>) -> Result<DailyGame, String> {
    if let Some(path) = explicit {
        return puzzle::load_from(path)
            .map_err(|e| format!("failed to load puzzle {}: {e}", path.display()));
    }

    let id = puzzle::today_id();
    let Some(dir) = config.puzzles_dir.clone().or_else(puzzle::default_dir) else {
        return Ok(puzzle::sample(&id));
    };

    match puzzle::for_day(&dir, &id) {
        Ok(Some(game)) => Ok(game),
        // No file for today: fall back to the built-in sample.
        Ok(None) => Ok(puzzle::sample(&id)),
        Err(e) => Err(format!("failed to load puzzle for {id}: {e}")),
    }
}
