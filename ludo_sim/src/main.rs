use std::path::PathBuf;

use clap::Parser;
use ludo::{Player, RollScript};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod recording;
mod runner;

use recording::Recorder;
use runner::{play_game, DiceSource, GameResult};

/// Plays automated Ludo games against the engine, for diagnostics and
/// reproducible rules testing.
#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 10)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play this comma-separated die sequence (repeating) instead of
    /// random rolls, e.g. "6,3,1"
    #[arg(long)]
    rolls: Option<RollScript>,

    /// Abort a game after this many rolls without a winner
    #[arg(long, default_value_t = 100_000)]
    max_rolls: u32,

    /// Print the board after every move
    #[arg(long, default_value_t = false)]
    show_board: bool,

    /// Record each game's inputs and states as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut dice = match args.rolls {
        Some(script) => DiceSource::Script(script),
        None => DiceSource::Rng(StdRng::seed_from_u64(seed)),
    };

    let mut wins = [0usize; 4];
    let mut unfinished = 0usize;
    for game_idx in 0..args.num_games {
        match play_game(&mut dice, args.max_rolls, args.show_board, &mut recorder)? {
            GameResult::Won {
                winner,
                rolls,
                captures,
            } => {
                info!(winner = winner.name(), rolls, captures, game_idx);
                wins[winner.index()] += 1;
            }
            GameResult::Unfinished => {
                info!(game_idx, "No winner within the roll budget");
                unfinished += 1;
            }
        }
    }

    eprintln!("End result:");
    for player in Player::ALL {
        eprintln!("- {} wins by {}", wins[player.index()], player);
    }
    if unfinished > 0 {
        eprintln!("- {} games without a winner", unfinished);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
