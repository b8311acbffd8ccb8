use std::time::Instant;

use ludo::{
    can_move, roll_die, visualize, Game, Input, Phase, Player, RollScript, SelectOutcome,
    ROLL_DISPLAY, TOKENS_PER_PLAYER,
};
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::recording::Recorder;

/// Where die values come from.
pub enum DiceSource {
    Rng(StdRng),
    Script(RollScript),
}

impl DiceSource {
    fn next_roll(&mut self) -> u8 {
        match self {
            DiceSource::Rng(rng) => roll_die(rng),
            DiceSource::Script(script) => script.next_roll(),
        }
    }
}

pub enum GameResult {
    Won {
        winner: Player,
        rolls: u32,
        captures: u32,
    },
    /// The roll budget ran out, e.g. a scripted die without a 6 never
    /// enters a token.
    Unfinished,
}

/// Play one game to completion with a first-movable-token policy.
///
/// The roll display delay is skipped by advancing a synthetic clock, so
/// scripted runs finish instantly.
pub fn play_game(
    dice: &mut DiceSource,
    max_rolls: u32,
    show_board: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let mut game = Game::new();
    let mut now = Instant::now();
    let mut rolls = 0u32;
    let mut captures = 0u32;

    let outcome = loop {
        if let Some(winner) = game.winner() {
            break GameResult::Won {
                winner,
                rolls,
                captures,
            };
        }
        match game.phase() {
            Phase::AwaitingRoll => {
                if rolls == max_rolls {
                    break GameResult::Unfinished;
                }
                let player = game.current_player();
                let value = dice.next_roll();
                game.apply_roll(value, now);
                rolls += 1;
                trace!(player = %player, value, "roll");
                record(recorder, Input::RequestRoll, &game);
            }
            Phase::RollShown { .. } => {
                now += ROLL_DISPLAY;
                game.tick(now);
            }
            Phase::AwaitingPiece => {
                let player = game.current_player();
                let index = (0..TOKENS_PER_PLAYER)
                    .find(|&i| can_move(player, &game.tokens(player)[i], game.dice_value()))
                    .expect("awaiting a piece with no movable token");
                match game.select_token(index) {
                    SelectOutcome::Moved { captured } => {
                        captures += captured as u32;
                        if captured > 0 {
                            debug!(player = %player, captured, "capture");
                        }
                    }
                    SelectOutcome::Won { .. } => {}
                    SelectOutcome::Ignored => unreachable!("policy picked an unmovable token"),
                }
                record(recorder, Input::SelectToken { index }, &game);
                if show_board {
                    eprintln!("{}", visualize(&game));
                }
            }
        }
    };

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }
    Ok(outcome)
}

fn record(recorder: &mut Option<Recorder>, input: Input, game: &Game) {
    if let Some(rec) = recorder {
        rec.store_step(input, game.snapshot());
    }
}
