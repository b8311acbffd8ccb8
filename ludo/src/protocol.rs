use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::token::TOKENS_PER_PLAYER;
use crate::Player;

/// An input from a frontend or driver.
///
/// Both inputs are ignored outside the phase they are valid in; the
/// engine never faults on ill-timed input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Input {
    /// Roll the die. Valid while awaiting a roll.
    RequestRoll,
    /// Move the current player's token `index` by the rolled value.
    /// Valid while awaiting a piece.
    SelectToken { index: usize },
}

/// Which input the state machine is waiting for, without internal
/// timing data. Exactly one tag is active at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseTag {
    AwaitingRoll,
    RollShown,
    AwaitingPiece,
}

/// One token as a frontend sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub cell: Cell,
    pub in_play: bool,
    pub home: bool,
    pub selected: bool,
}

/// The full observable game state, queried by frontends each frame and
/// written into simulator recordings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current_player: Player,
    pub phase: PhaseTag,
    pub dice_value: u8,
    pub consecutive_sixes: u8,
    pub tokens: [[TokenView; TOKENS_PER_PLAYER]; 4],
    pub message: String,
    pub winner: Option<Player>,
}
