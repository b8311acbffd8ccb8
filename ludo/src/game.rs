//! The turn state machine: dice outcomes, piece selection, capture
//! resolution, and win detection.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::board::{self, Cell};
use crate::dice::{self, DIE_SIDES};
use crate::moves;
use crate::protocol::{PhaseTag, Snapshot, TokenView};
use crate::token::{base_slots, Token, TOKENS_PER_PLAYER};
use crate::Player;

/// How long a non-six roll stays on display before the turn resolves.
pub const ROLL_DISPLAY: Duration = Duration::from_secs(2);

/// Which input the state machine is waiting for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// A non-six roll is on display; [`Game::tick`] resolves it once
    /// [`ROLL_DISPLAY`] has elapsed since `since`.
    RollShown { since: Instant },
    /// Waiting for the current player to pick a token to move.
    AwaitingPiece,
}

impl Phase {
    pub fn tag(self) -> PhaseTag {
        match self {
            Phase::AwaitingRoll => PhaseTag::AwaitingRoll,
            Phase::RollShown { .. } => PhaseTag::RollShown,
            Phase::AwaitingPiece => PhaseTag::AwaitingPiece,
        }
    }
}

/// Summarizes the outcome of a piece selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The input was ignored: wrong phase, index out of range, or the
    /// token cannot move with the current roll.
    Ignored,
    /// The token moved and `captured` opposing tokens were sent home.
    Moved { captured: usize },
    /// The move brought the player's fourth token home; the game is over.
    Won { player: Player },
}

/// A full game: the token table plus turn state.
///
/// All state lives in this one value; drivers poll it and feed it the
/// two inputs (roll request, piece selection) plus the current time.
#[derive(Clone, Debug)]
pub struct Game {
    tokens: [[Token; TOKENS_PER_PLAYER]; 4],
    current_player: Player,
    consecutive_sixes: u8,
    dice_value: u8,
    phase: Phase,
    message: String,
    winner: Option<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            tokens: std::array::from_fn(|p| {
                base_slots(Player::ALL[p]).map(Token::new)
            }),
            current_player: Player::Red,
            consecutive_sixes: 0,
            dice_value: 1,
            phase: Phase::AwaitingRoll,
            message: String::new(),
            winner: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Meaningful only outside [`Phase::AwaitingRoll`].
    pub fn dice_value(&self) -> u8 {
        self.dice_value
    }

    pub fn consecutive_sixes(&self) -> u8 {
        self.consecutive_sixes
    }

    /// `Some` the instant a player brings its fourth token home. Once
    /// set, all further inputs are ignored.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The transient human-readable status line.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tokens(&self, player: Player) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens[player.index()]
    }

    /// The observable state as one serializable value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_player: self.current_player,
            phase: self.phase.tag(),
            dice_value: self.dice_value,
            consecutive_sixes: self.consecutive_sixes,
            tokens: std::array::from_fn(|p| {
                std::array::from_fn(|i| {
                    let token = &self.tokens[p][i];
                    TokenView {
                        cell: token.cell,
                        in_play: token.in_play,
                        home: token.home,
                        selected: token.selected,
                    }
                })
            }),
            message: self.message.clone(),
            winner: self.winner,
        }
    }

    /// Roll the die with the provided randomness source.
    ///
    /// Returns false (and does nothing) unless the machine is awaiting a
    /// roll and the game is still running.
    pub fn request_roll<R: Rng>(&mut self, rng: &mut R, now: Instant) -> bool {
        if self.winner.is_some() || !matches!(self.phase, Phase::AwaitingRoll) {
            return false;
        }
        self.apply_roll(dice::roll_die(rng), now)
    }

    /// Apply a die value directly. This is the roll-injection seam that
    /// scripted simulation and tests use in place of [`Game::request_roll`].
    ///
    /// Panics if `value` is not a die face.
    pub fn apply_roll(&mut self, value: u8, now: Instant) -> bool {
        assert!(
            (1..=DIE_SIDES).contains(&value),
            "die value out of range: {}",
            value
        );
        if self.winner.is_some() || !matches!(self.phase, Phase::AwaitingRoll) {
            return false;
        }
        self.dice_value = value;
        if value == 6 {
            self.consecutive_sixes += 1;
            if self.consecutive_sixes == 3 {
                self.message = String::from("Three sixes in a row! Turn forfeited!");
                self.advance_turn();
            } else if !self.current_player_can_move() {
                // Every remaining token would overshoot and none is in
                // base; treated like any other dead roll.
                self.message = String::from("No valid moves available!");
                self.advance_turn();
            } else {
                self.message = String::from("Rolled a 6! You get another turn after moving.");
                self.phase = Phase::AwaitingPiece;
            }
        } else {
            self.consecutive_sixes = 0;
            self.phase = Phase::RollShown { since: now };
        }
        true
    }

    /// Resolve the timed [`Phase::RollShown`] display. Drivers call this
    /// every frame with the current time; it never blocks.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::RollShown { since } = self.phase {
            if now.duration_since(since) >= ROLL_DISPLAY {
                if self.current_player_can_move() {
                    self.phase = Phase::AwaitingPiece;
                } else {
                    self.message = String::from("No valid moves available!");
                    self.advance_turn();
                }
            }
        }
    }

    /// Move the current player's token `index` by the rolled value.
    ///
    /// Selecting an unmovable token, an out-of-range index, or selecting
    /// outside [`Phase::AwaitingPiece`] is a no-op, not a fault.
    pub fn select_token(&mut self, index: usize) -> SelectOutcome {
        if self.winner.is_some() || !matches!(self.phase, Phase::AwaitingPiece) {
            return SelectOutcome::Ignored;
        }
        if index >= TOKENS_PER_PLAYER {
            return SelectOutcome::Ignored;
        }
        let player = self.current_player;
        let steps = self.dice_value;
        if !moves::can_move(player, &self.tokens[player.index()][index], steps) {
            return SelectOutcome::Ignored;
        }

        for token in &mut self.tokens[player.index()] {
            token.selected = false;
        }
        let token = &mut self.tokens[player.index()][index];
        token.selected = true;
        let landing = moves::perform_move(player, token, steps);
        let captured = self.resolve_captures(player, landing);

        if self.tokens[player.index()].iter().all(|t| t.home) {
            self.message = format!("{} wins!", player);
            self.winner = Some(player);
            return SelectOutcome::Won { player };
        }
        if steps == 6 {
            // Extra turn; the six counter keeps running until a non-six
            // roll or a turn change resets it.
            self.phase = Phase::AwaitingRoll;
        } else {
            self.advance_turn();
        }
        SelectOutcome::Moved { captured }
    }

    fn advance_turn(&mut self) {
        self.current_player = self.current_player.next();
        self.consecutive_sixes = 0;
        self.phase = Phase::AwaitingRoll;
        for tokens in &mut self.tokens {
            for token in tokens {
                token.selected = false;
            }
        }
    }

    fn current_player_can_move(&self) -> bool {
        let player = self.current_player;
        self.tokens[player.index()]
            .iter()
            .any(|token| moves::can_move(player, token, self.dice_value))
    }

    /// Send every opposing token resting on `cell` back to its base.
    /// Safe squares never capture; same-player stacking is untouched.
    fn resolve_captures(&mut self, mover: Player, cell: Cell) -> usize {
        if board::is_safe_square(cell) {
            return 0;
        }
        let mut captured = 0;
        for player in Player::ALL {
            if player == mover {
                continue;
            }
            for token in &mut self.tokens[player.index()] {
                if token.cell == cell && token.capturable() {
                    token.reset();
                    captured += 1;
                }
            }
        }
        captured
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
