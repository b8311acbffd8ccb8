use crate::board::Cell;
use crate::Player;

/// Tokens each player owns.
pub const TOKENS_PER_PLAYER: usize = 4;

/// A single playing piece.
#[derive(Clone, Debug)]
pub struct Token {
    /// The fixed resting slot inside the owner's base corner.
    pub base_slot: Cell,
    /// Current board cell. Equals `base_slot` while not in play.
    pub cell: Cell,
    /// Steps advanced along the owner's path. 0 both before entering and
    /// right after entering on the entry square.
    pub steps_taken: u8,
    /// The token has left its base.
    pub in_play: bool,
    /// The token reached the terminal home cell and can never move again.
    pub home: bool,
    /// Highlighted as the most recently moved token of its owner.
    pub selected: bool,
}

impl Token {
    pub fn new(base_slot: Cell) -> Self {
        Self {
            base_slot,
            cell: base_slot,
            steps_taken: 0,
            in_play: false,
            home: false,
            selected: false,
        }
    }

    /// Send the token back to its base slot, as after a capture.
    pub fn reset(&mut self) {
        self.cell = self.base_slot;
        self.steps_taken = 0;
        self.in_play = false;
        self.home = false;
        self.selected = false;
    }

    /// Whether an opposing token landing on this one sends it home.
    pub fn capturable(&self) -> bool {
        self.in_play && !self.home
    }
}

/// The four base slots of a player, a 2x2 grid inside its 6x6 base corner.
pub fn base_slots(player: Player) -> [Cell; TOKENS_PER_PLAYER] {
    let (bx, by) = match player {
        Player::Red => (1, 1),
        Player::Green => (10, 1),
        Player::Blue => (10, 10),
        Player::Yellow => (1, 10),
    };
    std::array::from_fn(|i| Cell {
        x: bx + (i as i8 % 2) * 3,
        y: by + (i as i8 / 2) * 3,
    })
}
