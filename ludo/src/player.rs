use serde::{Deserialize, Serialize};

/// One of the four fixed player identities, in turn order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Player {
    /// All players, in turn order.
    pub const ALL: [Player; 4] = [Player::Red, Player::Green, Player::Blue, Player::Yellow];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The player whose turn follows this one.
    pub fn next(self) -> Player {
        Player::ALL[(self.index() + 1) % Player::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Green => "Green",
            Player::Blue => "Blue",
            Player::Yellow => "Yellow",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order_is_cyclic() {
        assert_eq!(Player::Red.next(), Player::Green);
        assert_eq!(Player::Green.next(), Player::Blue);
        assert_eq!(Player::Blue.next(), Player::Yellow);
        assert_eq!(Player::Yellow.next(), Player::Red);
    }
}
