use crate::board::MAIN_PATH_LEN;
use crate::dice::DIE_SIDES;
use crate::Player;

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Player::ALL).unwrap()
    }
}

/// An index into a player's 51-cell main path.
#[derive(Copy, Clone, Debug)]
pub struct PathIndex(pub usize);

impl quickcheck::Arbitrary for PathIndex {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        PathIndex(usize::arbitrary(g) % MAIN_PATH_LEN)
    }
}

/// A die face, 1..=6.
#[derive(Copy, Clone, Debug)]
pub struct DieValue(pub u8);

impl quickcheck::Arbitrary for DieValue {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        DieValue(u8::arbitrary(g) % DIE_SIDES + 1)
    }
}
