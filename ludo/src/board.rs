use serde::{Deserialize, Serialize};

use crate::Player;

/// A square on the board grid. `(0, 0)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

/// The board is a `BOARD_CELLS` x `BOARD_CELLS` grid.
pub const BOARD_CELLS: i8 = 15;

/// Number of track cells each player traverses before turning off into
/// its home stretch. One cell short of the full [`TRACK`] loop.
pub const MAIN_PATH_LEN: usize = 51;

/// Length of the private home stretch. A single terminal cell: the
/// traditional six-cell colored run is collapsed into one step, and the
/// terminal cell coincides with the player's own entry square.
pub const HOME_STRETCH_LEN: usize = 1;

/// The shared track, clockwise, starting at Red's entry square.
///
/// Every player sees the same loop rotated by its [`ENTRY_OFFSETS`] entry,
/// so the four per-player paths need not be spelled out separately.
pub static TRACK: [Cell; 52] = [
    // west arm, outbound
    Cell { x: 1, y: 6 },
    Cell { x: 2, y: 6 },
    Cell { x: 3, y: 6 },
    Cell { x: 4, y: 6 },
    Cell { x: 5, y: 6 },
    // up the north arm
    Cell { x: 6, y: 5 },
    Cell { x: 6, y: 4 },
    Cell { x: 6, y: 3 },
    Cell { x: 6, y: 2 },
    Cell { x: 6, y: 1 },
    Cell { x: 6, y: 0 },
    Cell { x: 7, y: 0 },
    Cell { x: 8, y: 0 },
    // down past Green's entry
    Cell { x: 8, y: 1 },
    Cell { x: 8, y: 2 },
    Cell { x: 8, y: 3 },
    Cell { x: 8, y: 4 },
    Cell { x: 8, y: 5 },
    // east arm, outbound
    Cell { x: 9, y: 6 },
    Cell { x: 10, y: 6 },
    Cell { x: 11, y: 6 },
    Cell { x: 12, y: 6 },
    Cell { x: 13, y: 6 },
    Cell { x: 14, y: 6 },
    Cell { x: 14, y: 7 },
    Cell { x: 14, y: 8 },
    // back past Blue's entry
    Cell { x: 13, y: 8 },
    Cell { x: 12, y: 8 },
    Cell { x: 11, y: 8 },
    Cell { x: 10, y: 8 },
    Cell { x: 9, y: 8 },
    // down the south arm
    Cell { x: 8, y: 9 },
    Cell { x: 8, y: 10 },
    Cell { x: 8, y: 11 },
    Cell { x: 8, y: 12 },
    Cell { x: 8, y: 13 },
    Cell { x: 8, y: 14 },
    Cell { x: 7, y: 14 },
    Cell { x: 6, y: 14 },
    // up past Yellow's entry
    Cell { x: 6, y: 13 },
    Cell { x: 6, y: 12 },
    Cell { x: 6, y: 11 },
    Cell { x: 6, y: 10 },
    Cell { x: 6, y: 9 },
    // west arm, inbound
    Cell { x: 5, y: 8 },
    Cell { x: 4, y: 8 },
    Cell { x: 3, y: 8 },
    Cell { x: 2, y: 8 },
    Cell { x: 1, y: 8 },
    Cell { x: 0, y: 8 },
    Cell { x: 0, y: 7 },
    Cell { x: 0, y: 6 },
];

/// Where each player's entry square sits on [`TRACK`].
pub const ENTRY_OFFSETS: [usize; 4] = [0, 13, 26, 39];

/// The square where a player's tokens enter the track.
pub fn entry_cell(player: Player) -> Cell {
    TRACK[ENTRY_OFFSETS[player.index()]]
}

/// The `index`-th cell of `player`'s view of the track.
///
/// Panics if `index` is not below [`MAIN_PATH_LEN`].
pub fn path_cell(player: Player, index: usize) -> Cell {
    assert!(index < MAIN_PATH_LEN, "path index {} out of range", index);
    TRACK[(ENTRY_OFFSETS[player.index()] + index) % TRACK.len()]
}

/// The `index`-th cell of `player`'s private home stretch.
///
/// Panics if `index` is not below [`HOME_STRETCH_LEN`].
pub fn home_stretch_cell(player: Player, index: usize) -> Cell {
    assert!(index < HOME_STRETCH_LEN, "home stretch index {} out of range", index);
    entry_cell(player)
}

/// The terminal cell a token must land on exactly to come home.
pub fn home_cell(player: Player) -> Cell {
    home_stretch_cell(player, HOME_STRETCH_LEN - 1)
}

/// Tokens resting on a safe square cannot be captured. The safe squares
/// are the four entry squares.
pub fn is_safe_square(cell: Cell) -> bool {
    Player::ALL.iter().any(|&p| entry_cell(p) == cell)
}

/// Find where `cell` lies on `player`'s path.
///
/// This scan is unambiguous because each player's 51-cell path visits
/// every cell at most once.
pub fn path_index_of(player: Player, cell: Cell) -> Option<usize> {
    (0..MAIN_PATH_LEN).find(|&i| path_cell(player, i) == cell)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PathIndex;

    #[test]
    fn track_cells_are_distinct() {
        let distinct: BTreeSet<Cell> = TRACK.iter().copied().collect();
        assert_eq!(distinct.len(), TRACK.len());
    }

    #[test]
    fn track_cells_are_on_the_board() {
        for cell in TRACK {
            assert!((0..BOARD_CELLS).contains(&cell.x), "{:?}", cell);
            assert!((0..BOARD_CELLS).contains(&cell.y), "{:?}", cell);
        }
    }

    #[test]
    fn track_is_connected() {
        // Consecutive cells are orthogonal neighbors, except where the
        // track cuts a corner of the center cross diagonally.
        for i in 0..TRACK.len() {
            let a = TRACK[i];
            let b = TRACK[(i + 1) % TRACK.len()];
            let dist = (a.x - b.x).abs() + (a.y - b.y).abs();
            assert!(dist >= 1 && dist <= 2, "gap between {:?} and {:?}", a, b);
        }
    }

    #[test]
    fn entries_are_evenly_spaced() {
        for (i, offset) in ENTRY_OFFSETS.iter().enumerate() {
            assert_eq!(*offset, i * TRACK.len() / 4);
        }
        assert_eq!(entry_cell(Player::Red), Cell { x: 1, y: 6 });
        assert_eq!(entry_cell(Player::Green), Cell { x: 8, y: 1 });
        assert_eq!(entry_cell(Player::Blue), Cell { x: 13, y: 8 });
        assert_eq!(entry_cell(Player::Yellow), Cell { x: 6, y: 13 });
    }

    #[test]
    fn every_path_starts_at_its_entry() {
        for player in Player::ALL {
            assert_eq!(path_cell(player, 0), entry_cell(player));
        }
    }

    #[test]
    fn every_path_contains_all_safe_squares() {
        for player in Player::ALL {
            for other in Player::ALL {
                assert!(path_index_of(player, entry_cell(other)).is_some());
            }
        }
    }

    #[test]
    fn home_cell_is_the_own_entry_square() {
        // The collapsed home stretch lands back on the entry square,
        // which is also safe, so parked tokens cannot be captured.
        for player in Player::ALL {
            assert_eq!(home_cell(player), entry_cell(player));
            assert!(is_safe_square(home_cell(player)));
        }
    }

    quickcheck! {
        // The four paths are rotations of one shared cycle: wherever two
        // players both see a cell, they see the same absolute track
        // position, and the only cell missing from a player's view is
        // the one just before its home turnoff.
        fn paths_agree_on_shared_cells(player: Player, other: Player, index: PathIndex) -> bool {
            let cell = path_cell(player, index.0);
            let track_pos = (ENTRY_OFFSETS[player.index()] + index.0) % TRACK.len();
            match path_index_of(other, cell) {
                Some(i) => track_pos == (ENTRY_OFFSETS[other.index()] + i) % TRACK.len(),
                None => {
                    track_pos == (ENTRY_OFFSETS[other.index()] + TRACK.len() - 1) % TRACK.len()
                }
            }
        }

        // Scan-based position lookup inverts path_cell, which also
        // proves each path is injective.
        fn position_lookup_roundtrips(player: Player, index: PathIndex) -> bool {
            path_index_of(player, path_cell(player, index.0)) == Some(index.0)
        }
    }
}
