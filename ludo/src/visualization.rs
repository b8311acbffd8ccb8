use crate::board::{self, BOARD_CELLS};
use crate::game::Game;
use crate::Player;

/// Render the board as a text grid.
///
/// Track cells are dots, safe squares asterisks, tokens the first letter
/// of their owner's name (lowercase while still in base).
pub fn visualize(game: &Game) -> String {
    let size = BOARD_CELLS as usize;
    let mut grid = vec![vec![' '; size]; size];
    for cell in board::TRACK {
        grid[cell.y as usize][cell.x as usize] = '.';
    }
    for player in Player::ALL {
        let entry = board::entry_cell(player);
        grid[entry.y as usize][entry.x as usize] = '*';
    }
    for player in Player::ALL {
        let letter = player.name().as_bytes()[0] as char;
        for token in game.tokens(player) {
            let shown = if token.in_play {
                letter
            } else {
                letter.to_ascii_lowercase()
            };
            grid[token.cell.y as usize][token.cell.x as usize] = shown;
        }
    }

    let mut result = String::from("╭");
    for _ in 0..size {
        result += "──";
    }
    result += "╮\n";
    for row in grid {
        result.push('│');
        for ch in row {
            result.push(ch);
            result.push(' ');
        }
        result += "│\n";
    }
    result.push('╰');
    for _ in 0..size {
        result += "──";
    }
    result += "╯";
    result
}
