//! Movement rules for a single token.

use crate::board::{self, Cell, HOME_STRETCH_LEN, MAIN_PATH_LEN};
use crate::token::Token;
use crate::Player;

/// Whether `token`, owned by `player`, may advance by `steps`.
///
/// A token in its base may only leave on a 6. A token in play may not
/// overshoot the terminal home cell. A token already home never moves.
pub fn can_move(player: Player, token: &Token, steps: u8) -> bool {
    if token.home {
        return false;
    }
    if !token.in_play {
        return steps == 6;
    }
    current_index(player, token) + steps as usize <= MAIN_PATH_LEN + HOME_STRETCH_LEN - 1
}

/// Advance `token` by `steps` and return the landing cell, so the caller
/// can resolve captures there.
///
/// Callers must check [`can_move`] first. An illegal step count here is a
/// bug in the engine, not a recoverable game condition, and panics.
pub fn perform_move(player: Player, token: &mut Token, steps: u8) -> Cell {
    assert!(
        can_move(player, token, steps),
        "illegal move: {} token at {:?} by {} steps",
        player,
        token.cell,
        steps
    );
    if !token.in_play {
        // Entry: a 6 places the token on the player's entry square.
        token.cell = board::path_cell(player, 0);
        token.in_play = true;
        token.steps_taken = 0;
        return token.cell;
    }
    let new_index = current_index(player, token) + steps as usize;
    if new_index < MAIN_PATH_LEN {
        token.cell = board::path_cell(player, new_index);
    } else {
        let steps_into_home = new_index - MAIN_PATH_LEN;
        token.cell = board::home_stretch_cell(player, steps_into_home);
        if steps_into_home == HOME_STRETCH_LEN - 1 {
            token.home = true;
        }
    }
    token.steps_taken = new_index as u8;
    token.cell
}

fn current_index(player: Player, token: &Token) -> usize {
    // Can't fail: an in-play token is always somewhere on its own path.
    board::path_index_of(player, token.cell).expect("in-play token is off its own path")
}
