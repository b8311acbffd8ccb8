pub use board::*;
pub use dice::*;
pub use game::*;
pub use moves::*;
pub use player::*;
pub use protocol::*;
pub use token::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod dice;
mod game;
mod moves;
mod player;
mod protocol;
mod token;
mod visualization;
