//! Connect 4 with pluggable decision policies
//!
//! Two marks compete on the classic 6x7 gravity board. Each seat is driven
//! by one of three policies: human input, uniform random play, or a
//! depth-limited minimax agent with alpha-beta pruning and a per-decision
//! transposition table.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::board::Mark;
//! use connect4_minimax::game::{Game, Status};
//! use connect4_minimax::player::Player;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new(Player::search(Mark::X, 4), Player::random(Mark::O));
//! let status = game.play_to_end(|_board| {})?;
//!
//! assert!(status != Status::InProgress);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod evaluate;

pub mod transposition_table;

pub mod search;

pub mod player;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure both per-mark bitboards fit in the packed position key
const_assert!(2 * WIDTH * HEIGHT <= 128);
