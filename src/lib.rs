//! A rules engine and heuristic computer opponent for the board game 'Connect 4'
//!
//! The engine detects wins, draws and legal moves on a gravity board, and the
//! opponent picks its column with a fixed-depth minimax search over a static
//! heuristic evaluation.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::{Board, Side}, rules, search::Searcher, SEARCH_DEPTH};
//!
//! let mut board = Board::standard();
//! let landing_row = rules::drop_piece(&mut board, 3, Side::PlayerOne);
//! assert_eq!(landing_row, Some(5));
//!
//! let mut searcher = Searcher::new(Side::PlayerTwo, SEARCH_DEPTH);
//! let reply = searcher.choose_column(&board);
//!
//! assert!(reply.is_some());
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod evaluate;

pub mod search;


/// The width of the canonical game board in tiles
pub const WIDTH: usize = 7;

/// The height of the canonical game board in tiles
pub const HEIGHT: usize = 6;

/// The fixed horizon of the minimax search, in plies
pub const SEARCH_DEPTH: usize = 3;

// a winning run needs room in every direction
const_assert!(WIDTH >= 4);
const_assert!(HEIGHT >= 4);
