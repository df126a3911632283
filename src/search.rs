//! An opponent that picks its column with a fixed-depth minimax search
//!
//! The tree is tiny (at most `width^depth` nodes, 343 for the canonical board
//! at the default horizon) so the search is plain minimax with no pruning.
//! Each explored node owns an independent clone of its parent's board.

use crate::board::{Board, Side};
use crate::evaluate::score_board;
use crate::rules::{allowed_columns, drop_piece, is_terminal, is_winner};

/// The outcome of a (sub)tree search
///
/// `column` is `None` only at a terminal or depth-exhausted node, where no
/// move is recommended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub column: Option<usize>,
}

/// A heuristic minimax opponent playing one fixed side
///
/// # Notes
/// Before a node's columns are scanned, a uniformly random legal column is
/// pre-selected as the default choice and only displaced by a strictly better
/// score. Columns tying with the default therefore lose to it; this random
/// tie-break is intended behavior, and the random source is owned by the
/// searcher so tests can seed it.
pub struct Searcher {
    side: Side,
    depth: usize,
    rng: fastrand::Rng,
}

impl Searcher {
    /// Creates a searcher playing `side`, looking `depth` plies ahead
    pub fn new(side: Side, depth: usize) -> Self {
        Self {
            side,
            depth,
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a searcher with a seeded random source, for reproducible
    /// tie-breaks
    pub fn with_seed(side: Side, depth: usize, seed: u64) -> Self {
        Self {
            side,
            depth,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Picks a column for the searcher's side on `board`
    ///
    /// Returns `None` only if the board is already terminal; callers are
    /// expected to check [`is_terminal`] first.
    pub fn choose_column(&mut self, board: &Board) -> Option<usize> {
        self.minimax(board, self.depth, true).column
    }

    /// Recursive two-player minimax over the legal-move tree
    ///
    /// Leaves are always scored from the searcher's own side, regardless of
    /// whose turn produced them: a win for the searcher is `+inf`, a win for
    /// the opponent `-inf`, a drawn full board 0, and a non-terminal board at
    /// depth 0 gets the static evaluation.
    pub fn minimax(&mut self, board: &Board, depth: usize, maximizing: bool) -> SearchResult {
        let allowed = allowed_columns(board);
        let terminal = is_terminal(board);
        if depth == 0 || terminal {
            let score = if terminal {
                if is_winner(board, self.side) {
                    f64::INFINITY
                } else if is_winner(board, self.side.opponent()) {
                    f64::NEG_INFINITY
                } else {
                    0.0
                }
            } else {
                score_board(board, self.side) as f64
            };
            return SearchResult {
                score,
                column: None,
            };
        }

        let (to_drop, mut best_score) = if maximizing {
            (self.side, f64::NEG_INFINITY)
        } else {
            (self.side.opponent(), f64::INFINITY)
        };

        // random legal default, displaced only by a strictly better column
        let mut best_column = allowed[self.rng.usize(..allowed.len())];
        for &column in &allowed {
            let mut next = board.clone();
            drop_piece(&mut next, column, to_drop);
            let score = self.minimax(&next, depth - 1, !maximizing).score;
            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best_column = column;
            }
        }

        SearchResult {
            score: best_score,
            column: Some(best_column),
        }
    }
}
