//! Static evaluation of non-terminal boards
//!
//! The search cannot see past its depth horizon, so leaf boards are scored by
//! a heuristic: completed and partial runs for the scored side gain points,
//! and a live three-in-a-row threat from the opponent loses them. The
//! evaluation is deliberately asymmetric — it scores *for* one side and only
//! penalizes the opponent's immediate threats, so it is not the negation of
//! the opponent's score.

use crate::board::{Board, Cell, Side};
use crate::rules::window;

/// Points for a completed four-in-a-row window
const FOUR_IN_WINDOW: i32 = 100;
/// Points for three own cells and one empty in a window
const THREE_IN_WINDOW: i32 = 10;
/// Points for two own cells and two empty in a window
const TWO_IN_WINDOW: i32 = 5;
/// Penalty for three opponent cells and one empty in a window
const OPPONENT_THREAT: i32 = 80;
/// Points per own piece in the center column
const CENTER_BONUS: i32 = 6;

/// Scores a single 4-cell window for `side`
///
/// The own-cell counts form an if/else-if chain, so at most one positive term
/// applies; the opponent-threat penalty is checked independently afterwards.
pub fn score_window(window: &[Cell; 4], side: Side) -> i32 {
    let own = Cell::from(side);
    let theirs = Cell::from(side.opponent());

    let own_cells = window.iter().filter(|&&c| c == own).count();
    let opponent_cells = window.iter().filter(|&&c| c == theirs).count();
    let empty_cells = window.iter().filter(|c| c.is_empty()).count();

    let mut score = 0;
    if own_cells == 4 {
        score += FOUR_IN_WINDOW;
    } else if own_cells == 3 && empty_cells == 1 {
        score += THREE_IN_WINDOW;
    } else if own_cells == 2 && empty_cells == 2 {
        score += TWO_IN_WINDOW;
    }

    if opponent_cells == 3 && empty_cells == 1 {
        score -= OPPONENT_THREAT;
    }

    score
}

/// Scores a whole board for `side`: the center-column bonus plus the sum of
/// every window's score over all four alignment directions
pub fn score_board(board: &Board, side: Side) -> i32 {
    let mut score = 0;

    // center column control
    let center = board.width() / 2;
    let center_count = (0..board.height())
        .filter(|&row| board.get(row, center) == Cell::from(side))
        .count();
    score += center_count as i32 * CENTER_BONUS;

    // horizontal
    for row in 0..board.height() {
        for column in 0..=board.width() - 4 {
            score += score_window(&window(board, row, column, 0, 1), side);
        }
    }

    // vertical
    for column in 0..board.width() {
        for row in 0..=board.height() - 4 {
            score += score_window(&window(board, row, column, 1, 0), side);
        }
    }

    for row in 0..=board.height() - 4 {
        // descending diagonal
        for column in 0..=board.width() - 4 {
            score += score_window(&window(board, row, column, 1, 1), side);
        }
        // ascending diagonal
        for column in 3..board.width() {
            score += score_window(&window(board, row, column, 1, -1), side);
        }
    }

    score
}
