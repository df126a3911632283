//! Move legality and win/terminal detection
//!
//! All functions here are pure queries apart from [`drop_piece`], which is the
//! single place a piece is ever added to a board. Column indices out of
//! `[0, width)` are caller bugs and fail the bounds assertions in the board.

use crate::board::{Board, Cell, Side};

/// Returns the row a piece dropped in `column` would settle in, or `None` if
/// the column is full
///
/// Row 0 is the top, so the landing row is the highest row index whose cell is
/// still empty.
pub fn lowest_empty_row(board: &Board, column: usize) -> Option<usize> {
    if !board.get(0, column).is_empty() {
        return None; // column is full
    }
    (0..board.height())
        .rev()
        .find(|&row| board.get(row, column).is_empty())
}

/// Returns the columns that can still accept a piece, in ascending order
///
/// An empty result means the board is full.
pub fn allowed_columns(board: &Board) -> Vec<usize> {
    (0..board.width())
        .filter(|&column| board.get(0, column).is_empty())
        .collect()
}

/// Drops a piece for `side` into `column`, returning its landing row
///
/// Leaves the board untouched and returns `None` if the column is full.
pub fn drop_piece(board: &mut Board, column: usize, side: Side) -> Option<usize> {
    let row = lowest_empty_row(board, column)?;
    board.set(row, column, side.into());
    Some(row)
}

/// Checks whether `side` has four in a row anywhere on the board
///
/// Every 4-cell window in each of the four alignment directions is scanned
/// exactly once.
pub fn is_winner(board: &Board, side: Side) -> bool {
    let piece = Cell::from(side);
    let full_run = |window: [Cell; 4]| window.iter().all(|&cell| cell == piece);

    // horizontal
    for row in 0..board.height() {
        for column in 0..=board.width() - 4 {
            if full_run(window(board, row, column, 0, 1)) {
                return true;
            }
        }
    }

    // vertical
    for column in 0..board.width() {
        for row in 0..=board.height() - 4 {
            if full_run(window(board, row, column, 1, 0)) {
                return true;
            }
        }
    }

    for row in 0..=board.height() - 4 {
        // descending diagonal
        for column in 0..=board.width() - 4 {
            if full_run(window(board, row, column, 1, 1)) {
                return true;
            }
        }
        // ascending diagonal
        for column in 3..board.width() {
            if full_run(window(board, row, column, 1, -1)) {
                return true;
            }
        }
    }

    false
}

/// Checks whether the game is over: a win for either side, or no legal moves
///
/// A board that is simultaneously full and won still reports the win; the win
/// checks run regardless of fullness.
pub fn is_terminal(board: &Board) -> bool {
    is_winner(board, Side::PlayerOne)
        || is_winner(board, Side::PlayerTwo)
        || allowed_columns(board).is_empty()
}

/// Collects the 4-cell window starting at `(row, column)` and stepping by
/// `(d_row, d_column)` per cell
pub(crate) fn window(
    board: &Board,
    row: usize,
    column: usize,
    d_row: i32,
    d_column: i32,
) -> [Cell; 4] {
    let mut cells = [Cell::Empty; 4];
    for (i, cell) in cells.iter_mut().enumerate() {
        let r = (row as i32 + i as i32 * d_row) as usize;
        let c = (column as i32 + i as i32 * d_column) as usize;
        *cell = board.get(r, c);
    }
    cells
}
