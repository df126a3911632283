//! The board model: a plain grid of cells with query/update helpers
//!
//! Rule knowledge (gravity, win detection) lives in [`crate::rules`]; the
//! board itself performs no validation beyond bounds checks.

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A `height` x `width` grid of cells, row 0 at the top
///
/// `Clone` produces an independent deep copy; search branches clone the board
/// they explore and never alias the caller's grid.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
    height: usize,
    width: usize,
}

impl Board {
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0);
        Self {
            cells: vec![Cell::Empty; width * height],
            height,
            width,
        }
    }

    /// Creates an empty board with the canonical 6x7 dimensions
    pub fn standard() -> Self {
        Self::new(HEIGHT, WIDTH)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(row < self.height && column < self.width);
        self.cells[column + self.width * row]
    }

    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        assert!(row < self.height && column < self.width);
        self.cells[column + self.width * row] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
