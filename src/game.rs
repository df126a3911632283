use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::board::{Board, Cell, Side};
use connect4_engine::rules::{allowed_columns, drop_piece, is_winner};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// The live game owned by the terminal front end: the board plus the
/// turn-order bookkeeping the engine itself does not track
pub struct Game {
    board: Board,
    pub side_to_move: Side,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Side::PlayerOne,
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > self.board.width() {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                self.board.width()
            ));
        }
        let column = column_one_indexed - 1;
        let side = self.side_to_move;
        if drop_piece(&mut self.board, column, side).is_none() {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        // the win check runs before the draw check so a winning move that
        // fills the board still counts as a win
        if is_winner(&self.board, side) {
            self.state = match side {
                Side::PlayerOne => GameState::PlayerOneWin,
                Side::PlayerTwo => GameState::PlayerTwoWin,
            };
        } else if allowed_columns(&self.board).is_empty() {
            self.state = GameState::Draw;
        } else {
            self.state = GameState::Playing;
        }
        self.side_to_move = side.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.board.width()).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..self.board.height() {
            for column in 0..self.board.width() {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.get(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
