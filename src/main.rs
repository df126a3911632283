use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_engine::board::Side;
use connect4_engine::search::Searcher;
use connect4_engine::SEARCH_DEPTH;

mod game;
use game::*;

fn main() -> Result<()> {
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut searchers = (
        Searcher::new(Side::PlayerOne, SEARCH_DEPTH),
        Searcher::new(Side::PlayerTwo, SEARCH_DEPTH),
    );

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let ai_turn = match game.side_to_move {
                    Side::PlayerOne => ai_players.0,
                    Side::PlayerTwo => ai_players.1,
                };

                let next_move =
                    // AI player
                    if ai_turn {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let searcher = match game.side_to_move {
                            Side::PlayerOne => &mut searchers.0,
                            Side::PlayerTwo => &mut searchers.1,
                        };
                        // the board is not terminal in this state, so the
                        // search always recommends a column
                        let best_move = searcher
                            .choose_column(game.board())
                            .expect("search called on a terminal board");

                        println!("Best move: {}", best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
