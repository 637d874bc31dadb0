//! Tic-tac-toe against the Monte Carlo search.
//!
//! A minimal game loop over the crate's board and state types: the human
//! plays X, the engine plays O with a bounded MCTS.
//!
//! ```bash
//! cargo run --example tic_tac_toe
//! ```

use std::io::{self, Write};
use std::time::Duration;

use nrow_search::{Board, GameState, MonteCarloTreeSearch, SearchBudget, Strategy};

fn main() {
    env_logger::init();

    println!("nrow-search Tic-Tac-Toe");
    println!("=======================");
    println!("You are X. Enter a location from 0 to 8 (row-major).");
    println!();

    let mut state = GameState::new(Board::new(3), vec!['X', 'O']).expect("valid setup");

    while !state.is_terminal() {
        println!("{}", state.board());

        let location = if state.current_player() == &'X' {
            read_human_move(&state)
        } else {
            let budget = SearchBudget::default()
                .with_max_iterations(5_000)
                .with_max_time(Duration::from_millis(500));
            let mut search = MonteCarloTreeSearch::with_budget(state.clone(), budget)
                .expect("two players");
            let location = search.best_move().expect("non-terminal state");
            println!("Engine plays {}", location);
            location
        };

        state = state.after_player_moves(location).expect("validated move");
    }

    println!("{}", state.board());
    if state.board().has_chain(&'X') {
        println!("You win!");
    } else if state.board().has_chain(&'O') {
        println!("The engine wins.");
    } else {
        println!("Draw.");
    }
}

fn read_human_move(state: &GameState<char>) -> usize {
    loop {
        print!("Your move: ");
        io::stdout().flush().expect("flush stdout");

        let mut input = String::new();
        io::stdin().read_line(&mut input).expect("read stdin");

        match input.trim().parse::<usize>() {
            Ok(location) if state.board().is_valid_move(location) => return location,
            _ => println!("Invalid move, try again (0-8, unoccupied)."),
        }
    }
}
