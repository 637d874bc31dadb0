//! # nrow-search
//!
//! Move-selection engines for generalized N-in-a-row board games: square
//! boards of arbitrary dimension, any number of players, each placing their
//! own marker and trying to complete a full row, column, or diagonal.
//!
//! The crate provides five interchangeable search strategies behind a single
//! [`Strategy`] trait:
//!
//! - [`Minimax`]: exhaustive two-player adversarial search
//! - [`AlphaBeta`]: minimax with branch pruning; identical results, fewer
//!   node visits
//! - [`MaxN`]: N-player search maximizing each mover's own component of a
//!   per-player score vector
//! - [`Paranoid`]: N-player search treating all opponents as one coalition
//!   minimizing the root player's score
//! - [`MonteCarloTreeSearch`]: randomized playouts with incremental tree
//!   statistics, for any player count
//!
//! All five consume the same immutable [`GameState`]/[`Board`] representation
//! and respect the same optional [`SearchBudget`] (depth, iteration count,
//! wall-clock time).
//!
//! ## Basic Usage
//!
//! ```
//! use nrow_search::{AlphaBeta, Board, GameState, Strategy};
//!
//! fn main() -> nrow_search::Result<()> {
//!     // An empty 3x3 board, X to move.
//!     let board: Board<char> = Board::new(3);
//!     let state = GameState::new(board, vec!['X', 'O'])?;
//!
//!     let mut search = AlphaBeta::new(state)?;
//!     let location = search.best_move()?;
//!     assert!(location < 9);
//!     Ok(())
//! }
//! ```
//!
//! ## Bounded searches
//!
//! ```
//! use std::time::Duration;
//! use nrow_search::{Board, GameState, MonteCarloTreeSearch, SearchBudget, Strategy};
//!
//! fn main() -> nrow_search::Result<()> {
//!     let state = GameState::new(Board::<char>::new(3), vec!['X', 'O', 'Y'])?;
//!
//!     // MCTS needs at least one bound, or the loop never terminates.
//!     let budget = SearchBudget::default()
//!         .with_max_iterations(500)
//!         .with_max_time(Duration::from_millis(50));
//!
//!     let mut search = MonteCarloTreeSearch::with_budget(state, budget)?;
//!     let location = search.best_move()?;
//!     assert!(location < 9);
//!     Ok(())
//! }
//! ```
//!
//! Strategies never mutate shared state: every successor position produced
//! during search is a fresh value obtained through [`Board::with_move`], so
//! concurrent searches over independent states are safe by construction.

pub mod board;
pub mod budget;
pub mod state;
pub mod stats;
pub mod strategy;

pub use board::{Board, Marker};
pub use budget::SearchBudget;
pub use state::GameState;
pub use stats::SearchStatistics;
pub use strategy::{AlphaBeta, MaxN, Minimax, MonteCarloTreeSearch, Paranoid, Strategy};

/// Error types for board construction, state transitions, and search setup
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Board construction with a cell count that does not match the dimension
    #[error("board of dimension {dimension} cannot hold {cells} cells")]
    BoardShape {
        /// Requested board dimension
        dimension: usize,
        /// Number of cells actually supplied
        cells: usize,
    },

    /// Move application to an occupied or out-of-range location
    #[error("location {0} is not a valid move")]
    InvalidMove(usize),

    /// Game state constructed with an empty player list
    #[error("at least one player marker is required")]
    NoPlayers,

    /// Game state constructed with repeated player markers
    #[error("player markers must be unique")]
    DuplicateMarkers,

    /// Game state constructed with a current-player index outside the roster
    #[error("current player index {index} out of range for {players} players")]
    PlayerIndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of players in the roster
        players: usize,
    },

    /// Two-player strategy constructed for a different player count
    #[error("this strategy requires exactly two players, got {0}")]
    NotTwoPlayers(usize),

    /// Multi-player strategy constructed with fewer than two players
    #[error("this strategy requires at least two players, got {0}")]
    TooFewPlayers(usize),

    /// `best_move` called on a state with no available moves
    #[error("no moves available from current state")]
    NoMovesAvailable,
}

/// Result type for board, state, and search operations
pub type Result<T> = std::result::Result<T, SearchError>;
