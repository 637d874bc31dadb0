//! The five interchangeable move-selection strategies.
//!
//! Each strategy is constructed from a [`GameState`](crate::GameState)
//! (optionally with a [`SearchBudget`](crate::SearchBudget)) and exposes a
//! single [`Strategy::best_move`] operation returning a board location.
//!
//! Player-count constraints are part of the contract: [`Minimax`] and
//! [`AlphaBeta`] require exactly two players; [`MaxN`], [`Paranoid`], and
//! [`MonteCarloTreeSearch`] accept two or more.

pub mod alpha_beta;
pub mod max_n;
pub mod mcts;
pub mod minimax;
pub mod paranoid;

pub use alpha_beta::AlphaBeta;
pub use max_n::MaxN;
pub use mcts::MonteCarloTreeSearch;
pub use minimax::Minimax;
pub use paranoid::Paranoid;

use crate::Result;

/// Best score a deterministic search can report (an immediate win)
pub const MAX_SCORE: i32 = 100;

/// Worst score a deterministic search can report (an immediate loss)
pub const MIN_SCORE: i32 = -100;

/// Score of a drawn or cut-off position
pub const DRAW_SCORE: i32 = 0;

/// Monte Carlo reward for the player holding the winning chain
pub const WIN_REWARD: f64 = 1.0;

/// Monte Carlo reward for every other player when someone wins
pub const LOSS_REWARD: f64 = -0.5;

/// Monte Carlo reward for every player in a drawn playout
pub const DRAW_REWARD: f64 = 0.0;

/// Trait for move-selection strategies
///
/// Implementations search from the state they were constructed with and
/// return the chosen location. The returned location is always one of the
/// state's currently available moves.
pub trait Strategy {
    /// Computes the best next move for the current player
    ///
    /// Fails with [`SearchError::NoMovesAvailable`](crate::SearchError::NoMovesAvailable)
    /// if the state has no moves left; callers should check
    /// `is_terminal()` first.
    fn best_move(&mut self) -> Result<usize>;
}
