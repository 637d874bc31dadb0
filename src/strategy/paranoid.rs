//! N-player search with a pessimistic coalition assumption.

use log::debug;

use crate::board::Marker;
use crate::budget::SearchBudget;
use crate::state::GameState;
use crate::strategy::{Strategy, MAX_SCORE, MIN_SCORE};
use crate::{Result, SearchError};

/// Paranoid search for any number of players
///
/// The player to move at the root is the fixed maximizer; every other
/// player is treated as a single coalition whose only objective is to
/// minimize the maximizer's score, the pessimistic opposite of
/// [`MaxN`](crate::MaxN)'s optimism. An exhausted board (or a depth cutoff)
/// scores as a loss-equivalent outcome for the maximizer, not a draw.
pub struct Paranoid<M: Marker> {
    state: GameState<M>,
    budget: SearchBudget,
    maximizer: M,
    maximizer_index: usize,
}

impl<M: Marker> Paranoid<M> {
    /// Creates an unbounded paranoid search for the given state
    ///
    /// Fails with [`SearchError::TooFewPlayers`] for fewer than two players.
    pub fn new(state: GameState<M>) -> Result<Self> {
        Self::with_budget(state, SearchBudget::unbounded())
    }

    /// Creates a paranoid search with a resource budget
    pub fn with_budget(state: GameState<M>, budget: SearchBudget) -> Result<Self> {
        if state.player_count() < 2 {
            return Err(SearchError::TooFewPlayers(state.player_count()));
        }
        let maximizer = state.current_player().clone();
        let maximizer_index = state.current_player_index();
        Ok(Paranoid {
            state,
            budget,
            maximizer,
            maximizer_index,
        })
    }

    fn paranoid(&self, state: &GameState<M>, depth: usize) -> Result<i32> {
        if state.board().has_chain(&self.maximizer) {
            return Ok(MAX_SCORE - depth as i32);
        }
        let coalition_won = state
            .players()
            .iter()
            .any(|marker| *marker != self.maximizer && state.board().has_chain(marker));
        if coalition_won || !state.board().has_moves_available() || self.budget.exceeds_max_depth(depth)
        {
            return Ok(MIN_SCORE + depth as i32);
        }

        let maximizing = state.current_player_index() == self.maximizer_index;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for location in state.available_moves() {
            let child = state.after_player_moves(location)?;
            let score = self.paranoid(&child, depth + 1)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}

impl<M: Marker> Strategy for Paranoid<M> {
    fn best_move(&mut self) -> Result<usize> {
        let moves = self.state.available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }

        let mut best_score = i32::MIN;
        let mut best_move = moves[0];
        for location in moves {
            let child = self.state.after_player_moves(location)?;
            let score = self.paranoid(&child, 0)?;
            if score > best_score {
                best_score = score;
                best_move = location;
            }
        }

        debug!(
            "paranoid chose location {} (score {})",
            best_move, best_score
        );
        Ok(best_move)
    }
}
