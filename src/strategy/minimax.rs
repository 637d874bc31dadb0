//! Exhaustive two-player adversarial search.

use log::debug;

use crate::board::Marker;
use crate::budget::SearchBudget;
use crate::state::GameState;
use crate::strategy::{Strategy, DRAW_SCORE, MAX_SCORE, MIN_SCORE};
use crate::{Result, SearchError};

/// Full minimax over every reachable line
///
/// The player to move at the root is the fixed maximizer. Terminal positions
/// are scored relative to the depth at which they occur, which steers the
/// search toward the fastest win and the slowest loss. Ties at the root are
/// broken by the lowest location.
pub struct Minimax<M: Marker> {
    state: GameState<M>,
    budget: SearchBudget,
    maximizer: M,
    opponent: M,
}

impl<M: Marker> Minimax<M> {
    /// Creates an unbounded minimax search for the given state
    ///
    /// Fails with [`SearchError::NotTwoPlayers`] for any player count other
    /// than two.
    pub fn new(state: GameState<M>) -> Result<Self> {
        Self::with_budget(state, SearchBudget::unbounded())
    }

    /// Creates a minimax search with a resource budget
    pub fn with_budget(state: GameState<M>, budget: SearchBudget) -> Result<Self> {
        if state.player_count() != 2 {
            return Err(SearchError::NotTwoPlayers(state.player_count()));
        }
        let maximizer = state.current_player().clone();
        let opponent = state.players()[1 - state.current_player_index()].clone();
        Ok(Minimax {
            state,
            budget,
            maximizer,
            opponent,
        })
    }

    fn minimax(&self, state: &GameState<M>, maximizing: bool, depth: usize) -> Result<i32> {
        if state.board().has_chain(&self.maximizer) {
            return Ok(MAX_SCORE - depth as i32);
        }
        if state.board().has_chain(&self.opponent) {
            return Ok(MIN_SCORE + depth as i32);
        }
        if !state.board().has_moves_available() || self.budget.exceeds_max_depth(depth) {
            return Ok(DRAW_SCORE);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for location in state.available_moves() {
            let child = state.after_player_moves(location)?;
            let score = self.minimax(&child, !maximizing, depth + 1)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        Ok(best)
    }
}

impl<M: Marker> Strategy for Minimax<M> {
    fn best_move(&mut self) -> Result<usize> {
        let moves = self.state.available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }

        let mut best_score = i32::MIN;
        let mut best_move = moves[0];
        for location in moves {
            let child = self.state.after_player_moves(location)?;
            let score = self.minimax(&child, false, 0)?;
            if score > best_score {
                best_score = score;
                best_move = location;
            }
        }

        debug!("minimax chose location {} (score {})", best_move, best_score);
        Ok(best_move)
    }
}
