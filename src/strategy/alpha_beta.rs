//! Minimax with alpha-beta branch pruning.

use log::debug;

use crate::board::Marker;
use crate::budget::SearchBudget;
use crate::state::GameState;
use crate::strategy::{Strategy, DRAW_SCORE, MAX_SCORE, MIN_SCORE};
use crate::{Result, SearchError};

/// Alpha-beta pruned minimax
///
/// Identical contract and terminal scoring to [`Minimax`](crate::Minimax),
/// and guaranteed to choose the identical move for every input: the
/// `alpha`/`beta` bounds only cut branches that cannot influence the result.
/// A branch is abandoned as soon as its value strictly exceeds `beta` while
/// maximizing, or falls strictly below `alpha` while minimizing.
pub struct AlphaBeta<M: Marker> {
    state: GameState<M>,
    budget: SearchBudget,
    maximizer: M,
    opponent: M,
}

impl<M: Marker> AlphaBeta<M> {
    /// Creates an unbounded alpha-beta search for the given state
    ///
    /// Fails with [`SearchError::NotTwoPlayers`] for any player count other
    /// than two.
    pub fn new(state: GameState<M>) -> Result<Self> {
        Self::with_budget(state, SearchBudget::unbounded())
    }

    /// Creates an alpha-beta search with a resource budget
    pub fn with_budget(state: GameState<M>, budget: SearchBudget) -> Result<Self> {
        if state.player_count() != 2 {
            return Err(SearchError::NotTwoPlayers(state.player_count()));
        }
        let maximizer = state.current_player().clone();
        let opponent = state.players()[1 - state.current_player_index()].clone();
        Ok(AlphaBeta {
            state,
            budget,
            maximizer,
            opponent,
        })
    }

    fn alpha_beta(
        &self,
        state: &GameState<M>,
        maximizing: bool,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32> {
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
            let score = self.alpha_beta(&child, !maximizing, depth + 1, alpha, beta)?;
            if maximizing {
                best = best.max(score);
                if best > beta {
                    break;
                }
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                if best < alpha {
                    break;
                }
                beta = beta.min(best);
            }
        }
        Ok(best)
    }
}

impl<M: Marker> Strategy for AlphaBeta<M> {
    fn best_move(&mut self) -> Result<usize> {
        let moves = self.state.available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }

        let mut best_score = i32::MIN;
        let mut best_move = moves[0];
        for location in moves {
            let child = self.state.after_player_moves(location)?;
            let score = self.alpha_beta(&child, false, 0, best_score, i32::MAX)?;
            if score > best_score {
                best_score = score;
                best_move = location;
            }
        }

        debug!(
            "alpha-beta chose location {} (score {})",
            best_move, best_score
        );
        Ok(best_move)
    }
}
