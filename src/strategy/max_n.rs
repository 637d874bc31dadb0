//! N-player search over per-player score vectors.

use log::debug;

use crate::board::Marker;
use crate::budget::SearchBudget;
use crate::state::GameState;
use crate::strategy::{Strategy, MAX_SCORE, MIN_SCORE};
use crate::{Result, SearchError};

/// MaxN search for any number of players
///
/// Every recursive call returns a score vector indexed by player position.
/// At each node the player to move keeps the child vector that maximizes
/// their own component; the winning vector propagates unchanged, so other
/// players' components are whatever that branch produced.
///
/// MaxN deliberately does not model coalitions ("their loss is my gain"):
/// it can decline to block an opponent when blocking does not improve its
/// own component. That is documented behavior, not a defect.
pub struct MaxN<M: Marker> {
    state: GameState<M>,
    budget: SearchBudget,
}

impl<M: Marker> MaxN<M> {
    /// Creates an unbounded MaxN search for the given state
    ///
    /// Fails with [`SearchError::TooFewPlayers`] for fewer than two players.
    pub fn new(state: GameState<M>) -> Result<Self> {
        Self::with_budget(state, SearchBudget::unbounded())
    }

    /// Creates a MaxN search with a resource budget
    pub fn with_budget(state: GameState<M>, budget: SearchBudget) -> Result<Self> {
        if state.player_count() < 2 {
            return Err(SearchError::TooFewPlayers(state.player_count()));
        }
        Ok(MaxN { state, budget })
    }

    fn max_n(&self, state: &GameState<M>, depth: usize) -> Result<Vec<i32>> {
        let players = state.player_count();

        if state.last_player_has_chain() {
            let mut scores = vec![MIN_SCORE + depth as i32; players];
            scores[state.last_player_index()] = MAX_SCORE - depth as i32;
            return Ok(scores);
        }
        if !state.board().has_moves_available() || self.budget.exceeds_max_depth(depth) {
            return Ok(vec![0; players]);
        }

        let mover = state.current_player_index();
        let mut best: Option<Vec<i32>> = None;
        for location in state.available_moves() {
            let child = state.after_player_moves(location)?;
            let scores = self.max_n(&child, depth + 1)?;
            let improved = match &best {
                Some(current) => scores[mover] > current[mover],
                None => true,
            };
            if improved {
                best = Some(scores);
            }
        }
        // Available moves were non-empty, so a vector was always kept.
        Ok(best.unwrap_or_else(|| vec![0; players]))
    }
}

impl<M: Marker> Strategy for MaxN<M> {
    fn best_move(&mut self) -> Result<usize> {
        let moves = self.state.available_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }

        let mover = self.state.current_player_index();
        let mut best_score = i32::MIN;
        let mut best_move = moves[0];
        for location in moves {
            let child = self.state.after_player_moves(location)?;
            let scores = self.max_n(&child, 0)?;
            if scores[mover] > best_score {
                best_score = scores[mover];
                best_move = location;
            }
        }

        debug!("max-n chose location {} (score {})", best_move, best_score);
        Ok(best_move)
    }
}
