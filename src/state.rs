//! Immutable game position: board, turn rotation, and last move.
//!
//! One `GameState` exists per ply. Strategies only read from it and only
//! produce successor states through [`GameState::after_player_moves`], so a
//! state handed to a search is never modified underneath the caller.

use crate::board::{Board, Marker};
use crate::{Result, SearchError};

/// A game position at a single ply
///
/// Combines the current [`Board`] with the ordered player roster, whose turn
/// it is, and the location of the most recent move (`None` before the first
/// move of the game).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<M: Marker> {
    board: Board<M>,
    players: Vec<M>,
    current_player_index: usize,
    last_move: Option<usize>,
}

impl<M: Marker> GameState<M> {
    /// Creates a state at the start of a turn cycle (first player to move)
    pub fn new(board: Board<M>, players: Vec<M>) -> Result<Self> {
        Self::with_current_player(board, players, 0)
    }

    /// Creates a state with an explicit current player
    ///
    /// Fails if the roster is empty, holds duplicate markers, or the index
    /// is out of range.
    pub fn with_current_player(
        board: Board<M>,
        players: Vec<M>,
        current_player_index: usize,
    ) -> Result<Self> {
        if players.is_empty() {
            return Err(SearchError::NoPlayers);
        }
        for (i, marker) in players.iter().enumerate() {
            if players[i + 1..].contains(marker) {
                return Err(SearchError::DuplicateMarkers);
            }
        }
        if current_player_index >= players.len() {
            return Err(SearchError::PlayerIndexOutOfRange {
                index: current_player_index,
                players: players.len(),
            });
        }
        Ok(GameState {
            board,
            players,
            current_player_index,
            last_move: None,
        })
    }

    /// Returns the current board
    pub fn board(&self) -> &Board<M> {
        &self.board
    }

    /// Returns the ordered player roster
    pub fn players(&self) -> &[M] {
        &self.players
    }

    /// Returns the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the index of the player to move
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Returns the marker of the player to move
    pub fn current_player(&self) -> &M {
        &self.players[self.current_player_index]
    }

    /// Returns the index of the player who moved last
    pub fn last_player_index(&self) -> usize {
        (self.current_player_index + self.players.len() - 1) % self.players.len()
    }

    /// Returns the marker of the player who moved last
    pub fn last_player(&self) -> &M {
        &self.players[self.last_player_index()]
    }

    /// Returns the location of the most recent move, if any
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Returns true if the player who moved last completed a chain
    pub fn last_player_has_chain(&self) -> bool {
        self.board.has_chain(self.last_player())
    }

    /// Returns true if the game is over
    ///
    /// A state is terminal when the board is full or any player holds a
    /// chain.
    pub fn is_terminal(&self) -> bool {
        if !self.board.has_moves_available() {
            return true;
        }
        self.players.iter().any(|marker| self.board.has_chain(marker))
    }

    /// Returns the available move locations, ascending row-major
    pub fn available_moves(&self) -> Vec<usize> {
        self.board.available_moves()
    }

    /// Applies a move for the current player, returning the next state
    ///
    /// The move is recorded as `last_move` and the turn advances to the next
    /// player in roster order, wrapping around. Fails with
    /// [`SearchError::InvalidMove`] if the location is occupied or out of
    /// range.
    pub fn after_player_moves(&self, location: usize) -> Result<Self> {
        let board = self
            .board
            .with_move(self.current_player().clone(), location)?;
        Ok(GameState {
            board,
            players: self.players.clone(),
            current_player_index: (self.current_player_index + 1) % self.players.len(),
            last_move: Some(location),
        })
    }
}
