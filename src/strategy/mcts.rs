//! Monte Carlo tree search with uniform-random playouts.
//!
//! The search tree is an arena of nodes indexed by handle: children are
//! owned handles in the parent's list, and each node stores its parent's
//! index for backpropagation, so the parent back-reference never forms an
//! ownership cycle.

use std::time::Instant;

use log::debug;
use rand::prelude::IteratorRandom;
use rand::seq::SliceRandom;

use crate::board::Marker;
use crate::budget::SearchBudget;
use crate::state::GameState;
use crate::stats::SearchStatistics;
use crate::strategy::{Strategy, DRAW_REWARD, LOSS_REWARD, WIN_REWARD};
use crate::{Result, SearchError};

/// A node in the search tree arena
struct Node<M: Marker> {
    /// The game state this node represents
    state: GameState<M>,

    /// Arena index of the parent (None for the root)
    parent: Option<usize>,

    /// Arena indices of materialized children
    children: Vec<usize>,

    /// Moves not yet materialized into child nodes
    untried_moves: Vec<usize>,

    /// Number of times this node was visited during backpropagation
    visits: u64,

    /// Cumulative reward per player position
    rewards: Vec<f64>,
}

impl<M: Marker> Node<M> {
    fn new(state: GameState<M>, parent: Option<usize>) -> Self {
        let untried_moves = state.available_moves();
        let players = state.player_count();
        Node {
            state,
            parent,
            children: Vec::new(),
            untried_moves,
            visits: 0,
            rewards: vec![0.0; players],
        }
    }

    /// True once every available move has a materialized child
    fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }
}

/// Monte Carlo tree search for any number of players
///
/// Repeats selection, expansion, simulation, and backpropagation until the
/// budget's time or iteration bound trips, then returns the most-visited
/// root child (robust-child selection). The tree is private to one
/// `best_move` call and discarded afterwards.
///
/// With neither bound configured the loop never terminates; supplying at
/// least one bound is the caller's responsibility.
pub struct MonteCarloTreeSearch<M: Marker> {
    state: GameState<M>,
    budget: SearchBudget,
    statistics: SearchStatistics,
}

impl<M: Marker> MonteCarloTreeSearch<M> {
    /// Creates an unbounded Monte Carlo search for the given state
    ///
    /// Fails with [`SearchError::TooFewPlayers`] for fewer than two players.
    pub fn new(state: GameState<M>) -> Result<Self> {
        Self::with_budget(state, SearchBudget::unbounded())
    }

    /// Creates a Monte Carlo search with a resource budget
    pub fn with_budget(state: GameState<M>, budget: SearchBudget) -> Result<Self> {
        if state.player_count() < 2 {
            return Err(SearchError::TooFewPlayers(state.player_count()));
        }
        Ok(MonteCarloTreeSearch {
            state,
            budget,
            statistics: SearchStatistics::new(),
        })
    }

    /// Returns the statistics gathered by the most recent `best_move` call
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Selection phase: descend through fully expanded nodes via UCT
    fn select(&mut self, arena: &[Node<M>]) -> usize {
        let mut index = 0;
        let mut depth = 0;

        while arena[index].is_fully_expanded()
            && !arena[index].state.is_terminal()
            && !arena[index].children.is_empty()
        {
            index = self.best_uct_child(arena, index);
            depth += 1;
            self.statistics.max_depth = self.statistics.max_depth.max(depth);
        }

        index
    }

    /// Picks the child maximizing the UCT value from the parent's perspective
    ///
    /// The exploitation term uses the reward component of the player to move
    /// at the parent, since that player chooses among these children.
    fn best_uct_child(&self, arena: &[Node<M>], parent: usize) -> usize {
        let node = &arena[parent];
        let mover = node.state.current_player_index();
        let parent_visits = node.visits;

        let mut best_value = f64::NEG_INFINITY;
        let mut best_child = node.children[0];
        for &child_index in &node.children {
            let child = &arena[child_index];
            // Expansion visits every child once before selection compares
            // them; the infinity guard keeps the formula total regardless.
            let value = if child.visits == 0 {
                f64::INFINITY
            } else {
                let visits = child.visits as f64;
                child.rewards[mover] / visits
                    + (2.0 * (parent_visits as f64).ln() / visits).sqrt()
            };
            if value > best_value {
                best_value = value;
                best_child = child_index;
            }
        }
        best_child
    }

    /// Expansion phase: materialize one random untried child, if possible
    fn expand(&mut self, arena: &mut Vec<Node<M>>, index: usize) -> Result<usize> {
        if arena[index].state.is_terminal() || arena[index].is_fully_expanded() {
            return Ok(index);
        }

        let mut rng = rand::thread_rng();
        let choice = (0..arena[index].untried_moves.len())
            .choose(&mut rng)
            .unwrap_or(0);
        let location = arena[index].untried_moves.swap_remove(choice);
        let child_state = arena[index].state.after_player_moves(location)?;

        let child_index = arena.len();
        arena.push(Node::new(child_state, Some(index)));
        arena[index].children.push(child_index);
        self.statistics.tree_size += 1;

        Ok(child_index)
    }

    /// Simulation phase: play uniformly random legal moves to the end
    fn simulate(&self, state: &GameState<M>) -> Result<Vec<f64>> {
        let mut rng = rand::thread_rng();
        let mut current = state.clone();

        while !current.is_terminal() {
            let moves = current.available_moves();
            match moves.choose(&mut rng) {
                Some(&location) => current = current.after_player_moves(location)?,
                None => break,
            }
        }

        Ok(self.rewards_at(&current))
    }

    /// Reward vector at a terminal state: the chain holder wins, everyone
    /// else loses; no chain means a draw for all
    fn rewards_at(&self, state: &GameState<M>) -> Vec<f64> {
        let winner = state
            .players()
            .iter()
            .position(|marker| state.board().has_chain(marker));
        state
            .players()
            .iter()
            .enumerate()
            .map(|(position, _)| match winner {
                Some(w) if w == position => WIN_REWARD,
                Some(_) => LOSS_REWARD,
                None => DRAW_REWARD,
            })
            .collect()
    }

    /// Backpropagation phase: credit the reward vector to every ancestor
    fn backpropagate(&self, arena: &mut [Node<M>], index: usize, rewards: &[f64]) {
        let mut current = Some(index);
        while let Some(node_index) = current {
            let node = &mut arena[node_index];
            node.visits += 1;
            for (total, reward) in node.rewards.iter_mut().zip(rewards) {
                *total += reward;
            }
            current = node.parent;
        }
    }
}

impl<M: Marker> Strategy for MonteCarloTreeSearch<M> {
    fn best_move(&mut self) -> Result<usize> {
        if self.state.available_moves().is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }

        self.statistics = SearchStatistics::new();
        let mut arena = vec![Node::new(self.state.clone(), None)];

        let start = Instant::now();
        let mut iterations = 0usize;
        loop {
            if self.budget.exceeds_max_time(start.elapsed()) {
                self.statistics.stopped_on_time = true;
                break;
            }
            if self.budget.exceeds_max_iterations(iterations + 1) {
                break;
            }

            let selected = self.select(&arena);
            let expanded = self.expand(&mut arena, selected)?;
            let rewards = self.simulate(&arena[expanded].state)?;
            self.backpropagate(&mut arena, expanded, &rewards);

            iterations += 1;
            self.statistics.iterations = iterations;
        }
        self.statistics.total_time = start.elapsed();

        debug!(
            "mcts ran {} iterations over {} nodes in {:?}",
            self.statistics.iterations,
            self.statistics.tree_size,
            self.statistics.total_time
        );

        // Robust-child selection: the most-visited direct child of the root.
        let root = &arena[0];
        let mut best = None;
        let mut best_visits = 0;
        for &child in &root.children {
            if best.is_none() || arena[child].visits > best_visits {
                best_visits = arena[child].visits;
                best = Some(child);
            }
        }
        match best {
            Some(child) => arena[child]
                .state
                .last_move()
                .ok_or(SearchError::NoMovesAvailable),
            // No iteration completed; fall back to any legal move.
            None => root
                .untried_moves
                .first()
                .copied()
                .ok_or(SearchError::NoMovesAvailable),
        }
    }
}
