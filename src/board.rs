//! Immutable square board of nullable marker slots.
//!
//! The board is a value type: applying a move never mutates the original,
//! it produces a fresh board via [`Board::with_move`]. Every search strategy
//! in this crate relies on that persistence to explore multiple lines from
//! the same position.

use std::fmt::{self, Debug};

use crate::{Result, SearchError};

/// Trait for marker tokens placed on the board
///
/// Markers identify which player occupies a cell. Any cheap, comparable
/// token works; a single character is typical.
pub trait Marker: Clone + Debug + PartialEq + Send + Sync {}

impl Marker for char {}
impl Marker for u8 {}
impl Marker for usize {}
impl Marker for &'static str {}
impl Marker for String {}

/// A square `dimension x dimension` grid of optional markers
///
/// Locations are row-major: location `r * dimension + c` addresses row `r`,
/// column `c`. Unoccupied cells hold `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<M: Marker> {
    dimension: usize,
    cells: Vec<Option<M>>,
}

impl<M: Marker> Board<M> {
    /// Creates an empty board of the given dimension
    pub fn new(dimension: usize) -> Self {
        Board {
            dimension,
            cells: vec![None; dimension * dimension],
        }
    }

    /// Creates a board from explicit cell contents
    ///
    /// Fails with [`SearchError::BoardShape`] unless exactly
    /// `dimension * dimension` cells are supplied.
    pub fn from_cells(dimension: usize, cells: Vec<Option<M>>) -> Result<Self> {
        if cells.len() != dimension * dimension {
            return Err(SearchError::BoardShape {
                dimension,
                cells: cells.len(),
            });
        }
        Ok(Board { dimension, cells })
    }

    /// Returns the board dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the marker at a location, or `None` if unoccupied or out of range
    pub fn cell(&self, location: usize) -> Option<&M> {
        self.cells.get(location).and_then(|c| c.as_ref())
    }

    /// Returns true if the location is in range and unoccupied
    pub fn is_valid_move(&self, location: usize) -> bool {
        location < self.cells.len() && self.cells[location].is_none()
    }

    /// Returns all unoccupied locations in ascending row-major order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(location, _)| location)
            .collect()
    }

    /// Returns true if at least one move remains
    pub fn has_moves_available(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// Returns true if no marker has been placed yet
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Returns a new board with the marker placed at the location
    ///
    /// The original board is untouched. Fails with
    /// [`SearchError::InvalidMove`] for an occupied or out-of-range location.
    pub fn with_move(&self, marker: M, location: usize) -> Result<Self> {
        if !self.is_valid_move(location) {
            return Err(SearchError::InvalidMove(location));
        }
        let mut cells = self.cells.clone();
        cells[location] = Some(marker);
        Ok(Board {
            dimension: self.dimension,
            cells,
        })
    }

    /// Returns true if the marker occupies a full row, column, or diagonal
    pub fn has_chain(&self, marker: &M) -> bool {
        let n = self.dimension;
        if n == 0 {
            return false;
        }

        let holds = |location: usize| self.cells[location].as_ref() == Some(marker);

        for row in 0..n {
            if (0..n).all(|col| holds(row * n + col)) {
                return true;
            }
        }
        for col in 0..n {
            if (0..n).all(|row| holds(row * n + col)) {
                return true;
            }
        }
        // Main diagonal and anti-diagonal; only defined for square boards,
        // which is the only supported shape.
        if (0..n).all(|i| holds(i * n + i)) {
            return true;
        }
        (0..n).all(|i| holds(i * n + (n - 1 - i)))
    }
}

impl<M: Marker + fmt::Display> fmt::Display for Board<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                match &self.cells[row * self.dimension + col] {
                    Some(marker) => write!(f, " {} ", marker)?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
