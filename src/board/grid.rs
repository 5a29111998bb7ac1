//! Grid cell store.
//!
//! A fixed `size x size` array of cells in row-major order. Each cell
//! records who stands on it (by `PieceId`, never owning the piece) and how
//! high it has been built.
//!
//! Reads are public and bounds-checked. The two mutators are crate-private:
//! only the engine changes cells, so occupancy and piece positions are
//! always updated together.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameError, PieceId};

/// Height of a dome. Domed cells can never be entered or built on.
pub const DOME_LEVEL: u8 = 4;

/// Height a piece must climb onto to win.
pub const WIN_LEVEL: u8 = 3;

/// Up to eight neighbouring cells.
pub type Neighbors = SmallVec<[Position; 8]>;

/// Board coordinates. Signed so callers can ask about cells off the edge
/// and get `OutOfBounds` back instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn distance(self, other: Position) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }

    /// One king step away; a cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }

    /// All eight surrounding coordinates, including ones off the board.
    pub fn surrounding(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dr| {
            (-1..=1)
                .filter(move |&dc| dr != 0 || dc != 0)
                .map(move |dc| Position::new(self.row + dr, self.col + dc))
        })
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub pos: Position,

    /// Piece standing here, if any.
    pub occupant: Option<PieceId>,

    /// Build height, 0 to `DOME_LEVEL`. Never decreases.
    pub height: u8,
}

impl Cell {
    fn new(pos: Position) -> Self {
        Self {
            pos,
            occupant: None,
            height: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[must_use]
    pub fn has_dome(&self) -> bool {
        self.height >= DOME_LEVEL
    }
}

/// The cell store.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
}

impl Grid {
    /// Create an empty, unbuilt grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|i| Cell::new(Position::new((i / size) as i32, (i % size) as i32)))
            .collect();
        Self { size, cells }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.size as i32;
        (0..size).contains(&pos.row) && (0..size).contains(&pos.col)
    }

    fn index_of(&self, pos: Position) -> Result<usize, GameError> {
        if self.contains(pos) {
            Ok(pos.row as usize * self.size + pos.col as usize)
        } else {
            Err(GameError::OutOfBounds(pos))
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        let index = self.index_of(pos)?;
        self.cells.get(index).ok_or(GameError::OutOfBounds(pos))
    }

    /// The cell at (`row`, `col`).
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell, GameError> {
        self.cell(Position::new(row, col))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds neighbours of `pos`.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        pos.surrounding().filter(|&p| self.contains(p)).collect()
    }

    /// Sum of every cell's height.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.cells.iter().map(|c| u32::from(c.height)).sum()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    // === Mutation (engine only) ===

    pub(crate) fn set_occupant(
        &mut self,
        pos: Position,
        occupant: Option<PieceId>,
    ) -> Result<(), GameError> {
        let index = self.index_of(pos)?;
        if let Some(cell) = self.cells.get_mut(index) {
            cell.occupant = occupant;
        }
        Ok(())
    }

    /// Set a cell's height. Rejects levels above a dome and any decrease.
    pub(crate) fn set_height(&mut self, pos: Position, level: u8) -> Result<(), GameError> {
        let index = self.index_of(pos)?;
        let Some(cell) = self.cells.get_mut(index) else {
            return Err(GameError::OutOfBounds(pos));
        };
        if level > DOME_LEVEL || level < cell.height {
            return Err(GameError::InvalidHeight { pos, level });
        }
        cell.height = level;
        Ok(())
    }
}
