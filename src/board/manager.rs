//! Board: cell store plus the piece arena.
//!
//! The `Board` is the only place that changes occupancy. Every mutation
//! updates the cell and the piece's mirrored position together, so a piece
//! is listed by exactly the cell it records, and a cell holds at most one
//! piece.
//!
//! Both collections are persistent (`im::Vector`), so cloning a board is
//! O(1). The engine relies on that to roll back a move an ability left in a
//! broken state.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid, Position, DOME_LEVEL};
use super::piece::Piece;
use crate::core::{GameConfig, GameError, PieceId, PlayerId};

/// Cells and the pieces standing on them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    pieces: Vector<Piece>,
}

impl Board {
    /// An empty board with every player's pieces waiting off-board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let pieces = PlayerId::all(config.player_count)
            .flat_map(|owner| {
                (0..config.pieces_per_player).map(move |slot| {
                    Piece::new(
                        PieceId::for_player(owner, slot, config.pieces_per_player),
                        owner,
                    )
                })
            })
            .collect();

        Self {
            grid: Grid::new(config.grid_size),
            pieces,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.grid.cell(pos)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece, GameError> {
        self.pieces.get(id.index()).ok_or(GameError::UnknownPiece(id))
    }

    /// All pieces in id order, placed or not.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces owned by `player` that are on the board.
    pub fn placed_pieces(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.owner == player && p.is_placed())
    }

    /// Where a piece stands. Unplaced pieces have no position.
    pub fn position_of(&self, id: PieceId) -> Result<Option<Position>, GameError> {
        Ok(self.piece(id)?.position)
    }

    /// The piece standing on `pos`, if any.
    pub fn occupant(&self, pos: Position) -> Result<Option<&Piece>, GameError> {
        match self.grid.cell(pos)?.occupant {
            Some(id) => self.piece(id).map(Some),
            None => Ok(None),
        }
    }

    /// Owner of the piece on `pos`; `None` for empty or off-board cells.
    #[must_use]
    pub fn owner_at(&self, pos: Position) -> Option<PlayerId> {
        self.occupant(pos).ok().flatten().map(|p| p.owner)
    }

    /// Height of `pos`; `None` off the board.
    #[must_use]
    pub fn height(&self, pos: Position) -> Option<u8> {
        self.grid.cell(pos).ok().map(|c| c.height)
    }

    /// Whether every piece position agrees with the cell store.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let pieces_agree = self.pieces.iter().all(|piece| match piece.position {
            Some(pos) => self
                .grid
                .cell(pos)
                .map(|c| c.occupant == Some(piece.id))
                .unwrap_or(false),
            None => true,
        });
        let cells_agree = self.grid.cells().all(|cell| match cell.occupant {
            Some(id) => self
                .piece(id)
                .map(|p| p.position == Some(cell.pos))
                .unwrap_or(false),
            None => true,
        });
        pieces_agree && cells_agree
    }

    // === Mutation (engine only) ===

    fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, GameError> {
        self.pieces
            .get_mut(id.index())
            .ok_or(GameError::UnknownPiece(id))
    }

    /// Put an off-board piece onto an empty, undomed cell.
    pub(crate) fn put_down(&mut self, id: PieceId, pos: Position) -> Result<(), GameError> {
        let cell = self.grid.cell(pos)?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(pos));
        }
        if cell.has_dome() {
            return Err(GameError::DomedCell(pos));
        }
        let piece = self.piece_mut(id)?;
        if piece.position.is_some() {
            return Err(GameError::AlreadyPlaced(id));
        }
        piece.position = Some(pos);
        self.grid.set_occupant(pos, Some(id))
    }

    /// Take a piece off the board, returning where it stood.
    pub(crate) fn lift(&mut self, id: PieceId) -> Result<Option<Position>, GameError> {
        let piece = self.piece_mut(id)?;
        let from = piece.position.take();
        if let Some(pos) = from {
            self.grid.set_occupant(pos, None)?;
        }
        Ok(from)
    }

    /// Move a placed piece to an empty cell.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Position) -> Result<Position, GameError> {
        if !self.grid.cell(to)?.is_empty() {
            return Err(GameError::CellOccupied(to));
        }
        let from = self.lift(id)?.ok_or(GameError::UnknownPiece(id))?;
        self.put_down(id, to)?;
        Ok(from)
    }

    /// Add one level to `pos`, returning the new height.
    pub(crate) fn raise(&mut self, pos: Position) -> Result<u8, GameError> {
        let current = self.grid.cell(pos)?.height;
        if current >= DOME_LEVEL {
            return Err(GameError::InvalidHeight {
                pos,
                level: current.saturating_add(1),
            });
        }
        self.grid.set_height(pos, current + 1)?;
        Ok(current + 1)
    }

    /// Set a height directly. Used to stage positions; still monotonic, and
    /// an occupied cell cannot be domed.
    pub(crate) fn set_height(&mut self, pos: Position, level: u8) -> Result<(), GameError> {
        if level >= DOME_LEVEL && !self.grid.cell(pos)?.is_empty() {
            return Err(GameError::InvalidHeight { pos, level });
        }
        self.grid.set_height(pos, level)
    }
}
