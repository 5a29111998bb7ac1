//! Piece (worker) instances.

use serde::{Deserialize, Serialize};

use super::grid::Position;
use crate::core::{PieceId, PlayerId};

/// A worker on (or waiting to enter) the board.
///
/// `position` mirrors the cell that lists this piece as occupant. It is
/// `None` before placement and while an ability has lifted the piece
/// mid-move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: PlayerId,
    pub position: Option<Position>,
}

impl Piece {
    #[must_use]
    pub fn new(id: PieceId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            position: None,
        }
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}
