//! Piece identification.
//!
//! Every piece on the board has a unique `PieceId`. Pieces live in an arena
//! owned by the board and are referenced by index everywhere else: cells
//! record the id of their occupant, players record the ids they own.
//!
//! ## ID Layout
//!
//! Ids are allocated player by player at setup:
//! - `0..pieces_per_player`: player 0's pieces
//! - `pieces_per_player..2 * pieces_per_player`: player 1's pieces
//! - and so on
//!
//! ```
//! use rust_santorini::core::{PieceId, PlayerId};
//!
//! let pieces_per_player = 2;
//!
//! let first = PieceId::for_player(PlayerId::new(1), 0, pieces_per_player);
//! assert_eq!(first, PieceId(2));
//! assert_eq!(first.slot(pieces_per_player), 0);
//! ```

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Stable arena index of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    /// Create a piece ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Id of a player's `slot`-th piece under the setup layout.
    #[must_use]
    pub const fn for_player(player: PlayerId, slot: usize, pieces_per_player: usize) -> Self {
        Self((player.index() * pieces_per_player + slot) as u16)
    }

    /// Position of this piece within its owner's piece list.
    #[must_use]
    pub const fn slot(self, pieces_per_player: usize) -> usize {
        self.index() % pieces_per_player
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for PieceId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
