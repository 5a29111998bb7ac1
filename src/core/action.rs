//! Action records for game history.
//!
//! Every accepted placement, move and build is appended to the game's
//! history as an `ActionRecord`. Forced relocations caused by an ability
//! (Apollo's swap) are recorded as their own `Displace` entries right after
//! the move that caused them.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::player::PlayerId;
use crate::board::Position;

/// A single accepted change to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A piece entered the board during placement.
    Place { piece: PieceId, at: Position },

    /// A piece moved one step.
    Move {
        piece: PieceId,
        from: Position,
        to: Position,
    },

    /// A piece was pushed by another player's ability.
    Displace {
        piece: PieceId,
        from: Position,
        to: Position,
    },

    /// A worker raised a cell to `level`.
    Build {
        piece: PieceId,
        at: Position,
        level: u8,
    },
}

impl Action {
    /// The piece that performed (or suffered) the action.
    #[must_use]
    pub fn piece(&self) -> PieceId {
        match *self {
            Action::Place { piece, .. }
            | Action::Move { piece, .. }
            | Action::Displace { piece, .. }
            | Action::Build { piece, .. } => piece,
        }
    }
}

/// An action with the player and timing it happened under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    pub action: Action,

    /// Turn number; 0 during placement, counting from 1 once play starts.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
