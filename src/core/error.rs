//! Caller-facing error types.
//!
//! `GameError` covers every rejected play: all variants are recoverable and a
//! rejected call leaves the game exactly as it was. `ConfigError` is raised
//! only at setup, before any game state exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::PieceId;
use super::player::PlayerId;
use super::state::Stage;
use crate::board::Position;

/// A rejected placement, selection, move or build.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Position),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("illegal build from {worker} on {target}")]
    IllegalBuild { worker: Position, target: Position },

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("the game is over")]
    GameOver,

    #[error("expected {expected} phase, game is in {actual} phase")]
    WrongPhase { expected: Stage, actual: Stage },

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("cell {0} is already occupied")]
    CellOccupied(Position),

    #[error("cell {0} is domed")]
    DomedCell(Position),

    #[error("{0} is already on the board")]
    AlreadyPlaced(PieceId),

    #[error("no piece is selected")]
    NoSelection,

    #[error("{0} has already moved this turn and cannot be swapped out")]
    SelectionLocked(PieceId),

    #[error("height {level} is not allowed on {pos}")]
    InvalidHeight { pos: Position, level: u8 },

    #[error("{0} already holds an ability")]
    AbilityAlreadyAssigned(PlayerId),

    #[error("no optional build is pending")]
    NoOptionalBuild,
}

/// An invalid game configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("grid size {0} is too large")]
    GridTooLarge(usize),

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("each player needs at least one piece")]
    NoPieces,

    #[error("each turn needs at least one move")]
    NoMoves,

    #[error("{pieces} pieces do not fit on {cells} cells")]
    NotEnoughCells { pieces: usize, cells: usize },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} was given more than one ability")]
    DuplicateAbility(PlayerId),

    #[error("cannot start {pos} at level {level}")]
    InvalidTerrain { pos: Position, level: u8 },
}
