//! # rust-santorini
//!
//! A rule engine for a build-and-climb grid strategy game: workers move
//! around a square board, every move is followed by a build, and the first
//! worker to step up onto the third level wins. Players may hold a God Card
//! that bends the movement or build rules.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `Game` owns the board, the players and the turn
//!    state. Cells and pieces refer to each other by id and position, never
//!    by reference, so a game is plain data that clones and serializes.
//!
//! 2. **All Or Nothing**: every operation is validated before it mutates,
//!    and moves are staged on an O(1) clone of the board (`im-rs`). A
//!    rejected call returns a `GameError` and changes nothing.
//!
//! 3. **Configuration Over Convention**: grid size, player count, pieces per
//!    player and moves per turn come from `GameConfig`. Nothing assumes two
//!    players.
//!
//! ## Modules
//!
//! - `core`: piece and player ids, configuration, errors, actions, turn state
//! - `board`: positions, cells and the `Board` that keeps pieces and cells
//!   in agreement
//! - `rules`: the base movement, build and win checks
//! - `abilities`: the `GodPower` hook contract and the shipped cards
//! - `game`: the `Game` orchestrator, its builder and click dispatch
//!
//! ## Example
//!
//! ```
//! use rust_santorini::{GameBuilder, MoveOutcome, PieceId, PlayerId};
//!
//! let mut game = GameBuilder::new().build().unwrap();
//! game.place_piece(PlayerId::new(0), 0, 0).unwrap();
//! game.place_piece(PlayerId::new(0), 4, 4).unwrap();
//! game.place_piece(PlayerId::new(1), 0, 4).unwrap();
//! game.place_piece(PlayerId::new(1), 4, 0).unwrap();
//!
//! assert_eq!(game.move_piece(PieceId(0), 1, 1), Ok(MoveOutcome::Build));
//! game.build(2, 2).unwrap();
//! assert_eq!(game.current_player(), PlayerId::new(1));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod abilities;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, Phase, PieceId, Player,
    PlayerColor, PlayerId, PlayerMap, Stage, TurnState,
};

pub use crate::board::{Board, Cell, Grid, Piece, Position, DOME_LEVEL, WIN_LEVEL};

pub use crate::abilities::{Ability, Apollo, Demeter, GodPower};

pub use crate::game::{BuildOutcome, ClickOutcome, Game, GameBuilder, MoveOutcome, PlaceOutcome};
