//! Core engine types: pieces, players, configuration, errors, turn state.
//!
//! These are the building blocks every other module speaks in. Nothing
//! here knows about cell heights or movement rules.

pub mod entity;
pub mod player;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use entity::PieceId;
pub use player::{Player, PlayerColor, PlayerId, PlayerMap};
pub use config::{GameConfig, MAX_GRID_SIZE};
pub use error::{ConfigError, GameError};
pub use action::{Action, ActionRecord};
pub use state::{Phase, Stage, TurnState};
