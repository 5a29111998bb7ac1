//! The playable game.
//!
//! - `game`: `Game`, the orchestrator that owns all state
//! - `builder`: `GameBuilder` for setup
//! - `input`: click dispatch for cell-based front ends

pub mod game;
pub mod builder;
pub mod input;

pub use game::{BuildOutcome, Game, MoveOutcome, PlaceOutcome};
pub use builder::GameBuilder;
pub use input::ClickOutcome;
