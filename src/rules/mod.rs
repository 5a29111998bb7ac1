//! Base game rules.
//!
//! The default movement, build and win checks every player falls back to.
//! Abilities wrap these; the game orchestrates them.

pub mod engine;

pub use engine::{can_climb, is_legal_build, is_legal_move, is_winning_climb, legal_targets};
