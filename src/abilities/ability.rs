//! The closed set of God Cards a player can hold.
//!
//! An `Ability` is chosen once per player at setup and matched at every
//! hook point. Adding a card means adding a variant here and a `GodPower`
//! implementation next to `Apollo` and `Demeter`.

use serde::{Deserialize, Serialize};

use super::apollo::Apollo;
use super::demeter::Demeter;
use super::power::{BuildContext, BuildFollowUp, GodPower, MoveContext, MoveFollowUp};
use crate::board::Board;
use crate::core::PieceId;

/// A God Card bound to one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Apollo(Apollo),
    Demeter(Demeter),
}

impl Ability {
    #[must_use]
    pub fn apollo() -> Self {
        Ability::Apollo(Apollo)
    }

    #[must_use]
    pub fn demeter() -> Self {
        Ability::Demeter(Demeter::new())
    }

    /// Look a card up by name, ignoring case.
    ///
    /// ```
    /// use rust_santorini::abilities::Ability;
    ///
    /// assert_eq!(Ability::from_name("apollo"), Some(Ability::apollo()));
    /// assert_eq!(Ability::from_name("Zeus"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "apollo" => Some(Self::apollo()),
            "demeter" => Some(Self::demeter()),
            _ => None,
        }
    }
}

impl GodPower for Ability {
    fn name(&self) -> &'static str {
        match self {
            Ability::Apollo(p) => p.name(),
            Ability::Demeter(p) => p.name(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Ability::Apollo(p) => p.description(),
            Ability::Demeter(p) => p.description(),
        }
    }

    fn before_move(&self, board: &Board, ctx: &MoveContext) {
        match self {
            Ability::Apollo(p) => p.before_move(board, ctx),
            Ability::Demeter(p) => p.before_move(board, ctx),
        }
    }

    fn is_valid_move(&self, board: &Board, ctx: &MoveContext) -> bool {
        match self {
            Ability::Apollo(p) => p.is_valid_move(board, ctx),
            Ability::Demeter(p) => p.is_valid_move(board, ctx),
        }
    }

    fn after_move(
        &mut self,
        board: &Board,
        ctx: &MoveContext,
        displaced: Option<PieceId>,
    ) -> MoveFollowUp {
        match self {
            Ability::Apollo(p) => p.after_move(board, ctx, displaced),
            Ability::Demeter(p) => p.after_move(board, ctx, displaced),
        }
    }

    fn before_build(&self, board: &Board, ctx: &BuildContext) {
        match self {
            Ability::Apollo(p) => p.before_build(board, ctx),
            Ability::Demeter(p) => p.before_build(board, ctx),
        }
    }

    fn is_valid_build(&self, board: &Board, ctx: &BuildContext) -> bool {
        match self {
            Ability::Apollo(p) => p.is_valid_build(board, ctx),
            Ability::Demeter(p) => p.is_valid_build(board, ctx),
        }
    }

    fn after_build(&mut self, board: &Board, ctx: &BuildContext) -> BuildFollowUp {
        match self {
            Ability::Apollo(p) => p.after_build(board, ctx),
            Ability::Demeter(p) => p.after_build(board, ctx),
        }
    }

    fn end_turn(&mut self) {
        match self {
            Ability::Apollo(p) => p.end_turn(),
            Ability::Demeter(p) => p.end_turn(),
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
