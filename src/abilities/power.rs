//! The God Card hook contract.
//!
//! The game consults the acting player's power at six points of every
//! move and build:
//!
//! | Point          | Hook              | Default                   |
//! |----------------|-------------------|---------------------------|
//! | before move    | `before_move`     | nothing                   |
//! | move legality  | `is_valid_move`   | `rules::is_legal_move`    |
//! | after move     | `after_move`      | `MoveFollowUp::Continue`  |
//! | before build   | `before_build`    | nothing                   |
//! | build legality | `is_valid_build`  | `rules::is_legal_build`   |
//! | after build    | `after_build`     | `BuildFollowUp::EndTurn`  |
//!
//! plus `end_turn`, called whenever the owner's turn ends by any path.
//!
//! Powers never touch the board directly. Pre-hooks and legality get a
//! shared `&Board`; post-hooks return a follow-up the game applies and
//! checks, so a power cannot break occupancy or height invariants.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::core::{PieceId, PlayerId};
use crate::rules;

/// A move under consideration or just applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveContext {
    pub player: PlayerId,
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
}

/// A build under consideration or just applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildContext {
    pub player: PlayerId,
    pub piece: PieceId,
    pub worker: Position,
    pub target: Position,
}

/// What the game should do after a move's base mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveFollowUp {
    /// Proceed with the normal transition.
    Continue,
    /// Put a piece lifted by the move down on `to`.
    Displace { piece: PieceId, to: Position },
}

/// What the game should do after a build's base mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildFollowUp {
    /// End the turn as usual.
    EndTurn,
    /// Stay in the build phase with the same worker. An optional extra
    /// build may be declined.
    BuildAgain { optional: bool },
}

/// Hooks a God Card may override. Every hook has a default that leaves the
/// base rules untouched.
pub trait GodPower {
    /// Card name.
    fn name(&self) -> &'static str;

    /// One-line description of the power.
    fn description(&self) -> &'static str;

    /// Observe a move before it is checked.
    fn before_move(&self, _board: &Board, _ctx: &MoveContext) {}

    /// Decide move legality.
    fn is_valid_move(&self, board: &Board, ctx: &MoveContext) -> bool {
        rules::is_legal_move(board, ctx.from, ctx.to)
    }

    /// React to an applied move. `displaced` is the piece that stood on
    /// `ctx.to` and has been lifted off the board; it must be put down
    /// again or the move is rolled back.
    fn after_move(
        &mut self,
        _board: &Board,
        _ctx: &MoveContext,
        _displaced: Option<PieceId>,
    ) -> MoveFollowUp {
        MoveFollowUp::Continue
    }

    /// Observe a build before it is checked.
    fn before_build(&self, _board: &Board, _ctx: &BuildContext) {}

    /// Decide build legality.
    fn is_valid_build(&self, board: &Board, ctx: &BuildContext) -> bool {
        rules::is_legal_build(board, ctx.worker, ctx.target)
    }

    /// React to an applied build.
    fn after_build(&mut self, _board: &Board, _ctx: &BuildContext) -> BuildFollowUp {
        BuildFollowUp::EndTurn
    }

    /// Drop any per-turn memory.
    fn end_turn(&mut self) {}
}
