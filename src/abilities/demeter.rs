//! Demeter: build one additional time, but not on the same space.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::power::{BuildContext, BuildFollowUp, GodPower};
use crate::board::{Board, Position};
use crate::rules;

/// Demeter's power with its per-turn memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demeter {
    built_once: bool,
    last_build: Option<Position>,
}

impl Demeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first build of this turn has happened.
    #[must_use]
    pub fn built_once(&self) -> bool {
        self.built_once
    }

    /// Cell of the first build this turn.
    #[must_use]
    pub fn last_build(&self) -> Option<Position> {
        self.last_build
    }

    fn reset(&mut self) {
        self.built_once = false;
        self.last_build = None;
    }
}

impl GodPower for Demeter {
    fn name(&self) -> &'static str {
        "Demeter"
    }

    fn description(&self) -> &'static str {
        "Your worker may build one additional time, but not on the same space."
    }

    fn is_valid_build(&self, board: &Board, ctx: &BuildContext) -> bool {
        if self.built_once && self.last_build == Some(ctx.target) {
            return false;
        }
        rules::is_legal_build(board, ctx.worker, ctx.target)
    }

    fn after_build(&mut self, _board: &Board, ctx: &BuildContext) -> BuildFollowUp {
        if self.built_once {
            self.reset();
            BuildFollowUp::EndTurn
        } else {
            trace!(cell = %ctx.target, "demeter offers a second build");
            self.built_once = true;
            self.last_build = Some(ctx.target);
            BuildFollowUp::BuildAgain { optional: true }
        }
    }

    fn end_turn(&mut self) {
        self.reset();
    }
}
