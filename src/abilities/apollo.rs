//! Apollo: move into an opponent's space by forcing their worker into the
//! space just vacated.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::power::{GodPower, MoveContext, MoveFollowUp};
use crate::board::Board;
use crate::core::PieceId;
use crate::rules;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apollo;

impl GodPower for Apollo {
    fn name(&self) -> &'static str {
        "Apollo"
    }

    fn description(&self) -> &'static str {
        "Your worker may move into an opponent worker's space by forcing their worker to the space yours just vacated."
    }

    /// Base rules for empty cells. An opponent-occupied cell is also
    /// accepted when it is adjacent and the climb onto it is at most one
    /// level; the player's own pieces still block.
    fn is_valid_move(&self, board: &Board, ctx: &MoveContext) -> bool {
        let Ok(Some(occupant)) = board.occupant(ctx.to) else {
            return rules::is_legal_move(board, ctx.from, ctx.to);
        };
        if occupant.owner == ctx.player {
            return false;
        }
        let (Some(from_height), Some(to_height)) = (board.height(ctx.from), board.height(ctx.to))
        else {
            return false;
        };

        ctx.from.is_adjacent(ctx.to) && rules::can_climb(from_height, to_height)
    }

    fn after_move(
        &mut self,
        _board: &Board,
        ctx: &MoveContext,
        displaced: Option<PieceId>,
    ) -> MoveFollowUp {
        match displaced {
            Some(piece) => {
                trace!(%piece, to = %ctx.from, "apollo forces swap");
                MoveFollowUp::Displace {
                    piece,
                    to: ctx.from,
                }
            }
            None => MoveFollowUp::Continue,
        }
    }
}
