//! Single-cell input: turn a click on a cell into whichever operation the
//! current stage calls for.
//!
//! ## Dispatch
//!
//! | Stage     | Selection | Clicked cell              | Result                |
//! |-----------|-----------|---------------------------|-----------------------|
//! | placement | -         | any                       | place next piece      |
//! | move      | none      | own piece                 | select it             |
//! | move      | piece     | legal target              | move it               |
//! | move      | piece     | another own piece         | reselect (if not yet moved) |
//! | move      | piece     | anything else             | deselect (if not yet moved) |
//! | build     | piece     | any                       | build                 |
//!
//! Everything else is ignored.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::game::{BuildOutcome, Game, MoveOutcome, PlaceOutcome};
use crate::board::Position;
use crate::core::{GameError, PieceId, Stage};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    Placed(PlaceOutcome),
    Selected(PieceId),
    Deselected,
    Moved(MoveOutcome),
    Built(BuildOutcome),
    Ignored,
}

impl Game {
    /// Handle a click on (`row`, `col`).
    pub fn click(&mut self, row: i32, col: i32) -> Result<ClickOutcome, GameError> {
        let pos = Position::new(row, col);
        trace!(%pos, stage = %self.stage(), "click");

        match self.stage() {
            Stage::GameOver => Err(GameError::GameOver),
            Stage::Placing => {
                let placer = self.current_player();
                self.place_piece(placer, row, col).map(ClickOutcome::Placed)
            }
            Stage::Build => self.build(row, col).map(ClickOutcome::Built),
            Stage::Move => self.click_in_move(pos),
        }
    }

    fn click_in_move(&mut self, pos: Position) -> Result<ClickOutcome, GameError> {
        let own_piece = self
            .board()
            .occupant(pos)?
            .filter(|p| p.owner == self.turn().current_player)
            .map(|p| p.id);

        let Some(selected) = self.selected() else {
            return match own_piece {
                Some(piece) => {
                    self.select_piece(piece)?;
                    Ok(ClickOutcome::Selected(piece))
                }
                None => Ok(ClickOutcome::Ignored),
            };
        };

        if self.legal_moves(selected)?.contains(&pos) {
            return self
                .move_piece(selected, pos.row, pos.col)
                .map(ClickOutcome::Moved);
        }
        if self.turn().has_moved() {
            return Ok(ClickOutcome::Ignored);
        }
        match own_piece {
            Some(piece) if piece != selected => {
                self.select_piece(piece)?;
                Ok(ClickOutcome::Selected(piece))
            }
            _ => {
                self.clear_selection();
                Ok(ClickOutcome::Deselected)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::game::GameBuilder;

    #[test]
    fn test_click_through_a_turn() {
        let mut game = GameBuilder::new().build().unwrap();

        for (row, col) in [(0, 0), (4, 4), (0, 4)] {
            assert!(matches!(game.click(row, col), Ok(ClickOutcome::Placed(_))));
        }
        assert_eq!(
            game.click(4, 0),
            Ok(ClickOutcome::Placed(PlaceOutcome::Started))
        );

        assert_eq!(game.click(2, 2), Ok(ClickOutcome::Ignored));
        assert_eq!(game.click(0, 4), Ok(ClickOutcome::Ignored));
        assert_eq!(game.click(0, 0), Ok(ClickOutcome::Selected(PieceId(0))));
        assert_eq!(game.click(4, 4), Ok(ClickOutcome::Selected(PieceId(1))));
        assert_eq!(game.click(2, 2), Ok(ClickOutcome::Deselected));
        assert_eq!(game.selected(), None);

        game.click(0, 0).unwrap();
        assert_eq!(game.click(1, 0), Ok(ClickOutcome::Moved(MoveOutcome::Build)));
        assert_eq!(
            game.click(0, 0),
            Ok(ClickOutcome::Built(BuildOutcome::TurnPassed {
                next: PlayerId::new(1)
            }))
        );
        assert_eq!(game.cell_at(0, 0).unwrap().height, 1);
    }

    #[test]
    fn test_click_out_of_bounds() {
        let mut game = GameBuilder::new().build().unwrap();
        assert_eq!(
            game.click(-1, 2),
            Err(GameError::OutOfBounds(Position::new(-1, 2)))
        );
    }
}
