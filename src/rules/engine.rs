//! Base movement and build legality.
//!
//! Pure functions over a `Board`. They know nothing about turns or
//! abilities: the game calls them directly for players without a God Card,
//! and abilities call them to relax or tighten the default rules.

use crate::board::{Board, Neighbors, Position, DOME_LEVEL, WIN_LEVEL};

/// A piece may climb at most one level per step; descending is free.
#[must_use]
pub fn can_climb(from_height: u8, to_height: u8) -> bool {
    u16::from(to_height) <= u16::from(from_height) + 1
}

/// Stepping up onto the third level from below wins the game.
#[must_use]
pub fn is_winning_climb(from_height: u8, to_height: u8) -> bool {
    from_height < WIN_LEVEL && to_height == WIN_LEVEL
}

/// Whether a piece standing on `from` may step to `to`.
///
/// Legal iff `to` is on the board, unoccupied, not domed, exactly one king
/// step away, and at most one level higher than `from`.
#[must_use]
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    let (Ok(source), Ok(target)) = (board.cell(from), board.cell(to)) else {
        return false;
    };

    target.is_empty()
        && !target.has_dome()
        && from.is_adjacent(to)
        && can_climb(source.height, target.height)
}

/// Whether a worker standing on `worker` may build on `target`.
///
/// Legal iff `target` is on the board, exactly one king step away,
/// unoccupied, and below dome height. The worker's own height is irrelevant.
#[must_use]
pub fn is_legal_build(board: &Board, worker: Position, target: Position) -> bool {
    if !board.contains(worker) {
        return false;
    }
    let Ok(cell) = board.cell(target) else {
        return false;
    };

    worker.is_adjacent(target) && cell.is_empty() && cell.height < DOME_LEVEL
}

/// Neighbours of `origin` accepted by `legal`.
pub fn legal_targets(
    board: &Board,
    origin: Position,
    mut legal: impl FnMut(Position) -> bool,
) -> Neighbors {
    board
        .grid()
        .neighbors(origin)
        .into_iter()
        .filter(|&to| legal(to))
        .collect()
}
