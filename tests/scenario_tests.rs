//! End-to-end games driven through the public API: placement, turn
//! rotation, winning climbs and the rejections around them.

use rust_santorini::core::{Action, GameError, Phase, PieceId, PlayerId, Stage};
use rust_santorini::board::Position;
use rust_santorini::game::{BuildOutcome, Game, GameBuilder, MoveOutcome, PlaceOutcome};

/// Place pieces in turn order from a flat list of cells.
fn place_all(game: &mut Game, cells: &[(i32, i32)]) {
    for &(row, col) in cells {
        let player = game.current_player();
        game.place_piece(player, row, col).unwrap();
    }
}

fn classic_game() -> Game {
    let mut game = GameBuilder::new().build().unwrap();
    place_all(&mut game, &[(0, 0), (4, 4), (0, 4), (4, 0)]);
    game
}

/// Test a full first turn on the classic board.
#[test]
fn test_first_turn_move_then_build() {
    let mut game = classic_game();
    assert_eq!(game.stage(), Stage::Move);
    assert_eq!(game.current_player(), PlayerId::new(0));

    // One step diagonally onto an empty ground cell
    assert_eq!(game.move_piece(PieceId(0), 1, 1), Ok(MoveOutcome::Build));
    assert_eq!(game.phase(), Phase::Build);
    assert_eq!(game.cell_at(1, 1).unwrap().occupant, Some(PieceId(0)));
    assert!(game.cell_at(0, 0).unwrap().is_empty());

    // Build on a different adjacent empty cell
    assert_eq!(game.cell_at(1, 2).unwrap().height, 0);
    assert_eq!(
        game.build(1, 2),
        Ok(BuildOutcome::TurnPassed {
            next: PlayerId::new(1)
        })
    );
    assert_eq!(game.cell_at(1, 2).unwrap().height, 1);
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.phase(), Phase::Move);
    assert_eq!(game.moves_remaining(), 1);
}

/// Test climbing from level 2 onto level 3 wins and freezes the game.
#[test]
fn test_climb_to_third_level_wins() {
    let mut game = GameBuilder::new()
        .height(1, 1, 2)
        .height(1, 2, 3)
        .build()
        .unwrap();
    place_all(&mut game, &[(1, 1), (4, 4), (0, 4), (4, 0)]);

    assert_eq!(
        game.move_piece(PieceId(0), 1, 2),
        Ok(MoveOutcome::Won(PlayerId::new(0)))
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(PlayerId::new(0)));
    assert_eq!(game.stage(), Stage::GameOver);
    assert!(!game.is_started());
    assert_eq!(game.selected(), None);
    assert_eq!(game.moves_remaining(), 0);

    let board = game.board().clone();
    let history_len = game.history().count();

    assert_eq!(game.build(0, 0), Err(GameError::GameOver));
    assert_eq!(game.build(1, 3), Err(GameError::GameOver));
    assert_eq!(game.move_piece(PieceId(1), 3, 3), Err(GameError::GameOver));
    assert_eq!(
        game.place_piece(PlayerId::new(1), 2, 2),
        Err(GameError::GameOver)
    );
    assert_eq!(game.select_piece(PieceId(1)), Err(GameError::GameOver));
    assert_eq!(game.pass_extra_build(), Err(GameError::GameOver));
    assert_eq!(game.click(2, 2), Err(GameError::GameOver));

    assert!(game.board().grid().cells().eq(board.grid().cells()));
    assert_eq!(game.history().count(), history_len);
    assert!(game.highlights().is_empty());
}

/// Test standing on level 3 already does not win again by moving across.
#[test]
fn test_level_three_to_level_three_is_not_a_win() {
    let mut game = GameBuilder::new()
        .height(1, 1, 3)
        .height(1, 2, 3)
        .build()
        .unwrap();
    place_all(&mut game, &[(1, 1), (4, 4), (0, 4), (4, 0)]);

    assert_eq!(game.move_piece(PieceId(0), 1, 2), Ok(MoveOutcome::Build));
    assert!(!game.is_over());
}

/// Test the climb limit and domes.
#[test]
fn test_climb_limit_and_domes() {
    let mut game = GameBuilder::new()
        .height(1, 0, 2)
        .height(0, 1, 4)
        .height(1, 1, 1)
        .build()
        .unwrap();
    place_all(&mut game, &[(0, 0), (4, 4), (0, 4), (4, 0)]);

    assert_eq!(
        game.move_piece(PieceId(0), 1, 0),
        Err(GameError::IllegalMove {
            from: Position::new(0, 0),
            to: Position::new(1, 0)
        })
    );
    assert!(matches!(
        game.move_piece(PieceId(0), 0, 1),
        Err(GameError::IllegalMove { .. })
    ));

    let moves = game.legal_moves(PieceId(0)).unwrap();
    assert_eq!(moves.as_slice(), &[Position::new(1, 1)]);
    assert_eq!(game.move_piece(PieceId(0), 1, 1), Ok(MoveOutcome::Build));

    // Dome and occupied cells cannot be built on
    assert!(matches!(game.build(0, 1), Err(GameError::IllegalBuild { .. })));
    assert!(matches!(game.build(1, 1), Err(GameError::IllegalBuild { .. })));
    assert_eq!(game.stage(), Stage::Build);
}

/// Test building up to a dome and no further.
#[test]
fn test_build_to_dome() {
    let mut game = GameBuilder::new().height(2, 2, 3).build().unwrap();
    place_all(&mut game, &[(0, 0), (4, 4), (0, 4), (4, 0)]);

    game.move_piece(PieceId(0), 1, 1).unwrap();
    game.build(2, 2).unwrap();
    assert_eq!(game.cell_at(2, 2).unwrap().height, 4);
    assert!(game.cell_at(2, 2).unwrap().has_dome());

    // Player 1 cannot build on the dome either
    game.move_piece(PieceId(3), 3, 1).unwrap();
    assert!(matches!(game.build(2, 2), Err(GameError::IllegalBuild { .. })));
    assert!(game.build(3, 2).is_ok());
}

/// Test pieces cannot be placed on a domed cell.
#[test]
fn test_placement_rejects_dome() {
    let mut game = GameBuilder::new().height(0, 0, 4).build().unwrap();

    assert_eq!(
        game.place_piece(PlayerId::new(0), 0, 0),
        Err(GameError::DomedCell(Position::new(0, 0)))
    );
    assert!(game.cell_at(0, 0).unwrap().is_empty());
    assert_eq!(game.player(PlayerId::new(0)).unwrap().placed, 0);
    assert_eq!(game.history().count(), 0);
    assert!(!game.highlights().contains(&Position::new(0, 0)));
    assert_eq!(game.highlights().len(), 24);

    assert!(game.place_piece(PlayerId::new(0), 0, 1).is_ok());
    assert_eq!(game.current_player(), PlayerId::new(0));
}

/// Test players cannot act out of turn.
#[test]
fn test_out_of_turn_rejections() {
    let mut game = classic_game();

    assert_eq!(
        game.move_piece(PieceId(2), 1, 4),
        Err(GameError::NotYourTurn(PlayerId::new(1)))
    );
    assert_eq!(
        game.select_piece(PieceId(3)),
        Err(GameError::NotYourTurn(PlayerId::new(1)))
    );
    assert_eq!(
        game.move_piece(PieceId(99), 1, 1),
        Err(GameError::UnknownPiece(PieceId(99)))
    );
    assert_eq!(
        game.place_piece(PlayerId::new(0), 2, 2),
        Err(GameError::WrongPhase {
            expected: Stage::Placing,
            actual: Stage::Move
        })
    );
    assert_eq!(
        game.build(1, 1),
        Err(GameError::WrongPhase {
            expected: Stage::Build,
            actual: Stage::Move
        })
    );
    assert_eq!(game.history().count(), 4);
}

/// Test placement walks through three players in order.
#[test]
fn test_three_player_placement() {
    let mut game = GameBuilder::new()
        .players(3)
        .pieces_per_player(2)
        .build()
        .unwrap();

    let expected = [0, 0, 1, 1, 2, 2];
    let cells = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0)];
    for (i, (&placer, &(row, col))) in expected.iter().zip(cells.iter()).enumerate() {
        assert_eq!(game.current_player(), PlayerId::new(placer));
        let outcome = game.place_piece(PlayerId::new(placer), row, col).unwrap();
        if i == cells.len() - 1 {
            assert_eq!(outcome, PlaceOutcome::Started);
        }
    }

    assert_eq!(game.stage(), Stage::Move);
    assert_eq!(game.current_player(), PlayerId::new(0));

    // Turns rotate through all three players
    for next in [1u8, 2, 0] {
        let player = game.current_player();
        let piece = game.board().placed_pieces(player).next().unwrap().id;
        let to = game.legal_moves(piece).unwrap()[0];
        game.move_piece(piece, to.row, to.col).unwrap();
        let at = game.legal_builds(piece).unwrap()[0];
        assert_eq!(
            game.build(at.row, at.col),
            Ok(BuildOutcome::TurnPassed {
                next: PlayerId::new(next)
            })
        );
    }
}

/// Test two moves per turn with one piece.
#[test]
fn test_multiple_moves_per_turn() {
    let mut game = GameBuilder::new().moves_per_turn(2).build().unwrap();
    place_all(&mut game, &[(0, 0), (4, 4), (0, 4), (4, 0)]);
    assert_eq!(game.moves_remaining(), 2);

    assert_eq!(
        game.move_piece(PieceId(0), 1, 1),
        Ok(MoveOutcome::MoveAgain { moves_remaining: 1 })
    );
    assert_eq!(game.phase(), Phase::Move);

    // The piece that moved is locked in for the rest of the turn
    assert_eq!(
        game.move_piece(PieceId(1), 3, 3),
        Err(GameError::SelectionLocked(PieceId(0)))
    );
    assert!(!game.clear_selection());

    assert_eq!(game.move_piece(PieceId(0), 2, 2), Ok(MoveOutcome::Build));
    assert_eq!(game.moves_remaining(), 0);
    game.build(2, 3).unwrap();
    assert_eq!(game.moves_remaining(), 2);
}

/// Test the action history.
#[test]
fn test_history() {
    let mut game = classic_game();
    game.move_piece(PieceId(0), 1, 1).unwrap();
    game.build(0, 0).unwrap();

    let records: Vec<_> = game.history().cloned().collect();
    assert_eq!(records.len(), 6);
    assert!(matches!(records[0].action, Action::Place { .. }));
    assert_eq!(records[0].turn, 0);
    assert_eq!(records[4].player, PlayerId::new(0));
    assert_eq!(records[4].turn, 1);
    assert_eq!(records[5].sequence, records[4].sequence + 1);
}

/// Test trapped detection is advisory.
#[test]
fn test_trapped_player_is_reported() {
    let mut game = GameBuilder::new()
        .pieces_per_player(1)
        .height(0, 1, 4)
        .height(1, 0, 4)
        .height(1, 1, 4)
        .build()
        .unwrap();
    place_all(&mut game, &[(0, 0), (4, 4)]);

    assert!(game.is_trapped());
    assert!(!game.has_any_legal_move(PlayerId::new(0)));
    assert!(game.has_any_legal_move(PlayerId::new(1)));
    assert!(game.legal_moves(PieceId(0)).unwrap().is_empty());
    assert!(!game.is_over());
}

/// Test a game survives a JSON round trip mid-turn.
#[test]
fn test_serialize_mid_turn() {
    let mut game = classic_game();
    game.move_piece(PieceId(0), 1, 1).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let mut restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.stage(), Stage::Build);
    assert_eq!(restored.selected(), Some(PieceId(0)));
    assert!(restored.build(1, 2).is_ok());
}
