//! The game: placement, turns, moves, builds and win detection.
//!
//! `Game` owns the board, the players and the turn state, and is the only
//! entry point that mutates any of them. Each mutating call:
//!
//! 1. checks the game is not over, the stage is right and the caller's
//!    piece belongs to the current player;
//! 2. runs the acting player's pre-hook and legality check (the ability's,
//!    or the base rules);
//! 3. applies the change to a staged copy of the board, runs the post-hook
//!    and applies its follow-up;
//! 4. commits the staged board only if it is still consistent, then
//!    decides the next phase or turn.
//!
//! A rejected call returns an error and leaves everything untouched.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::abilities::{Ability, BuildContext, BuildFollowUp, GodPower, MoveContext, MoveFollowUp};
use crate::board::{Board, Cell, Neighbors, Piece, Position};
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, PieceId, Phase, Player, PlayerId,
    PlayerMap, Stage, TurnState,
};
use crate::rules;

/// Result of an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Placement continues with `next`.
    Placed { next: PlayerId },
    /// That was the last piece; play has started with player 0 to move.
    Started,
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The same piece has moves left this turn.
    MoveAgain { moves_remaining: u32 },
    /// The mover must now build.
    Build,
    /// The move climbed onto the third level; the game is over.
    Won(PlayerId),
}

/// Result of an accepted build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOutcome {
    /// The turn is over; `next` moves.
    TurnPassed { next: PlayerId },
    /// The ability grants another build with the same worker.
    BuildAgain { optional: bool },
}

/// A game in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerMap<Player>,
    turn: TurnState,
}

impl Game {
    /// Set up a game in the placement stage.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let per = config.pieces_per_player;
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, (0..per).map(|slot| PieceId::for_player(id, slot, per)))
        });

        info!(
            grid = config.grid_size,
            players = config.player_count,
            pieces = per,
            "game configured"
        );

        Ok(Self {
            board: Board::new(&config),
            turn: TurnState::new(config.player_count, config.moves_per_turn),
            players,
            config,
        })
    }

    /// Bind a God Card to a player. Only allowed during placement, once.
    pub fn assign_ability(&mut self, player: PlayerId, ability: Ability) -> Result<(), GameError> {
        self.ensure_stage(Stage::Placing)?;
        let entry = self
            .players
            .get_mut(player)
            .ok_or(GameError::UnknownPlayer(player))?;
        if entry.ability.is_some() {
            return Err(GameError::AbilityAlreadyAssigned(player));
        }
        debug!(%player, %ability, "ability assigned");
        entry.ability = Some(ability);
        Ok(())
    }

    /// Raise a cell before play begins, for puzzles and fixed openings.
    pub(crate) fn stage_height(&mut self, pos: Position, level: u8) -> Result<(), GameError> {
        self.ensure_stage(Stage::Placing)?;
        self.board.set_height(pos, level)
    }

    // === State queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell at (`row`, `col`).
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell, GameError> {
        self.board.grid().cell_at(row, col)
    }

    pub fn piece(&self, id: PieceId) -> Result<&Piece, GameError> {
        self.board.piece(id)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players.get(id).ok_or(GameError::UnknownPlayer(id))
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().map(|(_, p)| p)
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.turn.stage()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.turn.started
    }

    /// The player expected to act: the placer during placement, otherwise
    /// the player whose turn it is (the winner once the game is over).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn
            .placing_player()
            .unwrap_or(self.turn.current_player)
    }

    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.turn.selected
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.turn.moves_remaining
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.turn.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.turn.winner
    }

    /// Every accepted action so far.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.turn.history.iter()
    }

    /// A player's God Card.
    #[must_use]
    pub fn ability_of(&self, player: PlayerId) -> Option<&Ability> {
        self.players.get(player).and_then(|p| p.ability.as_ref())
    }

    // === Legality queries ===

    /// Cells the piece could move to right now under its owner's rules.
    pub fn legal_moves(&self, piece: PieceId) -> Result<Neighbors, GameError> {
        let (owner, from) = self.placed_piece(piece)?;
        let ability = self.ability_of(owner);

        Ok(rules::legal_targets(&self.board, from, |to| {
            let ctx = MoveContext {
                player: owner,
                piece,
                from,
                to,
            };
            move_allowed(&self.board, ability, &ctx)
        }))
    }

    /// Cells the piece could build on right now under its owner's rules.
    pub fn legal_builds(&self, piece: PieceId) -> Result<Neighbors, GameError> {
        let (owner, worker) = self.placed_piece(piece)?;
        let ability = self.ability_of(owner);

        Ok(rules::legal_targets(&self.board, worker, |target| {
            let ctx = BuildContext {
                player: owner,
                piece,
                worker,
                target,
            };
            build_allowed(&self.board, ability, &ctx)
        }))
    }

    /// Whether any of the player's pieces can move. A player with no legal
    /// move is trapped; the game only reports it (see `is_trapped`).
    #[must_use]
    pub fn has_any_legal_move(&self, player: PlayerId) -> bool {
        let ability = self.ability_of(player);
        self.board.placed_pieces(player).any(|piece| {
            let Some(from) = piece.position else {
                return false;
            };
            self.board.grid().neighbors(from).into_iter().any(|to| {
                let ctx = MoveContext {
                    player,
                    piece: piece.id,
                    from,
                    to,
                };
                move_allowed(&self.board, ability, &ctx)
            })
        })
    }

    /// Whether the current player is stuck: no legal move in the move
    /// phase, or no legal build for the selected worker in the build phase
    /// (possible after a forced swap).
    #[must_use]
    pub fn is_trapped(&self) -> bool {
        match self.stage() {
            Stage::Move => !self.has_any_legal_move(self.turn.current_player),
            Stage::Build => self
                .turn
                .selected
                .and_then(|piece| self.legal_builds(piece).ok())
                .map_or(true, |targets| targets.is_empty()),
            Stage::Placing | Stage::GameOver => false,
        }
    }

    /// Cells a view should emphasise for the current stage.
    #[must_use]
    pub fn highlights(&self) -> FxHashSet<Position> {
        match self.stage() {
            Stage::Placing => self
                .board
                .grid()
                .cells()
                .filter(|c| c.is_empty() && !c.has_dome())
                .map(|c| c.pos)
                .collect(),
            Stage::Move => match self.turn.selected {
                Some(piece) => self.legal_moves(piece).unwrap_or_default().into_iter().collect(),
                None => self
                    .board
                    .placed_pieces(self.turn.current_player)
                    .filter_map(|p| p.position)
                    .collect(),
            },
            Stage::Build => self
                .turn
                .selected
                .and_then(|piece| self.legal_builds(piece).ok())
                .unwrap_or_default()
                .into_iter()
                .collect(),
            Stage::GameOver => FxHashSet::default(),
        }
    }

    // === Placement ===

    /// Place `player`'s next unplaced piece on (`row`, `col`).
    #[instrument(level = "debug", skip(self))]
    pub fn place_piece(
        &mut self,
        player: PlayerId,
        row: i32,
        col: i32,
    ) -> Result<PlaceOutcome, GameError> {
        self.ensure_stage(Stage::Placing)?;
        let placer = self.current_player();
        let entry = self.player(player)?;
        if player != placer {
            return Err(GameError::NotYourTurn(player));
        }
        let piece = entry
            .next_unplaced()
            .ok_or(GameError::NotYourTurn(player))?;

        let at = Position::new(row, col);
        let cell = self.board.cell(at)?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied(at));
        }
        if cell.has_dome() {
            return Err(GameError::DomedCell(at));
        }
        self.board.put_down(piece, at)?;
        self.turn.record(player, Action::Place { piece, at });

        let entry = &mut self.players[player];
        entry.placed += 1;
        debug!(%player, %piece, %at, "piece placed");

        if entry.all_placed() && self.turn.advance_placement() {
            info!("all pieces placed, play begins");
            return Ok(PlaceOutcome::Started);
        }
        Ok(PlaceOutcome::Placed {
            next: self.current_player(),
        })
    }

    // === Selection ===

    /// Choose the piece that acts this turn.
    pub fn select_piece(&mut self, piece: PieceId) -> Result<(), GameError> {
        self.ensure_stage(Stage::Move)?;
        self.check_actor(piece)?;
        self.turn.selected = Some(piece);
        Ok(())
    }

    /// Drop the selection. Only possible before the selected piece has
    /// moved; returns whether anything changed.
    pub fn clear_selection(&mut self) -> bool {
        if self.stage() != Stage::Move || self.turn.has_moved() || self.turn.selected.is_none() {
            return false;
        }
        self.turn.selected = None;
        true
    }

    // === Move ===

    /// Move `piece` to (`row`, `col`).
    #[instrument(level = "debug", skip(self))]
    pub fn move_piece(
        &mut self,
        piece: PieceId,
        row: i32,
        col: i32,
    ) -> Result<MoveOutcome, GameError> {
        self.ensure_stage(Stage::Move)?;
        let (player, from) = self.check_actor(piece)?;
        let to = Position::new(row, col);
        if !self.board.contains(to) {
            return Err(GameError::OutOfBounds(to));
        }

        let ctx = MoveContext {
            player,
            piece,
            from,
            to,
        };
        let mut ability = self.players[player].ability;
        if let Some(power) = &ability {
            power.before_move(&self.board, &ctx);
        }
        if !move_allowed(&self.board, ability.as_ref(), &ctx) {
            debug!(%piece, %from, %to, "move rejected");
            return Err(GameError::IllegalMove { from, to });
        }

        let from_height = self.board.cell(from)?.height;
        let to_height = self.board.cell(to)?.height;
        let (board, displaced) = stage_move(&self.board, &ctx, ability.as_mut())?;

        // Commit.
        self.board = board;
        self.players[player].ability = ability;
        self.turn.selected = Some(piece);
        self.turn.record(player, Action::Move { piece, from, to });
        if let Some(other) = displaced {
            self.turn.record(
                player,
                Action::Displace {
                    piece: other,
                    from: to,
                    to: from,
                },
            );
        }
        debug!(%player, %piece, %from, %to, "piece moved");

        if rules::is_winning_climb(from_height, to_height) {
            self.finish(player);
            return Ok(MoveOutcome::Won(player));
        }

        self.turn.spend_move();
        let can_continue = self
            .legal_moves(piece)
            .map(|moves| !moves.is_empty())
            .unwrap_or(false);
        if self.turn.moves_remaining > 0 && can_continue {
            return Ok(MoveOutcome::MoveAgain {
                moves_remaining: self.turn.moves_remaining,
            });
        }

        self.turn.enter_build();
        Ok(MoveOutcome::Build)
    }

    // === Build ===

    /// Build on (`row`, `col`) with the selected piece.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, row: i32, col: i32) -> Result<BuildOutcome, GameError> {
        self.ensure_stage(Stage::Build)?;
        let piece = self.turn.selected.ok_or(GameError::NoSelection)?;
        let (player, worker) = self.check_actor(piece)?;
        let target = Position::new(row, col);
        if !self.board.contains(target) {
            return Err(GameError::OutOfBounds(target));
        }

        let ctx = BuildContext {
            player,
            piece,
            worker,
            target,
        };
        let mut ability = self.players[player].ability;
        if let Some(power) = &ability {
            power.before_build(&self.board, &ctx);
        }
        if !build_allowed(&self.board, ability.as_ref(), &ctx) {
            debug!(%piece, %worker, %target, "build rejected");
            return Err(GameError::IllegalBuild { worker, target });
        }

        let mut board = self.board.clone();
        let level = board.raise(target)?;
        let follow_up = match ability.as_mut() {
            Some(power) => power.after_build(&board, &ctx),
            None => BuildFollowUp::EndTurn,
        };

        // Commit.
        self.board = board;
        self.players[player].ability = ability;
        self.turn.record(
            player,
            Action::Build {
                piece,
                at: target,
                level,
            },
        );
        debug!(%player, %target, level, "built");

        if let BuildFollowUp::BuildAgain { optional } = follow_up {
            let can_build = self
                .legal_builds(piece)
                .map(|targets| !targets.is_empty())
                .unwrap_or(false);
            if can_build {
                self.turn.optional_build = optional;
                return Ok(BuildOutcome::BuildAgain { optional });
            }
        }

        Ok(BuildOutcome::TurnPassed {
            next: self.pass_turn(),
        })
    }

    /// Decline an optional extra build and end the turn.
    pub fn pass_extra_build(&mut self) -> Result<BuildOutcome, GameError> {
        self.ensure_stage(Stage::Build)?;
        if !self.turn.optional_build {
            return Err(GameError::NoOptionalBuild);
        }
        Ok(BuildOutcome::TurnPassed {
            next: self.pass_turn(),
        })
    }

    // === Internals ===

    fn ensure_stage(&self, expected: Stage) -> Result<(), GameError> {
        match self.stage() {
            Stage::GameOver => Err(GameError::GameOver),
            actual if actual != expected => Err(GameError::WrongPhase { expected, actual }),
            _ => Ok(()),
        }
    }

    /// Owner and position of a piece on the board.
    fn placed_piece(&self, piece: PieceId) -> Result<(PlayerId, Position), GameError> {
        let entry = self.board.piece(piece)?;
        let pos = entry.position.ok_or(GameError::UnknownPiece(piece))?;
        Ok((entry.owner, pos))
    }

    /// Check `piece` may act for the current player this turn.
    fn check_actor(&self, piece: PieceId) -> Result<(PlayerId, Position), GameError> {
        let (owner, pos) = self.placed_piece(piece)?;
        if owner != self.turn.current_player {
            return Err(GameError::NotYourTurn(owner));
        }
        match self.turn.selected {
            Some(selected) if selected != piece && self.turn.has_moved() => {
                Err(GameError::SelectionLocked(selected))
            }
            _ => Ok((owner, pos)),
        }
    }

    /// End the current turn, resetting the player's per-turn ability state.
    fn pass_turn(&mut self) -> PlayerId {
        let player = self.turn.current_player;
        if let Some(power) = self.players[player].ability.as_mut() {
            power.end_turn();
        }
        self.turn.pass_turn();
        debug!(%player, next = %self.turn.current_player, "turn passed");
        self.turn.current_player
    }

    fn finish(&mut self, winner: PlayerId) {
        for power in self.players.values_mut().filter_map(|p| p.ability.as_mut()) {
            power.end_turn();
        }
        self.turn.end_game(winner);
        info!(%winner, "game over");
    }
}

fn move_allowed(board: &Board, ability: Option<&Ability>, ctx: &MoveContext) -> bool {
    match ability {
        Some(power) => power.is_valid_move(board, ctx),
        None => rules::is_legal_move(board, ctx.from, ctx.to),
    }
}

fn build_allowed(board: &Board, ability: Option<&Ability>, ctx: &BuildContext) -> bool {
    match ability {
        Some(power) => power.is_valid_build(board, ctx),
        None => rules::is_legal_build(board, ctx.worker, ctx.target),
    }
}

/// Apply a checked move to a copy of the board, including the ability's
/// follow-up. Fails if the follow-up leaves a piece off the board or the
/// board inconsistent; the original board is never touched.
fn stage_move(
    board: &Board,
    ctx: &MoveContext,
    ability: Option<&mut Ability>,
) -> Result<(Board, Option<PieceId>), GameError> {
    let illegal = GameError::IllegalMove {
        from: ctx.from,
        to: ctx.to,
    };
    let mut staged = board.clone();

    let displaced = staged.cell(ctx.to)?.occupant;
    if let Some(other) = displaced {
        staged.lift(other)?;
    }
    staged.relocate(ctx.piece, ctx.to)?;

    let follow_up = match ability {
        Some(power) => power.after_move(&staged, ctx, displaced),
        None => MoveFollowUp::Continue,
    };
    match follow_up {
        MoveFollowUp::Continue => {}
        MoveFollowUp::Displace { piece, to } if Some(piece) == displaced => {
            staged.put_down(piece, to).map_err(|_| illegal.clone())?;
        }
        MoveFollowUp::Displace { .. } => return Err(illegal),
    }

    let stranded = displaced
        .map(|other| staged.piece(other).map(|p| !p.is_placed()))
        .transpose()?
        .unwrap_or(false);
    if stranded || !staged.is_consistent() {
        return Err(illegal);
    }
    Ok((staged, displaced))
}
