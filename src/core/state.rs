//! Turn and phase state: the single source of orchestration truth.
//!
//! ## Lifecycle
//!
//! ```text
//! Placing ──(last piece placed)──▶ Move ⇄ Build ──(build done)──▶ next player's Move
//!                                   │
//!                                   └──(winning move)──▶ GameOver
//! ```
//!
//! `TurnState` records where the game is in that cycle. It never looks at
//! the board; the engine decides when to call each transition.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::entity::PieceId;
use super::player::PlayerId;

/// Sub-step of a player's turn once play has started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Move,
    Build,
}

/// Coarse view of the whole game for callers and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Placing,
    Move,
    Build,
    GameOver,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Placing => "placement",
            Stage::Move => "move",
            Stage::Build => "build",
            Stage::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Whose turn it is, which phase they are in, and how the game ended.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnState {
    player_count: usize,
    moves_per_turn: u32,

    /// False during placement, true once every piece is placed. Cleared
    /// again when the game ends.
    pub started: bool,

    /// Index of the player placing; meaningful only before the start.
    pub placement_index: usize,

    /// Player whose turn it is; meaningful only after the start.
    pub current_player: PlayerId,

    pub phase: Phase,

    /// Piece acting this turn. Always owned by `current_player`.
    pub selected: Option<PieceId>,

    /// Moves left for the selected piece this turn.
    pub moves_remaining: u32,

    /// Set while an ability offers a build the player may decline.
    pub optional_build: bool,

    pub game_over: bool,
    pub winner: Option<PlayerId>,

    /// Turn number: 0 during placement, 1 for the first turn of play.
    pub turn_number: u32,

    /// Action sequence within the turn.
    pub action_sequence: u32,

    /// Every accepted action, oldest first.
    pub history: Vector<ActionRecord>,
}

impl TurnState {
    /// Fresh placement state: player 0 places first.
    #[must_use]
    pub fn new(player_count: usize, moves_per_turn: u32) -> Self {
        Self {
            player_count,
            moves_per_turn,
            started: false,
            placement_index: 0,
            current_player: PlayerId::new(0),
            phase: Phase::Move,
            selected: None,
            moves_remaining: 0,
            optional_build: false,
            game_over: false,
            winner: None,
            turn_number: 0,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn moves_per_turn(&self) -> u32 {
        self.moves_per_turn
    }

    /// Where the game is right now.
    #[must_use]
    pub fn stage(&self) -> Stage {
        if self.game_over {
            Stage::GameOver
        } else if !self.started {
            Stage::Placing
        } else {
            match self.phase {
                Phase::Move => Stage::Move,
                Phase::Build => Stage::Build,
            }
        }
    }

    /// The player placing pieces, while placement lasts.
    #[must_use]
    pub fn placing_player(&self) -> Option<PlayerId> {
        (self.stage() == Stage::Placing && self.placement_index < self.player_count)
            .then(|| PlayerId::new(self.placement_index as u8))
    }

    /// Whether the current player has already moved this turn.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.started && (self.phase == Phase::Build || self.moves_remaining < self.moves_per_turn)
    }

    // === Transitions ===

    /// Hand placement to the next player. Returns true once every player
    /// has placed, at which point play starts.
    pub fn advance_placement(&mut self) -> bool {
        self.placement_index += 1;
        if self.placement_index >= self.player_count {
            self.start();
            true
        } else {
            false
        }
    }

    /// Irreversibly leave placement: player 0 moves first.
    pub fn start(&mut self) {
        self.started = true;
        self.current_player = PlayerId::new(0);
        self.phase = Phase::Move;
        self.selected = None;
        self.moves_remaining = self.moves_per_turn;
        self.optional_build = false;
        self.turn_number = 1;
        self.action_sequence = 0;
    }

    /// Spend one move of the current turn.
    pub fn spend_move(&mut self) {
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
    }

    /// Enter the build phase for the same player and piece.
    pub fn enter_build(&mut self) {
        self.phase = Phase::Build;
        self.moves_remaining = 0;
    }

    /// End the current player's turn and hand it to the next player.
    pub fn pass_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count);
        self.phase = Phase::Move;
        self.selected = None;
        self.moves_remaining = self.moves_per_turn;
        self.optional_build = false;
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Terminate the game. Nothing mutates the state afterwards.
    pub fn end_game(&mut self, winner: PlayerId) {
        self.game_over = true;
        self.winner = Some(winner);
        self.started = false;
        self.selected = None;
        self.moves_remaining = 0;
        self.optional_build = false;
    }

    // === History ===

    /// Append an action under the current turn.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }
}
