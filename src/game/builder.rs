//! Fluent setup for a `Game`.

use crate::abilities::Ability;
use crate::board::Position;
use crate::core::{ConfigError, GameConfig, GameError, PlayerId};

use super::game::Game;

/// Builder for creating a `Game`.
///
/// ```
/// use rust_santorini::abilities::Ability;
/// use rust_santorini::core::{PlayerId, Stage};
/// use rust_santorini::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .ability(PlayerId::new(0), Ability::apollo())
///     .height(2, 2, 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.stage(), Stage::Placing);
/// assert_eq!(game.cell_at(2, 2).unwrap().height, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    abilities: Vec<(PlayerId, Ability)>,
    terrain: Vec<(Position, u8)>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.config.grid_size = size;
        self
    }

    pub fn players(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn pieces_per_player(mut self, count: usize) -> Self {
        self.config.pieces_per_player = count;
        self
    }

    pub fn moves_per_turn(mut self, moves: u32) -> Self {
        self.config.moves_per_turn = moves;
        self
    }

    /// Bind a God Card to `player`.
    pub fn ability(mut self, player: PlayerId, ability: Ability) -> Self {
        self.abilities.push((player, ability));
        self
    }

    /// Start the cell at (`row`, `col`) at `level` instead of ground.
    pub fn height(mut self, row: i32, col: i32, level: u8) -> Self {
        self.terrain.push((Position::new(row, col), level));
        self
    }

    /// Validate everything and build the game in its placement stage.
    pub fn build(self) -> Result<Game, ConfigError> {
        let mut game = Game::new(self.config)?;

        for (player, ability) in self.abilities {
            game.assign_ability(player, ability).map_err(|err| match err {
                GameError::AbilityAlreadyAssigned(p) => ConfigError::DuplicateAbility(p),
                _ => ConfigError::UnknownPlayer(player),
            })?;
        }
        for (pos, level) in self.terrain {
            game.stage_height(pos, level)
                .map_err(|_| ConfigError::InvalidTerrain { pos, level })?;
        }

        Ok(game)
    }
}
