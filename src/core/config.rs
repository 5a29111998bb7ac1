//! Game configuration.
//!
//! A game is configured once, at setup, with four numbers:
//! - `grid_size`: the board is `grid_size x grid_size`
//! - `player_count`: number of sides
//! - `pieces_per_player`: pieces each side places before play begins
//! - `moves_per_turn`: moves a piece makes before it builds
//!
//! Configuration is validated before any game state is created.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported board edge.
pub const MAX_GRID_SIZE: usize = 256;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length (1-256).
    pub grid_size: usize,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Pieces owned by each player.
    pub pieces_per_player: usize,

    /// Moves per turn before the build.
    pub moves_per_turn: u32,
}

impl Default for GameConfig {
    /// The classic setup: 5x5 board, 2 players, 2 pieces each, 1 move.
    fn default() -> Self {
        Self {
            grid_size: 5,
            player_count: 2,
            pieces_per_player: 2,
            moves_per_turn: 1,
        }
    }
}

impl GameConfig {
    /// Create and validate a configuration.
    pub fn new(
        grid_size: usize,
        player_count: usize,
        pieces_per_player: usize,
        moves_per_turn: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            grid_size,
            player_count,
            pieces_per_player,
            moves_per_turn,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the pieces each player owns.
    #[must_use]
    pub fn with_pieces_per_player(mut self, count: usize) -> Self {
        self.pieces_per_player = count;
        self
    }

    /// Set the moves per turn.
    #[must_use]
    pub fn with_moves_per_turn(mut self, moves: u32) -> Self {
        self.moves_per_turn = moves;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Number of pieces across all players.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.player_count * self.pieces_per_player
    }

    /// Check every bound. Placement must be able to finish, so all pieces
    /// have to fit on the board at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > 255 {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.pieces_per_player == 0 {
            return Err(ConfigError::NoPieces);
        }
        if self.moves_per_turn == 0 {
            return Err(ConfigError::NoMoves);
        }
        if self.total_pieces() > self.cell_count() {
            return Err(ConfigError::NotEnoughCells {
                pieces: self.total_pieces(),
                cells: self.cell_count(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.player_count, 2);
        assert_eq!(config.pieces_per_player, 2);
        assert_eq!(config.moves_per_turn, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_grid_size(7)
            .with_players(3)
            .with_pieces_per_player(3)
            .with_moves_per_turn(2);

        assert_eq!(config.cell_count(), 49);
        assert_eq!(config.total_pieces(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_rejects_bad_values() {
        assert_eq!(GameConfig::new(0, 2, 2, 1), Err(ConfigError::EmptyGrid));
        assert_eq!(GameConfig::new(5, 0, 2, 1), Err(ConfigError::NoPlayers));
        assert_eq!(GameConfig::new(5, 2, 0, 1), Err(ConfigError::NoPieces));
        assert_eq!(GameConfig::new(5, 2, 2, 0), Err(ConfigError::NoMoves));
        assert_eq!(GameConfig::new(5, 300, 1, 1), Err(ConfigError::TooManyPlayers(300)));
        assert_eq!(GameConfig::new(300, 2, 2, 1), Err(ConfigError::GridTooLarge(300)));
    }

    #[test]
    fn test_pieces_must_fit() {
        assert_eq!(
            GameConfig::new(2, 3, 2, 1),
            Err(ConfigError::NotEnoughCells { pieces: 6, cells: 4 })
        );
        assert!(GameConfig::new(2, 2, 2, 1).is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_grid_size(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
