//! Players (sides) and per-player storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data backed by a `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A side: colour, display name, owned pieces, placement progress and the
//! optional ability bound to it for the whole game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::entity::PieceId;
use crate::abilities::Ability;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one, wrapping around `player_count`.
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_santorini::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_santorini::core::{PlayerId, PlayerMap};
///
/// let mut placed: PlayerMap<usize> = PlayerMap::new(2, |_| 0);
/// placed[PlayerId::new(1)] += 1;
/// assert_eq!(placed[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with one entry per player from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, `None` for an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's entry mutably, `None` for an unknown player.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all entries mutably.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Display colour of a player, cycled in setup order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
}

impl PlayerColor {
    /// Setup order of colours.
    pub const CYCLE: [PlayerColor; 6] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Magenta,
        PlayerColor::Cyan,
    ];

    /// Colour assigned to a player; wraps after six players.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Self {
        Self::CYCLE[player.index() % Self::CYCLE.len()]
    }
}

/// A side in the game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub color: PlayerColor,

    /// Display name ("Player 1", "Player 2", ...).
    pub name: String,

    /// Owned pieces in placement order.
    pub pieces: SmallVec<[PieceId; 4]>,

    /// How many of `pieces` are on the board.
    pub placed: usize,

    /// God Card bound at setup, if any.
    pub ability: Option<Ability>,
}

impl Player {
    /// Create a player owning `pieces`, none of them placed yet.
    pub fn new(id: PlayerId, pieces: impl IntoIterator<Item = PieceId>) -> Self {
        Self {
            id,
            color: PlayerColor::for_player(id),
            name: id.to_string(),
            pieces: pieces.into_iter().collect(),
            placed: 0,
            ability: None,
        }
    }

    /// The next piece waiting to be placed.
    #[must_use]
    pub fn next_unplaced(&self) -> Option<PieceId> {
        self.pieces.get(self.placed).copied()
    }

    /// Whether every owned piece is on the board.
    #[must_use]
    pub fn all_placed(&self) -> bool {
        self.placed >= self.pieces.len()
    }

    /// Whether this player owns `piece`.
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }

    /// Display name of the `slot`-th piece ("Player 1 Piece 2").
    #[must_use]
    pub fn piece_name(&self, slot: usize) -> String {
        format!("{} Piece {}", self.name, slot + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    }

    #[test]
    fn test_player_id_display_is_one_based() {
        assert_eq!(format!("{}", PlayerId::new(0)), "Player 1");
        assert_eq!(format!("{}", PlayerId::new(3)), "Player 4");
    }

    #[test]
    fn test_player_map_access() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32 * 10);

        assert_eq!(map.player_count(), 3);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert!(map.get(PlayerId::new(3)).is_none());

        map[PlayerId::new(0)] = 5;
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p.index(), *v)).collect();
        assert_eq!(pairs, vec![(0, 5), (1, 10), (2, 20)]);
    }

    #[test]
    fn test_color_cycle() {
        assert_eq!(PlayerColor::for_player(PlayerId::new(0)), PlayerColor::Red);
        assert_eq!(PlayerColor::for_player(PlayerId::new(1)), PlayerColor::Blue);
        assert_eq!(PlayerColor::for_player(PlayerId::new(6)), PlayerColor::Red);
    }

    #[test]
    fn test_player_placement_progress() {
        let mut player = Player::new(PlayerId::new(1), [PieceId(2), PieceId(3)]);

        assert_eq!(player.name, "Player 2");
        assert_eq!(player.next_unplaced(), Some(PieceId(2)));
        assert!(!player.all_placed());

        player.placed = 2;
        assert_eq!(player.next_unplaced(), None);
        assert!(player.all_placed());
        assert!(player.owns(PieceId(3)));
        assert!(!player.owns(PieceId(0)));
        assert_eq!(player.piece_name(1), "Player 2 Piece 2");
    }
}
