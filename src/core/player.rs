//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and follow seat order:
//! the player in seat 0 is `PlayerId(1)`.
//!
//! ## Player
//!
//! Name, color, and running number of one seat. Only `current_number`
//! ever changes after bootstrap.

use serde::{Deserialize, Serialize};

/// Most seats a table can have; ids are `1..=MAX_SEATS`.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Player identifier, positive and stable for the session's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The id of the player sitting in `seat` (0-based).
    ///
    /// `None` past the last seat an id can name (`MAX_SEATS`).
    #[must_use]
    pub fn for_seat(seat: usize) -> Option<Self> {
        u8::try_from(seat).ok()?.checked_add(1).map(Self)
    }

    /// The 0-based seat index of this player. `None` for `PlayerId(0)`.
    #[must_use]
    pub fn seat(self) -> Option<usize> {
        self.0.checked_sub(1).map(usize::from)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// Stops at `MAX_SEATS`.
    ///
    /// ```
    /// use dice_target::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map_while(PlayerId::for_seat)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Seat color. Assigned by seat index from the configured palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl PlayerColor {
    /// The default four-seat palette.
    pub const DEFAULT_PALETTE: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
    ];

    /// CSS-style hex code for rendering.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            PlayerColor::Red => "#ef4444",
            PlayerColor::Blue => "#3b82f6",
            PlayerColor::Green => "#22c55e",
            PlayerColor::Yellow => "#eab308",
            PlayerColor::Purple => "#a855f7",
            PlayerColor::Orange => "#f97316",
        }
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier (seat + 1).
    pub id: PlayerId,

    /// Display name, never empty.
    pub name: String,

    /// Running number the player tries to steer onto the target.
    pub current_number: i64,

    /// Seat color.
    pub color: PlayerColor,
}

impl Player {
    /// Create the player `id`.
    ///
    /// A missing or blank name falls back to "Player N". Names are trimmed.
    #[must_use]
    pub fn new(id: PlayerId, name: Option<&str>, starting_number: i64, color: PlayerColor) -> Self {
        let name = match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => id.to_string(),
        };

        Self {
            id,
            name,
            current_number: starting_number,
            color,
        }
    }

    /// A copy of this player with a new running number.
    #[must_use]
    pub fn with_number(&self, current_number: i64) -> Self {
        Self {
            current_number,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::for_seat(0).unwrap();
        let p2 = PlayerId::for_seat(1).unwrap();

        assert_eq!(p1, PlayerId::new(1));
        assert_eq!(p1.seat(), Some(0));
        assert_eq!(p2.seat(), Some(1));
        assert_eq!(format!("{}", p2), "Player 2");
    }

    #[test]
    fn test_player_id_edges() {
        assert_eq!(PlayerId::for_seat(MAX_SEATS - 1), Some(PlayerId::new(u8::MAX)));
        assert_eq!(PlayerId::for_seat(MAX_SEATS), None);
        assert_eq!(PlayerId::for_seat(usize::MAX), None);
        assert_eq!(PlayerId::new(0).seat(), None);
        assert_eq!(PlayerId::new(u8::MAX).seat(), Some(MAX_SEATS - 1));
        assert_eq!(PlayerId::all(MAX_SEATS + 10).count(), MAX_SEATS);
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(1));
        assert_eq!(players[3], PlayerId::new(4));
    }

    #[test]
    fn test_player_name_fallback() {
        let named = Player::new(PlayerId::new(1), Some("  Ada "), 5, PlayerColor::Red);
        assert_eq!(named.name, "Ada");

        let blank = Player::new(PlayerId::new(2), Some("   "), 5, PlayerColor::Blue);
        assert_eq!(blank.name, "Player 2");

        let missing = Player::new(PlayerId::new(3), None, 5, PlayerColor::Green);
        assert_eq!(missing.name, "Player 3");
        assert_eq!(missing.current_number, 5);
    }

    #[test]
    fn test_with_number_keeps_identity() {
        let player = Player::new(PlayerId::new(1), Some("Ada"), 5, PlayerColor::Red);
        let moved = player.with_number(42);

        assert_eq!(moved.current_number, 42);
        assert_eq!(moved.id, player.id);
        assert_eq!(moved.name, player.name);
        assert_eq!(moved.color, player.color);
        assert_eq!(player.current_number, 5);
    }

    #[test]
    fn test_default_palette_distinct() {
        let palette = PlayerColor::DEFAULT_PALETTE;
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.hex(), b.hex());
            }
        }
    }
}
