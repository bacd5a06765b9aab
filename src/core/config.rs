//! Rules configuration.
//!
//! `RulesConfig` carries every constant of the game: starting number,
//! target range, table size, timer windows, and the seat palette. The
//! defaults are the standard game; builders and `from_json` exist so a
//! host can tune them.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use super::player::{PlayerColor, MAX_SEATS};

/// Every player's number at the start of a session.
pub const STARTING_NUMBER: i64 = 5;

/// Lowest possible target.
pub const TARGET_MIN: i64 = 50;

/// Highest possible target.
pub const TARGET_MAX: i64 = 500;

/// Seconds a player has to choose an operation before one is forced.
pub const DEFAULT_TURN_SECONDS: u32 = 5;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Every player's number at bootstrap.
    pub starting_number: i64,

    /// Closed range the target is drawn from.
    pub target_range: (i64, i64),

    /// Smallest table.
    pub min_players: usize,

    /// Largest table.
    pub max_players: usize,

    /// Countdown for the dice-operation phase.
    pub dice_operation_seconds: u32,

    /// Countdown for the final-operation phase.
    pub final_operation_seconds: u32,

    /// Seat colors, indexed by seat.
    pub palette: Vec<PlayerColor>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_number: STARTING_NUMBER,
            target_range: (TARGET_MIN, TARGET_MAX),
            min_players: 2,
            max_players: 4,
            dice_operation_seconds: DEFAULT_TURN_SECONDS,
            final_operation_seconds: DEFAULT_TURN_SECONDS,
            palette: PlayerColor::DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl RulesConfig {
    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the starting number.
    #[must_use]
    pub fn with_starting_number(mut self, number: i64) -> Self {
        self.starting_number = number;
        self
    }

    /// Set the target range (closed).
    #[must_use]
    pub fn with_target_range(mut self, low: i64, high: i64) -> Self {
        self.target_range = (low, high);
        self
    }

    /// Set both timer windows.
    #[must_use]
    pub fn with_turn_seconds(mut self, dice_operation: u32, final_operation: u32) -> Self {
        self.dice_operation_seconds = dice_operation;
        self.final_operation_seconds = final_operation;
        self
    }

    /// Set the seat palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<PlayerColor>) -> Self {
        self.palette = palette;
        self
    }

    /// Check the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_players == 0
            || self.min_players > self.max_players
            || self.max_players > MAX_SEATS
        {
            return Err(ConfigurationError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }

        let (low, high) = self.target_range;
        if low > high {
            return Err(ConfigurationError::TargetRange { low, high });
        }

        if self.palette.len() < self.max_players {
            return Err(ConfigurationError::Palette {
                colors: self.palette.len(),
                players: self.max_players,
            });
        }

        Ok(())
    }

    /// Check `count` is an allowed table size.
    pub fn check_player_count(&self, count: usize) -> Result<(), ConfigurationError> {
        if (self.min_players..=self.max_players).contains(&count) {
            Ok(())
        } else {
            Err(ConfigurationError::PlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }
}
