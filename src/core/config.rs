//! Game configuration.
//!
//! `GameConfig` fixes the deck composition and the number of rounds for a
//! whole game. The default is the standard expedition:
//!
//! - 15 treasures: 1, 2, 3, 4, 5, 5, 7, 7, 9, 11, 11, 13, 14, 15, 17
//! - 5 hazard kinds (values 0..=4), 3 copies each
//! - 5 rounds
//!
//! Configs can also be read from JSON; missing fields fall back to the
//! defaults above.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::ConfigError;

/// Treasure values of the standard deck.
pub const STANDARD_TREASURES: [u32; 15] = [1, 2, 3, 4, 5, 5, 7, 7, 9, 11, 11, 13, 14, 15, 17];

/// Number of hazard kinds in the standard deck.
pub const STANDARD_HAZARD_KINDS: u32 = 5;

/// Copies of each hazard kind in the standard deck.
pub const STANDARD_HAZARD_COPIES: u32 = 3;

/// Rounds in a standard game.
pub const STANDARD_ROUNDS: usize = 5;

/// Largest deck a config may describe.
pub const MAX_DECK_SIZE: usize = 1 << 16;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per game.
    pub rounds: usize,

    /// One treasure card per entry.
    pub treasure_values: Vec<u32>,

    /// Hazard kinds, valued `0..hazard_kinds`.
    pub hazard_kinds: u32,

    /// Copies of each hazard kind.
    pub hazard_copies: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: STANDARD_ROUNDS,
            treasure_values: STANDARD_TREASURES.to_vec(),
            hazard_kinds: STANDARD_HAZARD_KINDS,
            hazard_copies: STANDARD_HAZARD_COPIES,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document.
    ///
    /// ```
    /// use incan_gold::core::GameConfig;
    ///
    /// let config = GameConfig::from_json(r#"{ "rounds": 3 }"#).unwrap();
    /// assert_eq!(config.rounds, 3);
    /// assert_eq!(config.hazard_copies, 3);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Replace the treasure values.
    #[must_use]
    pub fn with_treasures(mut self, values: impl Into<Vec<u32>>) -> Self {
        self.treasure_values = values.into();
        self
    }

    /// Set the hazard kinds and copies per kind.
    #[must_use]
    pub fn with_hazards(mut self, kinds: u32, copies: u32) -> Self {
        self.hazard_kinds = kinds;
        self.hazard_copies = copies;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.treasure_values.is_empty() {
            return Err(ConfigError::NoTreasure);
        }
        if self.hazard_kinds == 0 {
            return Err(ConfigError::NoHazardKinds);
        }
        if self.hazard_copies == 0 {
            return Err(ConfigError::NoHazardCopies);
        }

        let cards = self.treasure_values.len() as u64 + u64::from(self.hazard_kinds) * u64::from(self.hazard_copies);
        if cards > MAX_DECK_SIZE as u64 {
            return Err(ConfigError::DeckTooLarge {
                max: MAX_DECK_SIZE,
                got: cards,
            });
        }

        // A player can at most bank every treasure of every round.
        let game_total = self
            .treasure_values
            .iter()
            .try_fold(0u32, |acc, &v| acc.checked_add(v))
            .and_then(|round_total| u32::try_from(self.rounds).ok()?.checked_mul(round_total));
        if game_total.is_none() {
            return Err(ConfigError::TreasureOverflow {
                rounds: self.rounds,
                max: u32::MAX,
            });
        }
        Ok(())
    }

    /// Canonical treasure cards, in configured order.
    #[must_use]
    pub fn treasure_cards(&self) -> Vec<Card> {
        self.treasure_values.iter().copied().map(Card::treasure).collect()
    }

    /// Canonical hazard cards: every kind, `hazard_copies` times, grouped by kind.
    #[must_use]
    pub fn hazard_cards(&self) -> Vec<Card> {
        (0..self.hazard_kinds)
            .flat_map(|kind| std::iter::repeat(Card::hazard(kind)).take(self.hazard_copies as usize))
            .collect()
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.treasure_values.len() + (self.hazard_kinds as usize).saturating_mul(self.hazard_copies as usize)
    }
}
