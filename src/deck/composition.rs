//! The master deck that persists across the rounds of a game.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameConfig};

/// Full card set of a game.
///
/// Starts as the canonical deck of a `GameConfig` and loses one hazard
/// after every bust. `reset` restores it for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    treasures: Vec<Card>,
    hazards: Vec<Card>,
}

impl DeckComposition {
    /// Canonical deck for `config`.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            treasures: config.treasure_cards(),
            hazards: config.hazard_cards(),
        }
    }

    /// Restore the canonical deck, undoing every removal.
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Permanently discard one copy of `hazard`.
    ///
    /// Panics if the deck holds no such card.
    pub fn remove_hazard(&mut self, hazard: Card) {
        assert!(hazard.is_hazard(), "only hazards leave the deck, got {hazard}");
        let index = self
            .hazards
            .iter()
            .position(|&c| c == hazard)
            .unwrap_or_else(|| panic!("cannot remove {hazard}: not in the deck"));
        self.hazards.remove(index);
    }

    #[must_use]
    pub fn treasures(&self) -> &[Card] {
        &self.treasures
    }

    #[must_use]
    pub fn hazards(&self) -> &[Card] {
        &self.hazards
    }

    /// Every card, treasures first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.treasures.iter().chain(&self.hazards).copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.treasures.len() + self.hazards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies of `card` in the deck.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards().iter().filter(|&&c| c == card).count()
    }
}
