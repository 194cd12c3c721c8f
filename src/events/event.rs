//! Things that happen during a game, in the order they happen.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId};
use crate::rules::RoundSummary;

/// A game event.
///
/// Rounds are numbered from 1. Turn numbers count revealed cards, so the
/// first card of a round is revealed on turn 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A hard reset happened and the first round is about to start.
    GameStarted { names: Vec<String>, rounds: usize },

    /// A round was set up; `removed_hazard` left the deck for good.
    RoundStarted {
        round: usize,
        deck_size: usize,
        removed_hazard: Option<Card>,
    },

    /// One player's answer for the current turn.
    Decision { player: PlayerId, stay: bool },

    /// The pot was split among the players leaving this turn.
    PotDivided {
        leaving: Vec<PlayerId>,
        share: u32,
        remainder: u32,
    },

    /// A card was turned face-up.
    CardRevealed { turn: usize, card: Card },

    /// A treasure was split among the players still in.
    TreasureShared {
        card: Card,
        players_in: usize,
        share: u32,
        remainder: u32,
    },

    /// A round reached its terminal transition.
    RoundEnded { summary: RoundSummary },

    /// Every round has been played.
    GameEnded { totals: Vec<u32> },
}
