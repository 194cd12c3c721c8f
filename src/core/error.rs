//! Construction-time errors.
//!
//! Only configuration and table setup can fail recoverably. Anything that
//! goes wrong once a game is running is a state-machine bug and panics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,

    #[error("the deck needs at least one treasure card")]
    NoTreasure,

    #[error("the deck needs at least one hazard kind")]
    NoHazardKinds,

    #[error("each hazard kind needs at least one copy")]
    NoHazardCopies,

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most {max} players supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    #[error("a deck holds at most {max} cards, got {got}")]
    DeckTooLarge { max: usize, got: u64 },

    #[error("{rounds} rounds of treasure can exceed {max} for one player")]
    TreasureOverflow { rounds: usize, max: u32 },

    #[error("checkpoint has {expected} seats, got {got} players")]
    SeatMismatch { expected: usize, got: usize },

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}
