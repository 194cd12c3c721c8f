//! Core types: cards, players, observable state, RNG, configuration.
//!
//! Everything here is independent of the round engine and of any
//! particular decision strategy.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{Card, CardKind};
pub use config::{GameConfig, MAX_DECK_SIZE};
pub use error::ConfigError;
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use state::Observation;
