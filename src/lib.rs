//! # incan-gold
//!
//! A push-your-luck expedition card game engine for agent simulation.
//!
//! Players explore a shared deck of treasures and hazards. Every turn each
//! player still exploring decides whether to press on or return to camp
//! with their share. A treasure is split evenly among the players still in,
//! the remainder going to a pot that only players leaving can claim. The
//! second hazard of a kind ends the round and everyone still exploring
//! loses what they gathered that round.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: one seeded `GameRng` drives every shuffle and every
//!    strategy mutation. Same seed, same strategies, same game.
//!
//! 2. **Strategies Are Pluggable**: the engine only needs
//!    `Strategy::decide(&Observation) -> bool`.
//!
//! 3. **Explicit Round State**: each round gets fresh participation records
//!    (`In`, `Left`, `Busted`). Nothing but cumulative treasure survives a
//!    round.
//!
//! ## Example
//!
//! ```
//! use incan_gold::agent::TurnLimitStrategy;
//! use incan_gold::rules::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .player("cautious", TurnLimitStrategy::new(3))
//!     .player("greedy", TurnLimitStrategy::new(8))
//!     .build(42)
//!     .unwrap();
//!
//! let result = game.simulate();
//! assert_eq!(result.rounds.len(), 5);
//! ```
//!
//! ## Modules
//!
//! - `core`: cards, players, observations, RNG, configuration, errors
//! - `deck`: master deck, per-round draw pile and card pools
//! - `rules`: round state machine and game lifecycle
//! - `agent`: the `Strategy` trait, feature encoding, stock strategies
//! - `events`: game events, observers, the spectator

pub mod agent;
pub mod core;
pub mod deck;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, CardKind, ConfigError, GameConfig, GameRng, GameRngState, Observation, PlayerId, PlayerMap,
};

pub use crate::deck::{CardPool, DeckComposition, DrawPile};

pub use crate::rules::{
    Game, GameBuilder, GameCheckpoint, GameResult, Participation, Player, Round, RoundEnd, RoundSummary, Status,
    TurnOutcome,
};

pub use crate::agent::{FixedStrategy, LinearStrategy, Strategy, TurnLimitStrategy};

pub use crate::events::{EventLog, GameEvent, NullObserver, Observer, Spectator};
