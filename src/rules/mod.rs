//! Game rules: the round engine and the game lifecycle around it.

pub mod game;
pub mod participation;
pub mod player;
pub mod round;

pub use game::{Game, GameBuilder, GameCheckpoint, GameResult};
pub use participation::{Participation, Status};
pub use player::Player;
pub use round::{Round, RoundEnd, RoundSummary, TurnOutcome};
