//! Observable state: what every player can see at the start of a turn.
//!
//! The snapshot carries only public information. It is built once per turn
//! by the round engine and handed, unchanged, to every player still
//! exploring.

use serde::{Deserialize, Serialize};

/// Public snapshot of a round in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Cards not yet drawn this round.
    pub deck_size: usize,

    /// Cards drawn so far this round.
    pub turns_taken: usize,

    /// Treasure cards still in the deck.
    pub treasures_left: usize,

    /// Total value of treasure cards still in the deck.
    pub treasures_left_value: u32,

    /// Hazard cards revealed this round.
    pub hazards_revealed: usize,

    /// Distinct hazard values revealed this round.
    pub unique_hazards_revealed: usize,

    /// Players seated at the table.
    pub num_players: usize,

    /// Players still exploring.
    pub players_in: usize,

    /// Leftover treasure waiting for the next players to leave.
    pub pot: u32,
}
