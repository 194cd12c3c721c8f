//! Fixed-order numeric encoding of an `Observation`.
//!
//! Linear and threshold strategies work on this vector. The order is part
//! of the contract: weights trained against one ordering are meaningless
//! under another.

use crate::core::Observation;

/// Length of the feature vector.
pub const FEATURE_COUNT: usize = 9;

/// Feature names, index-aligned with `encode`.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "deck_size",
    "turns_taken",
    "treasures_left_count",
    "treasures_left_total_value",
    "hazards_revealed_count",
    "unique_hazards_revealed_count",
    "num_players",
    "players_in",
    "pot",
];

/// Encode an observation as `[deck_size, turns_taken, treasures_left_count,
/// treasures_left_total_value, hazards_revealed_count,
/// unique_hazards_revealed_count, num_players, players_in, pot]`.
#[must_use]
pub fn encode(observation: &Observation) -> [f64; FEATURE_COUNT] {
    [
        observation.deck_size as f64,
        observation.turns_taken as f64,
        observation.treasures_left as f64,
        f64::from(observation.treasures_left_value),
        observation.hazards_revealed as f64,
        observation.unique_hazards_revealed as f64,
        observation.num_players as f64,
        observation.players_in as f64,
        f64::from(observation.pot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_order() {
        let obs = Observation {
            deck_size: 1,
            turns_taken: 2,
            treasures_left: 3,
            treasures_left_value: 4,
            hazards_revealed: 5,
            unique_hazards_revealed: 6,
            num_players: 7,
            players_in: 8,
            pot: 9,
        };

        assert_eq!(encode(&obs), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_names_align_with_vector() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES[0], "deck_size");
        assert_eq!(FEATURE_NAMES[FEATURE_COUNT - 1], "pot");
    }
}
