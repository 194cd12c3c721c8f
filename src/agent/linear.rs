//! Logistic threshold over the feature vector.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Observation};

use super::features::{self, FEATURE_COUNT};
use super::strategy::Strategy;

/// Perturbation scale used when none is given.
pub const DEFAULT_VARIABILITY: f64 = 0.1;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Stays when `sigmoid(features · weights) > 0.5`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearStrategy {
    weights: [f64; FEATURE_COUNT],
}

impl LinearStrategy {
    /// Weights drawn independently from N(0, 1).
    pub fn random(rng: &mut GameRng) -> Self {
        let mut weights = [0.0; FEATURE_COUNT];
        for w in &mut weights {
            *w = rng.standard_normal();
        }
        Self { weights }
    }

    #[must_use]
    pub fn from_weights(weights: [f64; FEATURE_COUNT]) -> Self {
        Self { weights }
    }

    /// Copy of `self` with N(0, 1) * `variability` added to every weight.
    pub fn mutate(&self, variability: f64, rng: &mut GameRng) -> Self {
        let mut weights = self.weights;
        for w in &mut weights {
            *w += rng.standard_normal() * variability;
        }
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &[f64; FEATURE_COUNT] {
        &self.weights
    }

    /// Probability-like score in (0, 1); above 0.5 means stay.
    #[must_use]
    pub fn think(&self, observation: &Observation) -> f64 {
        let input = features::encode(observation);
        let activation: f64 = input.iter().zip(&self.weights).map(|(x, w)| x * w).sum();
        sigmoid(activation)
    }
}

impl Strategy for LinearStrategy {
    fn decide(&self, observation: &Observation) -> bool {
        self.think(observation) > 0.5
    }

    fn spawn(&self, variability: f64, rng: &mut GameRng) -> Box<dyn Strategy> {
        Box::new(self.mutate(variability, rng))
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(turns_taken: usize, pot: u32) -> Observation {
        Observation {
            deck_size: 30 - turns_taken,
            turns_taken,
            treasures_left: 15,
            treasures_left_value: 115,
            num_players: 3,
            players_in: 3,
            pot,
            ..Observation::default()
        }
    }

    #[test]
    fn test_think_is_sigmoid_of_dot_product() {
        let mut weights = [0.0; FEATURE_COUNT];
        weights[1] = 1.0; // turns_taken
        let strategy = LinearStrategy::from_weights(weights);

        assert!((strategy.think(&observation(0, 0)) - 0.5).abs() < 1e-12);
        assert!((strategy.think(&observation(2, 0)) - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_decide_thresholds_at_half() {
        let mut weights = [0.0; FEATURE_COUNT];
        weights[1] = -1.0; // leave once any card is out
        weights[6] = 0.5; // num_players
        let strategy = LinearStrategy::from_weights(weights);

        // 3 * 0.5 - 0 > 0
        assert!(strategy.decide(&observation(0, 0)));
        // 3 * 0.5 - 2 < 0
        assert!(!strategy.decide(&observation(2, 0)));
    }

    #[test]
    fn test_zero_activation_leaves() {
        let strategy = LinearStrategy::from_weights([0.0; FEATURE_COUNT]);
        assert!(!strategy.decide(&observation(4, 1)));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = LinearStrategy::random(&mut GameRng::new(5));
        let b = LinearStrategy::random(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutation_is_bounded_by_variability() {
        let mut rng = GameRng::new(8);
        let parent = LinearStrategy::random(&mut rng);

        let clone = parent.mutate(0.0, &mut rng);
        assert_eq!(clone, parent);

        let child = parent.mutate(0.01, &mut rng);
        assert_ne!(child, parent);
        for (c, p) in child.weights().iter().zip(parent.weights()) {
            // 10 sigma at 0.01
            assert!((c - p).abs() < 0.1);
        }
    }
}
