//! Rule-based strategies with no learned parameters.

use crate::core::{GameRng, Observation};

use super::strategy::Strategy;

/// Always gives the same answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStrategy {
    stay: bool,
}

impl FixedStrategy {
    /// Never leaves voluntarily.
    #[must_use]
    pub const fn always_stay() -> Self {
        Self { stay: true }
    }

    /// Leaves at the first opportunity.
    #[must_use]
    pub const fn always_leave() -> Self {
        Self { stay: false }
    }
}

impl Strategy for FixedStrategy {
    fn decide(&self, _observation: &Observation) -> bool {
        self.stay
    }

    fn spawn(&self, _variability: f64, _rng: &mut GameRng) -> Box<dyn Strategy> {
        Box::new(*self)
    }

    fn name(&self) -> &str {
        if self.stay {
            "always-stay"
        } else {
            "always-leave"
        }
    }
}

/// Stays until `limit` cards have been revealed this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnLimitStrategy {
    limit: usize,
}

impl TurnLimitStrategy {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Strategy for TurnLimitStrategy {
    fn decide(&self, observation: &Observation) -> bool {
        observation.turns_taken < self.limit
    }

    /// Shifts the limit by a rounded N(0, 1) * `variability`, never below zero.
    fn spawn(&self, variability: f64, rng: &mut GameRng) -> Box<dyn Strategy> {
        let shifted = self.limit as f64 + (rng.standard_normal() * variability).round();
        Box::new(Self::new(shifted.max(0.0) as usize))
    }

    fn name(&self) -> &str {
        "turn-limit"
    }
}
