//! The decision interface between the round engine and an agent.

use crate::core::{GameRng, Observation};

/// A stay-or-leave policy.
///
/// The engine calls `decide` once per turn for each player still exploring,
/// always with the same snapshot for every player in that turn. `decide`
/// must not depend on anything but the snapshot and the strategy's own
/// fixed parameters.
///
/// `spawn` derives a related strategy (for example a mutated copy). The
/// engine never calls it; it exists so evolutionary drivers can breed any
/// policy without knowing its concrete type.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// `true` to keep exploring, `false` to leave with a share of the pot.
    fn decide(&self, observation: &Observation) -> bool;

    /// Derive a child strategy, perturbed by up to `variability`.
    fn spawn(&self, variability: f64, rng: &mut GameRng) -> Box<dyn Strategy>;

    /// Short label for reports.
    fn name(&self) -> &str;
}
