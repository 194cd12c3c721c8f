//! A seated player: name, strategy, cumulative treasure.

use crate::agent::Strategy;
use crate::core::GameRng;

/// A player at the table.
///
/// Cumulative treasure is the only state that survives from one round to
/// the next; everything per-round lives in a `Participation` record.
#[derive(Debug)]
pub struct Player {
    name: String,
    strategy: Box<dyn Strategy>,
    treasure: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        Self::from_boxed(name, Box::new(strategy))
    }

    pub fn from_boxed(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            treasure: 0,
        }
    }

    /// A new player whose strategy is spawned from this one's.
    pub fn child(&self, name: impl Into<String>, variability: f64, rng: &mut GameRng) -> Self {
        Self::from_boxed(name, self.strategy.spawn(variability, rng))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Cumulative treasure this game.
    #[must_use]
    pub fn treasure(&self) -> u32 {
        self.treasure
    }

    pub(crate) fn bank(&mut self, amount: u32) {
        self.treasure += amount;
    }

    pub(crate) fn clear(&mut self) {
        self.treasure = 0;
    }
}
