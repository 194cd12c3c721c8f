//! Per-round participation record.
//!
//! A fresh record is created for every player at the start of every round.
//! Status moves `In -> Left` (voluntary exit or walking out of an exhausted
//! deck) or `In -> Busted` (still exploring when a duplicate hazard shows
//! up). Only `Left` players bank their round treasure.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Still exploring.
    In,
    /// Returned to camp with their round treasure.
    Left,
    /// Caught by a duplicate hazard; round treasure forfeited.
    Busted,
}

/// One player's state within a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    status: Status,
    round_treasure: u32,
}

impl Default for Participation {
    fn default() -> Self {
        Self::new()
    }
}

impl Participation {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: Status::In,
            round_treasure: 0,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_in(&self) -> bool {
        matches!(self.status, Status::In)
    }

    /// Treasure collected this round, whatever its fate.
    #[must_use]
    pub const fn round_treasure(&self) -> u32 {
        self.round_treasure
    }

    /// Add a treasure share or pot share.
    ///
    /// A busted player can never receive anything.
    pub fn collect(&mut self, amount: u32) {
        assert!(self.status != Status::Busted, "busted players cannot collect treasure");
        self.round_treasure += amount;
    }

    pub fn leave(&mut self) {
        assert!(self.is_in(), "only exploring players can leave, status is {:?}", self.status);
        self.status = Status::Left;
    }

    pub fn bust(&mut self) {
        assert!(self.is_in(), "only exploring players can bust, status is {:?}", self.status);
        self.status = Status::Busted;
    }

    /// What this record adds to the player's cumulative treasure.
    #[must_use]
    pub const fn banked(&self) -> u32 {
        match self.status {
            Status::Left => self.round_treasure,
            Status::In | Status::Busted => 0,
        }
    }

    /// What this record lost to a bust.
    #[must_use]
    pub const fn forfeited(&self) -> u32 {
        match self.status {
            Status::Busted => self.round_treasure,
            Status::In | Status::Left => 0,
        }
    }
}
