//! Card values.
//!
//! A card is a kind tag plus an integer value, compared structurally.
//! Hazards of the same value are interchangeable: the value *is* the hazard
//! kind, and a second one in the same round ends it.

use serde::{Deserialize, Serialize};

/// Card kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Divided among the players still exploring when revealed.
    Treasure,
    /// Harmless the first time, a bust the second time.
    Hazard,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Treasure => write!(f, "treasure"),
            CardKind::Hazard => write!(f, "hazard"),
        }
    }
}

/// An immutable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub value: u32,
}

impl Card {
    #[must_use]
    pub const fn treasure(value: u32) -> Self {
        Self {
            kind: CardKind::Treasure,
            value,
        }
    }

    #[must_use]
    pub const fn hazard(value: u32) -> Self {
        Self {
            kind: CardKind::Hazard,
            value,
        }
    }

    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        matches!(self.kind, CardKind::Treasure)
    }

    #[must_use]
    pub const fn is_hazard(&self) -> bool {
        matches!(self.kind, CardKind::Hazard)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Card::hazard(3), Card::hazard(3));
        assert_ne!(Card::hazard(3), Card::treasure(3));
        assert_ne!(Card::treasure(5), Card::treasure(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::treasure(17).to_string(), "treasure: 17");
        assert_eq!(Card::hazard(0).to_string(), "hazard: 0");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Card::treasure(1).is_treasure());
        assert!(!Card::treasure(1).is_hazard());
        assert!(Card::hazard(1).is_hazard());
    }
}
