//! Remaining/revealed bookkeeping for one kind of card.
//!
//! A `CardPool` partitions the cards of one kind into those still in the
//! deck and those already face-up this round. Cards move one way only,
//! from remaining to revealed, and a card can only be revealed if the pool
//! still holds a copy of it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::Card;

/// Per-round partition of one card kind.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    /// Copies still in the deck, keyed by card identity.
    remaining: FxHashMap<Card, u32>,

    /// Cards revealed this round, in reveal order.
    revealed: Vec<Card>,
}

impl CardPool {
    /// Build a pool with every card remaining.
    ///
    /// Panics if the summed value of the cards does not fit a `u32`.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut remaining = FxHashMap::default();
        let mut total = Some(0u32);
        for card in cards {
            *remaining.entry(card).or_insert(0) += 1;
            total = total.and_then(|t| t.checked_add(card.value));
        }
        assert!(total.is_some(), "card pool value overflows u32");
        Self {
            remaining,
            revealed: Vec::new(),
        }
    }

    /// Move one copy of `card` from remaining to revealed.
    ///
    /// Panics if no copy remains: that is a double removal and means the
    /// round state machine is broken.
    pub fn reveal(&mut self, card: Card) {
        match self.remaining.get_mut(&card) {
            Some(count) if *count > 0 => {
                *count -= 1;
                if *count == 0 {
                    self.remaining.remove(&card);
                }
            }
            _ => panic!("cannot reveal {card}: no copy remains in the pool"),
        }
        self.revealed.push(card);
    }

    /// Whether a card equal to `card` is already face-up.
    #[must_use]
    pub fn is_revealed(&self, card: Card) -> bool {
        self.revealed.contains(&card)
    }

    /// Number of cards still in the deck.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.values().map(|&n| n as usize).sum()
    }

    /// Summed value of the cards still in the deck. Never more than the
    /// pool started with, which `from_cards` checked.
    #[must_use]
    pub fn remaining_value(&self) -> u32 {
        self.remaining.iter().map(|(card, &n)| card.value * n).sum()
    }

    /// Cards revealed so far, in order.
    #[must_use]
    pub fn revealed(&self) -> &[Card] {
        &self.revealed
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Number of distinct cards revealed.
    #[must_use]
    pub fn distinct_revealed(&self) -> usize {
        self.revealed.iter().collect::<FxHashSet<_>>().len()
    }
}
