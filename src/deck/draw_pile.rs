//! A round's draw pile: one shuffle, read front to back.

use crate::core::{Card, GameRng};

use super::composition::DeckComposition;

/// The ordered deck of a single round.
///
/// The deck is shuffled once when the round is set up; each turn reveals the
/// card at the cursor. Nothing is ever drawn at random mid-round.
#[derive(Clone, Debug)]
pub struct DrawPile {
    order: Vec<Card>,
    cursor: usize,
}

impl DrawPile {
    /// Shuffle every card of `deck` into a new pile.
    pub fn shuffled(deck: &DeckComposition, rng: &mut GameRng) -> Self {
        let mut order = deck.cards();
        rng.shuffle(&mut order);
        Self::from_order(order)
    }

    /// A pile that reveals `order` exactly as given.
    #[must_use]
    pub fn from_order(order: Vec<Card>) -> Self {
        Self { order, cursor: 0 }
    }

    /// Reveal the next card, or `None` if the pile is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    /// Cards drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// The drawn cards, in reveal order.
    #[must_use]
    pub fn revealed(&self) -> &[Card] {
        &self.order[..self.cursor]
    }

    /// The whole shuffle, drawn or not.
    #[must_use]
    pub fn order(&self) -> &[Card] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_draw_is_sequential() {
        let mut pile = DrawPile::from_order(vec![Card::treasure(1), Card::hazard(0)]);
        assert_eq!(pile.remaining(), 2);

        assert_eq!(pile.draw(), Some(Card::treasure(1)));
        assert_eq!(pile.draw(), Some(Card::hazard(0)));
        assert_eq!(pile.draw(), None);

        assert_eq!(pile.drawn(), 2);
        assert_eq!(pile.remaining(), 0);
        assert_eq!(pile.revealed(), pile.order());
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let deck = DeckComposition::new(&GameConfig::default());
        let mut rng = GameRng::new(3);
        let pile = DrawPile::shuffled(&deck, &mut rng);

        let mut shuffled = pile.order().to_vec();
        let mut canonical = deck.cards();
        assert_ne!(shuffled, canonical);

        shuffled.sort();
        canonical.sort();
        assert_eq!(shuffled, canonical);
    }

    #[test]
    fn test_shuffled_is_seeded() {
        let deck = DeckComposition::new(&GameConfig::default());
        let a = DrawPile::shuffled(&deck, &mut GameRng::new(11));
        let b = DrawPile::shuffled(&deck, &mut GameRng::new(11));
        assert_eq!(a.order(), b.order());
    }
}
