//! The round state machine.
//!
//! A round runs `SETUP -> (TURN)* -> ROUND_OVER`. Each turn:
//!
//! 1. Every player still in answers stay/leave, all from the same snapshot.
//! 2. Players leaving this turn split the pot; the remainder stays.
//! 3. If nobody is left exploring the round is over.
//! 4. Otherwise the next card of the shuffle is revealed. A treasure is split
//!    among the players still in, its remainder joining the pot. A hazard is
//!    harmless the first time its value shows up and a bust the second time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardKind, Observation, PlayerId, PlayerMap};
use crate::deck::{CardPool, DeckComposition, DrawPile};
use crate::events::{GameEvent, Observer};

use super::participation::{Participation, Status};

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// Every player left voluntarily.
    EveryoneOut,
    /// `hazard` was revealed a second time.
    Busted { hazard: Card },
    /// No card was left to reveal. Only reachable with a custom deck.
    DeckExhausted,
}

/// Result of one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Over(RoundEnd),
}

/// Everything a finished round hands back to the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, from 1.
    pub round: usize,
    pub end: RoundEnd,
    /// Cards revealed, in order. Ends with the duplicate hazard on a bust.
    pub revealed: Vec<Card>,
    pub statuses: PlayerMap<Status>,
    /// Added to each player's cumulative treasure.
    pub banked: PlayerMap<u32>,
    /// Lost to the bust.
    pub forfeited: PlayerMap<u32>,
    /// Pot nobody claimed; discarded with the round.
    pub unclaimed_pot: u32,
}

impl RoundSummary {
    /// The hazard to discard before the next round, if this round busted.
    #[must_use]
    pub fn duplicate(&self) -> Option<Card> {
        match self.end {
            RoundEnd::Busted { hazard } => Some(hazard),
            RoundEnd::EveryoneOut | RoundEnd::DeckExhausted => None,
        }
    }

    #[must_use]
    pub fn total_banked(&self) -> u32 {
        self.banked.values().sum()
    }
}

/// One round in progress.
///
/// Owns the round's draw pile, card pools, participation records and pot.
#[derive(Clone, Debug)]
pub struct Round {
    number: usize,
    pile: DrawPile,
    treasures: CardPool,
    hazards: CardPool,
    seats: PlayerMap<Participation>,
    pot: u32,
    end: Option<RoundEnd>,
}

impl Round {
    /// Set up a round over `deck`, revealing cards in `pile` order.
    ///
    /// Panics if the deck is empty or the pile is not a permutation of it.
    pub fn new(number: usize, deck: &DeckComposition, pile: DrawPile, player_count: usize) -> Self {
        assert!(!deck.is_empty(), "cannot set up round {number} over an empty deck");
        let mut expected = deck.cards();
        let mut actual = pile.order().to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected, "draw pile is not a shuffle of the deck");
        assert_eq!(pile.drawn(), 0, "draw pile was already drawn from");

        Self {
            number,
            pile,
            treasures: CardPool::from_cards(deck.treasures().iter().copied()),
            hazards: CardPool::from_cards(deck.hazards().iter().copied()),
            seats: PlayerMap::new(player_count, |_| Participation::new()),
            pot: 0,
            end: None,
        }
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.pile.drawn()
    }

    #[must_use]
    pub fn pot(&self) -> u32 {
        self.pot
    }

    #[must_use]
    pub fn seats(&self) -> &PlayerMap<Participation> {
        &self.seats
    }

    #[must_use]
    pub fn treasures(&self) -> &CardPool {
        &self.treasures
    }

    #[must_use]
    pub fn hazards(&self) -> &CardPool {
        &self.hazards
    }

    #[must_use]
    pub fn end(&self) -> Option<RoundEnd> {
        self.end
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }

    #[must_use]
    pub fn players_in(&self) -> usize {
        self.seats.values().filter(|s| s.is_in()).count()
    }

    /// The public snapshot players decide from.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation {
            deck_size: self.pile.remaining(),
            turns_taken: self.pile.drawn(),
            treasures_left: self.treasures.remaining_count(),
            treasures_left_value: self.treasures.remaining_value(),
            hazards_revealed: self.hazards.revealed_count(),
            unique_hazards_revealed: self.hazards.distinct_revealed(),
            num_players: self.seats.player_count(),
            players_in: self.players_in(),
            pot: self.pot,
        }
    }

    /// Play one turn, asking `decide` for every player still in.
    ///
    /// `decide` returns `true` to stay. Panics if the round is already over.
    pub fn play_turn<F>(&mut self, decide: F, observer: &mut dyn Observer) -> TurnOutcome
    where
        F: Fn(PlayerId, &Observation) -> bool,
    {
        assert!(self.end.is_none(), "round {} is already over", self.number);

        let observation = self.observation();
        let mut leaving: SmallVec<[PlayerId; 8]> = SmallVec::new();
        for (player, seat) in self.seats.iter_mut() {
            if !seat.is_in() {
                continue;
            }
            let stay = decide(player, &observation);
            log::trace!("round {} turn {}: {} stays? {}", self.number, observation.turns_taken, player, stay);
            observer.on_event(&GameEvent::Decision { player, stay });
            if !stay {
                seat.leave();
                leaving.push(player);
            }
        }

        if !leaving.is_empty() {
            self.divide_pot(&leaving, observer);
        }

        let players_in = self.players_in();
        if players_in == 0 {
            return self.over(RoundEnd::EveryoneOut);
        }

        let Some(card) = self.pile.draw() else {
            for (_, seat) in self.seats.iter_mut() {
                if seat.is_in() {
                    seat.leave();
                }
            }
            return self.over(RoundEnd::DeckExhausted);
        };
        let turn = self.pile.drawn();
        log::debug!("round {} turn {}: revealed {}", self.number, turn, card);
        observer.on_event(&GameEvent::CardRevealed { turn, card });

        match card.kind {
            CardKind::Treasure => {
                self.treasures.reveal(card);
                self.share_treasure(card, players_in, observer);
                TurnOutcome::Continue
            }
            CardKind::Hazard if self.hazards.is_revealed(card) => {
                for (_, seat) in self.seats.iter_mut() {
                    if seat.is_in() {
                        seat.bust();
                    }
                }
                self.over(RoundEnd::Busted { hazard: card })
            }
            CardKind::Hazard => {
                self.hazards.reveal(card);
                TurnOutcome::Continue
            }
        }
    }

    /// Close the round and report what each player banked.
    ///
    /// Panics if the round is still running.
    pub fn finish(self) -> RoundSummary {
        let end = self
            .end
            .unwrap_or_else(|| panic!("round {} is still running", self.number));

        RoundSummary {
            round: self.number,
            end,
            revealed: self.pile.revealed().to_vec(),
            statuses: self.seats.map(|_, s| s.status()),
            banked: self.seats.map(|_, s| s.banked()),
            forfeited: self.seats.map(|_, s| s.forfeited()),
            unclaimed_pot: self.pot,
        }
    }

    fn over(&mut self, end: RoundEnd) -> TurnOutcome {
        log::debug!("round {} over after {} turns: {:?}", self.number, self.pile.drawn(), end);
        self.end = Some(end);
        TurnOutcome::Over(end)
    }

    fn divide_pot(&mut self, leaving: &[PlayerId], observer: &mut dyn Observer) {
        assert!(!leaving.is_empty(), "cannot divide the pot among nobody");

        let count = leaving.len() as u32;
        let share = self.pot / count;
        self.pot %= count;
        for &player in leaving {
            self.seats[player].collect(share);
        }

        log::debug!("round {}: {} leaving take {} each, pot now {}", self.number, count, share, self.pot);
        observer.on_event(&GameEvent::PotDivided {
            leaving: leaving.to_vec(),
            share,
            remainder: self.pot,
        });
    }

    fn share_treasure(&mut self, card: Card, players_in: usize, observer: &mut dyn Observer) {
        assert!(players_in > 0, "cannot share treasure with nobody");

        let count = players_in as u32;
        let share = card.value / count;
        let remainder = card.value % count;
        self.pot += remainder;
        for (_, seat) in self.seats.iter_mut() {
            if seat.is_in() {
                seat.collect(share);
            }
        }

        observer.on_event(&GameEvent::TreasureShared {
            card,
            players_in,
            share,
            remainder,
        });
    }
}
