//! Round engine tests on hand-arranged decks.
//!
//! Each test fixes the reveal order so payouts can be checked exactly.

use incan_gold::core::{Card, GameConfig, Observation, PlayerId};
use incan_gold::deck::{DeckComposition, DrawPile};
use incan_gold::events::{EventLog, GameEvent, NullObserver};
use incan_gold::rules::{Round, RoundEnd, Status, TurnOutcome};

/// Standard deck with `prefix` revealed first, the rest in canonical order.
fn arranged(prefix: &[Card], player_count: usize) -> Round {
    let deck = DeckComposition::new(&GameConfig::default());
    let mut rest = deck.cards();
    for card in prefix {
        let index = rest.iter().position(|c| c == card).expect("card in the deck");
        rest.remove(index);
    }
    let mut order = prefix.to_vec();
    order.extend(rest);
    Round::new(1, &deck, DrawPile::from_order(order), player_count)
}

/// Two players, treasure 5, hazard 3, then a second hazard 3.
#[test]
fn test_two_player_walkthrough() {
    let mut round = arranged(&[Card::treasure(5), Card::hazard(3), Card::hazard(3)], 2);

    // Treasure 5: 2 each, 1 to the pot.
    assert_eq!(round.play_turn(|_, _| true, &mut NullObserver), TurnOutcome::Continue);
    assert_eq!(round.seats()[PlayerId(0)].round_treasure(), 2);
    assert_eq!(round.seats()[PlayerId(1)].round_treasure(), 2);
    assert_eq!(round.pot(), 1);

    // First hazard 3: revealed, no payout.
    assert_eq!(round.play_turn(|_, _| true, &mut NullObserver), TurnOutcome::Continue);
    assert_eq!(round.seats()[PlayerId(0)].round_treasure(), 2);
    assert_eq!(round.observation().unique_hazards_revealed, 1);

    // Second hazard 3: bust.
    let outcome = round.play_turn(|_, _| true, &mut NullObserver);
    assert_eq!(outcome, TurnOutcome::Over(RoundEnd::Busted { hazard: Card::hazard(3) }));

    let summary = round.finish();
    assert_eq!(summary.banked.as_slice(), &[0, 0]);
    assert_eq!(summary.forfeited.as_slice(), &[2, 2]);
}

/// Same deck, but player 1 leaves before the first hazard.
#[test]
fn test_early_leaver_keeps_share_through_bust() {
    let mut round = arranged(&[Card::treasure(5), Card::hazard(3), Card::hazard(3)], 2);

    round.play_turn(|_, _| true, &mut NullObserver);
    // Player 1 leaves alone and takes the whole pot of 1.
    round.play_turn(|p, _| p == PlayerId(0), &mut NullObserver);
    assert_eq!(round.seats()[PlayerId(1)].status(), Status::Left);
    assert_eq!(round.seats()[PlayerId(1)].round_treasure(), 3);
    assert_eq!(round.pot(), 0);

    let outcome = round.play_turn(|_, _| true, &mut NullObserver);
    assert!(matches!(outcome, TurnOutcome::Over(RoundEnd::Busted { .. })));

    let summary = round.finish();
    assert_eq!(summary.statuses.as_slice(), &[Status::Busted, Status::Left]);
    assert_eq!(summary.banked.as_slice(), &[0, 3]);
    assert_eq!(summary.forfeited.as_slice(), &[2, 0]);
}

/// Treasure goes only to the players still in after this turn's leavers.
#[test]
fn test_treasure_skips_players_who_left_this_turn() {
    let mut round = arranged(&[Card::treasure(9)], 3);

    round.play_turn(|p, _| p != PlayerId(2), &mut NullObserver);

    assert_eq!(round.seats()[PlayerId(0)].round_treasure(), 4);
    assert_eq!(round.seats()[PlayerId(1)].round_treasure(), 4);
    assert_eq!(round.seats()[PlayerId(2)].round_treasure(), 0);
    assert_eq!(round.pot(), 1);
}

/// Different hazard kinds never bust each other.
#[test]
fn test_distinct_hazards_do_not_bust() {
    let hazards: Vec<Card> = (0..5).map(Card::hazard).collect();
    let mut round = arranged(&hazards, 2);

    for _ in 0..5 {
        assert_eq!(round.play_turn(|_, _| true, &mut NullObserver), TurnOutcome::Continue);
    }

    let obs = round.observation();
    assert_eq!(obs.hazards_revealed, 5);
    assert_eq!(obs.unique_hazards_revealed, 5);
    assert_eq!(obs.treasures_left, 15);
    assert_eq!(obs.deck_size, 25);
}

/// The snapshot players see reflects the state before this turn's decisions.
#[test]
fn test_observation_tracks_progress() {
    let mut round = arranged(&[Card::treasure(14), Card::hazard(0), Card::treasure(2)], 4);
    let mut log = EventLog::new();

    round.play_turn(|_, _| true, &mut log);
    round.play_turn(|_, _| true, &mut log);
    round.play_turn(|p, _| p != PlayerId(3), &mut log);

    // 14 / 4 = 3 rem 2; player 3 leaves with the pot of 2; 2 / 3 = 0 rem 2.
    let expected = Observation {
        deck_size: 27,
        turns_taken: 3,
        treasures_left: 13,
        treasures_left_value: 99,
        hazards_revealed: 1,
        unique_hazards_revealed: 1,
        num_players: 4,
        players_in: 3,
        pot: 2,
    };
    assert_eq!(round.observation(), expected);
    assert_eq!(round.seats()[PlayerId(3)].round_treasure(), 5);

    let reveals: Vec<_> = log
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::CardRevealed { turn, card } => Some((*turn, *card)),
            _ => None,
        })
        .collect();
    assert_eq!(
        reveals,
        vec![(1, Card::treasure(14)), (2, Card::hazard(0)), (3, Card::treasure(2))]
    );
}
