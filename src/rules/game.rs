//! The game lifecycle: `hard_reset -> ROUND(xN) -> done`.
//!
//! The game owns the master deck, which persists across rounds. After a
//! bust the duplicated hazard is recorded, and one copy of it is discarded
//! for good when the next round is set up.

use serde::{Deserialize, Serialize};

use crate::agent::Strategy;
use crate::core::{Card, ConfigError, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::deck::{DeckComposition, DrawPile};
use crate::events::{GameEvent, NullObserver, Observer};

use super::player::Player;
use super::round::{Round, RoundSummary, TurnOutcome};

/// Final standings of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Cumulative treasure per player.
    pub totals: PlayerMap<u32>,
    /// Every round, in order.
    pub rounds: Vec<RoundSummary>,
}

impl GameResult {
    /// Every player tied for the most treasure.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        let best = self.totals.values().copied().max().unwrap_or(0);
        self.totals
            .iter()
            .filter(|&(_, &total)| total == best)
            .map(|(p, _)| p)
            .collect()
    }

    /// Check if a player won (possibly shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }
}

/// Everything that decides the rest of a game, taken between two rounds.
///
/// Strategies are not part of a checkpoint: restore it with the same
/// players, seated in the same order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCheckpoint {
    pub config: GameConfig,
    /// Master deck, with every hazard discarded so far already gone.
    pub deck: DeckComposition,
    pub duplicates: Vec<Card>,
    /// Duplicate the next round will discard at setup.
    pub pending_removal: Option<Card>,
    pub rounds_played: usize,
    pub totals: PlayerMap<u32>,
    pub rng: GameRngState,
}

/// A table of players and the game they are playing.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    players: PlayerMap<Player>,
    deck: DeckComposition,
    /// Hazards revealed a second time, one per bust, oldest first.
    duplicates: Vec<Card>,
    /// Duplicate from the previous round, to discard at the next setup.
    pending_removal: Option<Card>,
    rng: GameRng,
    rounds_played: usize,
}

impl Game {
    /// Seat `players` in order. Fails on an invalid config or table size.
    pub fn new(config: GameConfig, players: Vec<Player>, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        if players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: players.len(),
            });
        }

        Ok(Self {
            deck: DeckComposition::new(&config),
            config,
            players: PlayerMap::from_vec(players),
            duplicates: Vec::new(),
            pending_removal: None,
            rng,
            rounds_played: 0,
        })
    }

    /// Rebuild a game from `checkpoint`, seating `players` in order.
    ///
    /// The table must have as many seats as the checkpoint.
    pub fn restore(checkpoint: GameCheckpoint, players: Vec<Player>) -> Result<Self, ConfigError> {
        let mut game = Self::new(checkpoint.config, players, GameRng::from_state(&checkpoint.rng))?;
        if game.player_count() != checkpoint.totals.player_count() {
            return Err(ConfigError::SeatMismatch {
                expected: checkpoint.totals.player_count(),
                got: game.player_count(),
            });
        }

        game.deck = checkpoint.deck;
        game.duplicates = checkpoint.duplicates;
        game.pending_removal = checkpoint.pending_removal;
        game.rounds_played = checkpoint.rounds_played;
        for (p, player) in game.players.iter_mut() {
            player.clear();
            player.bank(checkpoint.totals[p]);
        }
        log::debug!("restored game after {} rounds", game.rounds_played);
        Ok(game)
    }

    /// Snapshot the state between rounds.
    #[must_use]
    pub fn checkpoint(&self) -> GameCheckpoint {
        GameCheckpoint {
            config: self.config.clone(),
            deck: self.deck.clone(),
            duplicates: self.duplicates.clone(),
            pending_removal: self.pending_removal,
            rounds_played: self.rounds_played,
            totals: self.totals(),
            rng: self.rng.state(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The master deck the next round will be shuffled from.
    #[must_use]
    pub fn deck(&self) -> &DeckComposition {
        &self.deck
    }

    /// Hazards duplicated this game, one per bust.
    #[must_use]
    pub fn duplicates(&self) -> &[Card] {
        &self.duplicates
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    #[must_use]
    pub fn totals(&self) -> PlayerMap<u32> {
        self.players.map(|_, p| p.treasure())
    }

    /// Checkpoint of the shared random stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Start a new game: canonical deck, no duplicates, no treasure.
    pub fn hard_reset(&mut self) {
        self.deck.reset(&self.config);
        self.duplicates.clear();
        self.pending_removal = None;
        self.rounds_played = 0;
        for (_, player) in self.players.iter_mut() {
            player.clear();
        }
    }

    /// Set up the next round, first discarding one copy of `hazard`.
    pub fn reset(&mut self, hazard: Option<Card>) -> Round {
        if let Some(hazard) = hazard {
            self.deck.remove_hazard(hazard);
            log::debug!("discarded {} for the rest of the game, {} cards left", hazard, self.deck.len());
        }
        let pile = DrawPile::shuffled(&self.deck, &mut self.rng);
        Round::new(self.rounds_played + 1, &self.deck, pile, self.player_count())
    }

    /// Play one full round and bank the winnings.
    pub fn play_round(&mut self, observer: &mut dyn Observer) -> RoundSummary {
        let removed = self.pending_removal.take();
        let mut round = self.reset(removed);
        observer.on_event(&GameEvent::RoundStarted {
            round: round.number(),
            deck_size: self.deck.len(),
            removed_hazard: removed,
        });

        let players = &self.players;
        while let TurnOutcome::Continue =
            round.play_turn(|p, obs| players[p].strategy().decide(obs), observer)
        {}

        let summary = round.finish();
        for (p, player) in self.players.iter_mut() {
            player.bank(summary.banked[p]);
        }
        if let Some(hazard) = summary.duplicate() {
            self.duplicates.push(hazard);
            self.pending_removal = Some(hazard);
        }
        self.rounds_played += 1;

        log::info!(
            "round {} ended {:?} after {} cards, {} banked",
            summary.round,
            summary.end,
            summary.revealed.len(),
            summary.total_banked()
        );
        observer.on_event(&GameEvent::RoundEnded {
            summary: summary.clone(),
        });
        summary
    }

    /// Hard reset, then play every configured round.
    pub fn play(&mut self, observer: &mut dyn Observer) -> GameResult {
        self.hard_reset();
        observer.on_event(&GameEvent::GameStarted {
            names: self.players.values().map(|p| p.name().to_string()).collect(),
            rounds: self.config.rounds,
        });

        let rounds = self.play_rest(observer);

        let totals = self.totals();
        log::info!("game over after {} rounds: {:?}", self.rounds_played, totals.as_slice());
        observer.on_event(&GameEvent::GameEnded {
            totals: totals.as_slice().to_vec(),
        });
        GameResult { totals, rounds }
    }

    /// Play the rounds still to come, without a hard reset.
    pub fn play_rest(&mut self, observer: &mut dyn Observer) -> Vec<RoundSummary> {
        let remaining = self.config.rounds.saturating_sub(self.rounds_played);
        let mut rounds = Vec::with_capacity(remaining);
        for _ in 0..remaining {
            rounds.push(self.play_round(observer));
        }
        rounds
    }

    /// Play a whole game without reporting.
    pub fn simulate(&mut self) -> GameResult {
        self.play(&mut NullObserver)
    }
}

/// Builder for creating a Game.
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    players: Vec<Player>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rounds(mut self, rounds: usize) -> Self {
        self.config.rounds = rounds;
        self
    }

    /// Seat a player after the ones already added.
    pub fn player(self, name: impl Into<String>, strategy: impl Strategy + 'static) -> Self {
        self.seat(Player::new(name, strategy))
    }

    pub fn seat(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Build with a fresh random stream seeded by `seed`.
    pub fn build(self, seed: u64) -> Result<Game, ConfigError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build on an existing stream, e.g. one already used to create the
    /// strategies.
    pub fn build_with_rng(self, rng: GameRng) -> Result<Game, ConfigError> {
        Game::new(self.config, self.players, rng)
    }

    /// Resume from `checkpoint` with the players added so far. The
    /// checkpoint's config replaces the builder's.
    pub fn restore(self, checkpoint: GameCheckpoint) -> Result<Game, ConfigError> {
        Game::restore(checkpoint, self.players)
    }
}
