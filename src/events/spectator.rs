//! Human-readable play-by-play.

use std::io::Write;

use crate::core::PlayerId;
use crate::rules::RoundEnd;

use super::event::GameEvent;
use super::observer::Observer;

/// Writes a narrative of the game to `out`.
///
/// Write failures are logged once and further output is dropped; the game
/// itself is unaffected.
#[derive(Debug)]
pub struct Spectator<W: Write> {
    out: W,
    names: Vec<String>,
    failed: bool,
}

impl<W: Write> Spectator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: Vec::new(),
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }

    fn render(&self, event: &GameEvent) -> Option<String> {
        let text = match event {
            GameEvent::GameStarted { .. } => return None,
            GameEvent::RoundStarted {
                round,
                removed_hazard,
                ..
            } => match removed_hazard {
                Some(hazard) => format!("ROUND {round}\n(one {hazard} removed from the deck)\n"),
                None => format!("ROUND {round}\n"),
            },
            GameEvent::Decision { player, stay } => {
                format!("{} stays? {}\n", self.name(*player), stay)
            }
            GameEvent::PotDivided {
                leaving,
                share,
                remainder,
            } => {
                let names: Vec<_> = leaving.iter().map(|&p| self.name(p)).collect();
                format!("{} split the pot: {share} each, {remainder} left\n", names.join(", "))
            }
            GameEvent::CardRevealed { card, .. } => format!("{card}\n"),
            GameEvent::TreasureShared {
                players_in,
                share,
                remainder,
                ..
            } => format!("{share} each to {players_in}, {remainder} to the pot\n\n"),
            GameEvent::RoundEnded { summary } => match summary.end {
                RoundEnd::EveryoneOut => "everyone went back to camp\n\n".to_string(),
                RoundEnd::Busted { hazard } => format!("second {hazard}, the explorers still in flee empty-handed\n\n"),
                RoundEnd::DeckExhausted => "the deck ran out, everyone walks out\n\n".to_string(),
            },
            GameEvent::GameEnded { totals } => totals
                .iter()
                .enumerate()
                .map(|(i, total)| format!("{} : {total}\n", self.name(PlayerId(i as u8))))
                .collect(),
        };
        Some(text)
    }
}

impl<W: Write> Observer for Spectator<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let GameEvent::GameStarted { names, .. } = event {
            self.names = names.clone();
        }
        if self.failed {
            return;
        }
        let Some(text) = self.render(event) else {
            return;
        };
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            log::warn!("spectator output failed, dropping the rest: {err}");
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    fn rendered(events: &[GameEvent]) -> String {
        let mut spectator = Spectator::new(Vec::new());
        for event in events {
            spectator.on_event(event);
        }
        String::from_utf8(spectator.into_inner()).unwrap()
    }

    #[test]
    fn test_uses_player_names() {
        let text = rendered(&[
            GameEvent::GameStarted {
                names: vec!["Ana".into(), "Bo".into()],
                rounds: 5,
            },
            GameEvent::RoundStarted {
                round: 1,
                deck_size: 30,
                removed_hazard: None,
            },
            GameEvent::Decision { player: PlayerId(0), stay: true },
            GameEvent::Decision { player: PlayerId(1), stay: false },
            GameEvent::CardRevealed { turn: 1, card: Card::treasure(5) },
        ]);

        assert_eq!(text, "ROUND 1\nAna stays? true\nBo stays? false\ntreasure: 5\n");
    }

    #[test]
    fn test_falls_back_to_seat_number() {
        let text = rendered(&[GameEvent::Decision { player: PlayerId(2), stay: true }]);
        assert_eq!(text, "Player 2 stays? true\n");
    }

    #[test]
    fn test_final_totals() {
        let text = rendered(&[
            GameEvent::GameStarted {
                names: vec!["Ana".into(), "Bo".into()],
                rounds: 5,
            },
            GameEvent::GameEnded { totals: vec![12, 40] },
        ]);
        assert_eq!(text, "Ana : 12\nBo : 40\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut spectator = Spectator::new(Broken);
        spectator.on_event(&GameEvent::Decision { player: PlayerId(0), stay: true });
        spectator.on_event(&GameEvent::Decision { player: PlayerId(0), stay: false });
        assert!(spectator.failed);
    }
}
