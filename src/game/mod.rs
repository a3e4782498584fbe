mod board;
mod deck;
pub mod globals;

pub use board::{Board, DiceRoll, Position};
pub use deck::Deck;

use rand::Rng;

use crate::histogram::Histogram;
use crate::sim::CancelToken;

/// One simulated game: a single token walking the board for a fixed
/// number of turns, with its own card decks and its own random stream.
///
/// Sessions never share state, so any number of them can run
/// concurrently without locking.
pub struct GameSession<R: Rng> {
    rng: R,
    board: Board,
    chance: Deck,
    community_chest: Deck,
}

impl<R: Rng> GameSession<R> {
    /// Create a fresh game. The session owns `rng` exclusively, so a
    /// seeded generator makes the whole game deterministic.
    pub fn new(rng: R) -> GameSession<R> {
        GameSession {
            rng,
            board: Board::new(),
            chance: Deck::chance(),
            community_chest: Deck::community_chest(),
        }
    }

    /// Play exactly `turns` turns and return where the token landed.
    /// Zero turns yields an all-zero histogram.
    pub fn run(self, turns: u64) -> Histogram {
        match self.run_until_cancelled(turns, &CancelToken::new()) {
            Some(results) => results,
            // A private token is never cancelled
            None => unreachable!(),
        }
    }

    /// Like `run`, but gives up between turns once `cancel` is set.
    /// A cancelled game reports no result at all rather than a
    /// partially filled histogram.
    pub fn run_until_cancelled(mut self, turns: u64, cancel: &CancelToken) -> Option<Histogram> {
        let mut results = Histogram::new();

        for _ in 0..turns {
            if cancel.is_cancelled() {
                return None;
            }

            self.board.take_turn(
                &mut self.rng,
                &mut self.chance,
                &mut self.community_chest,
                &mut results,
            );
        }

        Some(results)
    }
}
