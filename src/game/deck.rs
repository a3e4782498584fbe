use rand::seq::SliceRandom;
use rand::Rng;

use super::globals::{CardEffect, CHANCE_CARDS, CHEST_CARDS, DECK_SIZE};

/// A draw-without-replacement deck of effect cards that reshuffles
/// itself from its master card list whenever it runs out.
pub struct Deck {
    /// The fixed card set this deck reshuffles from.
    master: &'static [CardEffect; DECK_SIZE],
    /// The cards left to draw. Cards are drawn from the back.
    cards: Vec<CardEffect>,
}

impl Deck {
    /// Create the Chance deck. A deck starts out empty and is
    /// shuffled lazily by the first draw.
    pub fn chance() -> Deck {
        Deck {
            master: &CHANCE_CARDS,
            cards: vec![],
        }
    }

    /// Create the Community Chest deck.
    pub fn community_chest() -> Deck {
        Deck {
            master: &CHEST_CARDS,
            cards: vec![],
        }
    }

    /// Draw the next card. If the previous draw emptied the deck, the
    /// full card set is reshuffled first.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> CardEffect {
        if self.cards.is_empty() {
            self.cards = self.master.to_vec();
            self.cards.shuffle(rng);
        }

        match self.cards.pop() {
            Some(card) => card,
            // The deck was refilled above
            None => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    /// Count how many times each card appears in `cards`.
    fn card_counts(cards: &[CardEffect]) -> HashMap<CardEffect, usize> {
        let mut counts = HashMap::new();
        for &card in cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn one_shuffle_cycle_draws_the_full_card_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::chance();

        let drawn: Vec<CardEffect> = (0..DECK_SIZE).map(|_| deck.draw(&mut rng)).collect();

        assert_eq!(card_counts(&drawn), card_counts(&CHANCE_CARDS));
    }

    #[test]
    fn exhausting_the_deck_reshuffles_it() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut deck = Deck::community_chest();

        // Two full cycles: each 16-draw window must contain the fixed
        // card set exactly once, with no duplication across the
        // reshuffle boundary.
        let first: Vec<CardEffect> = (0..DECK_SIZE).map(|_| deck.draw(&mut rng)).collect();
        let second: Vec<CardEffect> = (0..DECK_SIZE).map(|_| deck.draw(&mut rng)).collect();

        assert_eq!(card_counts(&first), card_counts(&CHEST_CARDS));
        assert_eq!(card_counts(&second), card_counts(&CHEST_CARDS));
    }

    #[test]
    fn draws_are_deterministic_for_a_seeded_rng() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let mut deck_a = Deck::chance();
        let mut deck_b = Deck::chance();

        for _ in 0..DECK_SIZE * 3 {
            assert_eq!(deck_a.draw(&mut rng_a), deck_b.draw(&mut rng_b));
        }
    }
}
