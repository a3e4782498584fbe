use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::{CancelToken, SimulationError};
use crate::game::GameSession;
use crate::histogram::Histogram;

/// Play one game per turn count, in parallel, and sum the resulting
/// histograms. Summation is commutative, so worker scheduling order
/// cannot affect the combined counts.
pub fn aggregate(
    turns_per_game: &[u64],
    seed: u64,
    cancel: &CancelToken,
) -> Result<Histogram, SimulationError> {
    let per_game: Vec<Option<Histogram>> = turns_per_game
        .par_iter()
        .enumerate()
        .map(|(game_index, &turns)| {
            // Offsetting the seed by the game index gives every game
            // its own ChaCha stream, so concurrent games stay
            // uncorrelated no matter how rayon schedules them.
            let rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(game_index as u64));
            GameSession::new(rng).run_until_cancelled(turns, cancel)
        })
        .collect();

    let mut combined = Histogram::new();
    for results in &per_game {
        match results {
            Some(histogram) => combined += histogram,
            // Any interrupted game discards the whole run; a partial
            // aggregate would misstate the per-square odds
            None => return Err(SimulationError::Cancelled),
        }
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_split_yields_an_all_zero_histogram() {
        let combined = aggregate(&[], 1, &CancelToken::new()).unwrap();
        assert_eq!(combined.total(), 0);
    }

    #[test]
    fn every_game_contributes_its_turns() {
        let combined = aggregate(&[1_000, 2_000, 3_000], 1, &CancelToken::new()).unwrap();
        assert_eq!(combined.total(), 6_000);
    }

    #[test]
    fn the_aggregate_matches_games_run_by_hand() {
        let seed = 77;
        let combined = aggregate(&[500, 700], seed, &CancelToken::new()).unwrap();

        let mut by_hand = Histogram::new();
        let first = GameSession::new(ChaCha8Rng::seed_from_u64(seed)).run(500);
        let second = GameSession::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(1))).run(700);

        // Merge order must not matter
        by_hand += &second;
        by_hand += &first;

        assert_eq!(combined, by_hand);
    }

    #[test]
    fn a_cancelled_run_reports_no_result() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(
            aggregate(&[1_000], 1, &cancel),
            Err(SimulationError::Cancelled)
        );
    }
}
