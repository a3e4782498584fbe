use std::cmp;

use super::SimulationError;

/// The fewest turns worth splitting off into a game of its own.
/// Workloads smaller than this collapse onto fewer workers, down to a
/// single game for anything under a million turns.
pub const MIN_TURNS_PER_GAME: u64 = 1_000_000;

/// Split `total_turns` into per-game turn counts, at most one per
/// worker. The returned counts always sum to exactly `total_turns`;
/// zero turns produces an empty split.
pub fn partition(total_turns: u64, worker_count: usize) -> Result<Vec<u64>, SimulationError> {
    if worker_count == 0 {
        return Err(SimulationError::InvalidWorkerCount);
    }

    let turns_per_game = cmp::max(MIN_TURNS_PER_GAME, total_turns / worker_count as u64);

    let mut turns = Vec::with_capacity(worker_count);
    let mut remaining = total_turns;

    while turns.len() < worker_count && remaining > 0 {
        let game_turns = cmp::min(turns_per_game, remaining);
        turns.push(game_turns);
        remaining -= game_turns;
    }

    // Integer division truncates, leaving at most one spare turn per
    // game; hand those out to the earliest games.
    for game_turns in turns.iter_mut() {
        if remaining == 0 {
            break;
        }
        *game_turns += 1;
        remaining -= 1;
    }

    Ok(turns)
}
