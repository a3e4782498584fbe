//! End-to-end checks of the public simulation surface.

use monopoly_odds::{
    partition, run_simulation, run_simulation_with_cancel, CancelToken, SimulationError,
    MIN_TURNS_PER_GAME,
};

#[test]
fn zero_turns_yields_an_all_zero_histogram() {
    let results = run_simulation(0, 4, 1).unwrap();
    assert_eq!(results.total(), 0);
    assert!(results.counts().iter().all(|&count| count == 0));
}

#[test]
fn one_turn_records_exactly_one_landing() {
    let results = run_simulation(1, 4, 1).unwrap();
    assert_eq!(results.total(), 1);

    let nonzero = results.counts().iter().filter(|&&count| count > 0).count();
    assert_eq!(nonzero, 1);
}

#[test]
fn every_simulated_turn_is_counted_once() {
    let results = run_simulation(50_000, 4, 9).unwrap();
    assert_eq!(results.total(), 50_000);
}

#[test]
fn the_same_seed_reproduces_the_same_histogram() {
    let first = run_simulation(10_000, 4, 123).unwrap();
    let second = run_simulation(10_000, 4, 123).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_workers_is_rejected_at_the_boundary() {
    assert_eq!(
        run_simulation(100, 0, 1),
        Err(SimulationError::InvalidWorkerCount)
    );
}

#[test]
fn a_cancelled_run_produces_no_histogram() {
    let cancel = CancelToken::new();
    cancel.cancel();
    assert_eq!(
        run_simulation_with_cancel(10_000, 4, 1, &cancel),
        Err(SimulationError::Cancelled)
    );
}

#[test]
fn workloads_below_the_chunk_floor_stay_on_one_worker() {
    let turns = partition(MIN_TURNS_PER_GAME, 8).unwrap();
    assert_eq!(turns, vec![MIN_TURNS_PER_GAME]);

    // Anything past the floor spills into a game of its own
    let turns = partition(MIN_TURNS_PER_GAME + 1, 8).unwrap();
    assert_eq!(turns, vec![MIN_TURNS_PER_GAME, 1]);
}

#[test]
fn a_long_run_visits_most_of_the_board() {
    let results = run_simulation(200_000, 2, 4).unwrap();

    // Every reachable square should have been hit many times over
    // 200k turns. The only exception is the Go-to-Jail square itself:
    // landing there always ends the turn in jail, so its own slot
    // never gets a count.
    for (slot, &count) in results.counts().iter().enumerate() {
        if slot == 30 {
            assert_eq!(count, 0);
        } else {
            assert!(count > 0, "slot {} was never visited", slot);
        }
    }

    // Jail is entered far more often than a typical square is landed
    // on, thanks to the Go-to-Jail square, two cards and speeding.
    let average = results.total() / 41;
    assert!(results.counts()[40] > average);
}
