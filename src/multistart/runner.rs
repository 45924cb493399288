//! Multi-start execution loop.

use super::config::{MultiStartConfig, Strategy};
use crate::error::Result;
use crate::ls::{local_search, nearest_neighbor};
use crate::random::{seeded_rng, TourRng};
use crate::tour::Tour;

/// Result of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Candidate tours evaluated.
    pub starts: usize,

    /// Starts that improved on the best so far.
    pub improvements: usize,
}

/// Executes a multi-start strategy.
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Leaves the best candidate found in `tour`.
    ///
    /// The restart strategies track the best from an empty tour, so with
    /// zero iterations `tour` keeps its order. Random sampling always
    /// draws at least one tour.
    pub fn run(tour: &mut Tour, config: &MultiStartConfig) -> Result<MultiStartResult> {
        let (mut rng, seed) = seeded_rng(config.seed);

        log::info!(
            "multistart.run: start n={} strategy={:?} iterations={} seed={seed}",
            tour.size(),
            config.strategy,
            config.iterations
        );

        let (starts, improvements) = match config.strategy {
            Strategy::RandomRestart => random_restart(tour, config.iterations, &mut rng),
            Strategy::GreedyPerturbation => greedy_perturbation(tour, config.iterations, &mut rng),
            Strategy::RandomSampling => random_sampling(tour, config.iterations, &mut rng),
        };

        log::info!(
            "multistart.run: done cost={} improvements={improvements}/{starts}",
            tour.cost()
        );

        Ok(MultiStartResult {
            best_cost: tour.cost(),
            seed,
            starts,
            improvements,
        })
    }
}

/// Keeps the best of `candidates` local optima. `start` prepares each
/// candidate before the descent.
fn restart_loop(
    tour: &mut Tour,
    mut current: Tour,
    candidates: usize,
    mut start: impl FnMut(&mut Tour),
) -> (usize, usize) {
    let mut best = tour.clone();
    best.clear_path();
    let mut improvements = 0;

    for _ in 0..candidates {
        start(&mut current);
        local_search(&mut current);
        if current.is_better_than(&best) {
            best.assign_path(&current);
            improvements += 1;
        }
    }

    if !best.is_cleared() {
        tour.assign_path(&best);
    }
    (candidates, improvements)
}

fn random_restart(tour: &mut Tour, iterations: usize, rng: &mut TourRng) -> (usize, usize) {
    let current = tour.clone();
    restart_loop(tour, current, iterations, |candidate| candidate.shuffle_path(rng))
}

fn greedy_perturbation(tour: &mut Tour, iterations: usize, rng: &mut TourRng) -> (usize, usize) {
    let mut greedy = tour.clone();
    nearest_neighbor(&mut greedy);
    let length = tour.size() / 4;
    let current = greedy.clone();

    restart_loop(tour, current, iterations, |candidate| {
        candidate.assign_path(&greedy);
        candidate.shuffle_subpath(length, rng);
    })
}

fn random_sampling(tour: &mut Tour, iterations: usize, rng: &mut TourRng) -> (usize, usize) {
    let samples = iterations.saturating_mul(tour.size()).max(1);
    let mut improvements = 0;

    tour.shuffle_path(rng);
    let mut current = tour.clone();
    for _ in 1..samples {
        current.shuffle_path(rng);
        if current.is_better_than(tour) {
            tour.assign_path(&current);
            improvements += 1;
        }
    }

    (samples, improvements)
}
