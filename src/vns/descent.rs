//! Variable Neighborhood Descent over three neighbourhoods.
//!
//! | k | neighbourhood                  | evaluations charged |
//! |---|--------------------------------|---------------------|
//! | 1 | every pairwise swap            | n(n-1)/2            |
//! | 2 | random shuffles of 4 nodes     | 24(n-3)             |
//! | 3 | random shuffles of 6 nodes     | 360(n-5)            |
//!
//! Each pass takes the best neighbour of the current tour. An improving
//! neighbour becomes the current tour and the descent returns to k = 1;
//! otherwise it moves to k + 1. The descent stops when k = 3 finds no
//! improvement or `iterations * size` evaluations have been charged.

use rand::RngCore;

use super::config::VndConfig;
use crate::error::Result;
use crate::random::seeded_rng;
use crate::tour::Tour;

const SHUFFLE_SHORT: usize = 4;
const SHUFFLE_LONG: usize = 6;

/// Result of a VND run.
#[derive(Debug, Clone)]
pub struct VndResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,
    /// Seed the run was driven by.
    pub seed: u64,
    /// Evaluations charged against the budget.
    pub evaluations: usize,
    /// Neighbourhood passes executed.
    pub passes: usize,
    /// Passes that moved the current tour.
    pub improvements: usize,
}

/// Variable Neighborhood Descent runner.
pub struct VndRunner;

impl VndRunner {
    /// Shuffles `tour` into a random start and descends from it in place.
    pub fn run(tour: &mut Tour, config: &VndConfig) -> Result<VndResult> {
        let (mut rng, seed) = seeded_rng(config.seed);
        let n = tour.size();

        let budgets = [
            n * n.saturating_sub(1) / 2,
            24 * n.saturating_sub(3),
            360 * n.saturating_sub(5),
        ];
        let max_evaluations = config.iterations.saturating_mul(n);

        log::info!("vnd.run: start n={n} budget={max_evaluations} seed={seed}");

        tour.shuffle_path(&mut rng);
        let mut best_neighbor = tour.clone();
        let mut aux = tour.clone();

        let mut evaluations = 1usize;
        let mut passes = 0;
        let mut improvements = 0;
        let mut k = 1;

        loop {
            best_neighbor.assign_path(tour);
            aux.assign_path(tour);
            evaluations = evaluations.saturating_add(budgets[k - 1]);

            match k {
                1 => best_swap_neighbor(&mut aux, &mut best_neighbor),
                2 => best_shuffle_neighbor(tour, &mut aux, &mut best_neighbor, SHUFFLE_SHORT, budgets[1], &mut rng),
                _ => best_shuffle_neighbor(tour, &mut aux, &mut best_neighbor, SHUFFLE_LONG, budgets[2], &mut rng),
            }
            passes += 1;

            if best_neighbor.is_better_than(tour) {
                tour.assign_path(&best_neighbor);
                improvements += 1;
                k = 1;
                log::debug!("vnd.run: pass={passes} cost={}", tour.cost());
            } else {
                k += 1;
            }

            if k > budgets.len() || evaluations > max_evaluations {
                break;
            }
        }

        log::info!(
            "vnd.run: done cost={} passes={passes} evaluations={evaluations}",
            tour.cost()
        );

        Ok(VndResult {
            best_cost: tour.cost(),
            seed,
            evaluations,
            passes,
            improvements,
        })
    }
}

/// Scans every swap of `aux`, restoring it after each one.
fn best_swap_neighbor(aux: &mut Tour, best: &mut Tour) {
    let n = aux.size();
    for i in 1..n {
        for j in 0..i {
            aux.swap(i, j);
            if aux.is_better_than(best) {
                best.assign_path(aux);
            }
            aux.swap(i, j);
        }
    }
}

/// Samples `samples` random segment shuffles of `current`.
fn best_shuffle_neighbor<R: RngCore + ?Sized>(
    current: &Tour,
    aux: &mut Tour,
    best: &mut Tour,
    length: usize,
    samples: usize,
    rng: &mut R,
) {
    for _ in 0..samples {
        aux.shuffle_subpath(length, rng);
        if aux.is_better_than(best) {
            best.assign_path(aux);
        }
        aux.assign_path(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ls::best_swap;
    use crate::tour::{is_permutation, Point};

    fn scattered(n: usize) -> Tour {
        let points = (0..n)
            .map(|i| Point::new(((i * 41) % 89) as f64, ((i * 23) % 61) as f64))
            .collect();
        Tour::from_points(points)
    }

    #[test]
    fn test_unbounded_descent_ends_swap_optimal() {
        let mut tour = scattered(12);
        let result = VndRunner::run(&mut tour, &VndConfig::default().with_iterations(1_000_000).with_seed(3))
            .unwrap();
        // The last pass was k = 3 without improvement, preceded by k = 1
        // without improvement, so no swap improves the final tour.
        assert!(best_swap(&tour).is_none());
        assert!(result.passes >= 3);
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    fn test_small_budget_stops_after_first_pass() {
        let mut tour = scattered(10);
        let result = VndRunner::run(&mut tour, &VndConfig::default().with_iterations(1).with_seed(5))
            .unwrap();
        // One swap scan charges 45 > 10 evaluations.
        assert_eq!(result.passes, 1);
        assert_eq!(result.evaluations, 46);
        assert!(is_permutation(tour.edges()));
    }

    #[test]
    fn test_zero_budget_still_runs_one_pass() {
        let mut tour = scattered(10);
        let result = VndRunner::run(&mut tour, &VndConfig::default().with_iterations(0).with_seed(2))
            .unwrap();
        assert_eq!(result.passes, 1);
        assert_eq!(result.evaluations, 46);
        assert!(is_permutation(tour.edges()));
    }

    #[test]
    fn test_tiny_tours() {
        for n in 0..4 {
            let mut tour = scattered(n);
            let result = VndRunner::run(&mut tour, &VndConfig::default().with_seed(1)).unwrap();
            assert_eq!(result.improvements, 0);
            assert_eq!(tour.size(), n);
        }
    }
}
