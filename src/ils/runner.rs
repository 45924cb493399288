//! ILS execution loop.

use super::config::IlsConfig;
use crate::error::Result;
use crate::ls::{local_search, local_search_from_random};
use crate::random::seeded_rng;
use crate::tour::Tour;

/// Result of an ILS run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Perturbations whose optimum replaced the incumbent.
    pub accepted: usize,

    /// Incumbent cost after each local search.
    pub cost_history: Vec<f64>,
}

/// Executes Iterated Local Search.
pub struct IlsRunner;

impl IlsRunner {
    /// Leaves the best local optimum found in `tour`.
    ///
    /// The first local search always runs, from a random start; the
    /// remaining `iterations - 1` are perturbation steps.
    pub fn run(tour: &mut Tour, config: &IlsConfig) -> Result<IlsResult> {
        config.validate()?;
        let (mut rng, seed) = seeded_rng(config.seed);
        let length = config.perturbation_length(tour.size());

        log::info!(
            "ils.run: start n={} iterations={} perturbation={length} seed={seed}",
            tour.size(),
            config.iterations
        );

        local_search_from_random(tour, &mut rng);
        let mut current = tour.clone();
        let mut accepted = 0;
        let mut cost_history = vec![tour.cost()];

        for step in 1..config.iterations {
            current.assign_path(tour);
            current.shuffle_subpath(length, &mut rng);
            local_search(&mut current);

            if current.is_better_than(tour) {
                tour.assign_path(&current);
                accepted += 1;
                log::debug!("ils.run: step={step} cost={}", tour.cost());
            }
            cost_history.push(tour.cost());
        }

        log::info!("ils.run: done cost={} accepted={accepted}", tour.cost());

        Ok(IlsResult {
            best_cost: tour.cost(),
            seed,
            accepted,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ls::best_swap;
    use crate::tour::Point;

    fn scattered(n: usize) -> Tour {
        let points = (0..n)
            .map(|i| Point::new(((i * 53) % 97) as f64, ((i * 31) % 83) as f64))
            .collect();
        Tour::from_points(points)
    }

    #[test]
    fn test_result_is_local_optimum() {
        let mut tour = scattered(25);
        let result = IlsRunner::run(&mut tour, &IlsConfig::default().with_iterations(8).with_seed(2)).unwrap();
        assert!(best_swap(&tour).is_none());
        assert_eq!(result.cost_history.len(), 8);
        assert!(result.cost_history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_single_iteration_is_plain_descent() {
        let mut tour = scattered(15);
        let result = IlsRunner::run(&mut tour, &IlsConfig::default().with_iterations(1).with_seed(6)).unwrap();
        assert_eq!(result.accepted, 0);
        assert_eq!(result.cost_history, vec![tour.cost()]);
    }
}
