//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (Basic VNS)
//!
//! 1. Shuffle the tour into a random incumbent x, set k = 1
//! 2. For each iteration:
//!    a. **Shaking**: copy x and shuffle a random segment of
//!    `size / (9 - k)` nodes
//!    b. **Local search**: descend to a local optimum x'
//!    c. **Move or not**: if f(x') < f(x), set x = x' and k = 1;
//!    otherwise k = k + 1, wrapping back to 1 past `max_neighborhood`

use super::config::VnsConfig;
use crate::error::Result;
use crate::ls::local_search;
use crate::random::seeded_rng;
use crate::tour::Tour;

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,
    /// Seed the run was driven by.
    pub seed: u64,
    /// Shake + local search steps executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found (0 for the start).
    pub best_iteration: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes Basic VNS on `tour`, leaving the incumbent in place.
    pub fn run(tour: &mut Tour, config: &VnsConfig) -> Result<VnsResult> {
        config.validate()?;
        let (mut rng, seed) = seeded_rng(config.seed);
        let n = tour.size();

        log::info!(
            "vns.run: start n={n} iterations={} kmax={} seed={seed}",
            config.iterations,
            config.max_neighborhood
        );

        tour.shuffle_path(&mut rng);
        let mut current = tour.clone();
        let mut k = 1;
        let mut best_iteration = 0;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for iteration in 1..=config.iterations {
            if k > config.max_neighborhood {
                k = 1;
            }

            current.assign_path(tour);
            current.shuffle_subpath(config.shake_length(k, n), &mut rng);
            local_search(&mut current);

            if current.is_better_than(tour) {
                tour.assign_path(&current);
                best_iteration = iteration;
                k = 1;
                log::debug!("vns.run: iteration={iteration} cost={}", tour.cost());
            } else {
                k += 1;
            }

            cost_history.push(tour.cost());
        }

        log::info!("vns.run: done cost={} best_iteration={best_iteration}", tour.cost());

        Ok(VnsResult {
            best_cost: tour.cost(),
            seed,
            iterations: config.iterations,
            best_iteration,
            cost_history,
        })
    }
}
