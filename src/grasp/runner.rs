//! GRASP execution loop.

use super::config::GraspConfig;
use super::construction::randomized_greedy;
use crate::error::Result;
use crate::ls::local_search;
use crate::random::seeded_rng;
use crate::tour::Tour;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Local optima visited (constructions plus perturbations).
    pub local_optima: usize,

    /// Best cost after each construction.
    pub cost_history: Vec<f64>,
}

/// Executes GRASP.
pub struct GraspRunner;

impl GraspRunner {
    /// Replaces `tour` with the best local optimum found.
    ///
    /// With zero iterations the tour is left as it was.
    pub fn run(tour: &mut Tour, config: &GraspConfig) -> Result<GraspResult> {
        config.validate()?;
        let (mut rng, seed) = seeded_rng(config.seed);
        let n = tour.size();
        let width = config.candidate_width(n);

        log::info!(
            "grasp.run: start n={n} iterations={} extended={} width={width} seed={seed}",
            config.iterations,
            config.extended
        );

        let mut best = tour.clone();
        best.clear_path();
        let mut current = tour.clone();
        let mut local_optima = 0;
        let mut cost_history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            randomized_greedy(&mut current, width, &mut rng);
            local_search(&mut current);
            local_optima += 1;
            if current.is_better_than(&best) {
                best.assign_path(&current);
            }

            if config.extended {
                for _ in 0..config.perturbations {
                    current.shuffle_subpath(n / 4, &mut rng);
                    local_search(&mut current);
                    local_optima += 1;
                    if current.is_better_than(&best) {
                        best.assign_path(&current);
                    }
                }
            }

            cost_history.push(best.cost());
        }

        if !best.is_cleared() {
            tour.assign_path(&best);
        }

        log::info!("grasp.run: done cost={} optima={local_optima}", tour.cost());

        Ok(GraspResult {
            best_cost: tour.cost(),
            seed,
            local_optima,
            cost_history,
        })
    }
}
