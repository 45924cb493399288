//! GA evolutionary loop execution.
//!
//! [`GaRunner`] seeds a population with random shuffles of the input tour,
//! then evolves it until the evaluation budget is spent, tracking the best
//! tour ever seen.

use super::config::GaConfig;
use super::population::Population;
use crate::error::Result;
use crate::random::seeded_rng;
use crate::tour::Tour;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Evolution steps executed.
    pub steps: usize,

    /// Best cost at the end of each step.
    pub cost_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, GaRunner};
/// use tsp_metaheur::{Point, Tour};
///
/// let points = (0..12).map(|i| Point::new((i * 7 % 12) as f64, (i * 5 % 12) as f64)).collect();
/// let mut tour = Tour::from_points(points);
/// let config = GaConfig::default().with_iterations(5).with_seed(42);
/// let result = GaRunner::run(&mut tour, &config).unwrap();
/// assert_eq!(result.best_cost, tour.cost());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Replaces `tour` with the best individual found.
    pub fn run(tour: &mut Tour, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;
        let (rng, seed) = seeded_rng(config.seed);
        let budget = config.iterations.saturating_mul(tour.size());
        let step_cost = config.step_cost();

        log::info!(
            "ga.run: start n={} population={} scheme={:?} budget={budget} seed={seed}",
            tour.size(),
            config.population_size,
            config.scheme
        );

        let mut population = Population::new(config.population_size, tour, rng)
            .with_rates(config.crossover_rate, config.mutation_rate);
        tour.assign_path(&population[population.best_index()]);

        let mut steps = 0;
        let mut cost_history = Vec::new();
        let mut spent = 0;

        while spent < budget {
            population.evolve(config.scheme);
            steps += 1;

            let best = &population[population.best_index()];
            if best.is_better_than(tour) {
                tour.assign_path(best);
                log::debug!("ga.run: step={steps} cost={}", tour.cost());
            }
            cost_history.push(tour.cost());
            spent += step_cost;
        }

        log::info!("ga.run: done cost={} steps={steps}", tour.cost());

        Ok(GaResult {
            best_cost: tour.cost(),
            seed,
            steps,
            cost_history,
        })
    }
}
