//! Memetic algorithm: generational GA plus local search.

use super::config::MemeticConfig;
use super::population::Population;
use super::Scheme;
use crate::error::Result;
use crate::ls::local_search;
use crate::random::seeded_rng;
use crate::tour::Tour;

/// Result of a memetic run.
#[derive(Debug, Clone)]
pub struct MemeticResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Generations executed.
    pub generations: usize,

    /// Local searches applied.
    pub local_searches: usize,

    /// Final value of the budget counter: generation charges plus the
    /// evaluations reported by each local search.
    pub evaluations: u64,

    /// Best cost at the end of each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the memetic algorithm.
pub struct MemeticRunner;

impl MemeticRunner {
    /// Replaces `tour` with the best individual found.
    ///
    /// The budget counter mixes units: it advances by `population_size` per
    /// generation and by the evaluation count each local search reports.
    /// Where the run stops depends on that sum.
    pub fn run(tour: &mut Tour, config: &MemeticConfig) -> Result<MemeticResult> {
        config.validate()?;
        let (rng, seed) = seeded_rng(config.seed);
        let budget = (config.iterations as u64).saturating_mul(tour.size() as u64);

        log::info!(
            "memetic.run: start n={} population={} hybridization={:?} budget={budget} seed={seed}",
            tour.size(),
            config.population_size,
            config.hybridization
        );

        let mut population = Population::new(config.population_size, tour, rng)
            .with_rates(config.crossover_rate, config.mutation_rate);
        tour.assign_path(&population[population.best_index()]);

        let mut spent = 0u64;
        let mut generations = 0;
        let mut local_searches = 0;
        let mut cost_history = Vec::new();

        while spent < budget {
            population.evolve(Scheme::Generational);
            generations += 1;

            if config.hybridization.applies_at(generations) {
                let targets: Vec<usize> = if config.hybridization.targets_all() {
                    (0..population.size()).collect()
                } else {
                    let (first, second) = population.best_two();
                    vec![first, second]
                };
                for i in targets {
                    spent = spent.saturating_add(local_search(&mut population[i]));
                    local_searches += 1;
                }
            }

            let best = &population[population.best_index()];
            if best.is_better_than(tour) {
                tour.assign_path(best);
                log::debug!("memetic.run: generation={generations} cost={}", tour.cost());
            }
            cost_history.push(tour.cost());
            spent = spent.saturating_add(config.population_size as u64);
        }

        log::info!(
            "memetic.run: done cost={} generations={generations} local_searches={local_searches}",
            tour.cost()
        );

        Ok(MemeticResult {
            best_cost: tour.cost(),
            seed,
            generations,
            local_searches,
            evaluations: spent,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Hybridization;
    use crate::ls::best_swap;
    use crate::tour::Point;

    fn cluster(n: usize) -> Tour {
        // Unit-spaced points keep local-search evaluation counts small.
        let points = (0..n).map(|i| Point::new((i % 3) as f64, (i / 3) as f64)).collect();
        Tour::from_points(points)
    }

    // Every tour of `cluster(9)` costs at least 9, so a single local search
    // charges at least 81 / 2 = 40 evaluations.
    const MIN_SEARCH_CHARGE: u64 = 40;

    #[test]
    fn test_every_generation_all_ends_locally_optimal() {
        let mut tour = cluster(9);
        let config = MemeticConfig::default()
            .with_population_size(4)
            .with_iterations(1)
            .with_seed(5);
        let result = MemeticRunner::run(&mut tour, &config).unwrap();
        // The first generation's searches overrun the budget of 9 on their own.
        assert_eq!(result.generations, 1);
        assert_eq!(result.local_searches, 4);
        assert!(result.evaluations >= 4 * MIN_SEARCH_CHARGE + 4);
        // The best individual of the last generation was local-searched.
        assert!(best_swap(&tour).is_none());
    }

    #[test]
    fn test_two_best_policy_counts() {
        let mut tour = cluster(9);
        let config = MemeticConfig::default()
            .with_population_size(6)
            .with_iterations(1)
            .with_hybridization(Hybridization::EveryGenTwoBest)
            .with_seed(6);
        let result = MemeticRunner::run(&mut tour, &config).unwrap();
        assert_eq!(result.generations, 1);
        assert_eq!(result.local_searches, 2);
        assert!(result.evaluations >= 2 * MIN_SEARCH_CHARGE + 6);
    }

    #[test]
    fn test_tenth_generation_policy_skips_early_generations() {
        // Budget 9 * 1 = 9 with population 3: three generations, none a
        // multiple of ten.
        let mut tour = cluster(9);
        let config = MemeticConfig::default()
            .with_population_size(3)
            .with_iterations(1)
            .with_hybridization(Hybridization::TenthGenAll)
            .with_seed(7);
        let result = MemeticRunner::run(&mut tour, &config).unwrap();
        assert_eq!(result.generations, 3);
        assert_eq!(result.local_searches, 0);
        assert_eq!(result.evaluations, 9);
    }

    #[test]
    fn test_tenth_generation_search_charge_ends_the_run() {
        // Budget 9 * 5 = 45 with population 3. Generations 1 to 9 charge 3
        // each; the searches at generation 10 push the counter past the
        // budget, well short of the 15 generations the size charges allow.
        let mut tour = cluster(9);
        let config = MemeticConfig::default()
            .with_population_size(3)
            .with_iterations(5)
            .with_hybridization(Hybridization::TenthGenTwoBest)
            .with_seed(8);
        let result = MemeticRunner::run(&mut tour, &config).unwrap();
        assert_eq!(result.generations, 10);
        assert_eq!(result.local_searches, 2);
        assert_eq!(result.cost_history.len(), 10);
        assert!(result.evaluations >= 9 * 3 + 2 * MIN_SEARCH_CHARGE + 3);
    }
}
