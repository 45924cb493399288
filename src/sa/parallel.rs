//! Cooperative multi-chain annealing.

use super::config::{ParallelSaConfig, SaConfig};
use super::runner::{SaRunner, SaStats};
use crate::cooperative::advance_all;
use crate::error::Result;
use crate::random::{derive_rng, seeded_rng, TourRng};
use crate::tour::Tour;

/// Result of a cooperative annealing run.
#[derive(Debug, Clone)]
pub struct ParallelSaResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Master seed.
    pub seed: u64,

    /// Bursts executed.
    pub bursts: usize,

    /// Counters summed over every chain and burst.
    pub stats: SaStats,

    /// Best cost after each burst.
    pub cost_history: Vec<f64>,
}

struct Chain {
    tour: Tour,
    rng: TourRng,
    stats: SaStats,
}

/// Runs several annealing chains that periodically restart from the best
/// tour any of them has found.
pub struct ParallelSaRunner;

impl ParallelSaRunner {
    /// Anneals `tour` in place with `config.processes` cooperating chains.
    ///
    /// Each burst runs one annealing pass per chain. At the barrier the
    /// cheapest chain (lowest index on ties) replaces `tour` if it improves
    /// on it, and every chain restarts from `tour` unless this was the last
    /// burst.
    pub fn run(tour: &mut Tour, config: &ParallelSaConfig) -> Result<ParallelSaResult> {
        config.validate()?;
        let (_, seed) = seeded_rng(config.seed);
        let times = config.bursts();

        log::info!(
            "sa.parallel: start n={} processes={} bursts={times} seed={seed}",
            tour.size(),
            config.processes
        );

        let mut chains: Vec<Chain> = (0..config.processes)
            .map(|i| {
                let mut rng = derive_rng(seed, i);
                let mut chain_tour = tour.clone();
                chain_tour.shuffle_path(&mut rng);
                Chain {
                    tour: chain_tour,
                    rng,
                    stats: SaStats::default(),
                }
            })
            .collect();

        let burst = SaConfig::default()
            .with_iterations(1)
            .with_neighbor(config.neighbor);
        let mut cost_history = Vec::with_capacity(times);
        let mut bursts = 0;

        for k in 1..times {
            advance_all(&mut chains, |chain| {
                let stats = SaRunner::anneal(&mut chain.tour, &burst, &mut chain.rng);
                chain.stats.merge(&stats);
            });

            for chain in &chains {
                if chain.tour.is_better_than(tour) {
                    tour.assign_path(&chain.tour);
                }
            }

            if k < times - 1 {
                for chain in &mut chains {
                    chain.tour.assign_path(tour);
                }
            }

            bursts += 1;
            cost_history.push(tour.cost());
            log::debug!("sa.parallel: burst {k}/{times} best={}", tour.cost());
        }

        let mut stats = SaStats::default();
        for chain in &chains {
            stats.merge(&chain.stats);
        }

        log::info!("sa.parallel: done cost={}", tour.cost());

        Ok(ParallelSaResult {
            best_cost: tour.cost(),
            seed,
            bursts,
            stats,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{is_permutation, Point};

    fn circle(n: usize) -> Tour {
        let points = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(400.0 * angle.cos(), 400.0 * angle.sin())
            })
            .collect();
        Tour::from_points(points)
    }

    #[test]
    fn test_history_is_non_increasing() {
        let mut tour = circle(18);
        let config = ParallelSaConfig::default()
            .with_processes(3)
            .with_iterations(8)
            .with_seed(11);
        let result = ParallelSaRunner::run(&mut tour, &config).unwrap();

        assert_eq!(result.bursts, 7);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert!(is_permutation(tour.edges()));
        assert_eq!(result.best_cost, tour.recomputed_cost());
    }

    #[test]
    fn test_never_worse_than_input() {
        let mut tour = circle(16);
        let start = tour.cost();
        let config = ParallelSaConfig::default().with_iterations(4).with_seed(3);
        let result = ParallelSaRunner::run(&mut tour, &config).unwrap();
        assert!(result.best_cost <= start);
    }

    #[test]
    fn test_reproducible() {
        let config = ParallelSaConfig::default()
            .with_processes(2)
            .with_iterations(5)
            .with_seed(77);
        let mut a = circle(14);
        let mut b = circle(14);
        ParallelSaRunner::run(&mut a, &config).unwrap();
        ParallelSaRunner::run(&mut b, &config).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_single_burst_does_nothing() {
        let mut tour = circle(10);
        let before = tour.edges().to_vec();
        let config = ParallelSaConfig::default().with_iterations(1).with_seed(1);
        let result = ParallelSaRunner::run(&mut tour, &config).unwrap();
        assert_eq!(result.bursts, 0);
        assert_eq!(tour.edges(), before.as_slice());
    }

    #[test]
    fn test_rejects_zero_processes() {
        let mut tour = circle(10);
        let config = ParallelSaConfig::default().with_processes(0);
        assert!(ParallelSaRunner::run(&mut tour, &config).is_err());
    }
}
