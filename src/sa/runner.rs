//! SA execution loop.

use rand::RngCore;

use super::config::{NeighborGenerator, SaConfig};
use crate::error::Result;
use crate::random::{random_index, random_unit, seeded_rng};
use crate::tour::Tour;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Seed the run was driven by.
    pub seed: u64,

    /// Counters for the annealing pass.
    pub stats: SaStats,
}

/// Counters collected by one annealing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaStats {
    /// Proposals evaluated.
    pub proposals: usize,

    /// Proposals accepted (including improvements).
    pub accepted_moves: usize,

    /// Proposals that lowered the cost.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,
}

impl SaStats {
    pub(crate) fn merge(&mut self, other: &SaStats) {
        self.proposals += other.proposals;
        self.accepted_moves += other.accepted_moves;
        self.improving_moves += other.improving_moves;
        self.final_temperature = other.final_temperature;
    }
}

/// A reversible edit. Both kinds are involutions: applying one twice
/// restores order and cost.
#[derive(Debug, Clone, Copy)]
enum Move {
    Swap(usize, usize),
    Invert { first: usize, count: usize },
}

impl Move {
    fn apply(self, tour: &mut Tour) {
        match self {
            Move::Swap(i, j) => tour.swap(i, j),
            Move::Invert { first, count } => tour.invert_subpath(first, count),
        }
    }
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Shuffles `tour` into a random start, then anneals it in place.
    pub fn run(tour: &mut Tour, config: &SaConfig) -> Result<SaResult> {
        config.validate()?;
        let (mut rng, seed) = seeded_rng(config.seed);

        log::info!(
            "sa.run: start n={} iterations={} neighbor={:?} seed={seed}",
            tour.size(),
            config.iterations,
            config.neighbor
        );

        tour.shuffle_path(&mut rng);
        let stats = Self::anneal(tour, config, &mut rng);

        log::info!(
            "sa.run: done cost={} accepted={}/{}",
            tour.cost(),
            stats.accepted_moves,
            stats.proposals
        );

        Ok(SaResult {
            best_cost: tour.cost(),
            seed,
            stats,
        })
    }

    /// Anneals `tour` from its current order.
    ///
    /// Runs `config.iterations * size` proposals with Metropolis acceptance.
    /// The tour always holds the current state of the chain.
    pub fn anneal<R: RngCore + ?Sized>(tour: &mut Tour, config: &SaConfig, rng: &mut R) -> SaStats {
        let n = tour.size();
        let mut stats = SaStats::default();
        if n < 2 || tour.is_cleared() || tour.cost() <= 0.0 {
            return stats;
        }

        let max_proposals = config.iterations * n;
        let mut temperature = config.initial_temperature_factor * tour.cost();
        let beta = config.cooling_beta(temperature, max_proposals);

        let mut k = 0;
        while k < max_proposals {
            for _ in 0..config.proposals_per_temperature {
                let mv = propose(n, config.neighbor, rng);
                let before = tour.cost();
                mv.apply(tour);
                let delta = tour.cost() - before;

                if accept(delta, temperature, rng) {
                    stats.accepted_moves += 1;
                    if delta < 0.0 {
                        stats.improving_moves += 1;
                    }
                } else {
                    mv.apply(tour);
                }
                stats.proposals += 1;
            }

            temperature /= 1.0 + beta * temperature;
            k += config.proposals_per_temperature;
        }

        stats.final_temperature = temperature;
        stats
    }
}

/// Draws a random edit for a tour of `n >= 2` nodes.
fn propose<R: RngCore + ?Sized>(n: usize, neighbor: NeighborGenerator, rng: &mut R) -> Move {
    match neighbor {
        NeighborGenerator::Swap => {
            let i = random_index(rng, n);
            let j = loop {
                let j = random_index(rng, n);
                if j != i {
                    break j;
                }
            };
            Move::Swap(i, j)
        }
        NeighborGenerator::Invert => {
            let count = (random_index(rng, 5) + 2).min(n - 1);
            let first = random_index(rng, n - count);
            Move::Invert { first, count }
        }
    }
}

/// Metropolis criterion. Improvements are taken without drawing.
fn accept<R: RngCore + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        true
    } else {
        random_unit(rng) < (-delta / temperature).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::{is_permutation, Point};

    fn circle(n: usize) -> Tour {
        let points = (0..n)
            .map(|i| {
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(500.0 * angle.cos(), 500.0 * angle.sin())
            })
            .collect();
        Tour::from_points(points)
    }

    #[test]
    fn test_zero_budget_keeps_shuffled_start() {
        let mut tour = circle(15);
        let config = SaConfig::default().with_iterations(0).with_seed(5);
        let result = SaRunner::run(&mut tour, &config).unwrap();

        let mut expected = circle(15);
        expected.shuffle_path(&mut create_rng(5));
        assert_eq!(tour.edges(), expected.edges());
        assert_eq!(result.best_cost, expected.cost());
        assert_eq!(result.stats.proposals, 0);
    }

    #[test]
    fn test_swap_annealing_improves_random_start() {
        let mut tour = circle(20);
        let config = SaConfig::default().with_iterations(200).with_seed(42);
        let mut start = circle(20);
        start.shuffle_path(&mut create_rng(42));

        let result = SaRunner::run(&mut tour, &config).unwrap();

        assert!(result.best_cost < start.cost());
        assert!(is_permutation(tour.edges()));
        assert_eq!(tour.cost(), tour.recomputed_cost());
        assert!(result.stats.improving_moves > 0);
        assert!(result.stats.accepted_moves >= result.stats.improving_moves);
    }

    #[test]
    fn test_invert_annealing_keeps_cost_consistent() {
        let mut tour = circle(25);
        let config = SaConfig::default()
            .with_iterations(100)
            .with_neighbor(NeighborGenerator::Invert)
            .with_seed(7);
        let result = SaRunner::run(&mut tour, &config).unwrap();
        assert!(is_permutation(tour.edges()));
        assert!((result.best_cost - tour.recomputed_cost()).abs() < 1e-6);
    }

    #[test]
    fn test_proposal_budget_rounds_up_to_block() {
        let mut tour = circle(7);
        tour.shuffle_path(&mut create_rng(1));
        let config = SaConfig::default().with_iterations(3);
        let stats = SaRunner::anneal(&mut tour, &config, &mut create_rng(2));
        // 21 proposals requested, evaluated in blocks of 20.
        assert_eq!(stats.proposals, 40);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = SaConfig::default().with_iterations(50).with_seed(123);
        let mut a = circle(12);
        let mut b = circle(12);
        SaRunner::run(&mut a, &config).unwrap();
        SaRunner::run(&mut b, &config).unwrap();
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_tiny_tours_are_left_alone() {
        let mut tour = Tour::from_points(vec![Point::new(0.0, 0.0)]);
        let result = SaRunner::run(&mut tour, &SaConfig::default().with_seed(1)).unwrap();
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.stats.proposals, 0);
    }

    #[test]
    fn test_accept_improvement_without_draw() {
        let mut rng = create_rng(0);
        let mut twin = create_rng(0);
        assert!(accept(-1.0, 1.0, &mut rng));
        assert_eq!(rng.next_u32(), twin.next_u32());
    }

    #[test]
    fn test_accept_rejects_huge_uphill_when_cold() {
        let mut rng = create_rng(0);
        for _ in 0..100 {
            assert!(!accept(1e6, 1e-3, &mut rng));
        }
    }

    #[test]
    fn test_invert_proposal_in_range() {
        let mut rng = create_rng(9);
        for n in 2..12 {
            for _ in 0..50 {
                match propose(n, NeighborGenerator::Invert, &mut rng) {
                    Move::Invert { first, count } => assert!(first + count < n),
                    Move::Swap(..) => unreachable!(),
                }
            }
        }
    }
}
