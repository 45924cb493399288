//! Island model: cooperating generational populations.
//!
//! Every population evolves with its own generator derived from the
//! master seed. Migrations happen at a barrier after every population has
//! finished the same generation, and always visit populations in index
//! order, so a seed fixes the whole trajectory.

use super::config::{IslandConfig, Topology};
use super::population::Population;
use super::Scheme;
use crate::cooperative::advance_all;
use crate::error::Result;
use crate::random::{derive_rng, seeded_rng};
use crate::tour::Tour;

/// Result of an island run.
#[derive(Debug, Clone)]
pub struct IslandResult {
    /// Cost of the tour left in place.
    pub best_cost: f64,

    /// Master seed.
    pub seed: u64,

    /// Generations executed by every population.
    pub generations: usize,

    /// Migration rounds executed.
    pub migrations: usize,

    /// Best cost after each migration round.
    pub cost_history: Vec<f64>,
}

/// Executes the island model.
pub struct IslandRunner;

impl IslandRunner {
    /// Replaces `tour` with the best individual any population reaches,
    /// if it improves on `tour`.
    pub fn run(tour: &mut Tour, config: &IslandConfig) -> Result<IslandResult> {
        config.validate()?;
        let (_, seed) = seeded_rng(config.seed);
        let n = tour.size();
        let generations = config.iterations.saturating_mul(n);
        let latency = config.migration_latency.saturating_mul(n).max(1);

        log::info!(
            "island.run: start n={n} processes={} population={} generations={generations} latency={latency} topology={:?} seed={seed}",
            config.processes,
            config.population_size,
            config.topology
        );

        let mut world: Vec<Population> = (0..config.processes)
            .map(|i| {
                Population::new(config.population_size, tour, derive_rng(seed, i))
                    .with_rates(config.crossover_rate, config.mutation_rate)
            })
            .collect();

        let mut migrations = 0;
        let mut cost_history = Vec::new();

        for generation in 0..generations {
            advance_all(&mut world, |population| population.evolve(Scheme::Generational));

            let migrate = (generation + 1) % latency == 0;
            if migrate {
                match config.topology {
                    Topology::Ring => migrate_ring(&mut world),
                    Topology::Star => migrate_star(&mut world),
                }
                migrations += 1;
            }

            for population in &world {
                let best = &population[population.best_index()];
                if best.is_better_than(tour) {
                    tour.assign_path(best);
                }
            }

            if migrate {
                cost_history.push(tour.cost());
                log::debug!("island.run: migration={migrations} best={}", tour.cost());
            }
        }

        log::info!("island.run: done cost={} migrations={migrations}", tour.cost());

        Ok(IslandResult {
            best_cost: tour.cost(),
            seed,
            generations,
            migrations,
            cost_history,
        })
    }
}

/// Each population's worst takes its successor's best, in index order.
fn migrate_ring(world: &mut [Population]) {
    let p = world.len();
    for i in 0..p {
        let next = &world[(i + 1) % p];
        let migrant = next[next.best_index()].clone();
        world[i].replace_worst(&migrant);
    }
}

/// The population with the lowest mean cost is the hub. Every other
/// population's worst takes the hub's best, then the hub's worst takes
/// that population's best.
fn migrate_star(world: &mut [Population]) {
    let Some(hub) = hub_index(world) else {
        return;
    };

    for i in 0..world.len() {
        if i == hub {
            continue;
        }
        let from_hub = world[hub][world[hub].best_index()].clone();
        world[i].replace_worst(&from_hub);
        let to_hub = world[i][world[i].best_index()].clone();
        world[hub].replace_worst(&to_hub);
    }
}

/// Index of the population with the lowest mean cost; ties go to the
/// lowest index.
fn hub_index(world: &[Population]) -> Option<usize> {
    let mut hub: Option<(usize, f64)> = None;
    for (i, population) in world.iter().enumerate() {
        let mean = population.mean_cost();
        match hub {
            Some((_, best)) if mean >= best => {}
            _ => hub = Some((i, mean)),
        }
    }
    hub.map(|(i, _)| i)
}
