//! SA configuration and neighbour generators.

use crate::error::{Error, Result};

/// Initial temperature as a fraction of the starting tour cost.
pub const INITIAL_TEMPERATURE_FACTOR: f64 = 0.249175;

/// Temperature reached when the proposal budget is exhausted.
pub const FINAL_TEMPERATURE: f64 = 0.1;

/// Proposals evaluated at each temperature level.
pub const PROPOSALS_PER_TEMPERATURE: usize = 20;

/// How a neighbour of the current tour is proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborGenerator {
    /// Exchange the nodes at two distinct random positions.
    #[default]
    Swap,
    /// Reverse a random segment of 2 to 6 positions.
    Invert,
}

/// Configuration for Simulated Annealing.
///
/// The proposal budget is `iterations * size`. Temperature follows the
/// Lundy-Mees law `T <- T / (1 + beta * T)` once per
/// `proposals_per_temperature` proposals, with `beta` chosen so that `T`
/// falls from `initial_temperature_factor * cost` to `final_temperature`
/// over the budget.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::{NeighborGenerator, SaConfig};
///
/// let config = SaConfig::default()
///     .with_iterations(500)
///     .with_neighbor(NeighborGenerator::Invert)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Budget multiplier: `iterations * size` proposals in total.
    pub iterations: usize,

    /// Neighbour generator.
    pub neighbor: NeighborGenerator,

    /// Initial temperature as a fraction of the starting cost.
    pub initial_temperature_factor: f64,

    /// Temperature at the end of the budget.
    pub final_temperature: f64,

    /// Proposals per temperature level.
    pub proposals_per_temperature: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            neighbor: NeighborGenerator::default(),
            initial_temperature_factor: INITIAL_TEMPERATURE_FACTOR,
            final_temperature: FINAL_TEMPERATURE,
            proposals_per_temperature: PROPOSALS_PER_TEMPERATURE,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_neighbor(mut self, neighbor: NeighborGenerator) -> Self {
        self.neighbor = neighbor;
        self
    }

    pub fn with_initial_temperature_factor(mut self, factor: f64) -> Self {
        self.initial_temperature_factor = factor;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_proposals_per_temperature(mut self, n: usize) -> Self {
        self.proposals_per_temperature = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature_factor <= 0.0 {
            return Err(Error::invalid_config(
                "initial_temperature_factor must be positive",
            ));
        }
        if self.final_temperature <= 0.0 {
            return Err(Error::invalid_config("final_temperature must be positive"));
        }
        if self.proposals_per_temperature == 0 {
            return Err(Error::invalid_config(
                "proposals_per_temperature must be at least 1",
            ));
        }
        Ok(())
    }

    /// Lundy-Mees `beta` for a run starting at `initial` over `proposals`.
    pub fn cooling_beta(&self, initial: f64, proposals: usize) -> f64 {
        let t_end = self.final_temperature;
        (initial - t_end) / (proposals as f64 * initial * t_end)
    }
}

/// Configuration for cooperative multi-chain annealing.
///
/// `processes` chains each run `iterations / migration_latency` short
/// bursts of one annealing pass (`iterations = 1`); after every burst all
/// chains are compared and restarted from the best tour found so far.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::sa::ParallelSaConfig;
///
/// let config = ParallelSaConfig::default()
///     .with_processes(4)
///     .with_iterations(40)
///     .with_migration_latency(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelSaConfig {
    /// Number of cooperating chains.
    pub processes: usize,

    /// Budget; divided by `migration_latency` to get the burst count.
    pub iterations: usize,

    /// Budget units per burst.
    pub migration_latency: usize,

    /// Neighbour generator used by every chain.
    pub neighbor: NeighborGenerator,

    /// Master seed; chain `i` draws from a stream derived from it.
    pub seed: Option<u64>,
}

impl Default for ParallelSaConfig {
    fn default() -> Self {
        Self {
            processes: 5,
            iterations: 20,
            migration_latency: 1,
            neighbor: NeighborGenerator::Swap,
            seed: None,
        }
    }
}

impl ParallelSaConfig {
    pub fn with_processes(mut self, n: usize) -> Self {
        self.processes = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_migration_latency(mut self, n: usize) -> Self {
        self.migration_latency = n;
        self
    }

    pub fn with_neighbor(mut self, neighbor: NeighborGenerator) -> Self {
        self.neighbor = neighbor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of synchronisation points.
    pub fn bursts(&self) -> usize {
        self.iterations / self.migration_latency.max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.processes == 0 {
            return Err(Error::invalid_config("processes must be at least 1"));
        }
        if self.migration_latency == 0 {
            return Err(Error::invalid_config(
                "migration_latency must be at least 1",
            ));
        }
        Ok(())
    }
}
