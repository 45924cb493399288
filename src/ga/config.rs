//! GA configuration.
//!
//! [`GaConfig`] controls the plain genetic loop, [`MemeticConfig`] adds a
//! local-search policy on top of generational evolution, and
//! [`IslandConfig`] runs several populations with periodic migration.

use crate::error::{Error, Result};

/// Probability of crossing a selected pair.
pub const CROSSOVER_RATE: f64 = 0.7;

/// Probability of mutating each offspring.
pub const MUTATION_RATE: f64 = 0.1;

/// Replacement scheme of one evolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Replace the whole population with offspring, keeping the previous
    /// best over the new worst when it is cheaper.
    #[default]
    Generational,
    /// Produce one offspring pair; each replaces the worst individual only
    /// when cheaper.
    ///
    /// The pair is bred like a generational pair: crossover happens with
    /// probability `crossover_rate` (0.7 by default), otherwise the children
    /// start as copies of their parents. The step is not forced to cross.
    SteadyState,
}

/// When and where the memetic runner applies local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hybridization {
    /// Every generation, the two best individuals.
    EveryGenTwoBest,
    /// Every generation, every individual.
    #[default]
    EveryGenAll,
    /// Every 10th generation, the two best individuals.
    TenthGenTwoBest,
    /// Every 10th generation, every individual.
    TenthGenAll,
}

impl Hybridization {
    /// Whether local search runs after generation number `generation`
    /// (1-based).
    pub fn applies_at(self, generation: usize) -> bool {
        match self {
            Hybridization::EveryGenTwoBest | Hybridization::EveryGenAll => true,
            Hybridization::TenthGenTwoBest | Hybridization::TenthGenAll => generation % 10 == 0,
        }
    }

    /// Whether local search targets every individual rather than the two best.
    pub fn targets_all(self) -> bool {
        matches!(self, Hybridization::EveryGenAll | Hybridization::TenthGenAll)
    }
}

/// Migration pattern between island populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Each population's worst takes its successor's best.
    #[default]
    Ring,
    /// The population with the lowest mean cost exchanges individuals with
    /// every other one.
    Star,
}

/// Configuration for the Genetic Algorithm.
///
/// The budget is `iterations * size` evaluations, where one generational
/// step costs `population_size` and one steady-state step costs 2.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, Scheme};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.iterations, 2000);
/// assert_eq!(config.scheme, Scheme::Generational);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::{GaConfig, Scheme};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_scheme(Scheme::SteadyState)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Budget multiplier (see the type docs).
    pub iterations: usize,

    /// Replacement scheme.
    pub scheme: Scheme,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the offspring are copies of the
    /// parents.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed, reported in the result.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            iterations: 2000,
            scheme: Scheme::Generational,
            crossover_rate: CROSSOVER_RATE,
            mutation_rate: MUTATION_RATE,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the budget multiplier.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the replacement scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Evaluations charged by one evolution step.
    pub fn step_cost(&self) -> usize {
        match self.scheme {
            Scheme::Generational => self.population_size,
            Scheme::SteadyState => 2,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_population(self.population_size, self.scheme)?;
        validate_rates(self.crossover_rate, self.mutation_rate)
    }
}

/// Configuration for the memetic algorithm: generational evolution plus
/// local search on a subset of the population.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemeticConfig {
    pub population_size: usize,

    /// Budget multiplier. Each generation charges `population_size` and
    /// each local search charges the evaluations it reports.
    pub iterations: usize,

    pub hybridization: Hybridization,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub seed: Option<u64>,
}

impl Default for MemeticConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            iterations: 2000,
            hybridization: Hybridization::default(),
            crossover_rate: CROSSOVER_RATE,
            mutation_rate: MUTATION_RATE,
            seed: None,
        }
    }
}

impl MemeticConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_hybridization(mut self, hybridization: Hybridization) -> Self {
        self.hybridization = hybridization;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_population(self.population_size, Scheme::Generational)?;
        validate_rates(self.crossover_rate, self.mutation_rate)
    }
}

/// Configuration for the island model: independent generational
/// populations that exchange individuals every `migration_latency * size`
/// generations, for `iterations * size` generations in total.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IslandConfig {
    /// Number of populations.
    pub processes: usize,

    /// Individuals per population.
    pub population_size: usize,

    pub iterations: usize,
    pub migration_latency: usize,
    pub topology: Topology,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub seed: Option<u64>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            processes: 4,
            population_size: 10,
            iterations: 50,
            migration_latency: 2,
            topology: Topology::default(),
            crossover_rate: CROSSOVER_RATE,
            mutation_rate: MUTATION_RATE,
            seed: None,
        }
    }
}

impl IslandConfig {
    pub fn with_processes(mut self, n: usize) -> Self {
        self.processes = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
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

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.processes == 0 {
            return Err(Error::invalid_config("processes must be at least 1"));
        }
        if self.migration_latency == 0 {
            return Err(Error::invalid_config("migration_latency must be at least 1"));
        }
        validate_population(self.population_size, Scheme::Generational)?;
        validate_rates(self.crossover_rate, self.mutation_rate)
    }
}

fn validate_population(size: usize, scheme: Scheme) -> Result<()> {
    let min = match scheme {
        Scheme::Generational => 1,
        Scheme::SteadyState => 2,
    };
    if size < min {
        return Err(Error::invalid_config(format!(
            "population_size must be at least {min} for {scheme:?}, got {size}"
        )));
    }
    Ok(())
}

fn validate_rates(crossover: f64, mutation: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&crossover) || !(0.0..=1.0).contains(&mutation) {
        return Err(Error::invalid_config(format!(
            "rates must be in [0, 1], got crossover={crossover} mutation={mutation}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 30);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_step_cost() {
        let config = GaConfig::default().with_population_size(12);
        assert_eq!(config.step_cost(), 12);
        assert_eq!(config.with_scheme(Scheme::SteadyState).step_cost(), 2);
    }

    #[test]
    fn test_steady_state_needs_two() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_scheme(Scheme::SteadyState);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.with_scheme(Scheme::Generational).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_hybridization_schedule() {
        assert!(Hybridization::EveryGenTwoBest.applies_at(3));
        assert!(!Hybridization::TenthGenAll.applies_at(9));
        assert!(Hybridization::TenthGenAll.applies_at(20));
        assert!(Hybridization::TenthGenAll.targets_all());
        assert!(!Hybridization::TenthGenTwoBest.targets_all());
    }

    #[test]
    fn test_island_validate() {
        assert!(IslandConfig::default().validate().is_ok());
        assert!(IslandConfig::default().with_processes(0).validate().is_err());
        assert!(IslandConfig::default().with_migration_latency(0).validate().is_err());
    }

    #[test]
    fn test_memetic_defaults() {
        let config = MemeticConfig::default();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.hybridization, Hybridization::EveryGenAll);
    }
}
