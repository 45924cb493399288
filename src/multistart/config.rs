//! Multi-start configuration.

/// How each start is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Random shuffle followed by local search.
    #[default]
    RandomRestart,
    /// Perturbed copy of the greedy tour followed by local search.
    GreedyPerturbation,
    /// Random shuffle only. `iterations` is multiplied by the tour size.
    RandomSampling,
}

/// Configuration for [`MultiStartRunner`](super::MultiStartRunner).
///
/// # Examples
///
/// ```
/// use tsp_metaheur::multistart::{MultiStartConfig, Strategy};
///
/// let config = MultiStartConfig::greedy_perturbation().with_seed(3);
/// assert_eq!(config.strategy, Strategy::GreedyPerturbation);
/// assert_eq!(config.iterations, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStartConfig {
    pub strategy: Strategy,
    pub iterations: usize,
    pub seed: Option<u64>,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self::random_restart()
    }
}

impl MultiStartConfig {
    pub fn random_restart() -> Self {
        Self {
            strategy: Strategy::RandomRestart,
            iterations: 50,
            seed: None,
        }
    }

    pub fn greedy_perturbation() -> Self {
        Self {
            strategy: Strategy::GreedyPerturbation,
            iterations: 5,
            seed: None,
        }
    }

    pub fn random_sampling() -> Self {
        Self {
            strategy: Strategy::RandomSampling,
            iterations: 2000,
            seed: None,
        }
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
