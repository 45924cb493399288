//! Variable Neighborhood Search configuration.

use crate::error::{Error, Result};

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_iterations(100)
///     .with_max_neighborhood(4);
/// assert_eq!(config.iterations, 100);
/// assert_eq!(config.max_neighborhood, 4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Number of shake + local search steps.
    pub iterations: usize,
    /// Largest neighbourhood index. Neighbourhood k shakes a segment of
    /// `size / (9 - k)` nodes.
    pub max_neighborhood: usize,
    /// Random seed (None draws one).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            max_neighborhood: 5,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the number of shake + local search steps.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the largest neighbourhood index.
    pub fn with_max_neighborhood(mut self, k: usize) -> Self {
        self.max_neighborhood = k;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shake length for neighbourhood `k` on a tour of `n` nodes.
    pub fn shake_length(&self, k: usize, n: usize) -> usize {
        n / (9 - k)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_neighborhood == 0 || self.max_neighborhood > 8 {
            return Err(Error::invalid_config(format!(
                "max_neighborhood must be in 1..=8, got {}",
                self.max_neighborhood
            )));
        }
        Ok(())
    }
}

/// Configuration parameters for Variable Neighborhood Descent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VndConfig {
    /// Budget multiplier: the descent stops once `iterations * size`
    /// neighbour evaluations have been charged.
    pub iterations: usize,
    /// Random seed (None draws one).
    pub seed: Option<u64>,
}

impl Default for VndConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            seed: None,
        }
    }
}

impl VndConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
