//! ILS configuration.

use crate::error::{Error, Result};

/// Configuration for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ils::IlsConfig;
///
/// let config = IlsConfig::default().with_iterations(10).with_seed(4);
/// assert_eq!(config.perturbation_length(100), 25);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Local searches, including the one from the random start.
    pub iterations: usize,

    /// The perturbation shuffles `size / perturbation_divisor` nodes.
    pub perturbation_divisor: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            perturbation_divisor: 4,
            seed: None,
        }
    }
}

impl IlsConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_perturbation_divisor(mut self, divisor: usize) -> Self {
        self.perturbation_divisor = divisor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Segment length shuffled by one perturbation.
    pub fn perturbation_length(&self, n: usize) -> usize {
        n / self.perturbation_divisor.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.perturbation_divisor == 0 {
            return Err(Error::invalid_config("perturbation_divisor must be > 0"));
        }
        Ok(())
    }
}
