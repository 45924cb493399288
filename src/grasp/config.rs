//! GRASP configuration.

use crate::error::{Error, Result};

/// Configuration for GRASP.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::grasp::GraspConfig;
///
/// let plain = GraspConfig::default().with_iterations(20).with_seed(1);
/// let extended = GraspConfig::extended();
/// assert!(!plain.extended);
/// assert!(extended.extended);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of constructions.
    pub iterations: usize,

    /// Perturb each constructed optimum before the next construction.
    pub extended: bool,

    /// Perturbations per construction when `extended` is set.
    pub perturbations: usize,

    /// Candidate list width as a fraction of the node count (at least 1).
    pub candidate_ratio: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            extended: false,
            perturbations: 5,
            candidate_ratio: 0.1,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Preset for the extended variant: fewer constructions, each
    /// followed by perturbation rounds.
    pub fn extended() -> Self {
        Self {
            iterations: 10,
            extended: true,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_perturbations(mut self, n: usize) -> Self {
        self.perturbations = n;
        self
    }

    pub fn with_candidate_ratio(mut self, ratio: f64) -> Self {
        self.candidate_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Candidate list width for a tour of `n` nodes.
    pub fn candidate_width(&self, n: usize) -> usize {
        ((n as f64 * self.candidate_ratio) as usize).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.candidate_ratio > 0.0 && self.candidate_ratio <= 1.0) {
            return Err(Error::invalid_config(format!(
                "candidate_ratio must be in (0, 1], got {}",
                self.candidate_ratio
            )));
        }
        Ok(())
    }
}
