//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! Proposals are pairwise swaps or short segment reversals applied to the
//! tour in place, so every proposal costs O(1). [`ParallelSaRunner`] runs
//! several chains that meet at fixed barriers and continue from the best
//! tour found.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod parallel;
mod runner;

pub use config::{
    NeighborGenerator, ParallelSaConfig, SaConfig, FINAL_TEMPERATURE,
    INITIAL_TEMPERATURE_FACTOR, PROPOSALS_PER_TEMPERATURE,
};
pub use parallel::{ParallelSaResult, ParallelSaRunner};
pub use runner::{SaResult, SaRunner, SaStats};
