//! Multi-start searches.
//!
//! Three strategies share one runner:
//!
//! - [`Strategy::RandomRestart`]: shuffle, descend, keep the best optimum.
//! - [`Strategy::GreedyPerturbation`]: build the nearest-neighbour tour
//!   once, then repeatedly shuffle a quarter of a copy and descend.
//! - [`Strategy::RandomSampling`]: draw `iterations * size` random tours
//!   and keep the cheapest, without local search.

mod config;
mod runner;

pub use config::{MultiStartConfig, Strategy};
pub use runner::{MultiStartResult, MultiStartRunner};
