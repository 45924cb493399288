//! Genetic and memetic search over tours.
//!
//! # Key Types
//!
//! - [`Population`]: tours plus their own generator; one evolution step
//!   under a [`Scheme`]
//! - [`GaRunner`]: plain genetic loop
//! - [`MemeticRunner`]: generational loop with a [`Hybridization`] policy
//!   for local search
//! - [`IslandRunner`]: several populations migrating under a [`Topology`]
//!
//! # Submodules
//!
//! - [`operators`]: order crossover and window-shuffle mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms and Martial Arts"
//! - Cantú-Paz (1998), "A Survey of Parallel Genetic Algorithms"

mod config;
mod island;
mod memetic;
pub mod operators;
mod population;
mod runner;

pub use config::{
    GaConfig, Hybridization, IslandConfig, MemeticConfig, Scheme, Topology, CROSSOVER_RATE,
    MUTATION_RATE,
};
pub use island::{IslandResult, IslandRunner};
pub use memetic::{MemeticResult, MemeticRunner};
pub use population::Population;
pub use runner::{GaResult, GaRunner};
