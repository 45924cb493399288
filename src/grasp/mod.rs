//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Each iteration builds a tour by randomized nearest-neighbour selection
//! from a restricted candidate list, then improves it with local search.
//! The extended variant perturbs every constructed optimum a few times
//! (segment shuffle + local search) before moving on.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"

mod config;
mod construction;
mod runner;

pub use config::GraspConfig;
pub use construction::randomized_greedy;
pub use runner::{GraspResult, GraspRunner};
