//! Iterated Local Search (ILS).
//!
//! Descends from a random start, then repeatedly perturbs the incumbent by
//! shuffling a segment of about a quarter of the tour and descends again.
//! A perturbed optimum replaces the incumbent only if it is cheaper.
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003), "Iterated Local Search"

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{IlsResult, IlsRunner};
