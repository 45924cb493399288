//! Variable Neighborhood Search (VNS) and Variable Neighborhood Descent (VND).
//!
//! [`VnsRunner`] shakes the incumbent with a segment shuffle whose length
//! grows with the neighbourhood index k, local-searches the result and
//! resets k whenever the incumbent improves.
//!
//! [`VndRunner`] is deterministic in its choice of neighbourhood: it takes
//! the best neighbour in the current neighbourhood, returns to the first
//! one on improvement and stops once the third is exhausted.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod descent;
mod runner;

pub use config::{VndConfig, VnsConfig};
pub use descent::{VndResult, VndRunner};
pub use runner::{VnsResult, VnsRunner};
