//! Metaheuristic portfolio for the symmetric Euclidean TSP.
//!
//! Every algorithm optimizes a [`Tour`] in place and returns a result
//! struct with the final cost and the seed it ran with:
//!
//! - **Local search** ([`ls`]): steepest descent over pairwise swaps, plus
//!   the nearest-neighbour construction.
//! - **Simulated Annealing** ([`sa`]): Lundy–Mees cooling with swap or
//!   segment-reversal proposals, and a cooperative multi-chain variant.
//! - **GRASP** ([`grasp`]): randomized greedy construction + local search.
//! - **VNS / VND** ([`vns`]): shaking with growing segment shuffles, and
//!   descent over three neighbourhoods.
//! - **Iterated Local Search** ([`ils`]).
//! - **Multi-start** ([`multistart`]): random restarts, greedy
//!   perturbation and random sampling.
//! - **Genetic and memetic search** ([`ga`]): generational and
//!   steady-state populations, local-search hybridization, island model.
//!
//! # Architecture
//!
//! [`Tour`] owns the visiting order and cost and shares the immutable node
//! set between clones. Algorithms keep the caller's tour as the best-so-far
//! tracker and work on owned copies. All randomness flows through one
//! generator per runner (or per chain/population in the cooperative
//! variants) created from the configured seed, so every run can be replayed.
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::sa::{SaConfig, SaRunner};
//! use tsp_metaheur::{Point, Tour};
//!
//! let points = (0..20)
//!     .map(|i| Point::new((i * 13 % 20) as f64 * 5.0, (i * 7 % 20) as f64 * 5.0))
//!     .collect();
//! let mut tour = Tour::from_points(points);
//! let result = SaRunner::run(&mut tour, &SaConfig::default().with_iterations(50).with_seed(1)).unwrap();
//! assert_eq!(result.best_cost, tour.cost());
//! ```

mod cooperative;
pub mod error;
pub mod ga;
pub mod grasp;
pub mod ils;
pub mod ls;
pub mod multistart;
pub mod random;
pub mod sa;
pub mod tour;
pub mod vns;

pub use error::{Error, Result};
pub use tour::{Point, Tour};
