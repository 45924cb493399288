//! Local search over the swap neighbourhood.
//!
//! [`local_search`] is the steepest-descent building block every other
//! trajectory and hybrid method calls. The module also provides the
//! nearest-neighbour construction used by the greedy starts.

mod greedy;
mod search;

pub use greedy::{greedy_local_search, nearest_neighbor};
pub use search::{best_swap, local_search, local_search_from_random, SwapMove};
