//! Steepest descent over pairwise swaps.

use rand::RngCore;

use crate::tour::Tour;

/// A candidate swap and the cost change it produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMove {
    pub i: usize,
    pub j: usize,
    pub delta: f64,
}

/// Scans every unordered pair of positions and returns the most improving
/// swap, or `None` if the tour is a local optimum.
///
/// Ties keep the first pair met in `(i, j)`, `j < i`, scan order.
pub fn best_swap(tour: &Tour) -> Option<SwapMove> {
    let mut best: Option<SwapMove> = None;

    for i in 1..tour.size() {
        for j in 0..i {
            let delta = tour.swap_delta(i, j);
            if delta < best.map_or(0.0, |m| m.delta) {
                best = Some(SwapMove { i, j, delta });
            }
        }
    }

    best
}

/// Applies the best improving swap of each full sweep until a sweep finds
/// none.
///
/// Returns the notional evaluation count: `cost^2 / 2` of the starting
/// tour, charged once per sweep including the final one. The memetic
/// scheduler consumes this figure as its work currency.
///
/// Cleared tours are left untouched and report no work.
pub fn local_search(tour: &mut Tour) -> u64 {
    if tour.is_cleared() || tour.size() < 2 {
        return 0;
    }

    let evals_per_sweep = (tour.cost() * tour.cost()) as u64 / 2;
    let mut evals = 0u64;
    let mut sweeps = 0usize;

    loop {
        evals = evals.saturating_add(evals_per_sweep);
        sweeps += 1;

        match best_swap(tour) {
            Some(m) => tour.swap(m.i, m.j),
            None => break,
        }
    }

    log::trace!(
        "ls.local_search: n={} sweeps={sweeps} cost={}",
        tour.size(),
        tour.cost()
    );
    evals
}

/// Shuffles the tour, then runs [`local_search`].
pub fn local_search_from_random<R: RngCore + ?Sized>(tour: &mut Tour, rng: &mut R) -> u64 {
    tour.shuffle_path(rng);
    local_search(tour)
}
