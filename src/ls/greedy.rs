//! Nearest-neighbour construction.

use crate::tour::Tour;

use super::search::local_search;

/// Builds the nearest-neighbour tour from every start node and keeps the
/// cheapest one.
///
/// Runs in O(n^3); ties between equally near nodes go to the first one in
/// the remaining order.
pub fn nearest_neighbor(tour: &mut Tour) {
    let n = tour.size();
    if n == 0 {
        return;
    }

    let mut best = tour.clone();
    best.clear_path();
    let mut current = tour.clone();

    for start in 0..n {
        current.sort_path();
        if start != 0 {
            current.swap(0, start);
        }

        for i in 1..n.saturating_sub(1) {
            let last = current.edge_at(i - 1);
            let mut nearest = i;
            let mut nearest_distance = f64::INFINITY;

            for j in i..n {
                let d = tour.distance(last, current.edge_at(j));
                if d < nearest_distance {
                    nearest = j;
                    nearest_distance = d;
                }
            }

            current.swap(i, nearest);
        }

        if current.is_better_than(&best) {
            best.assign_path(&current);
        }
    }

    tour.assign_path(&best);
    log::debug!("ls.nearest_neighbor: n={n} cost={}", tour.cost());
}

/// Nearest-neighbour construction followed by [`local_search`].
pub fn greedy_local_search(tour: &mut Tour) -> u64 {
    nearest_neighbor(tour);
    local_search(tour)
}
