//! Randomized greedy construction.

use rand::RngCore;

use crate::random::random_index;
use crate::tour::Tour;

/// Builds a new order for `tour` by randomized nearest-neighbour steps.
///
/// The start node is uniform. While more than `width` nodes remain
/// unplaced, the `width` nearest to the last placed node are moved to the
/// front of the unplaced range and one of them is picked uniformly. After
/// that, the next node is picked uniformly among all remaining ones.
pub fn randomized_greedy<R: RngCore + ?Sized>(tour: &mut Tour, width: usize, rng: &mut R) {
    let n = tour.size();
    if n == 0 {
        return;
    }
    let width = width.max(1);

    let mut order: Vec<usize> = (0..n).collect();
    order.swap(0, random_index(rng, n));

    let mut last = 0;
    while n - last - 1 > width {
        let anchor = order[last];
        nearest_first(&mut order[last + 1..], width, |node| tour.distance(anchor, node));
        let pick = random_index(rng, width);
        order.swap(last + 1, last + 1 + pick);
        last += 1;
    }

    while n - last > 2 {
        let pick = random_index(rng, n - last - 1);
        order.swap(last + 1, last + 1 + pick);
        last += 1;
    }

    tour.assign_order(order);
}

/// Partial selection sort: moves the `k` smallest nodes by `key` to the
/// front of `nodes`, in ascending order. Ties keep the earlier node.
fn nearest_first(nodes: &mut [usize], k: usize, key: impl Fn(usize) -> f64) {
    for s in 0..k.min(nodes.len()) {
        let mut min = s;
        for t in s + 1..nodes.len() {
            if key(nodes[t]) < key(nodes[min]) {
                min = t;
            }
        }
        nodes.swap(s, min);
    }
}
