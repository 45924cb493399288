//! Genetic operators on tours.
//!
//! # Crossover
//!
//! [`order_crossover`] (OX, Davis 1985) keeps a segment of the father at
//! its positions and fills the remaining positions with the mother's
//! nodes in the order they appear, starting after the segment and
//! wrapping around.
//!
//! # Mutation
//!
//! [`mutate`] shuffles a random window of `size / 8` nodes.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::RngCore;

use crate::random::random_index;
use crate::tour::Tour;

/// Order Crossover (OX) over the half-open segment `[start, end)`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in length or `start < end <= n` does not hold.
pub fn order_crossover(father: &[usize], mother: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = father.len();
    assert_eq!(n, mother.len(), "parents must have equal length");
    assert!(start < end && end <= n, "segment [{start}, {end}) out of range for {n}");

    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..end {
        child[i] = father[i];
        in_segment[father[i]] = true;
    }

    // Fill from the mother, starting after the segment end, wrapping around
    let mut pos = end % n;
    for offset in 0..n {
        let node = mother[(end + offset) % n];
        if !in_segment[node] {
            child[pos] = node;
            pos = (pos + 1) % n;
        }
    }

    child
}

/// Draws a crossover segment `[b1, b2)` with `1 <= b1 < b2 <= n - 1`.
///
/// Requires `n >= 3`.
pub(crate) fn crossover_bounds<R: RngCore + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let b1 = random_index(rng, n - 2) + 1;
    let b2 = random_index(rng, n - b1 - 1) + b1 + 1;
    (b1, b2)
}

/// Crosses two tours over the same node set. Tours of fewer than three
/// nodes have a single cycle, so the child is a copy of the father.
pub fn cross<R: RngCore + ?Sized>(father: &Tour, mother: &Tour, rng: &mut R) -> Tour {
    let mut child = father.clone();
    let n = father.size();
    if n < 3 {
        return child;
    }

    let (start, end) = crossover_bounds(n, rng);
    child.assign_order(order_crossover(father.edges(), mother.edges(), start, end));
    child
}

/// Shuffles a random window of `size / 8` nodes.
pub fn mutate<R: RngCore + ?Sized>(tour: &mut Tour, rng: &mut R) {
    let count = tour.size() / 8;
    tour.shuffle_subpath(count, rng);
}
