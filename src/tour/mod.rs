//! Hamiltonian cycle over a fixed set of 2D points.
//!
//! A [`Tour`] pairs an immutable node set (coordinates plus the precomputed
//! distance table) with a mutable visiting order and its cost. Every mutator
//! keeps the cost equal to the sum of the cyclic edge distances, either by
//! an O(1) delta for local edits or by a full recount after non-local ones.
//!
//! The node set is shared between clones, the order and cost are not.

pub mod tsplib;

use std::path::Path;
use std::sync::Arc;

use rand::RngCore;

use crate::error::{Error, Result};
use crate::random::random_index;

/// A node coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded down to an integer value.
    pub fn floored_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().floor()
    }
}

/// Node set and row-major distance table.
#[derive(Debug, Default)]
struct Graph {
    points: Vec<Point>,
    distances: Vec<f64>,
}

impl Graph {
    fn new(points: Vec<Point>) -> Self {
        let n = points.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..i {
                let d = points[i].floored_distance(&points[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }
        Self { points, distances }
    }
}

/// A cycle through every node of a problem instance.
///
/// # Cost sentinel
///
/// A tour whose path has been cleared (see [`clear_path`](Tour::clear_path))
/// or that holds no nodes has no cost. [`cost`](Tour::cost) reports it as
/// `f64::INFINITY` so that any real tour compares as better, and delta
/// updates never touch the missing value.
#[derive(Debug, Clone)]
pub struct Tour {
    graph: Arc<Graph>,
    edges: Vec<usize>,
    cost: Option<f64>,
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

impl Tour {
    /// Creates an empty tour with no nodes and no cost.
    pub fn new() -> Self {
        Self {
            graph: Arc::new(Graph::default()),
            edges: Vec::new(),
            cost: None,
        }
    }

    /// Creates a tour over `points`, visiting them in index order.
    pub fn from_points(points: Vec<Point>) -> Self {
        let n = points.len();
        let mut tour = Self {
            graph: Arc::new(Graph::new(points)),
            edges: (0..n).collect(),
            cost: None,
        };
        if n > 0 {
            tour.update_cost();
        }
        tour
    }

    /// Loads a TSPLIB `EUC_2D` instance, visiting nodes in index order.
    pub fn from_tsp_file(path: impl AsRef<Path>) -> Result<Self> {
        let points = tsplib::load_problem(path)?;
        Ok(Self::from_points(points))
    }

    /// Replaces the visiting order with the one stored in a TSPLIB `TOUR` file.
    pub fn load_tour(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let order = tsplib::load_tour(path, self.size())?;
        self.assign_order(order);
        Ok(())
    }

    /// Writes the visiting order as a TSPLIB `TOUR` file.
    pub fn save_tour(&self, path: impl AsRef<Path>) -> Result<()> {
        tsplib::save_tour(path, self)
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Cost of the cycle, or `f64::INFINITY` when there is no path.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost.unwrap_or(f64::INFINITY)
    }

    /// Whether the tour currently holds no path.
    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cost.is_none()
    }

    /// Whether this tour is strictly cheaper than `other`.
    #[inline]
    pub fn is_better_than(&self, other: &Tour) -> bool {
        self.cost() < other.cost()
    }

    /// Distance between nodes `i` and `j`.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.graph.distances[i * self.size() + j]
    }

    /// Node visited at position `k`.
    #[inline]
    pub fn edge_at(&self, k: usize) -> usize {
        self.edges[k]
    }

    /// The visiting order.
    #[inline]
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Coordinates of node `i`.
    #[inline]
    pub fn vertex_at(&self, i: usize) -> Point {
        self.graph.points[i]
    }

    /// Whether `other` was built from the same node set as `self`.
    pub fn shares_vertices(&self, other: &Tour) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
    }

    /// Sum of cyclic edge distances, recomputed from scratch.
    ///
    /// Tours with fewer than two nodes cost zero.
    pub fn recomputed_cost(&self) -> f64 {
        let n = self.size();
        if n < 2 {
            return 0.0;
        }
        let inner: f64 = self
            .edges
            .windows(2)
            .map(|w| self.distance(w[0], w[1]))
            .sum();
        inner + self.distance(self.edges[n - 1], self.edges[0])
    }

    /// Copies the visiting order and cost of `other`.
    ///
    /// Only the sizes are compared: `other` must be built over the same
    /// node set, otherwise the copied cost does not describe this tour.
    pub fn set_path(&mut self, other: &Tour) -> Result<()> {
        if other.size() != self.size() {
            return Err(Error::precondition(format!(
                "set_path between tours of size {} and {}",
                self.size(),
                other.size()
            )));
        }
        self.assign_path(other);
        Ok(())
    }

    /// Replaces the visiting order with `order` after checking it is a
    /// permutation of this tour's nodes.
    pub fn set_order(&mut self, order: Vec<usize>) -> Result<()> {
        if order.len() != self.size() {
            return Err(Error::DimensionMismatch {
                expected: self.size(),
                found: order.len(),
            });
        }
        if !is_permutation(&order) {
            return Err(Error::invalid_tour("order is not a permutation"));
        }
        self.assign_order(order);
        Ok(())
    }

    /// Unchecked [`set_path`](Tour::set_path) for same-instance copies.
    #[inline]
    pub(crate) fn assign_path(&mut self, other: &Tour) {
        debug_assert_eq!(self.size(), other.size());
        self.edges.copy_from_slice(&other.edges);
        self.cost = other.cost;
    }

    /// Unchecked [`set_order`](Tour::set_order); recounts the cost.
    pub(crate) fn assign_order(&mut self, order: Vec<usize>) {
        debug_assert!(is_permutation(&order));
        self.edges = order;
        self.update_cost();
    }

    /// Empties the path: every position holds node 0 and the cost becomes
    /// the "worse than anything" sentinel.
    pub fn clear_path(&mut self) {
        self.edges.fill(0);
        self.cost = None;
    }

    /// Resets the order to `0, 1, .., size - 1`.
    pub fn sort_path(&mut self) {
        for (k, edge) in self.edges.iter_mut().enumerate() {
            *edge = k;
        }
        self.update_cost();
    }

    /// Assigns a uniformly random order (Fisher-Yates from the high end).
    pub fn shuffle_path<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        for (k, edge) in self.edges.iter_mut().enumerate() {
            *edge = k;
        }
        for i in (1..self.size()).rev() {
            let j = random_index(rng, i + 1);
            self.edges.swap(i, j);
        }
        self.update_cost();
    }

    /// Shuffles a random window of `count` consecutive positions.
    ///
    /// The window starts in `[0, size - count)`; the cost is recounted.
    pub fn shuffle_subpath<R: RngCore + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let n = self.size();
        let count = count.min(n);
        if count < 2 {
            return;
        }

        let begin = random_index(rng, n - count);
        for i in (1..count).rev() {
            let j = random_index(rng, i + 1);
            self.edges.swap(begin + i, begin + j);
        }
        self.update_cost();
    }

    /// Reverses the `count` positions starting at `first`.
    ///
    /// Only the two boundary edges change, so the cost is updated in O(1).
    ///
    /// # Panics
    ///
    /// Panics if `first + count > size`.
    pub fn invert_subpath(&mut self, first: usize, count: usize) {
        let n = self.size();
        assert!(
            first + count <= n,
            "invert_subpath({first}, {count}) out of range for size {n}"
        );
        if count < 2 {
            return;
        }

        let last = first + count - 1;
        let prev = (first + n - 1) % n;
        let next = (last + 1) % n;

        let before = self.position_distance(prev, first) + self.position_distance(last, next);
        self.edges[first..=last].reverse();
        let after = self.position_distance(prev, first) + self.position_distance(last, next);

        self.apply_delta(after - before);
    }

    /// Exchanges the nodes at positions `i` and `j`, updating the cost in O(1).
    ///
    /// # Panics
    ///
    /// Panics if either position is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        let delta = self.swap_delta(i, j);
        self.edges.swap(i, j);
        self.apply_delta(delta);
    }

    /// Cost change that [`swap`](Tour::swap)`(i, j)` would produce.
    ///
    /// Adjacent positions share one edge, which is counted once. Cycles of
    /// fewer than three nodes have a single cost regardless of order.
    pub fn swap_delta(&self, i: usize, j: usize) -> f64 {
        let n = self.size();
        assert!(i < n && j < n, "swap({i}, {j}) out of range for size {n}");
        if i == j || n < 3 {
            return 0.0;
        }

        let prev_i = (i + n - 1) % n;
        let next_i = (i + 1) % n;
        let prev_j = (j + n - 1) % n;
        let next_j = (j + 1) % n;
        let e = &self.edges;
        let d = |a: usize, b: usize| self.distance(a, b);

        if next_i == j {
            d(e[prev_i], e[j]) + d(e[i], e[next_j]) - d(e[prev_i], e[i]) - d(e[j], e[next_j])
        } else if next_j == i {
            d(e[prev_j], e[i]) + d(e[j], e[next_i]) - d(e[prev_j], e[j]) - d(e[i], e[next_i])
        } else {
            let removed = d(e[prev_i], e[i]) + d(e[i], e[next_i]) + d(e[prev_j], e[j])
                + d(e[j], e[next_j]);
            let added = d(e[prev_i], e[j]) + d(e[j], e[next_i]) + d(e[prev_j], e[i])
                + d(e[i], e[next_j]);
            added - removed
        }
    }

    /// Recounts the cost from the current order.
    pub(crate) fn update_cost(&mut self) {
        self.cost = Some(self.recomputed_cost());
    }

    #[inline]
    fn apply_delta(&mut self, delta: f64) {
        if let Some(cost) = self.cost.as_mut() {
            *cost += delta;
        }
    }

    #[inline]
    fn position_distance(&self, a: usize, b: usize) -> f64 {
        self.distance(self.edges[a], self.edges[b])
    }
}

/// Whether `order` holds each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &node in order {
        match seen.get_mut(node) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn square() -> Tour {
        Tour::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    fn grid(n: usize) -> Tour {
        let points = (0..n)
            .map(|i| Point::new((i % 7) as f64 * 13.0, (i / 7) as f64 * 17.0 + (i % 3) as f64))
            .collect();
        Tour::from_points(points)
    }

    #[test]
    fn test_empty_tour_has_sentinel_cost() {
        let tour = Tour::new();
        assert_eq!(tour.size(), 0);
        assert!(tour.cost().is_infinite());
        assert!(tour.is_cleared());
    }

    #[test]
    fn test_small_tours_cost_zero() {
        let single = Tour::from_points(vec![Point::new(3.0, 4.0)]);
        assert_eq!(single.cost(), 0.0);
        let pair = Tour::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(pair.cost(), 10.0);
    }

    #[test]
    fn test_distances_are_floored_and_symmetric() {
        let tour = Tour::from_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(tour.distance(0, 1), 1.0);
        assert_eq!(tour.distance(1, 0), 1.0);
        assert_eq!(tour.distance(0, 0), 0.0);
    }

    #[test]
    fn test_square_identity_cost() {
        assert_eq!(square().cost(), 4.0);
    }

    #[test]
    fn test_swap_adjacent_and_wraparound() {
        let mut tour = grid(10);
        tour.swap(3, 4);
        assert_eq!(tour.cost(), tour.recomputed_cost());
        tour.swap(9, 0);
        assert_eq!(tour.cost(), tour.recomputed_cost());
        tour.swap(0, 9);
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    fn test_swap_two_nodes_keeps_cost() {
        let mut tour = Tour::from_points(vec![Point::new(0.0, 0.0), Point::new(0.0, 5.0)]);
        tour.swap(0, 1);
        assert_eq!(tour.edges(), &[1, 0]);
        assert_eq!(tour.cost(), 10.0);
    }

    #[test]
    fn test_invert_full_tour() {
        let mut tour = grid(8);
        let before = tour.cost();
        tour.invert_subpath(0, 8);
        assert_eq!(tour.cost(), before);
        assert_eq!(tour.edges(), &[7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_invert_touching_end() {
        let mut tour = grid(9);
        tour.invert_subpath(5, 4);
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    #[should_panic]
    fn test_invert_out_of_range_panics() {
        grid(5).invert_subpath(3, 3);
    }

    #[test]
    fn test_sort_path_identity() {
        let mut tour = grid(12);
        tour.shuffle_path(&mut create_rng(4));
        tour.sort_path();
        for k in 0..tour.size() {
            assert_eq!(tour.edge_at(k), k);
        }
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    fn test_clear_path_loses_every_comparison() {
        let mut best = grid(6);
        best.clear_path();
        assert!(best.edges().iter().all(|&e| e == 0));
        assert!(grid(6).is_better_than(&best));
        best.swap(1, 2);
        assert!(best.is_cleared());
    }

    #[test]
    fn test_set_path_size_mismatch() {
        let mut a = grid(5);
        let b = grid(6);
        assert!(matches!(
            a.set_path(&b),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_set_path_copies_order_and_cost() {
        let mut a = grid(10);
        let mut b = a.clone();
        b.shuffle_path(&mut create_rng(8));
        a.set_path(&b).unwrap();
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.cost(), b.cost());
        assert!(a.shares_vertices(&b));
    }

    #[test]
    fn test_set_order_rejects_duplicates() {
        let mut tour = grid(4);
        assert!(matches!(
            tour.set_order(vec![0, 1, 1, 3]),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            tour.set_order(vec![0, 1, 2]),
            Err(Error::DimensionMismatch { .. })
        ));
        tour.set_order(vec![3, 1, 2, 0]).unwrap();
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    fn test_shuffle_subpath_keeps_outside_positions() {
        let mut tour = grid(20);
        let mut rng = create_rng(5);
        tour.shuffle_subpath(4, &mut rng);
        assert!(is_permutation(tour.edges()));
        let moved = tour
            .edges()
            .iter()
            .enumerate()
            .filter(|&(k, &e)| k != e)
            .count();
        assert!(moved <= 4);
        assert_eq!(tour.cost(), tour.recomputed_cost());
    }

    #[test]
    fn test_clones_are_independent() {
        let original = grid(10);
        let mut copy = original.clone();
        copy.swap(2, 7);
        assert_ne!(original.edges(), copy.edges());
        assert_eq!(original.cost(), original.recomputed_cost());
    }

    fn tour_strategy() -> impl Strategy<Value = (Vec<(i32, i32)>, u64)> {
        (
            prop::collection::vec((-500i32..500, -500i32..500), 3..40),
            any::<u64>(),
        )
    }

    fn shuffled(points: &[(i32, i32)], seed: u64) -> Tour {
        let mut tour = Tour::from_points(
            points
                .iter()
                .map(|&(x, y)| Point::new(x as f64, y as f64))
                .collect(),
        );
        tour.shuffle_path(&mut create_rng(seed));
        tour
    }

    proptest! {
        #[test]
        fn prop_swap_is_an_involution((points, seed) in tour_strategy(), a in any::<usize>(), b in any::<usize>()) {
            let mut tour = shuffled(&points, seed);
            let n = tour.size();
            let (i, j) = (a % n, b % n);
            let original = tour.clone();

            tour.swap(i, j);
            prop_assert!((tour.cost() - tour.recomputed_cost()).abs() < 1e-6);

            tour.swap(i, j);
            prop_assert_eq!(tour.edges(), original.edges());
            prop_assert!((tour.cost() - original.cost()).abs() < 1e-6);
        }

        #[test]
        fn prop_invert_twice_restores((points, seed) in tour_strategy(), a in any::<usize>(), b in any::<usize>()) {
            let mut tour = shuffled(&points, seed);
            let n = tour.size();
            let first = a % n;
            let count = b % (n - first + 1);
            let original = tour.clone();

            tour.invert_subpath(first, count);
            prop_assert!((tour.cost() - tour.recomputed_cost()).abs() < 1e-6);

            tour.invert_subpath(first, count);
            prop_assert_eq!(tour.edges(), original.edges());
            prop_assert!((tour.cost() - original.cost()).abs() < 1e-6);
        }

        #[test]
        fn prop_shuffle_is_permutation((points, seed) in tour_strategy()) {
            let tour = shuffled(&points, seed);
            prop_assert!(is_permutation(tour.edges()));
            prop_assert!((tour.cost() - tour.recomputed_cost()).abs() < 1e-6);
        }

        #[test]
        fn prop_sort_path_is_identity((points, seed) in tour_strategy()) {
            let mut tour = shuffled(&points, seed);
            tour.sort_path();
            for k in 0..tour.size() {
                prop_assert_eq!(tour.edge_at(k), k);
            }
            prop_assert!((tour.cost() - tour.recomputed_cost()).abs() < 1e-6);
        }

        #[test]
        fn prop_set_path_is_idempotent((points, seed) in tour_strategy()) {
            let source = shuffled(&points, seed);
            let mut once = Tour::from_points(
                points.iter().map(|&(x, y)| Point::new(x as f64, y as f64)).collect(),
            );
            once.set_path(&source).unwrap();
            let snapshot = once.clone();
            once.set_path(&source).unwrap();
            prop_assert_eq!(once.edges(), snapshot.edges());
            prop_assert_eq!(once.cost(), snapshot.cost());
        }
    }
}
