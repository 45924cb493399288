//! Random sampling primitives shared by every algorithm.
//!
//! All stochastic decisions go through [`random_index`] and [`random_unit`],
//! which read raw 32-bit words from the generator. Keeping the mapping in one
//! place makes every run reproducible from its seed.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Generator type owned by runners, chains and populations.
pub type TourRng = StdRng;

/// Creates a generator from a fixed seed.
pub fn create_rng(seed: u64) -> TourRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional seed, drawing a fresh one when absent.
///
/// Returns the generator together with the seed actually used so callers
/// can report it.
pub fn seeded_rng(seed: Option<u64>) -> (TourRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}

/// Derives an independent generator for stream `stream` of a master seed.
///
/// Used by the cooperative variants so each chain or population owns its
/// own stream regardless of the order in which units are advanced.
pub fn derive_rng(seed: u64, stream: usize) -> TourRng {
    let offset = (stream as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    create_rng(seed ^ offset)
}

/// Returns an integer in `[0, bound)`.
///
/// Draws equal to `u32::MAX` are rejected before scaling, so the scaled
/// value never reaches `bound`. A `bound` of zero yields zero.
pub fn random_index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> usize {
    let value = loop {
        let value = rng.next_u32();
        if value != u32::MAX {
            break value;
        }
    };

    (value as f64 / u32::MAX as f64 * bound as f64) as usize
}

/// Returns a real in `[0, 1]` from a single raw draw.
pub fn random_unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / u32::MAX as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw words.
    struct Scripted {
        words: Vec<u32>,
        pos: usize,
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.pos];
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn test_random_index_in_range() {
        let mut rng = create_rng(7);
        for bound in 1..50 {
            for _ in 0..200 {
                assert!(random_index(&mut rng, bound) < bound);
            }
        }
    }

    #[test]
    fn test_random_index_rejects_max_word() {
        let mut rng = Scripted {
            words: vec![u32::MAX, u32::MAX, u32::MAX - 1],
            pos: 0,
        };
        assert_eq!(random_index(&mut rng, 10), 9);
        assert_eq!(rng.pos, 3);
    }

    #[test]
    fn test_random_index_zero_bound() {
        let mut rng = create_rng(1);
        assert_eq!(random_index(&mut rng, 0), 0);
    }

    #[test]
    fn test_random_index_covers_all_values() {
        let mut rng = create_rng(3);
        let mut seen = [0usize; 6];
        for _ in 0..6000 {
            seen[random_index(&mut rng, 6)] += 1;
        }
        for count in seen {
            assert!(count > 800, "bucket underfilled: {seen:?}");
        }
    }

    #[test]
    fn test_random_unit_bounds() {
        let mut rng = create_rng(11);
        for _ in 0..1000 {
            let u = random_unit(&mut rng);
            assert!((0.0..=1.0).contains(&u));
        }
    }

    #[test]
    fn test_derived_streams_differ() {
        let mut a = derive_rng(42, 0);
        let mut b = derive_rng(42, 1);
        let xs: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_seeded_rng_reports_seed() {
        let (mut rng, seed) = seeded_rng(Some(99));
        assert_eq!(seed, 99);
        let mut again = create_rng(99);
        assert_eq!(rng.next_u32(), again.next_u32());
    }
}
