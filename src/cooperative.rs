//! Advancing independent units (annealing chains, island populations)
//! between synchronisation barriers.
//!
//! With the `parallel` feature units are advanced on the rayon pool;
//! otherwise one after another in index order. Each unit owns its generator,
//! so both paths produce the same state at the barrier.

#[cfg(feature = "parallel")]
pub(crate) fn advance_all<T, F>(units: &mut [T], step: F)
where
    T: Send,
    F: Fn(&mut T) + Send + Sync,
{
    use rayon::prelude::*;
    units.par_iter_mut().for_each(step);
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn advance_all<T, F>(units: &mut [T], step: F)
where
    F: Fn(&mut T),
{
    units.iter_mut().for_each(step);
}
