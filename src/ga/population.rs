//! A population of tours and its evolution step.

use std::ops::{Index, IndexMut};

use super::config::{Scheme, CROSSOVER_RATE, MUTATION_RATE};
use super::operators::{cross, mutate};
use crate::random::{random_index, random_unit, TourRng};
use crate::tour::Tour;

/// Tours over one node set plus the generator that drives their evolution.
///
/// Individuals are addressed by index; [`best_index`](Self::best_index) and
/// [`worst_index`](Self::worst_index) break ties towards the lowest index.
#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Tour>,
    rng: TourRng,
    crossover_rate: f64,
    mutation_rate: f64,
}

impl Population {
    /// Creates `size` independent random shuffles of `sample`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize, sample: &Tour, mut rng: TourRng) -> Self {
        assert!(size > 0, "population must hold at least one tour");
        let chromosomes = (0..size)
            .map(|_| {
                let mut tour = sample.clone();
                tour.shuffle_path(&mut rng);
                tour
            })
            .collect();

        Self {
            chromosomes,
            rng,
            crossover_rate: CROSSOVER_RATE,
            mutation_rate: MUTATION_RATE,
        }
    }

    /// Overrides the crossover and mutation probabilities.
    pub fn with_rates(mut self, crossover_rate: f64, mutation_rate: f64) -> Self {
        self.crossover_rate = crossover_rate;
        self.mutation_rate = mutation_rate;
        self
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn chromosomes(&self) -> &[Tour] {
        &self.chromosomes
    }

    /// Index of the cheapest tour.
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for i in 1..self.size() {
            if self.chromosomes[i].is_better_than(&self.chromosomes[best]) {
                best = i;
            }
        }
        best
    }

    /// Indices of the cheapest and second cheapest tours. A population of
    /// one returns `(0, 0)`.
    pub fn best_two(&self) -> (usize, usize) {
        let first = self.best_index();
        let mut second: Option<usize> = None;
        for i in 0..self.size() {
            if i == first {
                continue;
            }
            match second {
                Some(s) if !self.chromosomes[i].is_better_than(&self.chromosomes[s]) => {}
                _ => second = Some(i),
            }
        }
        (first, second.unwrap_or(first))
    }

    /// Index of the most expensive tour.
    pub fn worst_index(&self) -> usize {
        let mut worst = 0;
        for i in 1..self.size() {
            if self.chromosomes[worst].is_better_than(&self.chromosomes[i]) {
                worst = i;
            }
        }
        worst
    }

    /// Mean tour cost.
    pub fn mean_cost(&self) -> f64 {
        let total: f64 = self.chromosomes.iter().map(Tour::cost).sum();
        total / self.size() as f64
    }

    /// Overwrites the worst tour with `tour`.
    pub fn replace_worst(&mut self, tour: &Tour) {
        let worst = self.worst_index();
        self.chromosomes[worst].assign_path(tour);
    }

    /// Runs one evolution step.
    ///
    /// A steady-state step on a population of one does nothing.
    pub fn evolve(&mut self, scheme: Scheme) {
        match scheme {
            Scheme::Generational => self.evolve_generational(),
            Scheme::SteadyState if self.size() >= 2 => self.evolve_steady_state(),
            Scheme::SteadyState => {}
        }
    }

    /// Breeds pairs over a shrinking active range `[0, last)`: both parents
    /// are moved to the end of the range, overwritten by their offspring,
    /// and the range shrinks by two. The previous best then replaces the
    /// new worst if cheaper.
    fn evolve_generational(&mut self) {
        let elite = self.chromosomes[self.best_index()].clone();

        let mut last = self.size();
        while last > 2 {
            let (father, mother) = self.select_pair(last);
            let (son, daughter) = self.breed(father, mother);
            self.replace_parents(father, mother, son, daughter, last);
            last -= 2;
        }

        let worst = self.worst_index();
        if elite.is_better_than(&self.chromosomes[worst]) {
            self.chromosomes[worst].assign_path(&elite);
        }
    }

    fn evolve_steady_state(&mut self) {
        let (father, mother) = self.select_pair(self.size());
        let (son, daughter) = self.breed(father, mother);
        self.admit(&son);
        self.admit(&daughter);
    }

    /// Binary tournament over `[0, last)`. Ties go to the second draw.
    fn select(&mut self, last: usize) -> usize {
        let a = random_index(&mut self.rng, last);
        let b = random_index(&mut self.rng, last);
        if self.chromosomes[a].is_better_than(&self.chromosomes[b]) {
            a
        } else {
            b
        }
    }

    /// Two distinct tournament winners. Requires `last >= 2`.
    fn select_pair(&mut self, last: usize) -> (usize, usize) {
        let father = self.select(last);
        let mut mother = self.select(last);
        while mother == father {
            mother = self.select(last);
        }
        (father, mother)
    }

    fn breed(&mut self, father: usize, mother: usize) -> (Tour, Tour) {
        let (mut son, mut daughter) = if random_unit(&mut self.rng) <= self.crossover_rate {
            let son = cross(&self.chromosomes[father], &self.chromosomes[mother], &mut self.rng);
            let daughter = cross(&self.chromosomes[mother], &self.chromosomes[father], &mut self.rng);
            (son, daughter)
        } else {
            (self.chromosomes[father].clone(), self.chromosomes[mother].clone())
        };

        if random_unit(&mut self.rng) <= self.mutation_rate {
            mutate(&mut son, &mut self.rng);
        }
        if random_unit(&mut self.rng) <= self.mutation_rate {
            mutate(&mut daughter, &mut self.rng);
        }
        (son, daughter)
    }

    fn replace_parents(&mut self, father: usize, mut mother: usize, son: Tour, daughter: Tour, last: usize) {
        self.chromosomes.swap(father, last - 1);
        if mother == last - 1 {
            mother = father;
        }
        self.chromosomes.swap(mother, last - 2);
        self.chromosomes[last - 2] = son;
        self.chromosomes[last - 1] = daughter;
    }

    /// Replaces the worst tour with `tour` if `tour` is cheaper.
    fn admit(&mut self, tour: &Tour) {
        let worst = self.worst_index();
        if tour.is_better_than(&self.chromosomes[worst]) {
            self.chromosomes[worst].assign_path(tour);
        }
    }
}

impl Index<usize> for Population {
    type Output = Tour;

    fn index(&self, index: usize) -> &Tour {
        &self.chromosomes[index]
    }
}

impl IndexMut<usize> for Population {
    fn index_mut(&mut self, index: usize) -> &mut Tour {
        &mut self.chromosomes[index]
    }
}
