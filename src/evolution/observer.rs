//! # GenerationObserver
//!
//! Observers receive the best-so-far chromosome after every generation. They run
//! inline in the generational loop, so a slow observer (a redraw, say) pauses the
//! search until it returns. Observers only read: nothing they do changes the
//! population or the best-so-far record.
//!
//! Returning `Err` stops the run. The launcher surfaces it as
//! [`GeneticError::Observer`](crate::error::GeneticError::Observer) with the
//! original error as its source, which also makes it the way to cancel a run.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_evo::chromosome::Chromosome;
//! use nqueens_evo::evolution::{EvolutionOptions, Fitness, ObserverResult};
//! use nqueens_evo::rng::RandomNumberGenerator;
//!
//! let options = EvolutionOptions::builder().board_size(6).max_generations(50).build();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let mut history = Vec::new();
//! let mut record = |_generation: usize, _best: &Chromosome, fitness: Fitness| -> ObserverResult {
//!     history.push(fitness);
//!     Ok(())
//! };
//!
//! let result = nqueens_evo::evolution::solve_observed(&options, &mut rng, &mut record).unwrap();
//! assert_eq!(history.len(), result.generations);
//! ```

use crate::chromosome::Chromosome;
use crate::error::BoxError;
use crate::evolution::Fitness;

pub type ObserverResult = std::result::Result<(), BoxError>;

pub trait GenerationObserver {
    /// Called once per generation with the best-so-far record.
    fn on_generation_advanced(
        &mut self,
        generation: usize,
        best: &Chromosome,
        fitness: Fitness,
    ) -> ObserverResult;
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation_advanced(&mut self, _: usize, _: &Chromosome, _: Fitness) -> ObserverResult {
        Ok(())
    }
}

impl<F> GenerationObserver for F
where
    F: FnMut(usize, &Chromosome, Fitness) -> ObserverResult,
{
    fn on_generation_advanced(
        &mut self,
        generation: usize,
        best: &Chromosome,
        fitness: Fitness,
    ) -> ObserverResult {
        self(generation, best, fitness)
    }
}

/// Forwards only every `every`-th generation to the inner observer.
///
/// Handy when the inner observer is expensive, such as a board redraw.
#[derive(Debug, Clone)]
pub struct Throttled<O> {
    inner: O,
    every: usize,
}

impl<O: GenerationObserver> Throttled<O> {
    /// An `every` of zero forwards nothing.
    pub fn new(inner: O, every: usize) -> Self {
        Self { inner, every }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: GenerationObserver> GenerationObserver for Throttled<O> {
    fn on_generation_advanced(
        &mut self,
        generation: usize,
        best: &Chromosome,
        fitness: Fitness,
    ) -> ObserverResult {
        if self.every == 0 || generation % self.every != 0 {
            return Ok(());
        }
        self.inner.on_generation_advanced(generation, best, fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_forwards_every_nth() {
        let best = Chromosome::try_from(vec![1, 3, 0, 2]).unwrap();
        let mut seen = Vec::new();

        {
            let recorder = |generation: usize, _: &Chromosome, _: Fitness| -> ObserverResult {
                seen.push(generation);
                Ok(())
            };
            let mut throttled = Throttled::new(recorder, 10);
            for generation in 1..=35 {
                throttled.on_generation_advanced(generation, &best, 6).unwrap();
            }
        }

        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_throttled_zero_forwards_nothing() {
        let best = Chromosome::try_from(vec![0]).unwrap();
        let mut calls = 0;

        {
            let counter = |_: usize, _: &Chromosome, _: Fitness| -> ObserverResult {
                calls += 1;
                Ok(())
            };
            let mut throttled = Throttled::new(counter, 0);
            for generation in 0..5 {
                throttled.on_generation_advanced(generation, &best, 0).unwrap();
            }
        }

        assert_eq!(calls, 0);
    }

    #[test]
    fn test_noop_observer() {
        let best = Chromosome::try_from(vec![0, 1]).unwrap();
        assert!(NoopObserver.on_generation_advanced(1, &best, 0).is_ok());
    }
}
