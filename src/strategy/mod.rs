//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! new chromosomes from a scored population. The variation operators it is built from,
//! order crossover and swap mutation, live in [`crossover`] and [`mutation`].
pub mod crossover;
pub mod mutation;
pub mod permutation;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome,
    error::Result,
    evolution::{EvolutionOptions, Fitness},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces offspring for the next generation. Implementations only read the
/// current population; elites are carried over by the launcher, not here.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `evol_options.get_num_offspring()` new chromosomes.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current population.
    /// - `fitness`: The score of each member of `population`, in the same order.
    /// - `evol_options`: The run options. Operator parameters such as the
    ///   tournament size and mutation probability are read from here.
    /// - `rng`: The random number generator driving selection and variation.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The options are invalid
    /// - The population is empty
    /// - The fitness vector doesn't match the population
    /// - A variation operator rejects its inputs
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[Fitness],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

pub use crossover::{order_crossover, order_crossover_at};
pub use mutation::swap_mutation;
pub use permutation::PermutationBreedStrategy;
