use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evolution::Fitness;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose chromosomes from a population based on their
/// fitness scores. `fitness[i]` is the score of `population[i]`.
///
/// # Examples
///
/// ```
/// use nqueens_evo::chromosome::Chromosome;
/// use nqueens_evo::error::Result;
/// use nqueens_evo::rng::RandomNumberGenerator;
/// use nqueens_evo::selection::{ElitistSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Chromosome::try_from(vec![0, 1, 2, 3])?,
///         Chromosome::try_from(vec![1, 3, 0, 2])?,
///         Chromosome::try_from(vec![3, 1, 2, 0])?,
///     ];
///     let fitness = vec![0, 6, 3];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selected = ElitistSelection::default().select(&population, &fitness, 1, &mut rng)?;
///     assert_eq!(selected, vec![population[1].clone()]);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` chromosomes from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy's own parameters don't fit the population
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

/// Shared precondition check for every strategy.
pub(crate) fn check_population(population: &[Chromosome], fitness: &[Fitness]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
