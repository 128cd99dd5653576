use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::evolution::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects the best individuals based on fitness.
///
/// This strategy ranks individuals by fitness, highest first, and takes the
/// top N. Equal scores keep their population order. The launcher uses it to
/// carry elites into the next generation unchanged.
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
///         Chromosome::try_from(vec![0, 1, 2])?,
///         Chromosome::try_from(vec![2, 0, 1])?,
///         Chromosome::try_from(vec![1, 2, 0])?,
///     ];
///     let fitness = vec![0, 2, 1];
///     let mut rng = RandomNumberGenerator::from_seed(0);
///
///     let selected = ElitistSelection::default().select(&population, &fitness, 2, &mut rng)?;
///
///     assert_eq!(selected[0], population[1]);
///     assert_eq!(selected[1], population[2]);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Indices of the population ordered by fitness, highest first.
    fn ranked(fitness: &[Fitness]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..fitness.len()).collect();
        // sort_by is stable, so equal scores keep population order
        indices.sort_by(|&a, &b| fitness[b].cmp(&fitness[a]));
        indices
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[Fitness],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if num_to_select == 0 {
            return Ok(Vec::new());
        }

        check_population(population, fitness)?;

        Ok(Self::ranked(fitness)
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
