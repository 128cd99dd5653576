use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::evolution::options::EvolutionOptions;
use crate::evolution::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::{SelectionStrategy, TournamentSelection};
use crate::strategy::{crossover::order_crossover, mutation::swap_mutation, BreedStrategy};

/// Breeds permutation chromosomes.
///
/// Every child comes from two independent tournaments, an order crossover of
/// the two winners, and a swap mutation of the result. The tournament size and
/// the mutation probability are taken from the [`EvolutionOptions`] passed to
/// each `breed` call, so the same strategy value serves any run configuration.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct PermutationBreedStrategy;

impl PermutationBreedStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for PermutationBreedStrategy {
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[Fitness],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        evol_options.validate()?;

        let selection = TournamentSelection::new(evol_options.get_tournament_size())?;
        let mutation_probability = evol_options.get_mutation_probability();
        let num_offspring = evol_options.get_num_offspring();
        let mut offspring = Vec::with_capacity(num_offspring);

        for _ in 0..num_offspring {
            let parents = selection.select(population, fitness, 2, rng)?;
            let child = order_crossover(&parents[0], &parents[1], rng)?;
            offspring.push(swap_mutation(&child, mutation_probability, rng));
        }

        Ok(offspring)
    }
}
