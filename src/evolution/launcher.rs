use tracing::{debug, info, warn};

use super::{
    challenge::{Challenge, Fitness, NonAttackingPairs},
    observer::{GenerationObserver, NoopObserver},
    options::EvolutionOptions,
};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy},
    strategy::{BreedStrategy, PermutationBreedStrategy},
};

/// How a run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best chromosome reached the target score.
    Solved,
    /// Too many generations passed without improvement.
    Stagnated,
    /// The generation budget ran out.
    Exhausted,
}

/// Represents the result of an evolution.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best chromosome found.
    pub chromosome: Chromosome,
    /// The fitness score of `chromosome`.
    pub fitness: Fitness,
    /// Generations run.
    pub generations: usize,
    /// Whether `fitness` reached the target score.
    pub solved: bool,
    /// The generation in which `chromosome` was found, 0 being the initial population.
    pub found_at: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

/// The best chromosome seen so far in a run.
#[derive(Debug, Clone)]
struct BestSoFar {
    chromosome: Chromosome,
    fitness: Fitness,
    generation: usize,
}

/// Runs the generational loop with a given challenge and breeding strategy.
///
/// Every generation keeps the top `elitism` chromosomes unchanged, breeds the
/// rest from the current population, and rescores. The loop stops when the
/// best chromosome reaches the challenge's target, after `stagnation_limit`
/// generations without improvement, or when `max_generations` is used up.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Chall, Strategy>
where
    Chall: Challenge,
    Strategy: BreedStrategy,
{
    challenge: Chall,
    strategy: Strategy,
    elitism: ElitistSelection,
}

impl EvolutionLauncher<NonAttackingPairs, PermutationBreedStrategy> {
    /// The N-Queens launcher: non-attacking-pairs fitness, tournament selection,
    /// order crossover, and swap mutation. Fails early if `options` are invalid;
    /// the operator parameters are read from the options given to each run.
    pub fn standard(options: &EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::new(NonAttackingPairs, PermutationBreedStrategy::new()))
    }
}

impl<Chall, Strategy> EvolutionLauncher<Chall, Strategy>
where
    Chall: Challenge,
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified challenge and breeding strategy.
    pub fn new(challenge: Chall, strategy: Strategy) -> Self {
        Self {
            challenge,
            strategy,
            elitism: ElitistSelection::new(),
        }
    }

    /// Evolves a population without an observer.
    ///
    /// See [`EvolutionLauncher::evolve_observed`].
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_observed(options, rng, &mut NoopObserver)
    }

    /// Evolves a population, reporting the best-so-far record to `observer`
    /// after every generation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation (checked before the first generation)
    /// - The breeding process fails
    /// - The observer returns an error
    ///
    /// Running out of generations or stagnating is not an error.
    pub fn evolve_observed<O>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        observer: &mut O,
    ) -> Result<EvolutionResult>
    where
        O: GenerationObserver + ?Sized,
    {
        options.validate()?;

        let size = options.get_board_size();
        let target = self.challenge.target(size);

        let mut population: Vec<Chromosome> = (0..options.get_population_size())
            .map(|_| Chromosome::random(size, rng))
            .collect();
        let mut fitness = self.evaluate(&population);

        let (idx, score) = fittest(&fitness)?;
        let mut best = BestSoFar {
            chromosome: population[idx].clone(),
            fitness: score,
            generation: 0,
        };
        let mut stagnation = 0;

        info!(best_fitness = best.fitness, target, "initial population evaluated");

        for generation in 1..=options.get_max_generations() {
            let mut next_population =
                self.elitism
                    .select(&population, &fitness, options.get_elitism(), rng)?;

            let offspring = self
                .strategy
                .breed(&population, &fitness, options, rng)
                .map_err(|e| {
                    GeneticError::Breeding(format!(
                        "Failed to breed candidates in generation {}: {}",
                        generation, e
                    ))
                })?;
            next_population.extend(offspring);

            population = next_population;
            fitness = self.evaluate(&population);

            let (idx, score) = fittest(&fitness)?;
            if score > best.fitness {
                best = BestSoFar {
                    chromosome: population[idx].clone(),
                    fitness: score,
                    generation,
                };
                stagnation = 0;
                info!(generation, best_fitness = best.fitness, target, "improvement");
            } else {
                stagnation += 1;
            }

            debug!(generation, generation_best = score, stagnation, "generation complete");

            observer
                .on_generation_advanced(generation, &best.chromosome, best.fitness)
                .map_err(|source| GeneticError::Observer { generation, source })?;

            if best.fitness == target {
                return Ok(finish(best, generation, target, Termination::Solved));
            }

            if stagnation >= options.get_stagnation_limit() {
                warn!(generation, best_fitness = best.fitness, target, "search stagnated");
                return Ok(finish(best, generation, target, Termination::Stagnated));
            }
        }

        Ok(finish(
            best,
            options.get_max_generations(),
            target,
            Termination::Exhausted,
        ))
    }

    fn evaluate(&self, population: &[Chromosome]) -> Vec<Fitness> {
        population
            .iter()
            .map(|chromosome| self.challenge.score(chromosome))
            .collect()
    }
}

/// Index and score of the first highest score.
fn fittest(fitness: &[Fitness]) -> Result<(usize, Fitness)> {
    let mut scores = fitness.iter().copied().enumerate();
    let first = scores
        .next()
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

    Ok(scores.fold(first, |best, current| {
        if current.1 > best.1 {
            current
        } else {
            best
        }
    }))
}

fn finish(
    best: BestSoFar,
    generations: usize,
    target: Fitness,
    termination: Termination,
) -> EvolutionResult {
    let solved = best.fitness == target;

    info!(
        board_size = best.chromosome.len(),
        generations,
        solved,
        fitness = best.fitness,
        chromosome = %best.chromosome,
        ?termination,
        "evolution finished"
    );

    EvolutionResult {
        chromosome: best.chromosome,
        fitness: best.fitness,
        generations,
        solved,
        found_at: best.generation,
        termination,
    }
}
