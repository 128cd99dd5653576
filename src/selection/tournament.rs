use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evolution::Fitness;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_population, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` *distinct* individuals uniformly at
/// random and keeps the fittest. Ties go to the contender drawn first. Every
/// selected individual comes from its own tournament, so two parents are never
/// decided by a shared draw.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use nqueens_evo::chromosome::Chromosome;
/// use nqueens_evo::error::Result;
/// use nqueens_evo::rng::RandomNumberGenerator;
/// use nqueens_evo::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(9);
///     let population: Vec<Chromosome> =
///         (0..5).map(|_| Chromosome::random(6, &mut rng)).collect();
///     let fitness = vec![4, 9, 2, 11, 7];
///
///     let selection = TournamentSelection::new(3)?;
///     let parents = selection.select(&population, &fitness, 2, &mut rng)?;
///
///     assert_eq!(parents.len(), 2);
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "deserialize_tournament_size")
    )]
    tournament_size: usize,
}

#[cfg(feature = "serde")]
fn deserialize_tournament_size<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde::Deserialize;

    let size = usize::deserialize(deserializer)?;
    TournamentSelection::new(size)
        .map(|selection| selection.tournament_size)
        .map_err(D::Error::custom)
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament is larger than the population.
    pub fn run_tournament(
        &self,
        fitness: &[Fitness],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let population_size = fitness.len();

        if self.tournament_size > population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size, population_size
            )));
        }

        let participants = rng.sample_distinct(population_size, self.tournament_size);

        let mut best_idx = participants[0];
        for &idx in &participants[1..] {
            if fitness[idx] > fitness[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        check_population(population, fitness)?;

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner_idx = self.run_tournament(fitness, rng)?;
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(size: usize, count: usize, seed: u64) -> Vec<Chromosome> {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        (0..count).map(|_| Chromosome::random(size, &mut rng)).collect()
    }

    #[test]
    fn test_tournament_selection() {
        let population = population(6, 5, 1);
        let fitness = vec![5, 8, 3, 9, 1];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, &fitness, 3, &mut rng).unwrap();

        assert_eq!(selected.len(), 3);
        assert!(selected.iter().all(|c| population.contains(c)));
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let fitness = vec![5, 8, 3, 9, 1];
        let mut rng = RandomNumberGenerator::from_seed(7);

        // Tournament size equal to population size is elitist
        let selection = TournamentSelection::new(5).unwrap();
        for _ in 0..20 {
            assert_eq!(selection.run_tournament(&fitness, &mut rng).unwrap(), 3);
        }
    }

    #[test]
    fn test_ties_go_to_first_drawn() {
        let fitness = vec![4, 4, 4];
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut replay = rng.clone();

        let selection = TournamentSelection::new(3).unwrap();
        let winner = selection.run_tournament(&fitness, &mut rng).unwrap();
        let first_drawn = replay.sample_distinct(3, 3)[0];

        assert_eq!(winner, first_drawn);
    }

    #[test]
    fn test_tournament_of_one_is_uniform_pick() {
        let fitness = vec![0, 0, 0, 100];
        let mut rng = RandomNumberGenerator::from_seed(11);

        let selection = TournamentSelection::new(1).unwrap();
        let winners: Vec<usize> = (0..200)
            .map(|_| selection.run_tournament(&fitness, &mut rng).unwrap())
            .collect();

        // The weakest individuals still win some tournaments
        assert!(winners.iter().any(|&idx| idx != 3));
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let population = population(4, 3, 4);
        let fitness = vec![1, 2, 3];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::new(4).unwrap();
        let result = selection.select(&population, &fitness, 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Vec<Chromosome> = Vec::new();
        let fitness: Vec<Fitness> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 3, &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = population(4, 2, 5);
        let fitness = vec![1];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 1, &mut rng);

        assert!(result.is_err());
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        assert!(TournamentSelection::new(0).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_tournament_size() {
        let selection: TournamentSelection =
            serde_json::from_str(r#"{"tournament_size":4}"#).unwrap();
        assert_eq!(selection.tournament_size(), 4);

        let err = serde_json::from_str::<TournamentSelection>(r#"{"tournament_size":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Tournament size must be at least 1"));
    }
}
