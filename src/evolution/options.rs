//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run configuration of the solver: the board
//! size, the population layout, the operator rates, and the two termination budgets.
//! Options are fixed for the duration of a run.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_evo::evolution::options::EvolutionOptions;
//!
//! // Create a new EvolutionOptions instance with the builder
//! let custom_options = EvolutionOptions::builder()
//!     .board_size(10)
//!     .population_size(80)
//!     .mutation_probability(0.1)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_board_size(), 8);
//! ```
//!
//! ## Fields
//!
//! - `board_size`: N, the number of queens and the side of the board.
//! - `population_size`: The number of chromosomes in each generation.
//! - `mutation_probability`: The chance that a child gets a swap mutation.
//! - `tournament_size`: The number of contenders in each tournament.
//! - `elitism`: The number of top chromosomes carried over unchanged.
//! - `max_generations`: The generation budget.
//! - `stagnation_limit`: How many generations without improvement end the run.

use crate::error::{GeneticError, Result};

const DEFAULT_BOARD_SIZE: usize = 8;
const DEFAULT_POPULATION_SIZE: usize = 60;
const DEFAULT_MUTATION_PROBABILITY: f64 = 0.06;
const DEFAULT_TOURNAMENT_SIZE: usize = 3;
const DEFAULT_ELITISM: usize = 1;
const DEFAULT_MAX_GENERATIONS: usize = 2000;
const DEFAULT_STAGNATION_LIMIT: usize = 400;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    board_size: usize,
    population_size: usize,
    mutation_probability: f64,
    tournament_size: usize,
    elitism: usize,
    max_generations: usize,
    stagnation_limit: usize,
}

impl EvolutionOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        board_size: usize,
        population_size: usize,
        mutation_probability: f64,
        tournament_size: usize,
        elitism: usize,
        max_generations: usize,
        stagnation_limit: usize,
    ) -> Self {
        Self {
            board_size,
            population_size,
            mutation_probability,
            tournament_size,
            elitism,
            max_generations,
            stagnation_limit,
        }
    }

    /// Checks the options before a run.
    ///
    /// Out-of-range values are reported, never corrected.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(GeneticError::Configuration(
                "Board size must be at least 1".to_string(),
            ));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be between 1 and the population size ({}), got {}",
                self.population_size, self.tournament_size
            )));
        }

        if self.elitism >= self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Elitism ({}) must be smaller than the population size ({})",
                self.elitism, self.population_size
            )));
        }

        Ok(())
    }

    pub fn get_board_size(&self) -> usize {
        self.board_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_stagnation_limit(&self) -> usize {
        self.stagnation_limit
    }

    /// Number of children bred each generation.
    pub fn get_num_offspring(&self) -> usize {
        self.population_size.saturating_sub(self.elitism)
    }

    /// Sets the board size.
    pub fn set_board_size(&mut self, board_size: usize) {
        self.board_size = board_size;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation probability.
    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    /// Sets the tournament size.
    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    /// Sets the elitism count.
    pub fn set_elitism(&mut self, elitism: usize) {
        self.elitism = elitism;
    }

    /// Sets the number of generations.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the stagnation limit.
    pub fn set_stagnation_limit(&mut self, stagnation_limit: usize) {
        self.stagnation_limit = stagnation_limit;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Fields left unset take their default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nqueens_evo::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .board_size(4)
    ///     .population_size(20)
    ///     .mutation_probability(0.1)
    ///     .tournament_size(3)
    ///     .elitism(1)
    ///     .max_generations(500)
    ///     .stagnation_limit(100)
    ///     .build();
    ///
    /// assert_eq!(options.get_num_offspring(), 19);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elitism: DEFAULT_ELITISM,
            max_generations: DEFAULT_MAX_GENERATIONS,
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    board_size: Option<usize>,
    population_size: Option<usize>,
    mutation_probability: Option<f64>,
    tournament_size: Option<usize>,
    elitism: Option<usize>,
    max_generations: Option<usize>,
    stagnation_limit: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the board size.
    pub fn board_size(mut self, value: usize) -> Self {
        self.board_size = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the tournament size.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the elitism count.
    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the stagnation limit.
    pub fn stagnation_limit(mut self, value: usize) -> Self {
        self.stagnation_limit = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            board_size: self.board_size.unwrap_or(DEFAULT_BOARD_SIZE),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(DEFAULT_MUTATION_PROBABILITY),
            tournament_size: self.tournament_size.unwrap_or(DEFAULT_TOURNAMENT_SIZE),
            elitism: self.elitism.unwrap_or(DEFAULT_ELITISM),
            max_generations: self.max_generations.unwrap_or(DEFAULT_MAX_GENERATIONS),
            stagnation_limit: self.stagnation_limit.unwrap_or(DEFAULT_STAGNATION_LIMIT),
        }
    }
}
