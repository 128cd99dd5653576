pub mod board;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{solve, solve_observed, EvolutionOptions, EvolutionResult, Termination};
