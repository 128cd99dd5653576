//! # Error Types
//!
//! This module defines the error type for the solver. Invalid run
//! configurations are rejected before the first generation, and failures
//! raised by a [`GenerationObserver`](crate::evolution::GenerationObserver)
//! are kept apart from solver errors so the caller can tell them apart.
//!
//! Failing to find a solution is not an error: a run that stagnates or runs
//! out of generations still returns `Ok` with `solved == false`.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nqueens_evo::error::{GeneticError, Result};
//!
//! fn check_board(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Board size must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_board(8).is_ok());
//! assert!(check_board(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use nqueens_evo::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[usize]) -> nqueens_evo::error::Result<usize> {
//!     scores.iter().max().copied().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_score(&[3, 6, 1]).unwrap(), 6);
//! assert!(best_score(&[]).is_err());
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error returned by observers.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a gene sequence is not a permutation.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error raised by the generation observer. The run stops at `generation`.
    #[error("Observer failed at generation {generation}: {source}")]
    Observer {
        generation: usize,
        #[source]
        source: BoxError,
    },
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
