//! # Chromosome
//!
//! A `Chromosome` encodes one candidate board: gene `i` is the row of the
//! queen standing in column `i`. Every chromosome is a permutation of
//! `[0, N)`, so no two queens ever share a row or a column and only diagonal
//! conflicts remain to be scored.
//!
//! The permutation property is established when a chromosome is created,
//! either by [`Chromosome::random`] or by the checked conversion from a
//! `Vec<usize>`, and every operator in [`crate::strategy`] preserves it.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_evo::chromosome::Chromosome;
//! use nqueens_evo::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let random = Chromosome::random(8, &mut rng);
//! assert_eq!(random.len(), 8);
//!
//! let board = Chromosome::try_from(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(board.genes(), &[1, 3, 0, 2]);
//!
//! assert!(Chromosome::try_from(vec![0, 0, 1]).is_err());
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A permutation of `[0, N)` mapping columns to rows.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Returns a uniformly random permutation of `[0, size)`.
    pub fn random(size: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut genes: Vec<usize> = (0..size).collect();
        rng.shuffle(&mut genes);
        Self { genes }
    }

    /// Wraps genes the caller has already proven to be a permutation.
    pub(crate) fn from_permutation(genes: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&genes));
        Self { genes }
    }

    /// The row of each column's queen.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Board size N.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns a copy with the genes at positions `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut genes = self.genes.clone();
        genes.swap(a, b);
        Self { genes }
    }
}

/// Returns `true` if `genes` contains every value of `[0, genes.len())` exactly once.
pub fn is_permutation(genes: &[usize]) -> bool {
    let mut seen = vec![false; genes.len()];
    for &gene in genes {
        match seen.get_mut(gene) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

impl TryFrom<Vec<usize>> for Chromosome {
    type Error = GeneticError;

    fn try_from(genes: Vec<usize>) -> Result<Self> {
        if !is_permutation(&genes) {
            return Err(GeneticError::InvalidChromosome(format!(
                "{:?} is not a permutation of 0..{}",
                genes,
                genes.len()
            )));
        }
        Ok(Self { genes })
    }
}

impl From<Chromosome> for Vec<usize> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.genes
    }
}

impl AsRef<[usize]> for Chromosome {
    fn as_ref(&self) -> &[usize] {
        &self.genes
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}
