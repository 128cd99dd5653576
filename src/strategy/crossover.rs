//! # Order Crossover (OX)
//!
//! OX keeps a contiguous slice of the first parent in place and fills the rest
//! of the child with the remaining genes in the order they appear in the
//! second parent, starting just after the slice and wrapping around. The child
//! of two permutations is always a permutation.

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Crosses `a` and `b` at two distinct random cut points.
///
/// Boards smaller than 2 have nothing to cross and yield a copy of `a`.
///
/// # Errors
///
/// Returns an error if the parents differ in length.
pub fn order_crossover(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut RandomNumberGenerator,
) -> Result<Chromosome> {
    check_parents(a, b)?;

    let size = a.len();
    if size < 2 {
        return Ok(a.clone());
    }

    let cuts = rng.sample_distinct(size, 2);
    let (start, end) = (cuts[0].min(cuts[1]), cuts[0].max(cuts[1]));
    order_crossover_at(a, b, start, end)
}

/// Crosses `a` and `b` keeping `a[start..=end]`.
///
/// ```rust
/// use nqueens_evo::chromosome::Chromosome;
/// use nqueens_evo::strategy::crossover::order_crossover_at;
///
/// let a = Chromosome::try_from(vec![0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
/// let b = Chromosome::try_from(vec![7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
///
/// let child = order_crossover_at(&a, &b, 2, 4).unwrap();
/// assert_eq!(child.genes(), &[6, 5, 2, 3, 4, 1, 0, 7]);
/// ```
///
/// # Errors
///
/// Returns an error if the parents differ in length or the cut points are not
/// `start <= end < len`.
pub fn order_crossover_at(
    a: &Chromosome,
    b: &Chromosome,
    start: usize,
    end: usize,
) -> Result<Chromosome> {
    check_parents(a, b)?;

    let size = a.len();
    if start > end || end >= size {
        return Err(GeneticError::Breeding(format!(
            "Invalid cut points {}..={} for chromosomes of length {}",
            start, end, size
        )));
    }

    let mut child = vec![0; size];
    let mut placed = vec![false; size];
    for pos in start..=end {
        let gene = a.genes()[pos];
        child[pos] = gene;
        placed[gene] = true;
    }

    let resume = (end + 1) % size;
    let donor = b.genes()[resume..].iter().chain(&b.genes()[..resume]);

    let mut pos = resume;
    for &gene in donor {
        if !placed[gene] {
            child[pos] = gene;
            placed[gene] = true;
            pos = (pos + 1) % size;
        }
    }

    Ok(Chromosome::from_permutation(child))
}

fn check_parents(a: &Chromosome, b: &Chromosome) -> Result<()> {
    if a.len() != b.len() {
        return Err(GeneticError::Breeding(format!(
            "Parents differ in length ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}
