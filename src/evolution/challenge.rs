//! # Challenge
//!
//! A `Challenge` scores chromosomes. The launcher only needs two things from
//! it: the score of a chromosome and the score that counts as a full solution.
//!
//! [`NonAttackingPairs`] is the N-Queens rule: the fitness of a board is the
//! number of queen pairs that do not attack each other along a diagonal.

use crate::chromosome::Chromosome;

/// Fitness score. Higher is better.
pub type Fitness = usize;

pub trait Challenge {
    /// Scores a chromosome.
    fn score(&self, chromosome: &Chromosome) -> Fitness;

    /// The score at which a board of `size` is solved.
    fn target(&self, size: usize) -> Fitness;
}

/// Scores a board by its count of non-attacking queen pairs.
///
/// The maximum, `N·(N−1)/2`, is reached exactly when no two queens share a
/// diagonal.
///
/// ```rust
/// use nqueens_evo::chromosome::Chromosome;
/// use nqueens_evo::evolution::{Challenge, NonAttackingPairs};
///
/// let board = Chromosome::try_from(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(NonAttackingPairs.score(&board), 6);
/// assert_eq!(NonAttackingPairs.target(4), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAttackingPairs;

impl Challenge for NonAttackingPairs {
    fn score(&self, chromosome: &Chromosome) -> Fitness {
        max_pairs(chromosome.len()) - attacking_pairs(chromosome)
    }

    fn target(&self, size: usize) -> Fitness {
        max_pairs(size)
    }
}

/// Number of unordered queen pairs on a board of `size`.
pub fn max_pairs(size: usize) -> usize {
    size * size.saturating_sub(1) / 2
}

/// Counts pairs `(i, j)`, `i < j`, with `|c[i] - c[j]| == j - i`.
pub fn attacking_pairs(chromosome: &Chromosome) -> usize {
    let genes = chromosome.genes();
    let mut attacks = 0;
    for i in 0..genes.len() {
        for j in (i + 1)..genes.len() {
            if genes[i].abs_diff(genes[j]) == j - i {
                attacks += 1;
            }
        }
    }
    attacks
}

/// Returns `true` if no two queens attack each other.
pub fn is_solution(chromosome: &Chromosome) -> bool {
    attacking_pairs(chromosome) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;

    fn board(genes: &[usize]) -> Chromosome {
        Chromosome::try_from(genes.to_vec()).unwrap()
    }

    #[test]
    fn test_max_pairs() {
        assert_eq!(max_pairs(0), 0);
        assert_eq!(max_pairs(1), 0);
        assert_eq!(max_pairs(2), 1);
        assert_eq!(max_pairs(4), 6);
        assert_eq!(max_pairs(8), 28);
    }

    #[test]
    fn test_known_solutions_score_maximum() {
        let four = board(&[1, 3, 0, 2]);
        assert_eq!(NonAttackingPairs.score(&four), 6);
        assert!(is_solution(&four));

        let eight = board(&[0, 4, 7, 5, 2, 6, 1, 3]);
        assert_eq!(NonAttackingPairs.score(&eight), 28);
        assert!(is_solution(&eight));
    }

    #[test]
    fn test_main_diagonal_attacks_every_pair() {
        let diagonal = board(&[0, 1, 2, 3, 4]);
        assert_eq!(attacking_pairs(&diagonal), 10);
        assert_eq!(NonAttackingPairs.score(&diagonal), 0);
    }

    #[test]
    fn test_two_queens_always_attack() {
        assert_eq!(NonAttackingPairs.score(&board(&[0, 1])), 0);
        assert_eq!(NonAttackingPairs.score(&board(&[1, 0])), 0);
    }

    #[test]
    fn test_single_queen_is_solved() {
        let single = board(&[0]);
        assert_eq!(NonAttackingPairs.score(&single), 0);
        assert_eq!(NonAttackingPairs.target(1), 0);
        assert!(is_solution(&single));
    }

    #[test]
    fn test_score_bounds_on_random_boards() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for size in 1..=12 {
            for _ in 0..20 {
                let chromosome = Chromosome::random(size, &mut rng);
                let score = NonAttackingPairs.score(&chromosome);
                assert!(score <= max_pairs(size));
                assert_eq!(score == max_pairs(size), is_solution(&chromosome));
            }
        }
    }
}
