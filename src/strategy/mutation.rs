use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Swaps two distinct random genes with probability `probability`.
///
/// The input is left untouched; the result is a new chromosome. Boards
/// smaller than 2 have no pair to swap and are returned as is.
///
/// ```rust
/// use nqueens_evo::chromosome::Chromosome;
/// use nqueens_evo::rng::RandomNumberGenerator;
/// use nqueens_evo::strategy::mutation::swap_mutation;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let parent = Chromosome::try_from(vec![0, 1, 2, 3]).unwrap();
///
/// assert_eq!(swap_mutation(&parent, 0.0, &mut rng), parent);
/// assert_ne!(swap_mutation(&parent, 1.0, &mut rng), parent);
/// ```
pub fn swap_mutation(
    chromosome: &Chromosome,
    probability: f64,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    if chromosome.len() < 2 || rng.gen_probability() >= probability {
        return chromosome.clone();
    }

    let positions = rng.sample_distinct(chromosome.len(), 2);
    chromosome.swapped(positions[0], positions[1])
}
