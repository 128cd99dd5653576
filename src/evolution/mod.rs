pub mod challenge;
pub mod launcher;
pub mod observer;
pub mod options;

pub use challenge::{
    attacking_pairs, is_solution, max_pairs, Challenge, Fitness, NonAttackingPairs,
};
pub use launcher::{EvolutionLauncher, EvolutionResult, Termination};
pub use observer::{GenerationObserver, NoopObserver, ObserverResult, Throttled};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};

use crate::{error::Result, rng::RandomNumberGenerator};

/// Solves N-Queens with the standard launcher.
///
/// ```rust
/// use nqueens_evo::evolution::{solve, EvolutionOptions};
/// use nqueens_evo::rng::RandomNumberGenerator;
///
/// let options = EvolutionOptions::builder().board_size(1).build();
/// let result = solve(&options, &mut RandomNumberGenerator::from_seed(0)).unwrap();
///
/// assert!(result.solved);
/// assert_eq!(result.generations, 1);
/// ```
pub fn solve(
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult> {
    EvolutionLauncher::standard(options)?.evolve(options, rng)
}

/// Solves N-Queens with the standard launcher, notifying `observer` after
/// every generation.
pub fn solve_observed<O>(
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
    observer: &mut O,
) -> Result<EvolutionResult>
where
    O: GenerationObserver + ?Sized,
{
    EvolutionLauncher::standard(options)?.evolve_observed(options, rng, observer)
}
