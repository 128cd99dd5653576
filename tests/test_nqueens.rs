use nqueens_evo::{
    chromosome::{is_permutation, Chromosome},
    error::{GeneticError, Result},
    evolution::{
        max_pairs, solve, solve_observed, Challenge, EvolutionLauncher, EvolutionOptions, Fitness,
        NonAttackingPairs, ObserverResult, Termination,
    },
    rng::RandomNumberGenerator,
    strategy::PermutationBreedStrategy,
};

fn options(board_size: usize) -> EvolutionOptions {
    EvolutionOptions::builder()
        .board_size(board_size)
        .population_size(20)
        .mutation_probability(0.1)
        .tournament_size(3)
        .elitism(1)
        .max_generations(500)
        .stagnation_limit(100)
        .build()
}

#[test]
fn test_four_queens_reaches_full_fitness() -> Result<()> {
    let mut solved_runs = 0;
    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = solve(&options(4), &mut rng)?;

        assert!(result.generations <= 500);
        assert!(is_permutation(result.chromosome.genes()));
        if result.solved {
            assert_eq!(result.fitness, 6);
            assert_eq!(result.termination, Termination::Solved);
            solved_runs += 1;
        }
    }

    assert!(solved_runs >= 8, "only {} of 10 runs solved", solved_runs);
    Ok(())
}

#[test]
fn test_single_queen_solved_at_first_generation() -> Result<()> {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = solve(&options(1), &mut rng)?;

    assert!(result.solved);
    assert_eq!(result.fitness, 0);
    assert_eq!(result.generations, 1);
    assert_eq!(result.termination, Termination::Solved);
    assert_eq!(result.chromosome.genes(), &[0]);
    Ok(())
}

#[test]
fn test_two_queens_never_reports_solved() -> Result<()> {
    for seed in 0..5 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = solve(&options(2), &mut rng)?;

        assert!(!result.solved);
        assert_eq!(result.fitness, 0);
        assert!(matches!(
            result.termination,
            Termination::Stagnated | Termination::Exhausted
        ));
    }
    Ok(())
}

#[test]
fn test_best_fitness_never_decreases() -> Result<()> {
    let options = EvolutionOptions::builder()
        .board_size(12)
        .population_size(30)
        .mutation_probability(0.2)
        .elitism(2)
        .max_generations(300)
        .stagnation_limit(300)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(99);
    let mut history: Vec<Fitness> = Vec::new();
    let mut boards_valid = true;

    let mut record = |_: usize, best: &Chromosome, fitness: Fitness| -> ObserverResult {
        boards_valid &= is_permutation(best.genes())
            && NonAttackingPairs.score(best) == fitness;
        history.push(fitness);
        Ok(())
    };
    let result = solve_observed(&options, &mut rng, &mut record)?;

    assert!(boards_valid);
    assert_eq!(history.len(), result.generations);
    assert!(history.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(history.last().copied(), Some(result.fitness));
    assert!(result.fitness <= max_pairs(12));
    Ok(())
}

#[test]
fn test_observer_sees_consecutive_generations() -> Result<()> {
    let options = EvolutionOptions::builder()
        .board_size(10)
        .population_size(10)
        .max_generations(40)
        .stagnation_limit(1000)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(4);
    let mut generations = Vec::new();

    let mut record = |generation: usize, _: &Chromosome, _: Fitness| -> ObserverResult {
        generations.push(generation);
        Ok(())
    };
    let result = solve_observed(&options, &mut rng, &mut record)?;

    let expected: Vec<usize> = (1..=result.generations).collect();
    assert_eq!(generations, expected);
    Ok(())
}

#[test]
fn test_terminates_within_generation_budget() -> Result<()> {
    for (board_size, max_generations) in [(6, 1), (9, 7), (14, 25)] {
        let options = EvolutionOptions::builder()
            .board_size(board_size)
            .population_size(12)
            .max_generations(max_generations)
            .stagnation_limit(usize::MAX)
            .build();
        let mut rng = RandomNumberGenerator::from_seed(board_size as u64);

        let result = solve(&options, &mut rng)?;
        assert!(result.generations <= max_generations);
        if !result.solved {
            assert_eq!(result.termination, Termination::Exhausted);
            assert_eq!(result.generations, max_generations);
        }
    }
    Ok(())
}

#[test]
fn test_zero_stagnation_limit_stops_after_first_generation() -> Result<()> {
    let options = EvolutionOptions::builder()
        .board_size(30)
        .population_size(10)
        .stagnation_limit(0)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(8);

    let result = solve(&options, &mut rng)?;

    assert_eq!(result.generations, 1);
    assert_eq!(result.termination, Termination::Stagnated);
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<()> {
    let options = options(8);

    let first = solve(&options, &mut RandomNumberGenerator::from_seed(2024))?;
    let second = solve(&options, &mut RandomNumberGenerator::from_seed(2024))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let mut rng = RandomNumberGenerator::from_seed(0);

    let mut zero_board = options(8);
    zero_board.set_board_size(0);

    let mut big_tournament = options(8);
    big_tournament.set_tournament_size(21);

    let mut all_elite = options(8);
    all_elite.set_elitism(20);

    let mut bad_mutation = options(8);
    bad_mutation.set_mutation_probability(-0.5);

    for options in [zero_board, big_tournament, all_elite, bad_mutation] {
        let result = solve(&options, &mut rng);
        assert!(
            matches!(result, Err(GeneticError::Configuration(_))),
            "{:?} should be rejected",
            options
        );
    }
}

#[test]
fn test_custom_launcher_matches_standard() -> Result<()> {
    let launcher = EvolutionLauncher::new(NonAttackingPairs, PermutationBreedStrategy::new());

    // One launcher serves every configuration it is run with
    for mutation_probability in [0.0, 0.1, 0.9] {
        let mut options = options(8);
        options.set_mutation_probability(mutation_probability);

        let custom = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(77))?;
        let standard = solve(&options, &mut RandomNumberGenerator::from_seed(77))?;

        assert_eq!(custom, standard);
    }
    Ok(())
}

#[test]
fn test_custom_launcher_rejects_oversized_tournament_up_front() {
    let launcher = EvolutionLauncher::new(NonAttackingPairs, PermutationBreedStrategy::new());
    let mut options = options(8);
    options.set_tournament_size(25);
    let mut rng = RandomNumberGenerator::from_seed(1);
    let mut generations_seen = 0;
    let mut count = |_: usize, _: &Chromosome, _: Fitness| -> ObserverResult {
        generations_seen += 1;
        Ok(())
    };

    let result = launcher.evolve_observed(&options, &mut rng, &mut count);

    assert!(matches!(result, Err(GeneticError::Configuration(_))));
    assert_eq!(generations_seen, 0);
}

#[test]
fn test_observer_failure_is_distinguishable() {
    let options = options(25);
    let mut rng = RandomNumberGenerator::from_seed(6);
    let mut failing = |_: usize, _: &Chromosome, _: Fitness| -> ObserverResult {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "display went away").into())
    };

    let err = solve_observed(&options, &mut rng, &mut failing).unwrap_err();

    assert!(matches!(err, GeneticError::Observer { generation: 1, .. }));
    let source = std::error::Error::source(&err).expect("source should be kept");
    assert_eq!(source.to_string(), "display went away");
}
