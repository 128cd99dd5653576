//! Command-line front end for the evolutionary N-Queens solver.
//!
//! Usage:
//!   nqueens [-n 8] [--population 60] [--mutation 0.06] [--tournament 3]
//!           [--elitism 1] [--max-generations 2000] [--stagnation 400]
//!           [--seed 42] [--render-every 10] [-v]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use nqueens_evo::{
    board::{Board, BoardObserver},
    evolution::{solve_observed, EvolutionOptions, Throttled},
    rng::RandomNumberGenerator,
    Result,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Solve the N-Queens puzzle with a genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board size (number of queens)
    #[arg(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Chromosomes per generation
    #[arg(short, long, default_value_t = 60)]
    population: usize,

    /// Probability of a swap mutation per child
    #[arg(short, long, default_value_t = 0.06)]
    mutation: f64,

    /// Contenders per tournament
    #[arg(short = 'k', long, default_value_t = 3)]
    tournament: usize,

    /// Chromosomes carried over unchanged each generation
    #[arg(short, long, default_value_t = 1)]
    elitism: usize,

    /// Generation budget
    #[arg(short = 'g', long, default_value_t = 2000)]
    max_generations: usize,

    /// Generations without improvement before giving up
    #[arg(short, long, default_value_t = 400)]
    stagnation: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Redraw the board every N generations (0 disables)
    #[arg(short, long, default_value_t = 10)]
    render_every: usize,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> EvolutionOptions {
        EvolutionOptions::builder()
            .board_size(self.size)
            .population_size(self.population)
            .mutation_probability(self.mutation)
            .tournament_size(self.tournament)
            .elitism(self.elitism)
            .max_generations(self.max_generations)
            .stagnation_limit(self.stagnation)
            .build()
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options();
    let mut rng = match cli.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let mut observer = Throttled::new(BoardObserver::new(io::stdout()), cli.render_every);
    let result = solve_observed(&options, &mut rng, &mut observer)?;

    println!("Final result:");
    println!("  n = {}", options.get_board_size());
    println!("  Generations run = {}", result.generations);
    println!("  Optimal solution found = {}", result.solved);
    println!("  Chromosome (col -> row) = {}", result.chromosome);
    println!();
    print!("{}", Board::new(&result.chromosome));

    if result.solved {
        println!(
            "Solution found in {} generations (fitness={})",
            result.generations, result.fitness
        );
    } else {
        println!(
            "No optimum after {} generations (fitness={})",
            result.generations, result.fitness
        );
    }

    Ok(())
}

/// Log level used when `RUST_LOG` is not set. Progress lines are `info`.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = default_filter(cli.verbose);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
