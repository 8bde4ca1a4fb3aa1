//! Mastermind Solver - CLI
//!
//! Code-breaking assistant for 4-digit Mastermind with interactive and batch modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, random_secrets, replay_history,
        run_benchmark, run_simple, run_test_all, solve_code, spread_secrets, suggest,
    },
    core::{Code, FeedbackRule},
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result, print_suggest_result,
    },
    solver::{Solver, SolverConfig},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Code-breaking assistant for 4-digit Mastermind using entropy and minimax scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Feedback rule: duplicate-aware (default), membership, peg-counting
    #[arg(short, long, global = true, default_value = "duplicate-aware")]
    rule: FeedbackRule,

    /// Recursion depth for win-probability simulation
    #[arg(short, long, global = true, default_value = "3")]
    depth: usize,

    /// Moves allowed before a game is abandoned
    #[arg(short = 'm', long, global = true, default_value = "10")]
    max_moves: usize,

    /// Number of suggestions to show
    #[arg(short = 'n', long, global = true, default_value = "5")]
    suggestions: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggests guesses and reads feedback
    Simple,

    /// Rank next guesses after a recorded history
    Suggest {
        /// Turns as GUESS:FEEDBACK, e.g. 7890:PWWW or 1234:2/1
        turns: Vec<String>,
    },

    /// Solve a specific secret code
    Solve {
        /// The secret to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a guess against the candidates left by a history
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Turns as GUESS:FEEDBACK played before the guess
        #[arg(long = "after")]
        after: Vec<String>,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of secrets to test
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,

        /// Draw secrets at random instead of spreading them evenly
        #[arg(long)]
        random: bool,

        /// Override first guess (default: opening book)
        #[arg(short = 'f', long)]
        first_guess: Option<String>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Override first guess (default: opening book)
        #[arg(short = 'f', long)]
        first_guess: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig {
        rule: cli.rule,
        max_depth: cli.depth,
        max_moves: cli.max_moves,
        ..SolverConfig::default()
    };
    let solver = Solver::new(config);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver, cli.suggestions).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest { turns } => {
            let result = suggest(&solver, &turns, cli.suggestions).map_err(|e| anyhow::anyhow!(e))?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Solve { secret, verbose } => run_solve_command(&solver, secret, verbose),
        Commands::Analyze { guess, after } => run_analyze_command(&solver, &guess, &after),
        Commands::Benchmark {
            count,
            random,
            first_guess,
        } => run_benchmark_command(&solver, count, random, first_guess.as_deref()),
        Commands::TestAll { limit, first_guess } => {
            run_test_all_command(&solver, limit, first_guess.as_deref())
        }
    }
}

fn parse_first_guess(first_guess: Option<&str>) -> Result<Option<Code>> {
    first_guess
        .map(|text| {
            text.parse::<Code>()
                .map_err(|e| anyhow::anyhow!("Invalid first guess '{text}': {e}"))
        })
        .transpose()
}

fn run_solve_command(solver: &Solver, secret: String, verbose: bool) -> Result<()> {
    let mut config = SolveConfig::new(secret);
    config.max_guesses = solver.config().max_moves;
    let result = solve_code(config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(solver: &Solver, guess: &str, after: &[String]) -> Result<()> {
    let session = replay_history(solver, after).map_err(|e| anyhow::anyhow!(e))?;
    let result = analyze_code(guess, solver, &session).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver,
    count: usize,
    random: bool,
    first_guess: Option<&str>,
) -> Result<()> {
    let forced_first = parse_first_guess(first_guess)?;

    let kind = if random { "random" } else { "evenly spread" };
    if let Some(first) = forced_first {
        println!("Running benchmark on {count} {kind} codes with forced first guess: {first}...");
    } else {
        println!("Running benchmark on {count} {kind} codes...");
    }

    let secrets = if random {
        random_secrets(count)
    } else {
        spread_secrets(count)
    };

    let result = run_benchmark(solver, &secrets, forced_first);
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    solver: &Solver,
    limit: Option<usize>,
    first_guess: Option<&str>,
) -> Result<()> {
    let forced_first = parse_first_guess(first_guess)?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nFeedback rule: {}", solver.config().rule.name());
    if let Some(first) = forced_first {
        println!("Forced first guess: {first}");
    }
    println!();

    let stats = run_test_all(solver, limit, forced_first);
    print_test_all_statistics(&stats);
    Ok(())
}
