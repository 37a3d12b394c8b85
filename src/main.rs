//! Sliding-Tile Puzzle Solver
//!
//! Solves N-puzzle instances with best-first search or A* under a choice of
//! three heuristics. Puzzles come from the command line, stdin, or a random
//! generator; every solved puzzle is appended to a result record file and
//! the `report` subcommand compiles those records into a summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::{generator, report, Algorithm, Board, Heuristic, SolverConfig};

/// Solves sliding-tile puzzles and records the solutions.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory for result records.
    #[arg(long, default_value = report::REPORTS_DIR, global = true)]
    reports: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle given as cell tokens, or read from stdin.
    Solve {
        #[command(flatten)]
        options: SearchOptions,
        /// Puzzle cells in row-major order, `b` for the blank.
        cells: Vec<String>,
    },
    /// Generate a random solvable puzzle and solve it.
    Random {
        #[command(flatten)]
        options: SearchOptions,
        /// Number of cells (must be a square number).
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// Seed for reproducible puzzles.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate and solve a batch of random puzzles, recording each result.
    Batch {
        #[command(flatten)]
        options: SearchOptions,
        /// Number of cells (must be a square number).
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// Number of puzzles to generate.
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        /// Seed for reproducible batches.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compile the record files into a summary report.
    Report,
}

#[derive(Args, Clone, Copy)]
struct SearchOptions {
    /// Heuristic evaluator.
    #[arg(short = 'H', long, value_enum, default_value = "misplaced")]
    heuristic: HeuristicArg,

    /// Search algorithm.
    #[arg(short, long, value_enum, default_value = "best-first")]
    algorithm: AlgorithmArg,
}

impl SearchOptions {
    fn config(self) -> SolverConfig {
        SolverConfig {
            heuristic: self.heuristic.into(),
            algorithm: self.algorithm.into(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic: HeuristicArg::Misplaced,
            algorithm: AlgorithmArg::BestFirst,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Misplaced,
    Manhattan,
    Pnld,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Misplaced => Heuristic::MisplacedTiles,
            HeuristicArg::Manhattan => Heuristic::ManhattanDistance,
            HeuristicArg::Pnld => Heuristic::Pnld,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    BestFirst,
    AStar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::BestFirst => Algorithm::BestFirst,
            AlgorithmArg::AStar => Algorithm::AStar,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Some(Command::Solve { options, cells }) => run_solve(&cli.reports, options, cells),
        Some(Command::Random {
            options,
            size,
            seed,
        }) => run_random(&cli.reports, options, size, seed),
        Some(Command::Batch {
            options,
            size,
            count,
            seed,
        }) => run_batch(&cli.reports, options, size, count, seed),
        Some(Command::Report) => run_report(&cli.reports),
        None => run_solve(&cli.reports, SearchOptions::default(), Vec::new()),
    }
}

/// Maps repeated `-v` flags onto the log filter; `RUST_LOG` still wins.
fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}

/// Solves one puzzle from the command line or stdin.
fn run_solve(reports: &Path, options: SearchOptions, cells: Vec<String>) -> anyhow::Result<()> {
    let input = if cells.is_empty() {
        prompt_puzzle()?
    } else {
        cells.join(" ")
    };
    let start = Board::parse(&input).context("invalid puzzle")?;
    if !start.is_solvable() {
        bail!("the puzzle {start} is not solvable");
    }
    solve_and_print(reports, options.config(), &start)
}

fn prompt_puzzle() -> anyhow::Result<String> {
    print!("Enter the puzzle: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read puzzle from stdin")?;
    Ok(line)
}

fn run_random(
    reports: &Path,
    options: SearchOptions,
    size: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    let start = generator::random_board(size, &mut rng).context("invalid puzzle size")?;
    println!("Random puzzle: {start}");
    solve_and_print(reports, options.config(), &start)
}

fn run_batch(
    reports: &Path,
    options: SearchOptions,
    size: usize,
    count: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let mut rng = rng_from(seed);
    let config = options.config();
    let goal = Board::solved(size).context("invalid puzzle size")?;

    let mut solved = 0usize;
    for index in 1..=count {
        let start = generator::random_board(size, &mut rng)?;
        match config.solve(&start, &goal) {
            Some(path) => {
                solved += 1;
                report::record(reports, config.algorithm, config.heuristic, &path)?;
                info!("case {index}/{count}: {} solved in {} moves", start, path.len() - 1);
            }
            None => log::warn!("case {index}/{count}: no solution found for {start}"),
        }
    }

    println!(
        "Solved {solved}/{count} puzzles ({}, {})",
        config.algorithm.label(),
        config.heuristic.label()
    );
    Ok(())
}

fn run_report(reports: &Path) -> anyhow::Result<()> {
    let summary = report::compile(reports).context("failed to compile reports")?;
    println!("Wrote {}", summary.display());
    Ok(())
}

/// Runs the configured search, prints the solution, and records it.
fn solve_and_print(reports: &Path, config: SolverConfig, start: &Board) -> anyhow::Result<()> {
    let goal = Board::solved(start.len())?;
    info!("start state: {start}");
    info!(
        "algorithm: {}, heuristic: {}",
        config.algorithm.label(),
        config.heuristic.label()
    );

    match config.solve(start, &goal) {
        Some(path) => {
            println!("Solved in {} moves", path.len() - 1);
            for state in &path {
                println!("{state}");
            }
            let file = report::record(reports, config.algorithm, config.heuristic, &path)?;
            info!("recorded result in {}", file.display());
        }
        None => println!("No solution found"),
    }
    Ok(())
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
