use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use numbers_game::solver::constants::MAX_NUMBERS;
use numbers_game::{NumbersSolver, Solution, SolverConfig, parse_numbers, parse_target};

const NOT_FOUND_MESSAGE: &str = "Solution has not been found.";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Numbers game - combine every number exactly once to reach a target
#[derive(Parser, Debug)]
#[command(name = "numbers-game")]
#[command(
    about = "Find an expression using each number exactly once with + - * / that equals the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine. Leave out to be prompted interactively
    pub numbers: Vec<u64>,

    /// Target value; repeat to solve several targets in parallel
    #[arg(short = 't', long = "target")]
    pub targets: Vec<u64>,

    /// Largest accepted count of numbers
    #[arg(long, default_value_t = MAX_NUMBERS)]
    pub max_numbers: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Line printed for one solved target
pub fn format_solution(solution: &Solution, target: u64) -> String {
    match solution {
        Solution::Found(expr) => format!("{}={}", expr, target),
        Solution::NotFound => NOT_FOUND_MESSAGE.to_string(),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(line))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{}", text)?;
    output.flush().context("Failed to flush output")
}

/// Prompt for numbers and a target, solve, and repeat while the user answers `y`.
///
/// Input errors are reported and the round starts over. End of input stops the loop.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &NumbersSolver,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        prompt(&mut output, "Enter integer numbers to use (space-separated): ")?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let numbers = match parse_numbers(&line) {
            Ok(numbers) => numbers,
            Err(err) => {
                warn!("Rejected numbers line: {}", err);
                writeln!(output, "Error: {}", err)?;
                continue;
            }
        };

        prompt(&mut output, "Enter integer value to calculate: ")?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let target = match parse_target(&line) {
            Ok(target) => target,
            Err(err) => {
                warn!("Rejected target line: {}", err);
                writeln!(output, "Error: {}", err)?;
                continue;
            }
        };

        match solver.solve(&numbers, target) {
            Ok(solution) => writeln!(output, "{}", format_solution(&solution, target))?,
            Err(err) => writeln!(output, "Error: {}", err)?,
        }

        prompt(&mut output, "More? (y/n) ")?;
        let Some(answer) = read_line(&mut input)? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let solver = NumbersSolver::with_config(SolverConfig::with_max_numbers(args.max_numbers));

    if args.numbers.is_empty() {
        if !args.targets.is_empty() {
            bail!("Targets were given without any numbers");
        }
        info!("No numbers on the command line, starting interactive mode");
        return run_interactive(&solver, io::stdin().lock(), io::stdout().lock());
    }

    if args.targets.is_empty() {
        bail!("At least one --target is required");
    }

    info!("Combining {:?} to reach {:?}", args.numbers, args.targets);

    let solutions = solver
        .solve_all(&args.numbers, &args.targets)
        .context("Cannot search these numbers")?;

    let mut out = io::stdout().lock();
    for (target, solution) in args.targets.iter().zip(&solutions) {
        if !solution.is_found() {
            warn!("No matching expression found for {}", target);
        }
        writeln!(out, "{}", format_solution(solution, *target))?;
    }
    Ok(())
}
