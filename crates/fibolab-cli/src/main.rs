//! FibLab CLI - Fibonacci strategy comparison.
//!
//! Checks every strategy from `fibolab-core` against the oracle vector,
//! then times them at a fixed index and across a range of indices, printing
//! each report sorted fastest first.

mod logging;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use fibolab_core::config::{self, limits, Param};
use fibolab_core::{
    FibError, Harness, ProfileArgs, ProfileConfig, Progress, Prompter, Report, Strategy,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use tracing::warn;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments structure.
#[derive(Parser)]
#[command(name = "fibolab", version, about = "Fibonacci strategy comparison: correctness and timing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Index for fixed-index profiling (prompted for when absent or not a number).
    #[arg(long, value_name = "N", allow_hyphen_values = true, global = true)]
    index: Option<String>,

    /// Repetitions for fixed-index profiling.
    #[arg(long, value_name = "N", allow_hyphen_values = true, global = true)]
    reps: Option<String>,

    /// First index (inclusive) for range profiling.
    #[arg(long, value_name = "N", allow_hyphen_values = true, global = true)]
    range_start: Option<String>,

    /// End index (exclusive) for range profiling.
    #[arg(long, value_name = "N", allow_hyphen_values = true, global = true)]
    range_end: Option<String>,

    /// Repetitions for range profiling.
    #[arg(long, value_name = "N", allow_hyphen_values = true, global = true)]
    range_reps: Option<String>,

    /// Restrict the run to these strategies (repeatable). Default: all.
    #[arg(short, long = "strategy", value_name = "NAME", value_parser = parse_strategy, global = true)]
    strategies: Vec<Strategy>,

    /// Never prompt; missing parameters take their defaults.
    #[arg(long, global = true)]
    no_prompt: bool,

    /// Increase log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available subcommands.
#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Check correctness, then profile at a fixed index and over a range (default).
    All,
    /// Check every strategy against the oracle vector.
    Test,
    /// Profile every strategy at a fixed index.
    Profile,
    /// Profile every strategy across a range of indices.
    Range,
    /// List the strategies and their exact index bounds.
    List,
}

impl Commands {
    /// Parameters this command needs resolved.
    fn params(self) -> &'static [Param] {
        match self {
            Commands::All => &Param::ALL,
            Commands::Profile => &Param::PROFILE,
            Commands::Range => &Param::RANGE,
            Commands::Test | Commands::List => &[],
        }
    }
}

fn parse_strategy(name: &str) -> Result<Strategy, FibError> {
    Strategy::from_name(name)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::All);
    let strategies = selected_strategies(&cli.strategies);

    if command == Commands::List {
        print_strategy_list(&strategies);
        return Ok(());
    }

    let config = resolve_config(&cli, command)?;
    config.validate(command.params())?;

    println!("--- Execution Configuration ---");
    println!("FibLab v{}", VERSION);
    println!("Strategies: {}", strategies.len());
    println!();

    if matches!(command, Commands::All | Commands::Test) {
        let report = run_stage(&strategies, |h| h.verify())?;
        print_report(&report);
    }

    if matches!(command, Commands::All | Commands::Profile) {
        warn_inexact(&strategies, config.index);
        warn_slow(&strategies, config.index);
        let report = run_stage(&strategies, |h| Ok(h.profile(config.index, config.reps)))?;
        print_report(&report);
    }

    if matches!(command, Commands::All | Commands::Range) {
        if let Some(last) = config.range_end.checked_sub(1) {
            if config.range_start <= last {
                warn_inexact(&strategies, last);
                warn_slow(&strategies, last);
            }
        }
        let report = run_stage(&strategies, |h| {
            Ok(h.profile_range(config.range_start, config.range_end, config.range_reps))
        })?;
        print_report(&report);
    }

    Ok(())
}

/// Strategies named on the command line in the order given, without
/// duplicates; every strategy when none was named.
fn selected_strategies(requested: &[Strategy]) -> Vec<Strategy> {
    if requested.is_empty() {
        return Strategy::ALL.to_vec();
    }

    let mut selected = Vec::with_capacity(requested.len());
    for &s in requested {
        if !selected.contains(&s) {
            selected.push(s);
        }
    }
    selected
}

/// Resolves profiling parameters from flags, prompting on stdin for the
/// missing ones unless `--no-prompt` is set.
fn resolve_config(cli: &Cli, command: Commands) -> anyhow::Result<ProfileConfig> {
    let args = ProfileArgs {
        index: config::parse_flag(Param::Index, cli.index.as_deref()),
        reps: config::parse_flag(Param::Reps, cli.reps.as_deref()),
        range_start: config::parse_flag(Param::RangeStart, cli.range_start.as_deref()),
        range_end: config::parse_flag(Param::RangeEnd, cli.range_end.as_deref()),
        range_reps: config::parse_flag(Param::RangeReps, cli.range_reps.as_deref()),
    };

    let needed = command.params();
    if cli.no_prompt || needed.iter().all(|&p| args.get(p).is_some()) {
        return Ok(args.resolve_defaults());
    }

    println!();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let config = args
        .resolve(needed, &mut prompter)
        .context("failed to read profiling parameters")?;
    println!();

    Ok(config)
}

/// Logs a warning for each strategy that is not exact at `index`.
fn warn_inexact(strategies: &[Strategy], index: u64) {
    for s in strategies {
        if index > s.max_exact_index() {
            warn!(
                strategy = s.name(),
                index,
                max = s.max_exact_index(),
                "profiling past the exact bound; values are approximate"
            );
        }
    }
}

/// Logs a warning when naive recursion is selected at an index where it
/// would run for minutes or longer.
fn warn_slow(strategies: &[Strategy], index: u64) {
    if index <= limits::NAIVE_RECURSION_PRACTICAL_INDEX {
        return;
    }
    for s in strategies.iter().filter(|s| s.is_exponential()) {
        warn!(
            strategy = s.name(),
            index,
            practical = limits::NAIVE_RECURSION_PRACTICAL_INDEX,
            "naive recursion is exponential; this index may not finish"
        );
    }
}

/// Runs one harness stage with a progress bar on stderr.
///
/// The bar shows which strategy is running and is cleared once the stage
/// ends, whether it succeeded or not.
fn run_stage(
    strategies: &[Strategy],
    stage: impl FnOnce(&Harness<'_, Strategy>) -> Result<Report, FibError>,
) -> anyhow::Result<Report> {
    let pb = ProgressBar::new(strategies.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:<28} [{bar:30.green/dim}] {pos}/{len}")?
            .progress_chars("█▓░"),
    );

    let reporter_pb = pb.clone();
    let harness = Harness::new(strategies).with_reporter(Box::new(move |p: &Progress<'_>| {
        reporter_pb.set_position(p.position as u64);
        reporter_pb.set_message(p.to_string());
    }));

    let result = stage(&harness);
    pb.finish_and_clear();

    Ok(result?)
}

fn print_report(report: &Report) {
    print!("{}", report);
    println!();
}

fn print_strategy_list(strategies: &[Strategy]) {
    const HEADER: &str = "Strategy";
    let pad = fibolab_core::report::pad_len(
        strategies.iter().map(|s| s.name()).chain(std::iter::once(HEADER)),
    );

    println!("{:<pad$} Max exact index", HEADER, pad = pad);
    for s in strategies {
        println!("{:<pad$} {}", s.name(), s.max_exact_index(), pad = pad);
    }
}
