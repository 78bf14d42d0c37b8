//! `rodcut` — find the most profitable way to cut a rod.
//!
//! Commands:
//! - `solve` — solve a problem given on the command line
//! - `file`  — solve a problem read from a `.json` or `.toml` file
//! - `demo`  — run the textbook cases through both strategies

use std::{io, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};

use rodcut_core::{Observer, PriceTable, RodLength};
use rodcut_observers::TraceObserver;
use rodcut_solvers::rod_cutting::{
    self, Action, Config, CoveragePolicy, Event, Strategy,
};

mod problem;
mod report;

use problem::Problem;
use report::{Outcome, Report};

#[derive(Parser)]
#[command(
    name = "rodcut",
    about = "Find the most profitable way to cut a rod into priced segments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem given on the command line
    Solve {
        /// Length of the rod
        #[arg(short, long, allow_negative_numbers = true)]
        length: i64,

        /// Comma-separated prices; the i-th price is for a segment of length i
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        prices: Vec<f64>,

        #[command(flatten)]
        options: SolveOptions,
    },

    /// Solve a problem read from a JSON or TOML file
    File {
        /// Path to a `.json` or `.toml` file with `length`, `prices`, and
        /// optionally `coverage`
        path: PathBuf,

        #[command(flatten)]
        options: SolveOptions,
    },

    /// Run the textbook cases through both strategies
    Demo {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct SolveOptions {
    /// Which solver to run
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// How to treat segment lengths without a price (overrides the file)
    #[arg(long, value_enum)]
    coverage: Option<CoverageArg>,

    /// Longest rod the top-down solver accepts
    #[arg(long, default_value_t = Config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    BottomUp,
    TopDown,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            Self::BottomUp => &[Strategy::BottomUp],
            Self::TopDown => &[Strategy::TopDown],
            Self::Both => &Strategy::ALL,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CoverageArg {
    Reject,
    Unpriced,
}

impl From<CoverageArg> for CoveragePolicy {
    fn from(arg: CoverageArg) -> Self {
        match arg {
            CoverageArg::Reject => Self::Reject,
            CoverageArg::Unpriced => Self::Unpriced,
        }
    }
}

/// The cases the reference harness printed, by name.
const DEMO_CASES: [(&str, i64, &[f64]); 3] = [
    ("Basic case", 5, &[2.0, 5.0, 7.0, 8.0, 10.0]),
    ("Optimal not to cut", 3, &[1.0, 3.0, 8.0]),
    ("Uniform cuts", 4, &[3.0, 5.0, 6.0, 7.0]),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            length,
            prices,
            options,
        } => {
            let problem = Problem {
                length,
                prices,
                coverage: None,
            };
            run(None, problem, &options)
        }
        Commands::File { path, options } => {
            let problem = Problem::load(&path)?;
            tracing::debug!(path = %path.display(), "loaded problem");
            run(None, problem, &options)
        }
        Commands::Demo { json } => {
            let options = SolveOptions {
                strategy: StrategyArg::Both,
                coverage: None,
                max_depth: Config::DEFAULT_MAX_DEPTH,
                json,
            };
            for (index, (name, length, prices)) in DEMO_CASES.into_iter().enumerate() {
                if index > 0 && !json {
                    println!();
                }
                let problem = Problem {
                    length,
                    prices: prices.to_vec(),
                    coverage: None,
                };
                run(Some(name), problem, &options)?;
            }
            Ok(())
        }
    }
}

/// Validates a problem, solves it with each requested strategy, and prints
/// the report.
fn run(name: Option<&str>, problem: Problem, options: &SolveOptions) -> Result<()> {
    let length = RodLength::try_from(problem.length).context("invalid rod length")?;
    let prices = PriceTable::new(problem.prices).context("invalid price table")?;
    let coverage = resolve_coverage(options.coverage, problem.coverage);
    let config = Config::new(coverage, options.max_depth).context("invalid solver config")?;

    let mut outcomes = Vec::new();
    for &strategy in options.strategy.strategies() {
        let mut trace = TraceObserver::new(strategy.name());
        let observer = |event: &Event<'_>| -> Option<Action> { trace.observe(event) };

        let plan = rod_cutting::solve(strategy, length, &prices, &config, observer)
            .with_context(|| format!("{strategy} solve failed"))?;
        trace.summarize();

        outcomes.push(Outcome { strategy, plan });
    }

    let report = Report {
        name,
        length: length.get(),
        prices: prices.as_slice(),
        outcomes,
    };

    let mut out = io::stdout().lock();
    if options.json {
        report.write_json(&mut out)?;
    } else {
        report.write_text(&mut out)?;
    }

    if !report.strategies_agree() {
        bail!("strategies returned different plans for length {length}");
    }
    Ok(())
}

/// Picks the coverage policy: the flag wins over the file, then the default.
fn resolve_coverage(flag: Option<CoverageArg>, file: Option<CoveragePolicy>) -> CoveragePolicy {
    flag.map(CoveragePolicy::from)
        .or(file)
        .unwrap_or_default()
}
