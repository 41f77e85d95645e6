use std::error::Error;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use itertools::Itertools;

use ratlp::algorithm::simplex::{DEFAULT_MAX_ITERATIONS, SimplexConfig};
use ratlp::algorithm::simplex::strategy::pivot_rule::PivotRule;
use ratlp::io::import;

/// An exact linear program solver written in rust.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Number of pivots after which the solver gives up
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
    /// Rule to select the entering and leaving variables
    #[arg(long, value_enum, default_value_t = PivotRuleArg::MostNegative)]
    pivot_rule: PivotRuleArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PivotRuleArg {
    /// Most negative relative cost
    MostNegative,
    /// Lowest index, never cycles
    Bland,
}

impl From<PivotRuleArg> for PivotRule {
    fn from(argument: PivotRuleArg) -> Self {
        match argument {
            PivotRuleArg::MostNegative => PivotRule::MostNegative,
            PivotRuleArg::Bland => PivotRule::Bland,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let opts: Opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.to_string_lossy());
    let problem = import(&opts.problem_file).unwrap_or_else(|error| fail(&error));
    println!("Variables: {}", problem.variable_order().iter().join(", "));

    let config = SimplexConfig {
        max_iterations: opts.max_iterations,
        pivot_rule: opts.pivot_rule.into(),
    };
    println!("Solving...");
    let solution = problem.solve(&config).unwrap_or_else(|error| fail(&error));

    println!("{}", solution.message());
    if let (Some(value), Some(values)) = (solution.optimal_value(), solution.variable_values()) {
        println!("Objective value: {}", value);
        for (name, value) in problem.named_values(values) {
            println!("{} = {}", name, value);
        }
    }
    println!("Iterations: {}", solution.iterations());
}

/// Report an error and stop.
///
/// The description of a parse error includes its causes and the line at which it occurred.
fn fail(error: &dyn Error) -> ! {
    eprintln!("Error: {}", error);
    exit(1);
}
