use clap::Parser;
use comparable::{
    samples::SampleConfig,
    scenarios::{RunConfig, run_all},
    values::Tolerance,
};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Verifies the equality, ordering and hashing contract of the sample value types
#[derive(Parser, Debug)]
#[command(name = "comparable")]
#[command(about = "Checks equivalence, strict weak ordering and hash consistency laws", long_about = None)]
struct Args {
    /// Closeness threshold used by the tolerance scenario
    #[arg(long, default_value_t = 1e-6)]
    epsilon: f64,

    /// Number of values in the tolerance chain, spaced epsilon/2 apart
    #[arg(long, default_value_t = 20)]
    chain_len: usize,

    /// Number of random samples per value type
    #[arg(short, long, default_value_t = 64)]
    samples: usize,

    /// Seed for the random samples
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Print the full report as JSON instead of the status line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let tolerance = match Tolerance::new(args.epsilon) {
        Ok(tolerance) => tolerance,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let config = RunConfig {
        tolerance,
        chain_len: args.chain_len,
        samples: SampleConfig {
            count: args.samples,
            seed: args.seed,
            ..SampleConfig::default()
        },
    };

    let report = match run_all(&config) {
        Ok(report) => report,
        Err(err) => {
            error!("{err}");
            eprintln!("FAILED: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("could not serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("All OK! done");
    }
    ExitCode::SUCCESS
}
