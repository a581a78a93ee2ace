use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polyzero::config::Config;
use polyzero::math::base::NumberBase;
use polyzero::report::{self, ReportOptions};
use polyzero::selection::Disagreement;
use polyzero::{check_consistency, input, recover, term_frontend};

#[derive(Parser)]
#[command(version, about = "Recover the constant term of a polynomial from base-encoded samples")]
pub struct Args {
    /// JSON sample files, processed in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Config file to use instead of the one in the platform config dir
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Also print the constant term in this base
    #[arg(short, long)]
    base: Option<u32>,
    /// Decimal places shown for a non-integer exact value
    #[arg(short, long)]
    places: Option<u32>,
    /// Only print the result, no per-term breakdown
    #[arg(short, long)]
    quiet: bool,
    /// Check that the unused samples agree on the constant term
    #[arg(long)]
    check: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "polyzero=debug" } else { "polyzero=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(base) = args.base {
        config.output_base = base;
    }
    if let Some(places) = args.places {
        config.fractional_places = places;
    }
    if args.quiet {
        config.show_breakdown = false;
    }
    if args.check {
        config.check_consistency = true;
    }
    tracing::debug!("config: {:?}", config);

    if run_all(&args.inputs, &config) > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs every file in order, returns how many failed.
fn run_all(inputs: &[PathBuf], config: &Config) -> usize {
    let mut failures = 0;
    for path in inputs {
        if inputs.len() > 1 {
            let _ = term_frontend::print_header(&path.display().to_string());
        }
        if let Err(e) = run(path, config) {
            tracing::debug!("{:?} failed: {:?}", path, e);
            let _ = term_frontend::print_error(&format!("{}: {:#}", path.display(), e));
            failures += 1;
        }
    }
    failures
}

fn run(path: &Path, config: &Config) -> anyhow::Result<()> {
    let output_base = NumberBase::new(config.output_base, "")
        .with_context(|| format!("output base {}", config.output_base))?;
    let options = ReportOptions {
        fractional_places: config.fractional_places,
        output_base,
        show_breakdown: config.show_breakdown,
    };

    let input = input::load(path)?;
    let points = input.decode_points()?;
    let result = recover(&points, input.k)?;
    tracing::info!("{:?}: constant term {}", path, result.rounded);

    let disagreements = if config.check_consistency {
        Some(check_consistency(&points, input.k)?)
    } else {
        None
    };

    let text = report::render(&input, &points, &result, disagreements.as_deref(), &options);
    term_frontend::print_report(&text)?;

    ensure_consistent(disagreements.as_deref(), points.len() - input.k)
}

/// Fails when the consistency check ran and found disagreeing samples.
fn ensure_consistent(disagreements: Option<&[Disagreement]>, unused: usize) -> anyhow::Result<()> {
    if let Some(disagreements) = disagreements {
        if !disagreements.is_empty() {
            bail!(
                "{} of {} unused samples disagree with the selected ones",
                disagreements.len(),
                unused
            );
        }
    }
    Ok(())
}
