use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use gridrank::input::{load_season, load_weights};
use gridrank::pipeline::stage4_rank::{RankOutcome, rank, rank_lenient};
use gridrank::pipeline::stage5_report::{Stage5Input, write_reports};
use gridrank::{ScoreWeights, ScoreWeightsOverride};

#[derive(Debug, Parser)]
#[command(name = "gridrank", version, about = "Rank drivers by composite season score")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank one season of driver statistics.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Driver statistics (.json or .tsv, optionally .gz).
    #[arg(long)]
    input: PathBuf,
    /// Output directory for leaderboard.tsv, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,
    /// JSON file with weight overrides.
    #[arg(long)]
    weights: Option<PathBuf>,
    #[arg(long)]
    wins_weight: Option<f64>,
    #[arg(long)]
    podiums_weight: Option<f64>,
    #[arg(long)]
    points_weight: Option<f64>,
    /// Strength of the car adjustment; 0 disables it.
    #[arg(long)]
    csi_alpha: Option<f64>,
    /// Exclude malformed records instead of failing the run.
    #[arg(long)]
    skip_invalid: bool,
    /// Limit the text report to the first N drivers.
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> ExitCode {
    gridrank::logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(args: &RunArgs) -> Result<(), String> {
    let weights = resolve_weights(args)?;
    let season = load_season(&args.input).map_err(|e| e.to_string())?;

    let outcome = if args.skip_invalid {
        rank_lenient(&season.drivers, &weights).map_err(|e| e.to_string())?
    } else {
        RankOutcome {
            ranked: rank(&season.drivers, &weights).map_err(|e| e.to_string())?,
            rejected: Vec::new(),
        }
    };

    if let Some(top) = outcome.ranked.first() {
        info!(driver = %top.driver_id, score = top.score(), "featured driver");
    }

    let input = Stage5Input {
        season: season.season,
        weights,
        n_drivers_input: season.drivers.len(),
        ranked: &outcome.ranked,
        rejected: &outcome.rejected,
        top: args.top,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())
}

fn resolve_weights(args: &RunArgs) -> Result<ScoreWeights, String> {
    let from_file = match &args.weights {
        Some(path) => load_weights(path).map_err(|e| e.to_string())?,
        None => ScoreWeightsOverride::default(),
    };
    let from_flags = ScoreWeightsOverride {
        wins_weight: args.wins_weight,
        podiums_weight: args.podiums_weight,
        points_weight: args.points_weight,
        csi_alpha: args.csi_alpha,
    };
    let weights = ScoreWeights::default_v1().with_overrides(&from_file.merged_with(&from_flags));
    weights.validate().map_err(|e| e.to_string())?;
    info!(
        wins = weights.wins_weight,
        podiums = weights.podiums_weight,
        points = weights.points_weight,
        csi_alpha = weights.csi_alpha,
        "resolved score weights"
    );
    Ok(weights)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
