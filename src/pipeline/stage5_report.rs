use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::scores::{RankedDriver, Rejection};
use crate::model::weights::ScoreWeights;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    FeaturedDriver, ScoreStats, SummaryData, ToolMeta, format_f64_6, max, median, p90,
};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub season: Option<u16>,
    pub weights: ScoreWeights,
    pub n_drivers_input: usize,
    pub ranked: &'a [RankedDriver],
    pub rejected: &'a [Rejection],
    pub top: Option<usize>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let leaderboard_path = out_dir.join("leaderboard.tsv");
    write_leaderboard_tsv(input.ranked, &leaderboard_path)?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary).map_err(std::io::Error::other)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary, input.ranked, input.top);
    write_text(&out_dir.join("report.txt"), &report)?;

    info!(out = %out_dir.display(), ranked = input.ranked.len(), "wrote reports");
    Ok(())
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let scores = input.ranked.iter().map(|d| d.score()).collect::<Vec<_>>();
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        season: input.season,
        weights: input.weights,
        n_drivers_input: input.n_drivers_input,
        n_ranked: input.ranked.len(),
        n_rejected: input.rejected.len(),
        featured: crate::pipeline::stage4_rank::featured(input.ranked).map(|d| FeaturedDriver {
            driver_id: d.driver_id.clone(),
            constructor: d.constructor.clone(),
            score: d.score(),
        }),
        score_stats: ScoreStats {
            median: median(&scores),
            p90: p90(&scores),
            max: max(&scores),
        },
        rejected: input.rejected.to_vec(),
    }
}

fn write_leaderboard_tsv(ranked: &[RankedDriver], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "rank",
        "driver_id",
        "constructor",
        "wins",
        "podiums",
        "points",
        "poles",
        "csi",
        "wins_term",
        "podiums_term",
        "points_term",
        "raw_score",
        "csi_factor",
        "score",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for d in ranked {
        let b = &d.breakdown;
        let row = [
            d.rank.to_string(),
            d.driver_id.clone(),
            d.constructor.clone().unwrap_or_default(),
            d.wins.to_string(),
            d.podiums.to_string(),
            d.points.to_string(),
            d.poles.to_string(),
            d.csi.to_string(),
            format_f64_6(b.wins_term),
            format_f64_6(b.podiums_term),
            format_f64_6(b.points_term),
            format_f64_6(b.raw),
            format_f64_6(b.csi_factor),
            format_f64_6(b.adjusted),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
