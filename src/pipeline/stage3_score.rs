use crate::model::scores::{CompositeScore, ScoreBreakdown, ScoreError};
use crate::model::stats::DriverSeasonStats;
use crate::model::weights::ScoreWeights;
use crate::pipeline::stage1_validate::{ValidStats, validate};
use crate::pipeline::stage2_compress::compress_metrics;

pub fn score(
    stats: &DriverSeasonStats,
    weights: &ScoreWeights,
) -> Result<CompositeScore, ScoreError> {
    score_breakdown(stats, weights).map(|b| b.adjusted)
}

pub fn score_breakdown(
    stats: &DriverSeasonStats,
    weights: &ScoreWeights,
) -> Result<ScoreBreakdown, ScoreError> {
    weights.validate()?;
    let valid = validate(stats)?;
    score_valid(stats, &valid, weights)
}

/// Scores every record, failing on the first malformed one.
pub fn score_all(
    drivers: &[DriverSeasonStats],
    weights: &ScoreWeights,
) -> Result<Vec<ScoreBreakdown>, ScoreError> {
    weights.validate()?;
    drivers
        .iter()
        .map(|d| validate(d).and_then(|v| score_valid(d, &v, weights)))
        .collect()
}

/// Fails when an extreme but individually valid weight or car strength index
/// pushes the score out of the finite range.
pub(crate) fn score_valid(
    record: &DriverSeasonStats,
    stats: &ValidStats,
    weights: &ScoreWeights,
) -> Result<ScoreBreakdown, ScoreError> {
    let m = compress_metrics(stats.wins, stats.podiums, stats.points);

    let wins_term = weights.wins_weight * m.wins;
    let podiums_term = weights.podiums_weight * m.podiums;
    let points_term = weights.points_weight * m.points;
    let raw = wins_term + podiums_term + points_term;

    // Stronger car (csi > 1) raises the score, weaker car lowers it.
    let csi_factor = stats.csi.powf(weights.csi_alpha);
    let adjusted = raw * csi_factor;

    if !raw.is_finite() {
        return Err(overflow(record, "weighted score overflows"));
    }
    if !csi_factor.is_finite() || !adjusted.is_finite() {
        return Err(overflow(record, "car adjustment overflows"));
    }

    Ok(ScoreBreakdown {
        wins_term,
        podiums_term,
        points_term,
        raw,
        csi_factor,
        adjusted,
    })
}

fn overflow(record: &DriverSeasonStats, reason: &str) -> ScoreError {
    ScoreError::InvalidInput {
        driver_id: record.driver_id.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_score.rs"]
mod tests;
