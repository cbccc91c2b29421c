use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::model::scores::{RankedDriver, Rejection, ScoreBreakdown, ScoreError};
use crate::model::stats::DriverSeasonStats;
use crate::model::weights::ScoreWeights;
use crate::pipeline::stage1_validate::{ValidStats, validate};
use crate::pipeline::stage3_score::score_valid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOutcome {
    pub ranked: Vec<RankedDriver>,
    pub rejected: Vec<Rejection>,
}

struct Candidate<'a> {
    input_index: usize,
    stats: &'a DriverSeasonStats,
    valid: ValidStats,
    breakdown: ScoreBreakdown,
}

/// Ranks all drivers, descending by composite score. Any malformed record
/// aborts the whole ranking.
pub fn rank(
    drivers: &[DriverSeasonStats],
    weights: &ScoreWeights,
) -> Result<Vec<RankedDriver>, ScoreError> {
    weights.validate()?;
    let mut candidates = Vec::with_capacity(drivers.len());
    for (idx, stats) in drivers.iter().enumerate() {
        candidates.push(evaluate(idx, stats, weights)?);
    }
    Ok(order(candidates))
}

/// Ranks the well-formed drivers and reports the malformed ones instead of
/// failing. Invalid weights still fail, since no record could be scored.
pub fn rank_lenient(
    drivers: &[DriverSeasonStats],
    weights: &ScoreWeights,
) -> Result<RankOutcome, ScoreError> {
    weights.validate()?;
    let mut candidates = Vec::with_capacity(drivers.len());
    let mut rejected = Vec::new();
    for (idx, stats) in drivers.iter().enumerate() {
        match evaluate(idx, stats, weights) {
            Ok(candidate) => candidates.push(candidate),
            Err(err) => {
                warn!(driver = %stats.driver_id, index = idx, "excluding driver: {err}");
                rejected.push(Rejection {
                    driver_id: stats.driver_id.clone(),
                    input_index: idx,
                    reason: reason_of(&err),
                });
            }
        }
    }
    Ok(RankOutcome {
        ranked: order(candidates),
        rejected,
    })
}

fn evaluate<'a>(
    input_index: usize,
    stats: &'a DriverSeasonStats,
    weights: &ScoreWeights,
) -> Result<Candidate<'a>, ScoreError> {
    let valid = validate(stats)?;
    let breakdown = score_valid(stats, &valid, weights)?;
    Ok(Candidate {
        input_index,
        stats,
        valid,
        breakdown,
    })
}

pub fn featured(ranked: &[RankedDriver]) -> Option<&RankedDriver> {
    ranked.first()
}

fn order(mut candidates: Vec<Candidate<'_>>) -> Vec<RankedDriver> {
    // Stable sort: equal keys keep input order.
    candidates.sort_by(compare);
    debug!(n = candidates.len(), "ranked drivers");
    candidates
        .into_iter()
        .enumerate()
        .map(|(pos, c)| RankedDriver {
            rank: pos + 1,
            driver_id: c.stats.driver_id.clone(),
            constructor: c.stats.constructor.clone(),
            wins: c.valid.wins,
            podiums: c.valid.podiums,
            points: c.valid.points,
            poles: c.valid.poles,
            csi: c.valid.csi,
            breakdown: c.breakdown,
        })
        .collect()
}

fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.breakdown
        .adjusted
        .total_cmp(&a.breakdown.adjusted)
        .then_with(|| b.valid.wins.cmp(&a.valid.wins))
        .then_with(|| b.valid.points.total_cmp(&a.valid.points))
        .then_with(|| a.input_index.cmp(&b.input_index))
}

fn reason_of(err: &ScoreError) -> String {
    match err {
        ScoreError::InvalidInput { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
