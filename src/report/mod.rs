use serde::Serialize;

use crate::model::scores::Rejection;
use crate::model::weights::ScoreWeights;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturedDriver {
    pub driver_id: String,
    pub constructor: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreStats {
    pub median: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub season: Option<u16>,
    pub weights: ScoreWeights,
    pub n_drivers_input: usize,
    pub n_ranked: usize,
    pub n_rejected: usize,
    pub featured: Option<FeaturedDriver>,
    pub score_stats: ScoreStats,
    pub rejected: Vec<Rejection>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
