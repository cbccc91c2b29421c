/// `ln(1 + value)`. Zero maps to zero and growth is sub-linear, so a season
/// with 1000 points sits roughly 1.5x above one with 100 rather than 10x.
pub fn log_compress(value: f64) -> f64 {
    value.ln_1p()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressedMetrics {
    pub wins: f64,
    pub podiums: f64,
    pub points: f64,
}

pub fn compress_metrics(wins: u32, podiums: u32, points: f64) -> CompressedMetrics {
    CompressedMetrics {
        wins: log_compress(f64::from(wins)),
        podiums: log_compress(f64::from(podiums)),
        points: log_compress(points),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_compress.rs"]
mod tests;
