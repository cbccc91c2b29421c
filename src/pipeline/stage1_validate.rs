use crate::model::scores::ScoreError;
use crate::model::stats::DriverSeasonStats;

pub const DEFAULT_CSI: f64 = 1.0;

/// A record that passed validation. Counts are non-negative by construction and
/// the car strength index has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidStats {
    pub wins: u32,
    pub podiums: u32,
    pub points: f64,
    pub poles: u32,
    pub csi: f64,
}

pub fn validate(stats: &DriverSeasonStats) -> Result<ValidStats, ScoreError> {
    if stats.driver_id.trim().is_empty() {
        return Err(invalid(stats, "driver id is empty".to_string()));
    }
    let wins = count(stats, "wins", stats.wins)?;
    let podiums = count(stats, "podiums", stats.podiums)?;
    let poles = count(stats, "poles", stats.poles)?;

    let points = stats.points;
    if !points.is_finite() {
        return Err(invalid(stats, format!("points must be finite, got {points}")));
    }
    if points < 0.0 {
        return Err(invalid(stats, format!("points must be >= 0, got {points}")));
    }

    let csi = match stats.car_strength_index {
        None => DEFAULT_CSI,
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            return Err(invalid(
                stats,
                format!("car strength index must be a finite value > 0, got {v}"),
            ));
        }
    };

    Ok(ValidStats {
        wins,
        podiums,
        points,
        poles,
        csi,
    })
}

fn count(stats: &DriverSeasonStats, field: &str, value: i64) -> Result<u32, ScoreError> {
    if value < 0 {
        return Err(invalid(stats, format!("{field} must be >= 0, got {value}")));
    }
    u32::try_from(value).map_err(|_| invalid(stats, format!("{field} out of range: {value}")))
}

fn invalid(stats: &DriverSeasonStats, reason: String) -> ScoreError {
    ScoreError::InvalidInput {
        driver_id: stats.driver_id.clone(),
        reason,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
