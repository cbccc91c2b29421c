use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("invalid input for driver {driver_id}: {reason}")]
    InvalidInput { driver_id: String, reason: String },
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

/// One driver's score, comparable only within a single scoring run.
pub type CompositeScore = f64;

/// Every intermediate of one driver's composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub wins_term: f64,
    pub podiums_term: f64,
    pub points_term: f64,
    pub raw: f64,
    pub csi_factor: f64,
    pub adjusted: f64,
}

impl ScoreBreakdown {
    pub fn composite(&self) -> CompositeScore {
        self.adjusted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDriver {
    pub rank: usize,
    pub driver_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,
    pub wins: u32,
    pub podiums: u32,
    pub points: f64,
    pub poles: u32,
    pub csi: f64,
    pub breakdown: ScoreBreakdown,
}

impl RankedDriver {
    pub fn score(&self) -> CompositeScore {
        self.breakdown.adjusted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub driver_id: String,
    pub input_index: usize,
    pub reason: String,
}
