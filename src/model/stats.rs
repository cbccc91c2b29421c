use serde::{Deserialize, Serialize};

/// Aggregate statistics for one driver over one season, as delivered upstream.
///
/// Counts are signed so a negative value coming from upstream survives parsing
/// and can be rejected by validation instead of being lost in a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSeasonStats {
    #[serde(alias = "driver_id", alias = "driver")]
    pub driver_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "team")]
    pub constructor: Option<String>,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub podiums: i64,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub poles: i64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "car_strength_index",
        alias = "csi"
    )]
    pub car_strength_index: Option<f64>,
}

impl DriverSeasonStats {
    pub fn new(driver_id: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            constructor: None,
            wins: 0,
            podiums: 0,
            points: 0.0,
            poles: 0,
            car_strength_index: None,
        }
    }

    pub fn with_results(mut self, wins: i64, podiums: i64, points: f64) -> Self {
        self.wins = wins;
        self.podiums = podiums;
        self.points = points;
        self
    }

    pub fn with_poles(mut self, poles: i64) -> Self {
        self.poles = poles;
        self
    }

    pub fn with_csi(mut self, csi: f64) -> Self {
        self.car_strength_index = Some(csi);
        self
    }

    pub fn with_constructor(mut self, constructor: impl Into<String>) -> Self {
        self.constructor = Some(constructor.into());
        self
    }
}

/// One scoring run's worth of drivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u16>,
    pub drivers: Vec<DriverSeasonStats>,
}
