use serde::{Deserialize, Serialize};

use crate::model::scores::ScoreError;

/// Tuning knobs for the composite score. Resolved once per run and passed by
/// value into every scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub wins_weight: f64,
    pub podiums_weight: f64,
    pub points_weight: f64,
    /// Exponent on the car strength index. 0 disables the car adjustment.
    pub csi_alpha: f64,
}

/// Partial weights as read from a config file or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreWeightsOverride {
    #[serde(default, alias = "wins_weight")]
    pub wins_weight: Option<f64>,
    #[serde(default, alias = "podiums_weight")]
    pub podiums_weight: Option<f64>,
    #[serde(default, alias = "points_weight")]
    pub points_weight: Option<f64>,
    #[serde(default, alias = "csi_alpha")]
    pub csi_alpha: Option<f64>,
}

impl ScoreWeights {
    pub fn default_v1() -> Self {
        Self {
            wins_weight: 3.0,
            podiums_weight: 2.0,
            points_weight: 1.0,
            csi_alpha: 0.2,
        }
    }

    pub fn with_overrides(mut self, over: &ScoreWeightsOverride) -> Self {
        if let Some(v) = over.wins_weight {
            self.wins_weight = v;
        }
        if let Some(v) = over.podiums_weight {
            self.podiums_weight = v;
        }
        if let Some(v) = over.points_weight {
            self.points_weight = v;
        }
        if let Some(v) = over.csi_alpha {
            self.csi_alpha = v;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        for (name, value) in [
            ("winsWeight", self.wins_weight),
            ("podiumsWeight", self.podiums_weight),
            ("pointsWeight", self.points_weight),
            ("csiAlpha", self.csi_alpha),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::InvalidWeights(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoreWeightsOverride {
    /// Field-wise merge; values in `other` win.
    pub fn merged_with(self, other: &ScoreWeightsOverride) -> Self {
        Self {
            wins_weight: other.wins_weight.or(self.wins_weight),
            podiums_weight: other.podiums_weight.or(self.podiums_weight),
            points_weight: other.points_weight.or(self.points_weight),
            csi_alpha: other.csi_alpha.or(self.csi_alpha),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
