use std::io::BufRead;
use std::path::Path;

use crate::input::InputError;
use crate::model::stats::{DriverSeasonStats, SeasonStats};
use crate::model::weights::ScoreWeightsOverride;

/// Accepts either `{"season": .., "drivers": [..]}` or a bare array of drivers.
/// The shape is picked from the first non-whitespace byte so decode errors keep
/// their field and position.
pub fn parse_season(mut reader: impl BufRead, path: &Path) -> Result<SeasonStats, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim_start().starts_with('[') {
        let drivers: Vec<DriverSeasonStats> =
            serde_json::from_str(&text).map_err(|e| json_err(path, e))?;
        Ok(SeasonStats {
            season: None,
            drivers,
        })
    } else {
        serde_json::from_str(&text).map_err(|e| json_err(path, e))
    }
}

pub fn parse_weights(
    reader: impl BufRead,
    path: &Path,
) -> Result<ScoreWeightsOverride, InputError> {
    serde_json::from_reader(reader).map_err(|e| json_err(path, e))
}

fn json_err(path: &Path, source: serde_json::Error) -> InputError {
    InputError::Json {
        path: path.display().to_string(),
        source,
    }
}
