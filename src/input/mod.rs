use std::path::Path;

use thiserror::Error;
use tracing::info;

pub mod json;
pub mod reader;
pub mod tsv;

use crate::model::stats::SeasonStats;
use crate::model::weights::ScoreWeightsOverride;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    Json,
    Tsv,
}

/// Picks the format from the file name, looking through a trailing `.gz`.
pub fn detect_format(path: &Path) -> Result<StatsFormat, InputError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".json") {
        Ok(StatsFormat::Json)
    } else if name.ends_with(".tsv") || name.ends_with(".txt") {
        Ok(StatsFormat::Tsv)
    } else {
        Err(InputError::Parse(format!(
            "cannot infer stats format from {} (use .json or .tsv, optionally .gz)",
            path.display()
        )))
    }
}

pub fn load_season(path: &Path) -> Result<SeasonStats, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    let reader = reader::open_maybe_gz(path)?;
    let season = match format {
        StatsFormat::Json => json::parse_season(reader, path)?,
        StatsFormat::Tsv => tsv::parse_season(reader)?,
    };
    info!(
        path = %path.display(),
        drivers = season.drivers.len(),
        season = ?season.season,
        "loaded driver statistics"
    );
    Ok(season)
}

pub fn load_weights(path: &Path) -> Result<ScoreWeightsOverride, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = reader::open_maybe_gz(path)?;
    json::parse_weights(reader, path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
