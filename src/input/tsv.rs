use std::io::BufRead;

use tracing::warn;

use crate::input::InputError;
use crate::model::stats::{DriverSeasonStats, SeasonStats};

#[derive(Debug, Default)]
struct Columns {
    driver_id: Option<usize>,
    constructor: Option<usize>,
    wins: Option<usize>,
    podiums: Option<usize>,
    points: Option<usize>,
    poles: Option<usize>,
    csi: Option<usize>,
}

fn map_header(header: &str) -> Result<Columns, InputError> {
    let mut cols = Columns::default();
    for (idx, name) in header.split('\t').enumerate() {
        let lower = name.trim().to_ascii_lowercase();
        let slot = match lower.as_str() {
            "driver_id" | "driverid" | "driver" => &mut cols.driver_id,
            "constructor" | "team" => &mut cols.constructor,
            "wins" => &mut cols.wins,
            "podiums" => &mut cols.podiums,
            "points" => &mut cols.points,
            "poles" => &mut cols.poles,
            "csi" | "car_strength_index" | "carstrengthindex" => &mut cols.csi,
            other => {
                warn!("ignoring unknown stats column: {}", other);
                continue;
            }
        };
        if slot.is_none() {
            *slot = Some(idx);
        }
    }
    if cols.driver_id.is_none() {
        return Err(InputError::Parse("stats header has no driver_id column".to_string()));
    }
    Ok(cols)
}

/// Reads a tab-separated stats table. A leading `# season: <year>` line sets the
/// season; otherwise the first non-empty line is the header.
pub fn parse_season(mut reader: impl BufRead) -> Result<SeasonStats, InputError> {
    let mut buf = String::new();
    let mut season = None;
    let mut columns: Option<Columns> = None;
    let mut drivers = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(value) = comment.trim().strip_prefix("season:") {
                season = Some(value.trim().parse::<u16>().map_err(|_| {
                    InputError::Parse(format!("invalid season on line {}: {}", line_no, value))
                })?);
            }
            continue;
        }
        if columns.is_none() {
            columns = Some(map_header(line)?);
            continue;
        }
        if let Some(cols) = &columns {
            drivers.push(parse_row(cols, line, line_no)?);
        }
    }

    if columns.is_none() {
        return Err(InputError::Parse("stats file is empty".to_string()));
    }

    Ok(SeasonStats { season, drivers })
}

fn parse_row(
    cols: &Columns,
    line: &str,
    line_no: usize,
) -> Result<DriverSeasonStats, InputError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let cell = |idx: Option<usize>| idx.and_then(|i| fields.get(i).copied()).unwrap_or("");

    let driver_id = cell(cols.driver_id);
    if driver_id.is_empty() {
        return Err(InputError::Parse(format!("empty driver_id on line {}", line_no)));
    }

    let constructor = match cell(cols.constructor) {
        "" => None,
        v => Some(v.to_string()),
    };
    let csi = match cell(cols.csi) {
        "" => None,
        v => Some(parse_num::<f64>(v, "csi", line_no)?),
    };

    Ok(DriverSeasonStats {
        driver_id: driver_id.to_string(),
        constructor,
        wins: parse_or_zero(cell(cols.wins), "wins", line_no)?,
        podiums: parse_or_zero(cell(cols.podiums), "podiums", line_no)?,
        points: parse_or_zero(cell(cols.points), "points", line_no)?,
        poles: parse_or_zero(cell(cols.poles), "poles", line_no)?,
        car_strength_index: csi,
    })
}

fn parse_or_zero<T: std::str::FromStr + Default>(
    value: &str,
    field: &str,
    line_no: usize,
) -> Result<T, InputError> {
    if value.is_empty() {
        return Ok(T::default());
    }
    parse_num(value, field, line_no)
}

fn parse_num<T: std::str::FromStr>(
    value: &str,
    field: &str,
    line_no: usize,
) -> Result<T, InputError> {
    value
        .parse::<T>()
        .map_err(|_| InputError::Parse(format!("invalid {} on line {}: {}", field, line_no, value)))
}
