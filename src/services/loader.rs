//! Data Loader
//!
//! Reads the day's CSV export into typed [`Record`]s. Columns are matched by header
//! name, values are coerced to numbers, and the `Time` column is parsed into a
//! timestamp. Nothing else is transformed.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use snafu::ResultExt;
use tracing::{info, warn};

use crate::constants::DAY_SAMPLES;
use crate::domain::record::{Record, parse_time};
use crate::error::{CsvSnafu, Error, Result};

const TIME_COLUMN: &str = "Time";

/// Load and validate the dataset at `path`
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let records = parse_records(file)?;

    info!(path = ?path, count = records.len(), "Loaded dataset");
    if records.len() != DAY_SAMPLES {
        warn!(
            count = records.len(),
            expected = DAY_SAMPLES,
            "Dataset does not cover exactly one day of minute samples"
        );
    }

    Ok(records)
}

/// Parse CSV text from any reader.
///
/// Rows whose cells are all empty are skipped. Every record must be strictly later
/// than the one before it.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv.headers().context(CsvSnafu { line: 1u64 })?.clone();
    let time_index = headers
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or_else(|| Error::Invalid {
            message: format!("missing {TIME_COLUMN:?} column"),
        })?;

    let mut records: Vec<Record> = Vec::new();

    for result in csv.records() {
        let raw = result.map_err(|source| {
            let line = source.position().map_or(0, |p| p.line());
            Error::Csv { line, source }
        })?;

        if is_blank(&raw) {
            continue;
        }

        let line = raw.position().map_or(0, |p| p.line());
        let time = raw.get(time_index).unwrap_or_default();
        if parse_time(time).is_none() {
            return Err(Error::InvalidTime {
                line,
                value: time.to_string(),
            });
        }

        let record: Record = raw.deserialize(Some(&headers)).context(CsvSnafu { line })?;

        if records.last().is_some_and(|prev| record.time <= prev.time) {
            return Err(Error::OutOfOrder { line });
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    Ok(records)
}

fn is_blank(raw: &StringRecord) -> bool {
    raw.iter().all(str::is_empty)
}
