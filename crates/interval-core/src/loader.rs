// File: crates/interval-core/src/loader.rs
// Summary: Load interval records from JSON or CSV into a validated series.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::record::{IntervalRecord, IntervalSeries};

/// Load records from `path`, picking the format from its extension
/// (`.json` or `.csv`, case-insensitive).
pub fn load_records(path: impl AsRef<Path>) -> Result<IntervalSeries> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let series = match ext.as_str() {
        "json" => parse_json(std::fs::File::open(path)?)?,
        "csv" => parse_csv(std::fs::File::open(path)?)?,
        _ => return Err(ChartError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), records = series.len(), "loaded interval records");
    Ok(series)
}

/// Parse a JSON array of record objects.
pub fn parse_json<R: Read>(reader: R) -> Result<IntervalSeries> {
    let records: Vec<IntervalRecord> = serde_json::from_reader(reader)?;
    IntervalSeries::try_from_records(records)
}

/// Parse CSV with a header row naming the record fields.
pub fn parse_csv<R: Read>(reader: R) -> Result<IntervalSeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr
        .deserialize::<IntervalRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    IntervalSeries::try_from_records(records)
}
