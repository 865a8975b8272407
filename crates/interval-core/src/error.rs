// File: crates/interval-core/src/error.rs
// Summary: Error type shared by record validation, loading, config and rendering.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{}{field} is not a finite number ({value})", at(.index))]
    NonFinite { index: Option<usize>, field: &'static str, value: f64 },

    #[error("{}{field} must be non-negative, got {value}", at(.index))]
    Negative { index: Option<usize>, field: &'static str, value: f64 },

    #[error("{}lower bound {lower} is above upper bound {upper}", at(.index))]
    InvertedBounds { index: Option<usize>, lower: f64, upper: f64 },

    #[error("surface {width}x{height} leaves no plot area with offset {offset}")]
    InvalidSurface { width: i32, height: i32, offset: i32 },

    #[error("unsupported record file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("render backend error: {0}")]
    Backend(String),
}

/// "record N: " prefix when the record's position is known.
fn at(index: &Option<usize>) -> String {
    index.map(|i| format!("record {i}: ")).unwrap_or_default()
}

impl ChartError {
    /// Re-tag a record error with its position in a sequence.
    pub(crate) fn at_index(self, pos: usize) -> Self {
        let index = Some(pos);
        match self {
            ChartError::NonFinite { field, value, .. } => ChartError::NonFinite { index, field, value },
            ChartError::Negative { field, value, .. } => ChartError::Negative { index, field, value },
            ChartError::InvertedBounds { lower, upper, .. } => ChartError::InvertedBounds { index, lower, upper },
            other => other,
        }
    }
}
