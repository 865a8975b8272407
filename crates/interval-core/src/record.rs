// File: crates/interval-core/src/record.rs
// Summary: Interval record model and the validated, ordered series the renderer consumes.
// Notes:
// - Records are immutable once built; the series never reorders them.
// - Field aliases accept the legacy Spanish column names of older exports.
// - Rows without any bounds get the range derived from the required level.

use serde::Deserialize;

use crate::error::{ChartError, Result};

/// One time bucket: required staffing (bar), assigned staffing (marker)
/// and the acceptable range (dashed bracket).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RecordRow")]
pub struct IntervalRecord {
    pub label: String,
    pub required: f64,
    pub assigned: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Serialized shape of a record. Bounds may be absent, `null` or an empty
/// CSV cell; all three read as `None`.
#[derive(Deserialize)]
struct RecordRow {
    #[serde(alias = "intervalo")]
    label: String,
    #[serde(alias = "requeridos")]
    required: f64,
    #[serde(alias = "asignados")]
    assigned: f64,
    #[serde(alias = "limite_inferior", default)]
    lower_bound: Option<f64>,
    #[serde(alias = "limite_superior", default)]
    upper_bound: Option<f64>,
}

impl TryFrom<RecordRow> for IntervalRecord {
    type Error = String;

    fn try_from(row: RecordRow) -> std::result::Result<Self, Self::Error> {
        let (lower_bound, upper_bound) = match (row.lower_bound, row.upper_bound) {
            (None, None) => default_bounds(row.required),
            // A missing upper bound counts as zero.
            (Some(lo), None) => (lo, 0.0),
            (Some(lo), Some(hi)) => (lo, hi),
            (None, Some(_)) => {
                return Err(format!("record '{}': upper_bound given without lower_bound", row.label))
            }
        };
        Ok(Self { label: row.label, required: row.required, assigned: row.assigned, lower_bound, upper_bound })
    }
}

/// Acceptable range derived from the required level when none is supplied:
/// below 10 it is `required ± 1`, below 20 `required ± 2`, otherwise
/// `floor(0.9·required) ..= ceil(1.1·required)`. The lower end never goes below 0.
pub fn default_bounds(required: f64) -> (f64, f64) {
    if required < 10.0 {
        ((required - 1.0).max(0.0), required + 1.0)
    } else if required < 20.0 {
        ((required - 2.0).max(0.0), required + 2.0)
    } else {
        // exact tenths: 20 gives 18..=22
        ((required * 9.0 / 10.0).floor(), (required * 11.0 / 10.0).ceil())
    }
}

impl IntervalRecord {
    /// Construct a record enforcing: every value finite and non-negative,
    /// and `lower_bound <= upper_bound`.
    ///
    /// Errors carry no index; [`IntervalSeries`] tags them with the
    /// record's position.
    pub fn try_new(
        label: impl Into<String>,
        required: f64,
        assigned: f64,
        lower_bound: f64,
        upper_bound: f64,
    ) -> Result<Self> {
        let rec = Self { label: label.into(), required, assigned, lower_bound, upper_bound };
        rec.validate()?;
        Ok(rec)
    }

    /// Like [`try_new`](Self::try_new) with the range taken from [`default_bounds`].
    pub fn with_default_bounds(label: impl Into<String>, required: f64, assigned: f64) -> Result<Self> {
        let (lo, hi) = default_bounds(required);
        Self::try_new(label, required, assigned, lo, hi)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("required", self.required),
            ("assigned", self.assigned),
            ("lower_bound", self.lower_bound),
            ("upper_bound", self.upper_bound),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ChartError::NonFinite { index: None, field, value });
            }
            if value < 0.0 {
                return Err(ChartError::Negative { index: None, field, value });
            }
        }
        if self.lower_bound > self.upper_bound {
            return Err(ChartError::InvertedBounds { index: None, lower: self.lower_bound, upper: self.upper_bound });
        }
        Ok(())
    }
}

/// Ordered, validated sequence of records. Insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSeries {
    records: Vec<IntervalRecord>,
}

impl IntervalSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate every record, reporting the first offending index.
    pub fn try_from_records(records: Vec<IntervalRecord>) -> Result<Self> {
        for (i, r) in records.iter().enumerate() {
            r.validate().map_err(|e| e.at_index(i))?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[IntervalRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntervalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest upper bound, or 0 for an empty series.
    pub fn max_upper_bound(&self) -> f64 {
        self.records.iter().map(|r| r.upper_bound).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a IntervalSeries {
    type Item = &'a IntervalRecord;
    type IntoIter = std::slice::Iter<'a, IntervalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
