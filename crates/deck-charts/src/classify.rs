//! Series layout detection

use deck_core::{Record, SeriesValue};

use crate::series::MAX_SERIES;

/// How values are laid out per timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesLayout {
    /// One scalar per record
    Single,
    /// A fixed-width vector per record
    Multi,
    /// No record decided the layout
    Unknown,
}

impl SeriesLayout {
    /// Number of paths drawn for this layout
    pub fn series_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Multi => MAX_SERIES,
            Self::Unknown => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Unknown => "unknown",
        }
    }
}

/// Classify by the first record whose value is decisively scalar or vector.
///
/// Later rows never override the first decision; opaque rows are skipped.
pub fn classify(records: &[Record]) -> SeriesLayout {
    records
        .iter()
        .find_map(|record| match record.value {
            SeriesValue::Vector(_) => Some(SeriesLayout::Multi),
            SeriesValue::Scalar(_) => Some(SeriesLayout::Single),
            SeriesValue::Opaque => None,
        })
        .unwrap_or(SeriesLayout::Unknown)
}
