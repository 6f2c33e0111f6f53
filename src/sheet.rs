//! Sheet normalization: wide lab spreadsheets to long-form records
//!
//! Lab spreadsheets arrive in a wide, human-authored layout:
//!
//! ```text
//!                     | 2021-01-05 | 2021-02-03 | 2021-03-02 |
//! Ca - T (mg/L)       | 410        | 395        | <5         |
//! Na - D (mg/L)       | 98000      |            | 101000     |
//! ```
//!
//! Row 0 holds the sampling-date labels, column 0 holds the parameter keys
//! (`Name - Fraction (Unit)`, carried verbatim - never decomposed), and the
//! body holds readings. [`normalize`] melts that into one [`Record`] per
//! parameter x date, stamped with the site the sheet belongs to.
//!
//! # Two failure policies, deliberately separate
//!
//! 1. **Values are never exclusionary.** A blank cell, a below-detection
//!    reading written as `<5`, or outright garbage all coerce to `0.0` via
//!    [`coerce_reading`]. No row is ever dropped for a bad value.
//! 2. **Dates are always exclusionary.** A column whose header fails
//!    [`parse_date_label`] is dropped entirely - a record with no valid
//!    sampling date is useless downstream.
//!
//! Keeping these as two named functions (rather than inline substitution)
//! is what stops the policies from accidentally merging.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// An untyped 2-D grid of cells, exactly as read from one sheet.
///
/// Rows may be ragged (trailing blanks trimmed by the file reader); the
/// normalizer treats a missing cell the same as an empty one.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// One long-form observation: a single parameter reading at one site on one
/// sampling date.
///
/// Invariants: `value` is always defined (coercion happens upstream, see
/// module docs) and `sampling_date` is always a real calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Opaque `Name - Fraction (Unit)` key, verbatim from column 0.
    pub parameter: String,
    pub sampling_date: NaiveDate,
    pub value: f64,
    /// `sampling_date` formatted `MM-YY`, used as a categorical axis label.
    pub date_label: String,
    /// Sampling location; one sheet = one site.
    pub site: String,
}

/// Coerce one reading cell to a number.
///
/// Below-LOR readings ("less-than sign, optional whitespace, non-negative
/// decimal") become `0.0` by convention; so does anything that fails to
/// parse as a float, including empty cells. This is the silent-coercion
/// policy: values never drop rows.
pub fn coerce_reading(cell: &str) -> f64 {
    let text = cell.trim();
    if is_below_lor(text) {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(0.0)
}

/// True if the cell uses the `<LOR` convention, e.g. `<5` or `< 5.2`.
fn is_below_lor(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('<') else {
        return false;
    };
    let number = rest.trim_start();
    !number.is_empty() && number.parse::<f64>().map_or(false, |v| v >= 0.0)
}

/// Formats accepted for date-label headers, tried in order.
///
/// The original data came from lab exports with ISO dates; the rest are
/// common hand-edited forms, day-first because the source data is. The
/// two-digit-year form goes before the four-digit one so `01/02/21`
/// resolves to 2021 rather than year 21.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%y", "%d/%m/%Y", "%d-%b-%Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a date-label header cell.
///
/// Returns `None` on failure; the caller drops the entire column. This is
/// the exclusionary policy - the opposite of [`coerce_reading`].
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let text = label.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.date());
        }
    }
    // `MM-YY` (a label that round-tripped through this tool) pins to the 1st.
    if let Ok(d) = NaiveDate::parse_from_str(&format!("01-{}", text), "%d-%m-%y") {
        return Some(d);
    }
    None
}

/// Format a sampling date as the `MM-YY` categorical label.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%m-%y").to_string()
}

/// Normalize one raw sheet into long-form records for the given site.
///
/// Row 0 is consumed as date-label headers; column 0 becomes each row's
/// parameter key. Output is date-major (every parameter under the first
/// date column, then the second, ...), preserving the sheet's row order
/// within each date.
///
/// A sheet with no data rows, or an empty header row, yields zero records -
/// that is not an error.
pub fn normalize(sheet: &RawSheet, site: &str) -> Vec<Record> {
    let Some((header, body)) = sheet.rows.split_first() else {
        return Vec::new();
    };

    // Parse every header up front; unparseable labels exclude the column.
    let dates: Vec<(usize, NaiveDate)> = header
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(col, label)| parse_date_label(label).map(|d| (col, d)))
        .collect();

    let mut records = Vec::with_capacity(dates.len() * body.len());
    for &(col, date) in &dates {
        let label = date_label(date);
        for row in body {
            let parameter = row.first().map(|s| s.trim()).unwrap_or("");
            if parameter.is_empty() {
                continue;
            }
            let value = row.get(col).map(|c| coerce_reading(c)).unwrap_or(0.0);
            records.push(Record {
                parameter: parameter.to_string(),
                sampling_date: date,
                value,
                date_label: label.clone(),
                site: site.to_string(),
            });
        }
    }
    records
}
