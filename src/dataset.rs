//! Unified table: every normalized sheet concatenated into one dataset
//!
//! The aggregator is deliberately dumb: it concatenates per-sheet record
//! runs in sheet order (then within-sheet order) and derives the distinct
//! parameter/site vocabularies that populate the selection menus. It is
//! rebuilt from scratch on every load, never incrementally mutated.

use crate::sheet::Record;
use serde::Serialize;

/// One sheet's normalized output, kept separately because the pairwise view
/// needs per-sheet parameter sets.
#[derive(Debug, Clone)]
pub struct SheetRecords {
    pub name: String,
    pub records: Vec<Record>,
}

/// The unified long-form table for one session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    sheets: Vec<SheetRecords>,
    records: Vec<Record>,
}

impl Dataset {
    /// Concatenate normalized sheets, preserving sheet order then row order.
    pub fn build(sheets: Vec<SheetRecords>) -> Self {
        let records = sheets.iter().flat_map(|s| s.records.clone()).collect();
        Self { sheets, records }
    }

    /// Every record across every sheet, in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetRecords> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Distinct parameter keys in first-encounter order.
    ///
    /// Consumers treat this as an unordered set; the server sorts a copy
    /// before it reaches a menu.
    pub fn parameters(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.parameter.as_str()))
    }

    /// Distinct site labels in first-encounter order.
    pub fn sites(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.site.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let span = self
            .records
            .iter()
            .map(|r| r.sampling_date)
            .fold(None::<(chrono::NaiveDate, chrono::NaiveDate)>, |acc, d| {
                Some(match acc {
                    None => (d, d),
                    Some((lo, hi)) => (lo.min(d), hi.max(d)),
                })
            });
        DatasetSummary {
            total_records: self.records.len(),
            sheets: self
                .sheets
                .iter()
                .map(|s| SheetSummary { name: s.name.clone(), records: s.records.len() })
                .collect(),
            parameter_count: self.parameters().len(),
            site_count: self.sites().len(),
            first_date: span.map(|(lo, _)| lo),
            last_date: span.map(|(_, hi)| hi),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

/// Load-time overview shown by the CLI and the UI header.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub sheets: Vec<SheetSummary>,
    pub parameter_count: usize,
    pub site_count: usize,
    pub first_date: Option<chrono::NaiveDate>,
    pub last_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub records: usize,
}
