//! Spreadsheet loading: csv and xls/xlsx files into raw cell grids
//!
//! The reader never interprets the data. It hands every sheet to the
//! normalizer as an untyped grid with row 0 intact - the first row is
//! always consumed as date labels downstream, never treated as column
//! names here. The only intelligence in this module is shape validation:
//! a data row wider than the header row fails fast with a descriptive
//! error instead of silently misaligning columns.
//!
//! A `.csv` is one implied sheet named `Sheet1`; a workbook contributes at
//! most its first four sheets, in workbook order, with the sheet name
//! doubling as the site label (one sheet = one site).

use crate::error::{Error, Result};
use crate::sheet::RawSheet;
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Only the first 4 sheets of a multi-sheet workbook are considered.
pub const MAX_WORKBOOK_SHEETS: usize = 4;

/// Implied sheet name for a flat CSV source.
pub const CSV_SHEET_NAME: &str = "Sheet1";

/// Load a spreadsheet into `(sheet name, grid)` pairs, in sheet order.
pub fn load(path: &Path) -> Result<Vec<(String, RawSheet)>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let sheet = read_csv(file).map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            validate_shape(CSV_SHEET_NAME, &sheet)?;
            Ok(vec![(CSV_SHEET_NAME.to_string(), sheet)])
        }
        "xls" | "xlsx" | "xlsm" | "xlsb" => read_workbook(path),
        _ => Err(Error::UnsupportedFormat {
            extension,
            path: path.to_path_buf(),
        }),
    }
}

/// Read a header-less CSV stream into a raw grid.
fn read_csv<R: Read>(reader: R) -> std::result::Result<RawSheet, csv::Error> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(RawSheet::new(rows))
}

fn read_workbook(path: &Path) -> Result<Vec<(String, RawSheet)>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| Error::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let names: Vec<String> = workbook
        .sheet_names()
        .into_iter()
        .take(MAX_WORKBOOK_SHEETS)
        .collect();

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|source| Error::Workbook {
                path: path.to_path_buf(),
                source,
            })?;
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(render_cell).collect())
            .collect();
        let sheet = RawSheet::new(rows);
        validate_shape(&name, &sheet)?;
        sheets.push((name, sheet));
    }
    Ok(sheets)
}

/// Render one workbook cell to text, the form the normalizer coerces from.
///
/// Date cells render as ISO so the header row parses; error cells render
/// empty so the value policy turns them into 0.0 like any other blank.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.time() == chrono::NaiveTime::MIN => {
                ndt.date().format("%Y-%m-%d").to_string()
            }
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => String::new(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Fail fast if any data row is wider than the header row.
fn validate_shape(name: &str, sheet: &RawSheet) -> Result<()> {
    let Some((header, body)) = sheet.rows.split_first() else {
        return Ok(()); // empty sheet normalizes to zero records, not an error
    };
    for (i, row) in body.iter().enumerate() {
        if row.len() > header.len() {
            return Err(Error::MisshapenSheet {
                sheet: name.to_string(),
                row: i + 2, // 1-based, counting the header row
                width: row.len(),
                header_width: header.len(),
            });
        }
    }
    Ok(())
}
