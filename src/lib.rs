//! Brineviz - Explore laboratory water-chemistry spreadsheets
//!
//! Brineviz loads a spreadsheet of analyte concentrations sampled at
//! multiple sites over time, reshapes it into a normalized long-form
//! table, and renders scatter, time-series, ratio and pairwise-comparison
//! charts driven by dropdown selections in an embedded browser UI.
//!
//! # Input layout
//!
//! The input is either a flat `.csv` or a multi-sheet `.xls`/`.xlsx`
//! workbook (first four sheets; one sheet = one site). There is no header
//! row in the usual sense: row 0 carries the sampling-date labels and
//! column 0 carries the parameter keys, written `Name - Fraction (Unit)`
//! and carried verbatim. Readings below the Limit of Reporting (`<5`,
//! `< 5.2`) and blank cells normalize to 0.
//!
//! # Quick Start
//!
//! ```no_run
//! use brineviz::dataset::{Dataset, SheetRecords};
//! use brineviz::sheet::normalize;
//! use brineviz::views::{self, Selection};
//!
//! let sheets = brineviz::workbook::load("readings.xlsx".as_ref())?;
//! let dataset = Dataset::build(
//!     sheets
//!         .iter()
//!         .map(|(name, raw)| SheetRecords {
//!             name: name.clone(),
//!             records: normalize(raw, name),
//!         })
//!         .collect(),
//! );
//!
//! let selection = Selection::defaults(&dataset);
//! for point in views::scatter(&dataset, &selection)? {
//!     println!("{} @ {}: ({}, {})", point.site, point.sampling_date, point.x, point.y);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Failure policies
//!
//! Only file loading can fail hard. Downstream, the two silent-recovery
//! policies are deliberately different and deliberately separate:
//! unparseable *values* coerce to 0.0 and never drop a row; unparseable
//! *date labels* drop their column entirely. Under-filled chart selections
//! are soft-stops with a message, never errors.
//!
//! # Modules
//!
//! - [`sheet`]: wide-to-long normalization, the core of the tool
//! - [`dataset`]: the unified table and its derived vocabularies
//! - [`views`]: the four chart-ready view builders
//! - [`workbook`]: csv/xls/xlsx reading and shape validation
//! - [`serve`]: the interactive web UI

pub mod dataset;
pub mod error;
pub mod serve;
pub mod sheet;
pub mod views;
pub mod workbook;

pub use dataset::{Dataset, DatasetSummary, SheetRecords};
pub use error::{Error, Result};
pub use sheet::{normalize, RawSheet, Record};
pub use views::{Selection, ViewError};
