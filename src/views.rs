//! Chart-ready view builders: scatter, time-series, ratio, pairwise
//!
//! Every builder is a pure function of the [`Dataset`] and the current
//! [`Selection`]: filter the unified table by the selected parameters and
//! sites, reshape, return rows. Builders never read each other's output and
//! never mutate anything, so re-running one on a selection change is always
//! safe and always consistent.
//!
//! Under-filled dropdowns are a [`ViewError`] soft-stop - the server turns
//! them into an explanatory message where the chart would be. Nothing in
//! this module is fatal.

use crate::dataset::Dataset;
use crate::sheet::{date_label, Record};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;

/// Everything the dropdowns currently say, in one place.
///
/// The session owns a single instance and replaces the relevant fields
/// atomically per user action; builders only ever see it by shared
/// reference. (The original tool kept these in an ambient widget registry -
/// an explicit struct keeps selection state out of the rendering path.)
#[derive(Debug, Clone, Default, Serialize)]
pub struct Selection {
    pub scatter_x: Option<String>,
    pub scatter_y: Option<String>,
    pub scatter_sites: Vec<String>,
    pub time_series_parameters: Vec<String>,
    pub time_series_sites: Vec<String>,
    /// Ordered: numerator first, denominator second. Never re-sorted.
    pub ratio_parameters: Vec<String>,
    pub ratio_sites: Vec<String>,
    pub sheet_pair: Vec<String>,
    pub pairwise_parameters: Vec<String>,
}

impl Selection {
    /// Menu defaults after a load: all sites everywhere, first-N parameters
    /// per view, first two sheets, first three common parameters.
    pub fn defaults(dataset: &Dataset) -> Self {
        let parameters = dataset.parameters();
        let sites = dataset.sites();
        let sheets = dataset.sheet_names();

        let first_two: Vec<String> = parameters.iter().take(2).cloned().collect();
        let sheet_pair: Vec<String> = sheets.iter().take(2).cloned().collect();
        let pairwise_parameters = match sheet_pair.as_slice() {
            [a, b] => common_parameters(dataset, a, b)
                .map(|common| common.into_iter().take(3).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        Self {
            scatter_x: parameters.first().cloned(),
            scatter_y: parameters.get(1).cloned(),
            scatter_sites: sites.clone(),
            time_series_parameters: first_two.clone(),
            time_series_sites: sites.clone(),
            ratio_parameters: first_two,
            ratio_sites: sites,
            sheet_pair,
            pairwise_parameters,
        }
    }
}

/// Soft-stop conditions. The affected view is simply not rendered; an
/// explanatory message is shown in its place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("{view} needs {needed} parameter(s), got {got}")]
    Underselection { view: &'static str, needed: usize, got: usize },
    #[error("scatter plot needs two distinct parameters")]
    DuplicateParameters,
    #[error("select at least one parameter for the pairwise comparison")]
    EmptySelection,
    #[error("pairwise comparison needs exactly 2 sheets, got {0}")]
    SheetPairRequired(usize),
    #[error("unknown sheet '{0}'")]
    UnknownSheet(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub sampling_date: NaiveDate,
    pub site: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub sampling_date: NaiveDate,
    pub site: String,
    pub parameter: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioPoint {
    pub sampling_date: NaiveDate,
    pub date_label: String,
    pub site: String,
    pub numerator: f64,
    pub denominator: f64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseRow {
    pub sampling_date: NaiveDate,
    pub site: String,
    /// Parameter -> value, complete across the selected parameter set.
    pub values: BTreeMap<String, f64>,
}

/// Pivot a record subset so each requested parameter becomes a column,
/// keyed by `(sampling_date, site)`. Only keys where *every* requested
/// parameter has a reading survive (inner-join semantics).
///
/// Parameter keys are unique within a sheet and site == sheet, so a cell
/// cannot legitimately repeat; if it ever does, last write wins.
fn pivot<'a>(
    records: impl Iterator<Item = &'a Record>,
    parameters: &[String],
) -> BTreeMap<(NaiveDate, String), HashMap<String, f64>> {
    let mut table: BTreeMap<(NaiveDate, String), HashMap<String, f64>> = BTreeMap::new();
    for r in records {
        if parameters.iter().any(|p| p == &r.parameter) {
            table
                .entry((r.sampling_date, r.site.clone()))
                .or_default()
                .insert(r.parameter.clone(), r.value);
        }
    }
    table.retain(|_, cols| parameters.iter().all(|p| cols.contains_key(p)));
    table
}

fn filtered<'a>(
    dataset: &'a Dataset,
    parameters: &'a [String],
    sites: &'a [String],
) -> impl Iterator<Item = &'a Record> {
    dataset
        .records()
        .iter()
        .filter(move |r| parameters.contains(&r.parameter) && sites.contains(&r.site))
}

/// Scatter view: one point per `(date, site)` pair that has readings for
/// both selected parameters under a selected site.
pub fn scatter(dataset: &Dataset, selection: &Selection) -> Result<Vec<ScatterPoint>, ViewError> {
    let (x, y) = match (&selection.scatter_x, &selection.scatter_y) {
        (Some(x), Some(y)) => (x.clone(), y.clone()),
        (x, y) => {
            let got = x.is_some() as usize + y.is_some() as usize;
            return Err(ViewError::Underselection { view: "scatter plot", needed: 2, got });
        }
    };
    if x == y {
        return Err(ViewError::DuplicateParameters);
    }

    let params = [x.clone(), y.clone()];
    let table = pivot(filtered(dataset, &params, &selection.scatter_sites), &params);

    Ok(table
        .into_iter()
        .map(|((sampling_date, site), cols)| ScatterPoint {
            sampling_date,
            site,
            x: cols[&x],
            y: cols[&y],
        })
        .collect())
}

/// Time-series view: no pivot - one point per surviving filtered record,
/// in unified-table order. Site drives color, parameter drives the marker.
pub fn time_series(
    dataset: &Dataset,
    selection: &Selection,
) -> Result<Vec<TimeSeriesPoint>, ViewError> {
    if selection.time_series_parameters.is_empty() {
        return Err(ViewError::Underselection { view: "time series", needed: 1, got: 0 });
    }

    Ok(filtered(
        dataset,
        &selection.time_series_parameters,
        &selection.time_series_sites,
    )
    .map(|r| TimeSeriesPoint {
        sampling_date: r.sampling_date,
        site: r.site.clone(),
        parameter: r.parameter.clone(),
        value: r.value,
    })
    .collect())
}

/// Ratio view: numerator / denominator per surviving `(date, site)` pair.
///
/// Division by zero is deliberately not special-cased: a zero denominator
/// (often a below-LOR reading coerced to 0) yields `inf`, and 0/0 yields
/// `NaN`, and those rows are kept. The original behaved this way; whether
/// the chart should instead flag or drop such rows is an open product
/// question, so the behavior is preserved and documented rather than fixed.
pub fn ratio(dataset: &Dataset, selection: &Selection) -> Result<Vec<RatioPoint>, ViewError> {
    let [num, den] = match selection.ratio_parameters.as_slice() {
        [num, den] => [num.clone(), den.clone()],
        other => {
            return Err(ViewError::Underselection {
                view: "ratio plot",
                needed: 2,
                got: other.len(),
            })
        }
    };

    let params = [num.clone(), den.clone()];
    let table = pivot(filtered(dataset, &params, &selection.ratio_sites), &params);

    Ok(table
        .into_iter()
        .map(|((sampling_date, site), cols)| {
            let numerator = cols[&num];
            let denominator = cols[&den];
            RatioPoint {
                sampling_date,
                date_label: date_label(sampling_date),
                site,
                numerator,
                denominator,
                ratio: numerator / denominator,
            }
        })
        .collect())
}

/// Parameters present in *both* sheets, by exact string equality, sorted
/// ascending. This is the candidate set the pairwise dropdown offers.
pub fn common_parameters(
    dataset: &Dataset,
    sheet_a: &str,
    sheet_b: &str,
) -> Result<Vec<String>, ViewError> {
    let a = dataset
        .sheet(sheet_a)
        .ok_or_else(|| ViewError::UnknownSheet(sheet_a.to_string()))?;
    let b = dataset
        .sheet(sheet_b)
        .ok_or_else(|| ViewError::UnknownSheet(sheet_b.to_string()))?;

    let in_a: BTreeSet<&str> = a.records.iter().map(|r| r.parameter.as_str()).collect();
    let in_b: BTreeSet<&str> = b.records.iter().map(|r| r.parameter.as_str()).collect();
    // BTreeSet intersection iterates in ascending order already.
    Ok(in_a.intersection(&in_b).map(|p| p.to_string()).collect())
}

/// Pairwise-comparison view: pivot the union of two sheets' records over
/// the selected common parameters, keyed by `(date, site)`, dropping any
/// row incomplete across the selected set.
pub fn pairwise(dataset: &Dataset, selection: &Selection) -> Result<Vec<PairwiseRow>, ViewError> {
    let [sheet_a, sheet_b] = match selection.sheet_pair.as_slice() {
        [a, b] => [a.clone(), b.clone()],
        other => return Err(ViewError::SheetPairRequired(other.len())),
    };
    if selection.pairwise_parameters.is_empty() {
        return Err(ViewError::EmptySelection);
    }

    let a = dataset
        .sheet(&sheet_a)
        .ok_or_else(|| ViewError::UnknownSheet(sheet_a.clone()))?;
    let b = dataset
        .sheet(&sheet_b)
        .ok_or_else(|| ViewError::UnknownSheet(sheet_b.clone()))?;

    let merged = a.records.iter().chain(b.records.iter());
    let table = pivot(merged, &selection.pairwise_parameters);

    Ok(table
        .into_iter()
        .map(|((sampling_date, site), values)| PairwiseRow {
            sampling_date,
            site,
            values: values.into_iter().collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SheetRecords;
    use crate::sheet::{normalize, RawSheet};

    fn sheet_from(rows: &[&[&str]], site: &str) -> SheetRecords {
        let raw = RawSheet::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        );
        SheetRecords { name: site.to_string(), records: normalize(&raw, site) }
    }

    /// Two sites with Ca and Mg over two dates. Site B's February readings
    /// are degenerate: Ca is literally 0 and Mg is blank (coerces to 0).
    fn dataset() -> Dataset {
        let a = sheet_from(
            &[
                &["", "2021-01-05", "2021-02-03"],
                &["Ca - T (mg/L)", "10", "20"],
                &["Mg - T (mg/L)", "2", "4"],
            ],
            "Bore A",
        );
        let b = sheet_from(
            &[
                &["", "2021-01-05", "2021-02-03"],
                &["Ca - T (mg/L)", "5", "0"],
                &["Mg - T (mg/L)", "1", ""],
            ],
            "Bore B",
        );
        Dataset::build(vec![a, b])
    }

    fn both_params() -> Vec<String> {
        vec!["Ca - T (mg/L)".to_string(), "Mg - T (mg/L)".to_string()]
    }

    fn all_sites() -> Vec<String> {
        vec!["Bore A".to_string(), "Bore B".to_string()]
    }

    // ==========================================================================
    // SCATTER VIEW TESTS
    // ==========================================================================
    //
    // The scatter view is an inner join: a (date, site) pair appears only
    // when BOTH selected parameters have a reading there.
    // ==========================================================================

    #[test]
    fn test_scatter_inner_join() {
        let ds = dataset();
        let sel = Selection {
            scatter_x: Some("Ca - T (mg/L)".to_string()),
            scatter_y: Some("Mg - T (mg/L)".to_string()),
            scatter_sites: all_sites(),
            ..Default::default()
        };
        let points = scatter(&ds, &sel).unwrap();
        // All four (date, site) pairs have both readings here; note that a
        // blank Mg cell coerces to 0.0 at normalization, so it still counts
        // as a reading. Dropping happens when a parameter row is absent.
        assert_eq!(points.len(), 4);
        let jan_a = points
            .iter()
            .find(|p| p.site == "Bore A" && p.sampling_date.to_string() == "2021-01-05")
            .unwrap();
        assert_eq!((jan_a.x, jan_a.y), (10.0, 2.0));
    }

    #[test]
    fn test_scatter_drops_half_present_pairs() {
        // Site C carries only Ca: no (date, "Bore C") pair can survive a
        // Ca-vs-Mg join.
        let ds = Dataset::build(vec![
            sheet_from(
                &[
                    &["", "2021-01-05"],
                    &["Ca - T (mg/L)", "10"],
                    &["Mg - T (mg/L)", "2"],
                ],
                "Bore A",
            ),
            sheet_from(&[&["", "2021-01-05"], &["Ca - T (mg/L)", "7"]], "Bore C"),
        ]);
        let sel = Selection {
            scatter_x: Some("Ca - T (mg/L)".to_string()),
            scatter_y: Some("Mg - T (mg/L)".to_string()),
            scatter_sites: vec!["Bore A".to_string(), "Bore C".to_string()],
            ..Default::default()
        };
        let points = scatter(&ds, &sel).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].site, "Bore A");
    }

    #[test]
    fn test_scatter_site_filter() {
        let ds = dataset();
        let sel = Selection {
            scatter_x: Some("Ca - T (mg/L)".to_string()),
            scatter_y: Some("Mg - T (mg/L)".to_string()),
            scatter_sites: vec!["Bore B".to_string()],
            ..Default::default()
        };
        let points = scatter(&ds, &sel).unwrap();
        assert!(points.iter().all(|p| p.site == "Bore B"));
    }

    #[test]
    fn test_scatter_underselection() {
        let ds = dataset();
        let sel = Selection {
            scatter_x: Some("Ca - T (mg/L)".to_string()),
            scatter_sites: all_sites(),
            ..Default::default()
        };
        assert_eq!(
            scatter(&ds, &sel),
            Err(ViewError::Underselection { view: "scatter plot", needed: 2, got: 1 })
        );
    }

    #[test]
    fn test_scatter_rejects_same_parameter_twice() {
        let ds = dataset();
        let sel = Selection {
            scatter_x: Some("Ca - T (mg/L)".to_string()),
            scatter_y: Some("Ca - T (mg/L)".to_string()),
            scatter_sites: all_sites(),
            ..Default::default()
        };
        assert_eq!(scatter(&ds, &sel), Err(ViewError::DuplicateParameters));
    }

    // ==========================================================================
    // TIME SERIES VIEW TESTS
    // ==========================================================================

    #[test]
    fn test_time_series_no_pivot() {
        let ds = dataset();
        let sel = Selection {
            time_series_parameters: both_params(),
            time_series_sites: all_sites(),
            ..Default::default()
        };
        let points = time_series(&ds, &sel).unwrap();
        // Every filtered record becomes a point - no join, no drops.
        assert_eq!(points.len(), ds.records().len());
    }

    #[test]
    fn test_time_series_filters() {
        let ds = dataset();
        let sel = Selection {
            time_series_parameters: vec!["Mg - T (mg/L)".to_string()],
            time_series_sites: vec!["Bore A".to_string()],
            ..Default::default()
        };
        let points = time_series(&ds, &sel).unwrap();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.parameter == "Mg - T (mg/L)"));
        assert!(points.iter().all(|p| p.site == "Bore A"));
    }

    #[test]
    fn test_time_series_requires_a_parameter() {
        let ds = dataset();
        let sel = Selection { time_series_sites: all_sites(), ..Default::default() };
        assert_eq!(
            time_series(&ds, &sel),
            Err(ViewError::Underselection { view: "time series", needed: 1, got: 0 })
        );
    }

    // ==========================================================================
    // RATIO VIEW TESTS
    // ==========================================================================
    //
    // Selection order is significant (numerator first). Division by zero is
    // NOT filtered - inf/NaN rows are kept, matching the original tool.
    // ==========================================================================

    fn ratio_selection(num: &str, den: &str) -> Selection {
        Selection {
            ratio_parameters: vec![num.to_string(), den.to_string()],
            ratio_sites: all_sites(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ratio_values_and_labels() {
        let ds = dataset();
        let points = ratio(&ds, &ratio_selection("Ca - T (mg/L)", "Mg - T (mg/L)")).unwrap();
        assert_eq!(points.len(), 4);
        let jan_a = points
            .iter()
            .find(|p| p.site == "Bore A" && p.date_label == "01-21")
            .unwrap();
        assert_eq!(jan_a.ratio, 5.0);
    }

    #[test]
    fn test_ratio_order_is_reciprocal() {
        let ds = dataset();
        let forward = ratio(&ds, &ratio_selection("Ca - T (mg/L)", "Mg - T (mg/L)")).unwrap();
        let reverse = ratio(&ds, &ratio_selection("Mg - T (mg/L)", "Ca - T (mg/L)")).unwrap();
        assert_eq!(forward.len(), reverse.len());
        for (f, r) in forward.iter().zip(&reverse) {
            assert_eq!((f.sampling_date, &f.site), (r.sampling_date, &r.site));
            if f.ratio.is_finite() && f.ratio != 0.0 && r.ratio.is_finite() && r.ratio != 0.0 {
                assert!((f.ratio - 1.0 / r.ratio).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_ratio_division_by_zero_kept() {
        // A below-LOR Mg reading coerces to 0 upstream, so Ca/Mg divides by
        // zero. The row must survive with an inf (or NaN for 0/0) ratio.
        let ds = Dataset::build(vec![sheet_from(
            &[
                &["", "2021-01-05"],
                &["Ca - T (mg/L)", "20"],
                &["Mg - T (mg/L)", "<5"],
                &["Zn - T (mg/L)", ""],
            ],
            "Bore A",
        )]);
        let sel_sites = vec!["Bore A".to_string()];

        let inf = ratio(
            &ds,
            &Selection {
                ratio_parameters: vec!["Ca - T (mg/L)".to_string(), "Mg - T (mg/L)".to_string()],
                ratio_sites: sel_sites.clone(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(inf.len(), 1);
        assert!(inf[0].ratio.is_infinite());

        let nan = ratio(
            &ds,
            &Selection {
                ratio_parameters: vec!["Zn - T (mg/L)".to_string(), "Mg - T (mg/L)".to_string()],
                ratio_sites: sel_sites,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(nan.len(), 1);
        assert!(nan[0].ratio.is_nan());
    }

    #[test]
    fn test_ratio_underselection() {
        let ds = dataset();
        let sel = Selection {
            ratio_parameters: vec!["Ca - T (mg/L)".to_string()],
            ratio_sites: all_sites(),
            ..Default::default()
        };
        assert_eq!(
            ratio(&ds, &sel),
            Err(ViewError::Underselection { view: "ratio plot", needed: 2, got: 1 })
        );
    }

    // ==========================================================================
    // PAIRWISE VIEW TESTS
    // ==========================================================================
    //
    // The candidate parameter set is the exact-string intersection of the
    // two sheets' parameters, sorted ascending. Zero selected parameters is
    // an explicit signal, never a render attempt.
    // ==========================================================================

    #[test]
    fn test_common_parameters_sorted_intersection() {
        let a = sheet_from(
            &[
                &["", "2021-01-05"],
                &["Zn - T (mg/L)", "1"],
                &["Ca - T (mg/L)", "10"],
                &["K - D (mg/L)", "3"],
            ],
            "Bore A",
        );
        let b = sheet_from(
            &[
                &["", "2021-01-05"],
                &["Ca - T (mg/L)", "5"],
                &["Zn - T (mg/L)", "2"],
                &["Ca - D (mg/L)", "4"], // different fraction: no fuzzy match
            ],
            "Bore B",
        );
        let ds = Dataset::build(vec![a, b]);
        assert_eq!(
            common_parameters(&ds, "Bore A", "Bore B").unwrap(),
            vec!["Ca - T (mg/L)", "Zn - T (mg/L)"]
        );
    }

    #[test]
    fn test_common_parameters_unknown_sheet() {
        let ds = dataset();
        assert_eq!(
            common_parameters(&ds, "Bore A", "Bore X"),
            Err(ViewError::UnknownSheet("Bore X".to_string()))
        );
    }

    #[test]
    fn test_pairwise_empty_selection_signal() {
        let ds = dataset();
        let sel = Selection {
            sheet_pair: vec!["Bore A".to_string(), "Bore B".to_string()],
            ..Default::default()
        };
        assert_eq!(pairwise(&ds, &sel), Err(ViewError::EmptySelection));
    }

    #[test]
    fn test_pairwise_needs_two_sheets() {
        let ds = dataset();
        let sel = Selection {
            sheet_pair: vec!["Bore A".to_string()],
            pairwise_parameters: vec!["Ca - T (mg/L)".to_string()],
            ..Default::default()
        };
        assert_eq!(pairwise(&ds, &sel), Err(ViewError::SheetPairRequired(1)));
    }

    #[test]
    fn test_pairwise_end_to_end() {
        // Sheet A: Ca at 10, 20 over two dates. Sheet B: same parameter and
        // dates at 5, 0. Intersection is exactly {Ca}; the view yields
        // 2 dates x 2 sites = 4 rows with no drops.
        let a = sheet_from(
            &[&["", "2021-01-01", "2021-02-01"], &["Ca - T (mg/L)", "10", "20"]],
            "Sheet A",
        );
        let b = sheet_from(
            &[&["", "2021-01-01", "2021-02-01"], &["Ca - T (mg/L)", "5", "0"]],
            "Sheet B",
        );
        let ds = Dataset::build(vec![a, b]);

        let common = common_parameters(&ds, "Sheet A", "Sheet B").unwrap();
        assert_eq!(common, vec!["Ca - T (mg/L)"]);

        let sel = Selection {
            sheet_pair: vec!["Sheet A".to_string(), "Sheet B".to_string()],
            pairwise_parameters: common,
            ..Default::default()
        };
        let rows = pairwise(&ds, &sel).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.values.len() == 1));
    }

    #[test]
    fn test_pairwise_incomplete_rows_dropped() {
        let a = sheet_from(
            &[&["", "2021-01-05"], &["Ca - T (mg/L)", "10"], &["Mg - T (mg/L)", "2"]],
            "Bore A",
        );
        let b = sheet_from(&[&["", "2021-01-05"], &["Ca - T (mg/L)", "5"]], "Bore B");
        let gappy = Dataset::build(vec![a, b]);

        let sel = Selection {
            sheet_pair: vec!["Bore A".to_string(), "Bore B".to_string()],
            pairwise_parameters: both_params(),
            ..Default::default()
        };
        let rows = pairwise(&gappy, &sel).unwrap();
        // Bore B lacks Mg entirely, so only Bore A's row is complete.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].site, "Bore A");
    }

    // ==========================================================================
    // SELECTION DEFAULT TESTS
    // ==========================================================================

    #[test]
    fn test_defaults_cover_every_menu() {
        let ds = dataset();
        let sel = Selection::defaults(&ds);
        assert_eq!(sel.scatter_x.as_deref(), Some("Ca - T (mg/L)"));
        assert_eq!(sel.scatter_y.as_deref(), Some("Mg - T (mg/L)"));
        assert_eq!(sel.scatter_sites, ds.sites());
        assert_eq!(sel.time_series_parameters.len(), 2);
        assert_eq!(sel.ratio_parameters, both_params());
        assert_eq!(sel.sheet_pair, vec!["Bore A", "Bore B"]);
        assert_eq!(sel.pairwise_parameters, both_params());
    }

    #[test]
    fn test_defaults_on_empty_dataset() {
        let sel = Selection::defaults(&Dataset::build(vec![]));
        assert_eq!(sel.scatter_x, None);
        assert!(sel.sheet_pair.is_empty());
        assert!(sel.pairwise_parameters.is_empty());
    }
}
