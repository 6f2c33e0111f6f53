//! HTTP server for interactive exploration mode
//!
//! `brineviz serve ./readings.xlsx` → starts server, opens browser, shows
//! the four charts with their dropdowns.
//!
//! One process, one session: the loop owns a [`Session`] holding the
//! cached normalized [`Dataset`] and the current [`Selection`]. Every view
//! endpoint updates its slice of the selection atomically, then rebuilds
//! the view from the unified table - views never feed each other.

use crate::dataset::{Dataset, DatasetSummary, SheetRecords};
use crate::sheet::normalize;
use crate::views::{self, Selection, ViewError};
use crate::workbook;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tiny_http::{Header, Method, Request, Response, Server};

// Embed the UI directly in the binary
const UI_HTML: &str = include_str!("ui.html");

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    /// Soft-stop reply: the view isn't rendered, the message is shown in
    /// its place. Still HTTP 200 - nothing here is fatal.
    fn soft_error(message: String) -> Self {
        Self { ok: false, data: None, error: Some(message) }
    }
}

/// Per-session state: the cached normalized dataset plus the one mutable
/// selection instance, replaced field-by-field per user action.
#[derive(Default)]
struct Session {
    dataset: Option<Dataset>,
    selection: Selection,
}

#[derive(Deserialize, Debug)]
struct LoadParams {
    path: String,
}

#[derive(Deserialize, Debug)]
struct ScatterParams {
    x: Option<String>,
    y: Option<String>,
    sites: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TimeSeriesParams {
    params: Option<String>,
    sites: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RatioParams {
    numerator: Option<String>,
    denominator: Option<String>,
    sites: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SheetPairParams {
    a: String,
    b: String,
}

#[derive(Deserialize, Debug)]
struct PairwiseParams {
    a: String,
    b: String,
    params: Option<String>,
}

/// Reply to a successful load: everything the menus need.
#[derive(Serialize)]
struct LoadReply {
    summary: DatasetSummary,
    sheets: Vec<String>,
    parameters: Vec<String>,
    sites: Vec<String>,
    defaults: Selection,
}

/// Start server, open browser, serve UI
pub fn start(port: u16, path: PathBuf) -> std::io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let url = format!("http://localhost:{}", port);
    let path_str = path.canonicalize().unwrap_or(path.clone()).display().to_string();

    eprintln!("\n\x1b[1;36m💧 Brineviz\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Exploring: {}\n", path_str);

    // Open browser
    let _ = open::that(&url);

    // Single-threaded request loop; the session lives for the process.
    let mut session = Session::default();
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &path_str, &mut session) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(
    mut request: Request,
    default_path: &str,
    session: &mut Session,
) -> std::io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();

    match (&method, path) {
        // Serve embedded UI with the default spreadsheet path injected
        (&Method::Get, "/") => {
            let html = UI_HTML.replace("{{DEFAULT_PATH}}", default_path);
            respond_html(request, html)
        }

        (&Method::Get, "/api/load") | (&Method::Post, "/api/load") => {
            let params: LoadParams = match parse_params(&mut request) {
                Some(p) => p,
                None => LoadParams { path: default_path.to_string() },
            };
            eprintln!("→ load {}", params.path);
            respond_json(request, load_dataset(session, &params.path))
        }

        (&Method::Get, "/api/view/scatter") => {
            let params: ScatterParams = match parse_params(&mut request) {
                Some(p) => p,
                None => return respond_bad_query(request),
            };
            let reply = with_dataset(session, |dataset, selection| {
                selection.scatter_x = params.x.clone();
                selection.scatter_y = params.y.clone();
                if let Some(sites) = split_list(&params.sites) {
                    selection.scatter_sites = sites;
                }
                views::scatter(dataset, selection)
            });
            respond_json(request, reply)
        }

        (&Method::Get, "/api/view/timeseries") => {
            let params: TimeSeriesParams = match parse_params(&mut request) {
                Some(p) => p,
                None => return respond_bad_query(request),
            };
            let reply = with_dataset(session, |dataset, selection| {
                if let Some(parameters) = split_list(&params.params) {
                    selection.time_series_parameters = parameters;
                }
                if let Some(sites) = split_list(&params.sites) {
                    selection.time_series_sites = sites;
                }
                views::time_series(dataset, selection)
            });
            respond_json(request, reply)
        }

        (&Method::Get, "/api/view/ratio") => {
            let params: RatioParams = match parse_params(&mut request) {
                Some(p) => p,
                None => return respond_bad_query(request),
            };
            let reply = with_dataset(session, |dataset, selection| {
                // Numerator first; the order the user picked is significant.
                selection.ratio_parameters = [&params.numerator, &params.denominator]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect();
                if let Some(sites) = split_list(&params.sites) {
                    selection.ratio_sites = sites;
                }
                views::ratio(dataset, selection)
            });
            respond_json(request, reply)
        }

        (&Method::Get, "/api/pairwise/common") => {
            let params: SheetPairParams = match parse_params(&mut request) {
                Some(p) => p,
                None => return respond_bad_query(request),
            };
            let reply = with_dataset(session, |dataset, _selection| {
                views::common_parameters(dataset, &params.a, &params.b)
            });
            respond_json(request, reply)
        }

        (&Method::Get, "/api/view/pairwise") => {
            let params: PairwiseParams = match parse_params(&mut request) {
                Some(p) => p,
                None => return respond_bad_query(request),
            };
            let reply = with_dataset(session, |dataset, selection| {
                selection.sheet_pair = vec![params.a.clone(), params.b.clone()];
                selection.pairwise_parameters = split_list(&params.params).unwrap_or_default();
                views::pairwise(dataset, selection)
            });
            respond_json(request, reply)
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

/// Read + normalize + aggregate one file, cache it, reset the selection.
fn load_dataset(session: &mut Session, path: &str) -> ApiResponse<LoadReply> {
    let sheets = match workbook::load(std::path::Path::new(path)) {
        Ok(sheets) => sheets,
        Err(e) => return ApiResponse::soft_error(e.to_string()),
    };

    let normalized: Vec<SheetRecords> = sheets
        .iter()
        .map(|(name, raw)| SheetRecords {
            name: name.clone(),
            records: normalize(raw, name),
        })
        .collect();
    let dataset = Dataset::build(normalized);

    let defaults = Selection::defaults(&dataset);
    let mut parameters = dataset.parameters();
    parameters.sort();
    let mut sites = dataset.sites();
    sites.sort();

    let reply = LoadReply {
        summary: dataset.summary(),
        sheets: dataset.sheet_names(),
        parameters,
        sites,
        defaults: defaults.clone(),
    };

    session.selection = defaults;
    session.dataset = Some(dataset);
    ApiResponse::success(reply)
}

/// Run a view builder against the cached dataset, mapping both "nothing
/// loaded yet" and builder soft-stops to message replies.
fn with_dataset<T: Serialize>(
    session: &mut Session,
    build: impl FnOnce(&Dataset, &mut Selection) -> Result<T, ViewError>,
) -> ApiResponse<T> {
    let Some(dataset) = session.dataset.as_ref() else {
        return ApiResponse::soft_error("load a spreadsheet first".to_string());
    };
    match build(dataset, &mut session.selection) {
        Ok(rows) => ApiResponse::success(rows),
        Err(e) => ApiResponse::soft_error(e.to_string()),
    }
}

/// Comma-separated list field: absent means "keep the current selection",
/// present-but-empty means "nothing selected".
fn split_list(field: &Option<String>) -> Option<Vec<String>> {
    field.as_ref().map(|s| {
        s.split(',')
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .collect()
    })
}

fn parse_params<T: DeserializeOwned>(request: &mut Request) -> Option<T> {
    let url = request.url().to_string();

    // Try query string
    if let Some(query) = url.split('?').nth(1) {
        if let Ok(params) = serde_urlencoded::from_str::<T>(query) {
            return Some(params);
        }
    }

    // Try JSON body
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body).ok()?;
    if !body.is_empty() {
        if let Ok(params) = serde_json::from_str::<T>(&body) {
            return Some(params);
        }
    }

    None
}

fn respond_json<T: Serialize>(request: Request, payload: ApiResponse<T>) -> std::io::Result<()> {
    let json = serde_json::to_string(&payload)?;
    let response = Response::from_string(json).with_header(
        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
    );
    request.respond(response)
}

fn respond_html(request: Request, html: String) -> std::io::Result<()> {
    let response = Response::from_string(html)
        .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
    request.respond(response)
}

fn respond_bad_query(request: Request) -> std::io::Result<()> {
    respond_json(
        request,
        ApiResponse::<()>::soft_error("could not parse query parameters".to_string()),
    )
}
