use brineviz::dataset::{Dataset, SheetRecords};
use brineviz::sheet::normalize;
use brineviz::workbook;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brineviz")]
#[command(author, version, about = "Explore laboratory water-chemistry spreadsheets interactively")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Spreadsheet to summarize (csv, xls, xlsx)
    path: Option<PathBuf>,

    /// Only print the record count
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive web UI
    Serve {
        /// Spreadsheet to explore
        path: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },
}

fn main() {
    let args = Args::parse();

    if let Some(Command::Serve { path, port }) = args.command {
        if let Err(e) = brineviz::serve::start(port, path) {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let Some(path) = args.path else {
        eprintln!("Usage: brineviz <PATH>");
        eprintln!("       brineviz serve <PATH>");
        eprintln!("Run 'brineviz --help' for more options.");
        std::process::exit(1);
    };

    let sheets = match workbook::load(&path) {
        Ok(sheets) => sheets,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let normalized: Vec<SheetRecords> = sheets
        .iter()
        .map(|(name, raw)| SheetRecords {
            name: name.clone(),
            records: normalize(raw, name),
        })
        .collect();
    let dataset = Dataset::build(normalized);
    let summary = dataset.summary();

    if args.quiet {
        println!("{}", summary.total_records);
        return;
    }

    eprintln!("\x1b[1mBrineviz - Water Chemistry Explorer\x1b[0m");
    eprintln!("{}", "─".repeat(60));
    eprintln!("Loaded: {}\n", path.display());

    println!("{:<24} {:>10}", "SHEET (SITE)", "RECORDS");
    println!("{}", "-".repeat(36));
    for sheet in &summary.sheets {
        println!("{:<24} {:>10}", sheet.name, sheet.records);
    }

    eprintln!("\n{}", "─".repeat(60));
    eprintln!("\x1b[1mSummary:\x1b[0m");
    eprintln!("  Records:         {}", summary.total_records);
    eprintln!("  Parameters:      {}", summary.parameter_count);
    eprintln!("  Sites:           {}", summary.site_count);
    if let (Some(first), Some(last)) = (summary.first_date, summary.last_date) {
        eprintln!("  Sampling dates:  {} to {}", first, last);
    }
    eprintln!(
        "\n\x1b[90mRun 'brineviz serve {}' for the interactive charts.\x1b[0m",
        path.display()
    );
}
