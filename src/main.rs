use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use pointseries::{
    datatable::{csv::read_csv, Datatable},
    pointseries, PointSeriesArgs, TransformError, TransformResult,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Turn a datatable into a point series model.
#[derive(Debug, Parser)]
#[command(name = "pointseries")]
struct Cli {
    /// Dimension or measure expression for the x axis, e.g. `country`
    #[arg(long)]
    x: Option<String>,

    /// Dimension or measure expression for color
    #[arg(long)]
    color: Option<String>,

    /// Dimension or measure expression for the y axis, e.g. `sum(profit)`
    #[arg(long)]
    y: Option<String>,

    /// Dimension or measure expression for size
    #[arg(long)]
    size: Option<String>,

    /// Input format (default: from the file extension, json otherwise)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Input datatable (default: stdin)
    input: Option<PathBuf>,
}

fn detect_format(path: Option<&Path>) -> Format {
    match path.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
        _ => Format::Json,
    }
}

fn load(reader: impl Read, format: Format) -> TransformResult<Datatable> {
    match format {
        Format::Json => Datatable::from_json_reader(reader),
        Format::Csv => read_csv(reader),
    }
}

fn run(cli: Cli) -> TransformResult<String> {
    let format = cli
        .format
        .unwrap_or_else(|| detect_format(cli.input.as_deref()));
    let datatable = match &cli.input {
        Some(path) => load(File::open(path)?, format)?,
        None => load(io::stdin().lock(), format)?,
    };
    log::debug!(
        "loaded {} columns and {} rows",
        datatable.columns.len(),
        datatable.rows.len()
    );

    let args = PointSeriesArgs {
        x: cli.x,
        color: cli.color,
        y: cli.y,
        size: cli.size,
    };
    let model = pointseries(&datatable, &args)?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&model)
    } else {
        serde_json::to_string(&model)
    };
    output.map_err(|e| TransformError::InterpretingError(format!("failed to write output: {e}")))
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("args: {cli:?}");
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
