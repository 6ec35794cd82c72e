use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tablewash_core::{
    clean_file, load_table, CleanConfig, CleanReport, CollisionPolicy, TextEncoding,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "CSV cleaning pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean a CSV file and write the result
    Clean(CleanArgs),
    /// Load a CSV file and describe it without writing anything
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
struct CleanArgs {
    /// Input CSV path (default: data.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output CSV path (default: cleaned_data.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// TOML run configuration; explicit flags override file values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Input text encoding: utf8 or latin1
    #[arg(long)]
    encoding: Option<String>,
    /// Parse this column into dates after cleaning
    #[arg(long)]
    date_column: Option<String>,
    /// Keep the first column on a normalized-name collision instead of failing
    #[arg(long)]
    keep_first_collisions: bool,
    /// Print the run report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct InspectArgs {
    /// Input CSV path
    input: PathBuf,
    /// Input text encoding: utf8 or latin1
    #[arg(long)]
    encoding: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Clean(args) => handle_clean(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn handle_clean(args: CleanArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Some(
            CleanConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
        ),
        None => None,
    };

    let input = args
        .input
        .clone()
        .or_else(|| config.as_ref().map(|c| c.input.clone()))
        .unwrap_or_else(|| PathBuf::from("data.csv"));
    let output = args
        .output
        .clone()
        .or_else(|| config.as_ref().map(|c| c.output.clone()))
        .unwrap_or_else(|| PathBuf::from("cleaned_data.csv"));

    let mut options = config.as_ref().map(CleanConfig::options).unwrap_or_default();
    if let Some(label) = &args.encoding {
        options.encoding = label.parse()?;
    }
    if let Some(column) = &args.date_column {
        options.date_column = Some(column.clone());
    }
    if args.keep_first_collisions {
        options.on_name_collision = CollisionPolicy::KeepFirst;
    }

    let report = clean_file(&input, &output, &options)
        .with_context(|| format!("cleaning {} failed", input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &CleanReport) {
    println!(
        "Cleaned {} -> {}",
        report.input.display(),
        report.output.display()
    );
    println!(
        "  Loaded {} rows x {} columns",
        report.loaded.rows, report.loaded.columns
    );
    println!(
        "  Dropped {} rows with missing values",
        report.incomplete_rows_dropped
    );
    println!("  Removed {} duplicate rows", report.duplicate_rows_dropped);
    if !report.renamed_columns.is_empty() {
        println!("  Renamed {} columns:", report.renamed_columns.len());
        for rename in &report.renamed_columns {
            println!("    '{}' -> '{}'", rename.from, rename.to);
        }
    }
    if !report.dropped_columns.is_empty() {
        println!(
            "  Dropped colliding columns: {}",
            report.dropped_columns.join(", ")
        );
    }
    if let Some(coercion) = &report.date_coercion {
        println!(
            "  Parsed '{}' as dates ({} ok, {} unparseable -> null)",
            coercion.column, coercion.parsed, coercion.failed
        );
    }
    println!(
        "  Wrote {} rows x {} columns",
        report.written.rows, report.written.columns
    );
}

fn handle_inspect(args: InspectArgs) -> Result<()> {
    let encoding = match &args.encoding {
        Some(label) => label.parse()?,
        None => TextEncoding::default(),
    };

    let df = load_table(&args.input, encoding)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    println!(
        "{}: {} rows x {} columns",
        args.input.display(),
        df.height(),
        df.width()
    );

    let null_counts = df.null_count();
    for (name, dtype) in df.get_column_names().iter().zip(df.dtypes()) {
        let nulls = null_counts
            .column(name.as_str())?
            .u32()?
            .get(0)
            .unwrap_or(0);
        println!("  {name}: {dtype} ({nulls} null)");
    }
    Ok(())
}
