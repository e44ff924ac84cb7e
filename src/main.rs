//! `record_export` command-line entry point.
//!
//! `ingest` stores an upload in a new session directory; `export` renders a
//! bundle to explicit paths. Parsing, logger setup and printing live here,
//! everything else in the library.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use record_export::config::DEFAULT_UPLOAD_DIR;
use record_export::export::{
    export_category, export_targets, ArtifactSummary, CategoryRecords, ExportReport,
    ExportTargets,
};
use record_export::initialization::init_logger_with;
use record_export::session::ingest_from_path;
use record_export::{
    Category, Config, ExportError, ExportFormat, ExportOptions, LogFormat, LogLevel, RawFile,
    RecordBundle, TimeZoneMode,
};

/// Exit code when the run finished but an artifact or raw file failed.
const EXIT_PARTIAL_FAILURE: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "record_export", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store an upload in a new session directory with both artifacts
    Ingest(IngestCommand),
    /// Render a bundle to explicit destination paths
    Export(ExportCommand),
}

#[derive(Debug, Args)]
struct IngestCommand {
    /// Record bundle JSON
    bundle: PathBuf,

    /// Raw file to copy into the session directory (repeatable)
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// Root directory for session directories
    #[arg(long, default_value = DEFAULT_UPLOAD_DIR)]
    upload_dir: PathBuf,

    /// Artifacts to render (repeatable; default: both)
    #[arg(long, value_enum)]
    format: Vec<ExportFormat>,

    /// Time zone for rendered timestamps
    #[arg(long, value_enum, default_value_t = TimeZoneMode::Utc)]
    time_zone: TimeZoneMode,
}

#[derive(Debug, Args)]
struct ExportCommand {
    /// Record bundle JSON
    bundle: PathBuf,

    /// Destination of the merged delimited-text document
    #[arg(long)]
    text: Option<PathBuf>,

    /// Destination of the workbook
    #[arg(long)]
    spreadsheet: Option<PathBuf>,

    /// Export only this category (contacts, sms, call-logs, media-files,
    /// documents, device-info)
    #[arg(long)]
    category: Option<Category>,

    /// Time zone for rendered timestamps
    #[arg(long, value_enum, default_value_t = TimeZoneMode::Utc)]
    time_zone: TimeZoneMode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Ingest(cmd) => run_ingest(cmd, cli.log_level, cli.log_format),
        Command::Export(cmd) => run_export(cmd),
    };

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(EXIT_PARTIAL_FAILURE),
        Err(e) => {
            eprintln!("record_export error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the session was stored but something in it failed.
fn run_ingest(cmd: IngestCommand, log_level: LogLevel, log_format: LogFormat) -> Result<bool> {
    let formats = if cmd.format.is_empty() {
        vec![ExportFormat::Csv, ExportFormat::Xlsx]
    } else {
        cmd.format
    };
    let config = Config {
        upload_dir: cmd.upload_dir,
        time_zone: cmd.time_zone,
        formats,
        log_level,
        log_format,
        ..Default::default()
    };
    let raw_files: Vec<RawFile> = cmd.files.into_iter().map(RawFile::from_path).collect();

    let report = ingest_from_path(&config, &cmd.bundle, &raw_files)
        .context("Failed to ingest record bundle")?;

    print_export_report(&report.export);
    println!(
        "Saved {} raw file{} ({} failed)",
        report.saved_files.len(),
        if report.saved_files.len() == 1 { "" } else { "s" },
        report.failed_files.len()
    );
    for failed in &report.failed_files {
        eprintln!("  ✗ {}: {}", failed.file_name, failed.reason);
    }
    println!("Session saved in {}", report.session_dir.display());

    Ok(report.is_complete())
}

fn run_export(cmd: ExportCommand) -> Result<bool> {
    if cmd.text.is_none() && cmd.spreadsheet.is_none() {
        bail!("Nothing to export: pass --text and/or --spreadsheet");
    }

    let bundle = read_bundle(&cmd.bundle)?;
    let options = ExportOptions {
        time_zone: cmd.time_zone,
    };

    let Some(category) = cmd.category else {
        let targets = ExportTargets {
            text: cmd.text,
            spreadsheet: cmd.spreadsheet,
        };
        let report = export_targets(&bundle, &targets, &options);
        print_export_report(&report);
        return Ok(report.is_success());
    };

    let Some(records) = CategoryRecords::select(&bundle, category) else {
        bail!("Bundle has no {} to export", category);
    };
    let requested = [
        (ExportFormat::Csv, cmd.text),
        (ExportFormat::Xlsx, cmd.spreadsheet),
    ];
    let mut all_ok = true;
    for (format, path) in requested {
        if let Some(path) = path {
            let outcome = export_category(records, format, &path, &options);
            all_ok &= outcome.is_ok();
            print_outcome(&outcome);
        }
    }
    Ok(all_ok)
}

fn read_bundle(path: &Path) -> Result<RecordBundle> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bundle {}", path.display()))?;
    RecordBundle::from_json(&json)
        .with_context(|| format!("Failed to decode bundle {}", path.display()))
}

fn print_export_report(report: &ExportReport) {
    for outcome in [&report.text, &report.spreadsheet].into_iter().flatten() {
        print_outcome(outcome);
    }
}

fn print_outcome(outcome: &Result<ArtifactSummary, ExportError>) {
    match outcome {
        Ok(summary) => println!(
            "✅ {} ({} categor{})",
            summary.path.display(),
            summary.categories.len(),
            if summary.categories.len() == 1 { "y" } else { "ies" }
        ),
        Err(e) => eprintln!("❌ {}", e),
    }
}
