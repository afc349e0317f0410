//! Command-line interface: argument parsing and command execution.
//!
//! Two thin entry points over the engine: `scan` builds a baseline store
//! from a directory, `compare` classifies two stores and writes an HTML
//! report. Fatal failures propagate to the binary, which maps them to a
//! non-zero exit status.

use crate::compare;
use crate::config::IntactConfig;
use crate::error::{IntactError, StorageError};
use crate::report;
use crate::store::{BaselineStore, SledBaselineStore};
use crate::tree::BaselineBuilder;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "intact", version, about = "Filesystem integrity baselines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable log output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash every file under a directory into a baseline store
    Scan {
        /// Directory to scan
        root: PathBuf,
        /// Baseline store to create or update
        store: PathBuf,
        /// Streaming read size in bytes (overrides configuration)
        #[arg(long)]
        chunk_size: Option<usize>,
        /// Hashing worker count (overrides configuration)
        #[arg(long)]
        workers: Option<usize>,
    },
    /// Compare two baseline stores and write an HTML report
    Compare {
        /// Reference baseline store
        #[arg(long)]
        base1: PathBuf,
        /// Baseline store to compare against the reference
        #[arg(long)]
        base2: PathBuf,
        /// Output HTML report path
        #[arg(long)]
        output: PathBuf,
    },
}

/// Execute a command, returning the text to print on success.
pub fn execute(command: &Commands, config: &IntactConfig) -> Result<String, IntactError> {
    match command {
        Commands::Scan {
            root,
            store,
            chunk_size,
            workers,
        } => run_scan(
            root,
            store,
            chunk_size.unwrap_or(config.scan.chunk_size),
            workers.or(config.scan.workers),
        ),
        Commands::Compare {
            base1,
            base2,
            output,
        } => run_compare(base1, base2, output),
    }
}

fn run_scan(
    root: &Path,
    store_path: &Path,
    chunk_size: usize,
    workers: Option<usize>,
) -> Result<String, IntactError> {
    // Validate the root before touching the store path: a bad root must
    // not leave an empty store behind.
    if !root.is_dir() {
        return Err(StorageError::NotADirectory(root.to_path_buf()).into());
    }

    let store = SledBaselineStore::open(store_path)?;
    let outcome = BaselineBuilder::new(root.to_path_buf())
        .with_chunk_size(chunk_size)
        .with_workers(workers)
        .build(&store)?;

    Ok(format!(
        "Baseline written to {}: {} files hashed, {} skipped",
        store_path.display(),
        outcome.hashed,
        outcome.skipped
    ))
}

fn run_compare(base1: &Path, base2: &Path, output: &Path) -> Result<String, IntactError> {
    // Opening a missing path would create a fresh empty store and yield a
    // clean "nothing changed" report; both stores must already exist.
    for store_path in [base1, base2] {
        if !store_path.exists() {
            return Err(StorageError::StoreUnavailable {
                path: store_path.to_path_buf(),
                reason: "store does not exist".to_string(),
            }
            .into());
        }
    }

    let label1 = store_label(base1);
    let label2 = store_label(base2);
    let mut log = String::new();

    let _ = writeln!(log, "BASELINE COMPARISON");
    let _ = writeln!(log, "Baseline 1: {}", label1);
    let _ = writeln!(log, "Baseline 2: {}", label2);

    let baseline1 = SledBaselineStore::open(base1)?.load_all()?;
    info!(files = baseline1.len(), store = %base1.display(), "Loaded baseline 1");
    let _ = writeln!(log, "Loaded baseline 1: {} files", baseline1.len());

    let baseline2 = SledBaselineStore::open(base2)?.load_all()?;
    info!(files = baseline2.len(), store = %base2.display(), "Loaded baseline 2");
    let _ = writeln!(log, "Loaded baseline 2: {} files", baseline2.len());

    let result = compare::compare(&baseline1, &baseline2);
    let summary = format!(
        "identical: {}, corrupted: {}, missing: {}, extra: {}",
        result.identical,
        result.corrupted.len(),
        result.missing.len(),
        result.extra.len()
    );
    let _ = writeln!(log, "{}", summary);

    report::write_html_report(output, &result, &label1, &label2, &log)?;
    info!(report = %output.display(), "Report written");

    Ok(format!("Report written to {}\n{}", output.display(), summary))
}

fn store_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
