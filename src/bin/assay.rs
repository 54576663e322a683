//! assay: analyze JSON files and run corpus transforms
//!
//! Usage:
//!   # Structural report for one or more files
//!   assay analyze users.json orders.json
//!
//!   # Replay a saved request body ({"files": [{"name", "content"}]})
//!   assay analyze --request body.json
//!
//!   # Deduplicate and write the result to a timestamped file
//!   assay op dedupe users.json --export
//!
//!   # Keep the first 500 items as JSON Lines on stdout
//!   assay op trim events.jsonl --trim-limit 500 --jsonl

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use assay::{
    load_files, load_request, run_analysis_with, run_operation_with, AnalysisConfig, FileRecord,
    Operation, OutputFormat, OutputWriter,
};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "assay")]
#[command(about = "Analyze the structure of JSON files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a structural and statistical report
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Compact output (no pretty-printing)
        #[arg(long)]
        compact: bool,

        /// Deepest level expanded in the structure map (default: 4)
        #[arg(long)]
        structure_depth: Option<usize>,
    },

    /// Run merge, trim or dedupe over the items
    Op {
        /// One of: merge, trim, dedupe
        #[arg(value_name = "OPERATION")]
        operation: String,

        #[command(flatten)]
        input: InputArgs,

        /// Items kept by trim (default: 100)
        #[arg(long)]
        trim_limit: Option<usize>,

        /// Write JSON Lines instead of a JSON array
        #[arg(long)]
        jsonl: bool,

        /// Output file (stdout if omitted)
        #[arg(long, short = 'o', conflicts_with = "export")]
        output: Option<PathBuf>,

        /// Write to assay-output-<millis>.json in the current directory
        #[arg(long)]
        export: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input files (JSON documents or NDJSON)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Treat the single input as a saved request body with a "files" list
    #[arg(long)]
    request: bool,
}

impl InputArgs {
    fn load(&self) -> Result<Vec<FileRecord>> {
        if self.request {
            let mut records = Vec::new();
            for path in &self.files {
                let files = load_request(path)
                    .with_context(|| format!("Failed to load request {}", path.display()))?;
                records.extend(files);
            }
            Ok(records)
        } else {
            load_files(&self.files).context("Failed to load input files")
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = AnalysisConfig::default();

    match cli.command {
        Command::Analyze {
            input,
            compact,
            structure_depth,
        } => {
            if let Some(depth) = structure_depth {
                config.structure_depth = depth;
            }
            let files = input.load()?;
            let report = run_analysis_with(&files, &config)?;

            let output = if compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", output);
        }
        Command::Op {
            operation,
            input,
            trim_limit,
            jsonl,
            output,
            export,
        } => {
            // reject unknown operations before touching any input
            let op: Operation = operation.parse()?;
            if let Some(limit) = trim_limit {
                config.trim_limit = limit;
            }
            let files = input.load()?;
            let outcome = run_operation_with(op, &files, &config)?;
            eprintln!("{}: {}", outcome.label, outcome.summary);

            let format = if jsonl {
                OutputFormat::JsonLines
            } else {
                OutputFormat::Json
            };
            let target = if export {
                Some(PathBuf::from(assay::ops::default_export_name()))
            } else {
                output
            };

            match target {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    let mut writer = OutputWriter::new(BufWriter::new(file), format);
                    writer.write_outcome(&outcome)?;
                    writer.flush()?;
                    info!(path = %path.display(), count = outcome.count, "wrote output");
                }
                None => {
                    let mut writer = OutputWriter::new(stdout().lock(), format);
                    writer.write_outcome(&outcome)?;
                    writer.flush()?;
                }
            }
        }
    }

    Ok(())
}
