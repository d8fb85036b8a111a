//! # tracemax - Main Entry Point
//!
//! Scans the trace directory, prints `size = N` for every new maximum in scan
//! order, then a blank line and the final maximum.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};

use tracemax::cli::Args;
use tracemax::domain::ScanError;
use tracemax::report::{export_summary, write_final, write_new_max};
use tracemax::scanner::Scanner;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;
const EXIT_NOINPUT: i32 = 66;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ScanError>() {
        Some(ScanError::InvalidSize { .. }) => EXIT_DATAERR,
        Some(e) if e.is_missing_input() => EXIT_NOINPUT,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let scanner = Scanner::new(args.scan_options());

    let mut stdout = io::stdout().lock();
    let mut write_err = None;

    let summary = scanner.scan_dir(&args.dir, |record| {
        if !args.quiet && write_err.is_none() {
            write_err = write_new_max(&mut stdout, record).err();
        }
    })?;

    if let Some(e) = write_err {
        return Err(e).context("Failed to write to stdout");
    }
    write_final(&mut stdout, summary.max_size).context("Failed to write to stdout")?;

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path)
            .with_context(|| format!("Failed to create {}", export_path.display()))?;
        export_summary(&summary, BufWriter::new(file)).context("Failed to export summary")?;
        info!("Summary written to {}", export_path.display());
    }

    Ok(())
}
