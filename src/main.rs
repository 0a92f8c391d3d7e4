use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};

use blankscan::report::{progress_spinner, write_findings};
use blankscan::{BlankImageScanner, logging};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.debug);

    let config = cli.scan_config();
    let directory = config.directory.clone();
    let scanner = BlankImageScanner::new(config).context("Invalid scan options")?;

    let mut findings = scanner
        .scan()
        .context(format!("Failed to scan {:?}", directory))?;

    let pb = cli.progress.then(progress_spinner);
    if let Some(pb) = &pb {
        findings = findings.with_progress(pb.clone());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_findings(&mut findings, &mut out);

    if let Some(pb) = &pb {
        let summary = findings.summary();
        pb.finish_with_message(format!(
            "{} flagged of {} images",
            summary.flagged, summary.images
        ));
    }

    result.context(format!("Scan of {:?} aborted", directory))?;

    Ok(())
}
