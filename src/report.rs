use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::types::Finding;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Writes one name per line and stops at the first error.
///
/// Output written before the error is flushed before the error is returned.
/// Returns the number of lines written.
pub fn write_findings<I, W>(findings: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<Finding>>,
    W: Write,
{
    let mut written = 0;

    for item in findings {
        let finding = match item {
            Ok(finding) => finding,
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        };

        writeln!(out, "{}", finding.name())?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

pub fn progress_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {pos} entries, {msg}")
    {
        pb.set_style(style);
    }
    pb.enable_steady_tick(SPINNER_TICK);
    pb
}
