//! Directory scanner
//!
//! Lists one directory and classifies every entry exactly once. Entries
//! carrying the image suffix are decoded and checked; everything else is
//! reported as unexpected without being opened.

use indicatif::ProgressBar;
use std::fs::{self, ReadDir};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::analysis;
use crate::decode::{self, DecodedImage};
use crate::error::{Result, ScanError};
use crate::types::{DecodeFailurePolicy, EntryOutcome, Finding, ScanConfig, ScanSummary};

pub struct BlankImageScanner {
    config: ScanConfig,
}

impl BlankImageScanner {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Starts a fresh pass over the directory.
    ///
    /// The returned iterator is lazy: each entry is listed, decoded and
    /// classified only when the iterator is advanced. Calling `scan` again
    /// lists the directory anew.
    pub fn scan(&self) -> Result<Scan<'_>> {
        let directory = &self.config.directory;
        let entries = fs::read_dir(directory).map_err(|source| ScanError::ReadDir {
            path: directory.clone(),
            source,
        })?;

        info!(
            directory = %directory.display(),
            suffix = %self.config.image_suffix,
            mode = %self.config.decode_mode,
            policy = %self.config.on_decode_failure,
            "Starting scan"
        );

        Ok(Scan {
            config: &self.config,
            entries,
            summary: ScanSummary::default(),
            progress: None,
            finished: false,
        })
    }

    /// Classifies a single entry of the scanned directory by name.
    pub fn classify(&self, name: &str) -> Result<EntryOutcome> {
        classify_entry(&self.config, &self.config.directory.join(name), name)
    }
}

/// Lazy sequence of findings produced by [`BlankImageScanner::scan`]
///
/// Entries that produce no finding are still counted in [`Scan::summary`].
pub struct Scan<'a> {
    config: &'a ScanConfig,
    entries: ReadDir,
    summary: ScanSummary,
    progress: Option<ProgressBar>,
    finished: bool,
}

impl Scan<'_> {
    /// Ticks `pb` once per classified entry.
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    /// Totals over the entries classified so far
    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    fn record(&mut self, outcome: &EntryOutcome) {
        self.summary.record(outcome);
        if let Some(pb) = &self.progress {
            pb.inc(1);
            pb.set_message(format!("{} flagged", self.summary.flagged));
        }
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        info!(
            entries = self.summary.entries,
            images = self.summary.images,
            flagged = self.summary.flagged,
            kept = self.summary.kept,
            undecodable = self.summary.undecodable,
            skipped = self.summary.skipped,
            "Scan complete"
        );
    }
}

impl Iterator for Scan<'_> {
    type Item = Result<Finding>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next() {
                Some(Ok(entry)) => entry,
                Some(Err(source)) => {
                    return Some(Err(ScanError::Entry {
                        path: self.config.directory.clone(),
                        source,
                    }));
                }
                None => {
                    self.finish();
                    return None;
                }
            };

            // The lossy name is only for display; decoding goes through the real path.
            let name = entry.file_name().to_string_lossy().into_owned();

            match classify_entry(self.config, &entry.path(), &name) {
                Ok(outcome) => {
                    self.record(&outcome);
                    if let EntryOutcome::Emit(finding) = outcome {
                        return Some(Ok(finding));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

fn classify_entry(config: &ScanConfig, path: &Path, name: &str) -> Result<EntryOutcome> {
    if !config.is_image_name(name) {
        debug!(entry = %name, "Unexpected entry");
        return Ok(EntryOutcome::Emit(Finding::Unexpected(name.to_string())));
    }

    match inspect_image(config, path, name) {
        Ok(outcome) => Ok(outcome),
        Err(e) if e.is_decode_failure() => {
            handle_decode_failure(config.on_decode_failure, name, e)
        }
        Err(e) => Err(e),
    }
}

fn inspect_image(config: &ScanConfig, path: &Path, name: &str) -> Result<EntryOutcome> {
    let image = decode::load_image(path, name)?;

    if let Some(threshold) = config.solid_color_threshold {
        return Ok(match analysis::dominant_solid_color(&image, threshold) {
            Some((color, share)) => {
                debug!(entry = %name, %color, share, "Solid color image");
                EntryOutcome::Emit(Finding::SolidColor {
                    name: name.to_string(),
                    color,
                    share,
                })
            }
            None => EntryOutcome::Keep,
        });
    }

    let decoded = DecodedImage::from_dynamic(&image, config.decode_mode);
    drop(image);

    let lit = decoded.nonzero_count();
    debug!(entry = %name, lit, "Decoded image");

    if lit == 0 {
        Ok(EntryOutcome::Emit(Finding::Blank(name.to_string())))
    } else {
        Ok(EntryOutcome::Keep)
    }
}

fn handle_decode_failure(
    policy: DecodeFailurePolicy,
    name: &str,
    error: ScanError,
) -> Result<EntryOutcome> {
    match policy {
        DecodeFailurePolicy::FailFast => Err(error),
        DecodeFailurePolicy::Report => {
            warn!(entry = %name, error = %error, "Reporting undecodable image");
            Ok(EntryOutcome::Emit(Finding::Undecodable {
                name: name.to_string(),
                reason: error.to_string(),
            }))
        }
        DecodeFailurePolicy::Skip => {
            warn!(entry = %name, error = %error, "Skipping undecodable image");
            Ok(EntryOutcome::Skip)
        }
    }
}
