use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

pub const DEFAULT_DIRECTORY: &str = ".";
pub const DEFAULT_IMAGE_SUFFIX: &str = ".png";
pub const MAX_SHARE_PERCENT: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodeMode {
    #[default]
    Grayscale,
    Color,
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Grayscale => write!(f, "grayscale"),
            DecodeMode::Color => write!(f, "color"),
        }
    }
}

/// What to do with an image entry that cannot be opened or decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodeFailurePolicy {
    /// Yield the error and let the caller stop the scan
    #[default]
    FailFast,
    /// Emit the entry as an `Undecodable` finding
    Report,
    /// Log the failure and emit nothing
    Skip,
}

impl fmt::Display for DecodeFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailurePolicy::FailFast => write!(f, "fail-fast"),
            DecodeFailurePolicy::Report => write!(f, "report"),
            DecodeFailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceColor {
    Black,
    White,
    Red,
    Green,
    Blue,
}

impl ReferenceColor {
    /// Checked in this order; the first color over the threshold wins.
    pub const ALL: [ReferenceColor; 5] = [
        ReferenceColor::Black,
        ReferenceColor::White,
        ReferenceColor::Red,
        ReferenceColor::Green,
        ReferenceColor::Blue,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ReferenceColor::Black => [0, 0, 0],
            ReferenceColor::White => [255, 255, 255],
            ReferenceColor::Red => [255, 0, 0],
            ReferenceColor::Green => [0, 255, 0],
            ReferenceColor::Blue => [0, 0, 255],
        }
    }
}

impl fmt::Display for ReferenceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceColor::Black => write!(f, "black"),
            ReferenceColor::White => write!(f, "white"),
            ReferenceColor::Red => write!(f, "red"),
            ReferenceColor::Green => write!(f, "green"),
            ReferenceColor::Blue => write!(f, "blue"),
        }
    }
}

/// One emitted entry of a scan
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// Entry without the image suffix, reported without inspection
    Unexpected(String),
    /// Image entry whose pixels are all zero
    Blank(String),
    SolidColor {
        name: String,
        color: ReferenceColor,
        share: f32,
    },
    Undecodable {
        name: String,
        reason: String,
    },
}

impl Finding {
    pub fn name(&self) -> &str {
        match self {
            Finding::Unexpected(name) | Finding::Blank(name) => name,
            Finding::SolidColor { name, .. } | Finding::Undecodable { name, .. } => name,
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, Finding::Unexpected(_))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory whose entries are listed (non-recursive)
    pub directory: PathBuf,
    /// Case-sensitive filename suffix marking an image entry
    pub image_suffix: String,
    pub decode_mode: DecodeMode,
    pub on_decode_failure: DecodeFailurePolicy,
    /// Percentage above which a reference color marks an image as solid,
    /// in `0.0..100.0`. `None` keeps the all-zero test.
    pub solid_color_threshold: Option<f32>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            image_suffix: DEFAULT_IMAGE_SUFFIX.to_string(),
            decode_mode: DecodeMode::default(),
            on_decode_failure: DecodeFailurePolicy::default(),
            solid_color_threshold: None,
        }
    }
}

impl ScanConfig {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.image_suffix = suffix.to_string();
        self
    }

    pub fn with_decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = mode;
        self
    }

    pub fn with_policy(mut self, policy: DecodeFailurePolicy) -> Self {
        self.on_decode_failure = policy;
        self
    }

    pub fn with_solid_threshold(mut self, threshold: f32) -> Self {
        self.solid_color_threshold = Some(threshold);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.image_suffix.is_empty() {
            return Err(ScanError::InvalidConfig(
                "image suffix must not be empty".to_string(),
            ));
        }

        if let Some(threshold) = self.solid_color_threshold {
            // share is compared with `>`, so 100 could never match
            if !(0.0..MAX_SHARE_PERCENT).contains(&threshold) {
                return Err(ScanError::InvalidConfig(format!(
                    "solid color threshold {} must be at least 0 and below 100",
                    threshold
                )));
            }
        }

        Ok(())
    }

    pub fn is_image_name(&self, name: &str) -> bool {
        name.ends_with(&self.image_suffix)
    }
}

/// How a single classified entry ended
#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    /// The entry is reported
    Emit(Finding),
    /// Image with content, nothing to report
    Keep,
    /// Undecodable image dropped under `DecodeFailurePolicy::Skip`
    Skip,
}

/// Totals over every classified entry of a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub entries: usize,
    pub images: usize,
    pub flagged: usize,
    pub kept: usize,
    pub undecodable: usize,
    pub skipped: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: &EntryOutcome) {
        self.entries += 1;
        match outcome {
            EntryOutcome::Emit(finding) => {
                if finding.is_image() {
                    self.images += 1;
                }
                match finding {
                    Finding::Unexpected(_) => {}
                    Finding::Blank(_) | Finding::SolidColor { .. } => self.flagged += 1,
                    Finding::Undecodable { .. } => self.undecodable += 1,
                }
            }
            EntryOutcome::Keep => {
                self.images += 1;
                self.kept += 1;
            }
            EntryOutcome::Skip => {
                self.images += 1;
                self.skipped += 1;
            }
        }
    }
}
