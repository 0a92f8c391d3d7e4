use clap::Parser;
use std::path::PathBuf;

use blankscan::types::{DEFAULT_DIRECTORY, DEFAULT_IMAGE_SUFFIX};
use blankscan::{DecodeFailurePolicy, DecodeMode, ScanConfig};

#[derive(Parser, Debug)]
#[command(name = "blankscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List blank images and unexpected files in a directory", long_about = None)]
pub struct Cli {
    /// Directory to scan (not recursive)
    #[arg(default_value = DEFAULT_DIRECTORY)]
    pub directory: PathBuf,

    /// Filename suffix identifying image entries (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_IMAGE_SUFFIX)]
    pub suffix: String,

    #[arg(short = 'm', long, value_enum, default_value_t = DecodeMode::Grayscale)]
    pub decode_mode: DecodeMode,

    /// What to do with image entries that fail to decode
    #[arg(long, value_enum, default_value_t = DecodeFailurePolicy::FailFast)]
    pub on_decode_failure: DecodeFailurePolicy,

    /// Flag images where black, white, red, green or blue covers more than PERCENT of pixels
    #[arg(long, value_name = "PERCENT")]
    pub solid_threshold: Option<f32>,

    /// Show a progress spinner on stderr
    #[arg(long)]
    pub progress: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        let config = ScanConfig::new(&self.directory)
            .with_suffix(&self.suffix)
            .with_decode_mode(self.decode_mode)
            .with_policy(self.on_decode_failure);

        match self.solid_threshold {
            Some(threshold) => config.with_solid_threshold(threshold),
            None => config,
        }
    }
}
