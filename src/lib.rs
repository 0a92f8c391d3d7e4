pub mod analysis;
pub mod decode;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod types;

pub use error::{Result, ScanError};
pub use scanner::{BlankImageScanner, Scan};
pub use types::{
    DecodeFailurePolicy, DecodeMode, EntryOutcome, Finding, ReferenceColor, ScanConfig, ScanSummary,
};
