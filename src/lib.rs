//! treedump - capture a project tree and every file's contents in one report

pub mod capture;
pub mod error;
pub mod file_utils;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use capture::{CaptureSummary, DEFAULT_OUTPUT_FILE, absolute_path, generate};
pub use error::{CaptureError, ReadError};
pub use output::ReportFormatter;
pub use tree::{
    CaptureConfig, EXCLUDED_DIR, EXCLUDED_FILE, ExclusionFilter, StreamingOutput,
    StreamingWalker, WalkSummary,
};
