//! Error types for report generation

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors that abort a capture run.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The root does not exist or is not a directory.
    #[error("{} is not a valid directory.", .0.display())]
    InvalidRoot(PathBuf),

    /// The report file could not be created or truncated.
    #[error("cannot open '{}' for writing: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the report failed part-way through.
    #[error("error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single file's content could not be included in the report.
///
/// These never abort a run; the message is written inline instead of the
/// fenced content block.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Decode(#[from] FromUtf8Error),

    #[error("file is {size} bytes, over the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("not a regular file")]
    NotRegular,
}

/// Maps I/O results into `CaptureError::Write` with the report path attached.
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, CaptureError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T, CaptureError> {
        self.map_err(|source| CaptureError::Write {
            path: path.into(),
            source,
        })
    }
}
