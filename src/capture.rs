//! The capture operation: walk a root and write its report to a file

use std::fs::File;
use std::io::BufWriter;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::{CaptureError, IoResultExt};
use crate::output::ReportFormatter;
use crate::tree::{CaptureConfig, StreamingWalker, WalkSummary};

/// Report file name the CLI writes into the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "codebase_structure.txt";

/// Outcome of a successful capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Absolute form of the root, as written in the header
    pub root: PathBuf,
    /// Absolute path of the report that was written
    pub output: PathBuf,
    pub walk: WalkSummary,
}

/// Walk `root` and write the full report to `output`, truncating it.
///
/// Fails with `InvalidRoot` before touching `output` if `root` is not a
/// directory. Files that cannot be read are noted inline and never fail
/// the run.
pub fn generate(
    root: &Path,
    output: &Path,
    config: &CaptureConfig,
) -> Result<CaptureSummary, CaptureError> {
    if !root.is_dir() {
        return Err(CaptureError::InvalidRoot(root.to_path_buf()));
    }

    let started = Instant::now();
    let abs_root = absolute_path(root);

    let file = File::create(output).map_err(|source| CaptureError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let walker = StreamingWalker::new(config.clone());
    let mut formatter = ReportFormatter::new(BufWriter::new(file), walker.filter());
    formatter.write_header(&abs_root).with_path(output)?;

    let walk = walker
        .walk_streaming(root, &mut formatter)
        .with_path(output)?
        .ok_or_else(|| CaptureError::InvalidRoot(root.to_path_buf()))?;

    let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
    info!(
        root = %abs_root.display(),
        dirs = walk.dirs,
        files = walk.files,
        unreadable = walk.unreadable,
        elapsed = %humantime::format_duration(elapsed),
        "capture complete"
    );

    Ok(CaptureSummary {
        root: abs_root,
        output: absolute_path(output),
        walk,
    })
}

/// Absolute, lexically normalized form of `path`.
///
/// `.` components are dropped and `..` pops its parent. Symlinks are not
/// resolved, so this works for paths that do not exist yet.
pub fn absolute_path(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
