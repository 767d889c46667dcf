//! StreamingWalker - depth-first walk that streams each node to an output sink

use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ReadError;
use crate::file_utils::{file_size, read_text_file};

use super::config::CaptureConfig;
use super::filter::ExclusionFilter;
use super::utils::dir_name;

/// Callback for streaming output - receives nodes in pre-order.
pub trait StreamingOutput {
    /// A directory about to have its files listed.
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()>;

    /// A file inside the most recently output directory. `size` is `None`
    /// when the file could not be stat'ed; `content` then carries that error.
    fn output_file(
        &mut self,
        name: &str,
        depth: usize,
        size: Option<u64>,
        content: Result<String, ReadError>,
    ) -> io::Result<()>;

    /// Called once, after every subtree has been processed.
    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// Counts gathered over one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Directories that got a line, root included
    pub dirs: usize,
    /// Files that got a metadata line
    pub files: usize,
    /// Files whose content was replaced by a diagnostic
    pub unreadable: usize,
}

/// One directory's immediate children, split and filtered.
#[derive(Debug, Default)]
struct DirListing {
    subdirs: Vec<PathBuf>,
    files: Vec<(String, PathBuf)>,
}

/// Streaming tree walker: writes as it goes, holding only the current
/// directory's listing per level of recursion.
pub struct StreamingWalker {
    config: CaptureConfig,
    filter: ExclusionFilter,
}

impl StreamingWalker {
    pub fn new(config: CaptureConfig) -> Self {
        let filter = ExclusionFilter::from_config(&config);
        Self { config, filter }
    }

    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// Walk `root` and stream it into `output`.
    ///
    /// Returns `Ok(None)` without emitting anything if `root` is not a
    /// directory. I/O errors from `output` abort the walk; errors reading
    /// the tree itself never do.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<Option<WalkSummary>> {
        if !root.is_dir() {
            return Ok(None);
        }

        let mut summary = WalkSummary::default();
        self.walk_dir_streaming(root, 0, output, &mut summary)?;
        output.finish(&summary)?;
        Ok(Some(summary))
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        // A directory we cannot list is dropped entirely, line included
        let listing = match self.read_listing(path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable directory");
                return Ok(());
            }
        };

        debug!(path = %path.display(), depth, "visiting directory");
        output.output_dir(&dir_name(path), depth)?;
        summary.dirs += 1;

        for (name, file_path) in listing.files {
            let (size, content) = match file_size(&file_path) {
                Ok(size) => (
                    Some(size),
                    read_text_file(&file_path, self.config.max_file_size),
                ),
                Err(e) => (None, Err(ReadError::from(e))),
            };
            if let Err(ref e) = content {
                warn!(path = %file_path.display(), error = %e, "unable to read file content");
                summary.unreadable += 1;
            }
            output.output_file(&name, depth, size, content)?;
            summary.files += 1;
        }

        for subdir in listing.subdirs {
            self.walk_dir_streaming(&subdir, depth + 1, output, summary)?;
        }

        Ok(())
    }

    /// Read a directory, drop excluded entries, and order what remains.
    ///
    /// Files are sorted by name. Subdirectories keep the order the
    /// filesystem returned them in unless `sort_dirs` is set.
    fn read_listing(&self, path: &Path) -> io::Result<DirListing> {
        let mut listing = DirListing::default();

        for entry in std::fs::read_dir(path)?.filter_map(|e| e.ok()) {
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = entry.path();

            if is_real_dir(&entry) {
                if !self.filter.is_excluded_dir(&name) {
                    listing.subdirs.push(entry_path);
                }
            } else if entry_path.is_dir() {
                // Symlink to a directory: never followed, never listed
                continue;
            } else if !self.filter.is_excluded_file(&name) {
                listing.files.push((name, entry_path));
            }
        }

        listing.files.sort_by(|a, b| a.0.cmp(&b.0));
        if self.config.sort_dirs {
            listing.subdirs.sort();
        }

        Ok(listing)
    }
}

/// A directory entry that is a directory itself, not a link to one.
fn is_real_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_ok_and(|t| t.is_dir())
}
