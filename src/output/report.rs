//! Plain-text report formatter
//!
//! This module provides `ReportFormatter`, which writes the walked tree
//! into any `Write` sink as it is streamed from `StreamingWalker`.

use std::io::{self, Write};
use std::path::Path;

use crate::error::ReadError;
use crate::file_utils::fence_tag;
use crate::tree::{ExclusionFilter, StreamingOutput, WalkSummary, indent};

const HEADER_RULE_WIDTH: usize = 50;
const FENCE: &str = "```";

/// Report formatter - appends every node to the sink in traversal order.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct ReportFormatter<W: Write> {
    out: W,
    excluded: String,
}

impl<W: Write> ReportFormatter<W> {
    pub fn new(out: W, filter: &ExclusionFilter) -> Self {
        Self {
            out,
            excluded: filter.describe(),
        }
    }

    /// Write the title line and rule. Must come before the walk starts.
    pub fn write_header(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "Codebase structure for: {}", root.display())?;
        writeln!(self.out, "{}", "=".repeat(HEADER_RULE_WIDTH))?;
        writeln!(self.out)
    }

    /// Take back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for ReportFormatter<W> {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}{}/", indent(depth), name)
    }

    fn output_file(
        &mut self,
        name: &str,
        depth: usize,
        size: Option<u64>,
        content: Result<String, ReadError>,
    ) -> io::Result<()> {
        let sub_indent = indent(depth + 1);
        match size {
            Some(bytes) => writeln!(self.out, "{}{} ({} bytes)", sub_indent, name, bytes)?,
            None => writeln!(self.out, "{}{} (size unavailable)", sub_indent, name)?,
        }
        writeln!(self.out, "{}Content:", sub_indent)?;

        match content {
            Ok(text) => {
                writeln!(self.out, "{}{}", FENCE, fence_tag(name))?;
                self.out.write_all(text.as_bytes())?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", FENCE)?;
            }
            Err(e) => {
                writeln!(
                    self.out,
                    "{}  Unable to read file content: {}",
                    sub_indent, e
                )?;
            }
        }
        writeln!(self.out)
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Excluded: {}", self.excluded)?;
        self.out.flush()
    }
}
