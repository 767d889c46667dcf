//! Directory tree walking logic
//!
//! `StreamingWalker` visits the tree depth-first and hands each directory
//! and file to a `StreamingOutput` as soon as it is reached. Nothing about
//! the tree is kept once a directory's subtree has been written.

mod config;
mod filter;
mod streaming;
mod utils;

pub use config::{CaptureConfig, EXCLUDED_DIR, EXCLUDED_FILE};
pub use filter::ExclusionFilter;
pub use streaming::{StreamingOutput, StreamingWalker, WalkSummary};
pub use utils::{dir_name, indent};
