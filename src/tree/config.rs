//! Configuration types for the report walker

/// Directory name never descended into.
pub const EXCLUDED_DIR: &str = "node_modules";

/// File name never listed.
pub const EXCLUDED_FILE: &str = "package-lock.json";

/// Configuration for a capture run.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Directory name (or glob) pruned before recursion
    pub excluded_dir: String,
    /// File name (or glob) dropped from every listing
    pub excluded_file: String,
    /// Files larger than this get a diagnostic instead of their content.
    /// `None` reads every file fully, however large.
    pub max_file_size: Option<u64>,
    /// Visit subdirectories in sorted order instead of filesystem order
    pub sort_dirs: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            excluded_dir: EXCLUDED_DIR.to_string(),
            excluded_file: EXCLUDED_FILE.to_string(),
            max_file_size: None,
            sort_dirs: false,
        }
    }
}
