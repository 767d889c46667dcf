//! Exclusion rules applied while walking

use super::config::CaptureConfig;
use super::utils::NameRule;

/// The two exclusion rules: one directory name and one file name.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    dir: NameRule,
    file: NameRule,
}

impl ExclusionFilter {
    pub fn new(dir: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            dir: NameRule::new(dir),
            file: NameRule::new(file),
        }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::new(&config.excluded_dir, &config.excluded_file)
    }

    /// Whether a subdirectory should be pruned before recursion.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.dir.matches(name)
    }

    /// Whether a file should be dropped from its directory's listing.
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.file.matches(name)
    }

    /// Trailer text naming both rules, e.g. `node_modules/, package-lock.json`.
    pub fn describe(&self) -> String {
        format!("{}/, {}", self.dir.as_str(), self.file.as_str())
    }
}
