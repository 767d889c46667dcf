//! Shared utility functions for tree walking

use std::path::{Component, Path};

use glob::Pattern;

/// An exclusion rule matched against entry names.
///
/// Exact names always match themselves; the rule is also compiled once as a
/// glob. Text that is not a valid pattern only matches literally.
#[derive(Debug, Clone)]
pub struct NameRule {
    name: String,
    pattern: Option<Pattern>,
}

impl NameRule {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let pattern = Pattern::new(&name).ok();
        Self { name, pattern }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.name == candidate || self.pattern.as_ref().is_some_and(|p| p.matches(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// Display name for a directory line: the last component of the path.
pub fn dir_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir) | Some(Component::Prefix(_)) => String::new(),
        Some(Component::CurDir) | None => ".".to_string(),
    }
}

/// Two spaces per level.
pub fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
