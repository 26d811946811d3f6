//! Recursive discovery of project folders.
//!
//! A project folder is any directory below the scan root that directly
//! contains a `.gitignore`. The walk is depth-first in sorted name order and
//! never descends into folders whose base name is on the ignore list.
//! Symlinked directories are not followed, so link cycles cannot make the walk
//! diverge; an optional depth bound caps very deep trees.

use crate::core::ignore_patterns::IGNORE_FILE;
use crate::core::state::FolderRecord;
use std::collections::HashSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Folder names that are never scanned
pub const BUILTIN_IGNORED_FOLDERS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    ".husky",
    "vendor",
    ".idea",
    ".vscode",
    "dist",
    "build",
    "out",
    "coverage",
    "tmp",
    "temp",
    "target",
];

#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    ignored: HashSet<String>,
    max_depth: Option<usize>,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryScanner {
    /// Scanner using the built-in ignore list only
    pub fn new() -> Self {
        Self {
            ignored: BUILTIN_IGNORED_FOLDERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            max_depth: None,
        }
    }

    /// Add user-configured folder names to the ignore list
    pub fn with_ignored_folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Limit how many levels below the root are visited. Depth 1 means only
    /// the root's immediate children can be emitted.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored.contains(name)
    }

    /// Every folder under `root` that directly contains a `.gitignore`, with
    /// language fields unset. The root itself is never emitted.
    pub fn scan(&self, root: &Path) -> Vec<FolderRecord> {
        let mut walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let entries = walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.skips(entry));

        let mut records = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable entry under '{}': {e}", root.display());
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            if path.join(IGNORE_FILE).exists() {
                records.push(FolderRecord::new(display_name(root, path), path));
            }
        }

        log::debug!(
            "Scan of '{}' found {} project folders",
            root.display(),
            records.len()
        );
        records
    }

    fn skips(&self, entry: &DirEntry) -> bool {
        let skipped =
            entry.file_type().is_dir() && self.is_ignored(&entry.file_name().to_string_lossy());
        if skipped {
            log::trace!("Ignoring folder '{}'", entry.path().display());
        }
        skipped
    }
}

/// Path of `path` relative to `root`, without leading separators
fn display_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .to_string_lossy()
        .trim_start_matches(['/', '\\'])
        .to_string()
}
