//! Counting files by extension.
//!
//! Two variants are provided:
//! - [`count_by_extension`] walks every subdirectory (symlinked directories are
//!   not followed) and is used for per-project statistics.
//! - [`count_by_extension_flat`] only looks at the immediate children and is
//!   what the detector uses to disambiguate between candidate languages that
//!   sit next to a build marker.
//!
//! Unreadable directories are skipped, so both variants return partial counts
//! rather than errors. Every requested extension is present in the result,
//! with zero when no file matched.

use crate::core::language::extension_of;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Extension (lowercase, dot-prefixed) → number of files
pub type ExtensionCounts = BTreeMap<String, usize>;

/// Recursively count files whose extension is in `extensions`
pub fn count_by_extension(directory: &Path, extensions: &[&str]) -> ExtensionCounts {
    let mut counts = empty_counts(extensions);
    walk(directory, &mut counts, true);
    counts
}

/// Count immediate children of `directory` whose extension is in `extensions`
pub fn count_by_extension_flat(directory: &Path, extensions: &[&str]) -> ExtensionCounts {
    let mut counts = empty_counts(extensions);
    walk(directory, &mut counts, false);
    counts
}

/// Count for one extension, zero when absent
pub fn count_of(counts: &ExtensionCounts, extension: &str) -> usize {
    counts.get(extension).copied().unwrap_or(0)
}

fn empty_counts(extensions: &[&str]) -> ExtensionCounts {
    extensions.iter().map(|ext| (ext.to_lowercase(), 0)).collect()
}

fn walk(directory: &Path, counts: &mut ExtensionCounts, recursive: bool) {
    let walker = WalkDir::new(directory).min_depth(1).follow_links(false);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry under '{}': {e}", directory.display());
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }

        if let Some(ext) = extension_of(&entry.file_name().to_string_lossy()) {
            if let Some(count) = counts.get_mut(&ext) {
                *count += 1;
            }
        }
    }
}
