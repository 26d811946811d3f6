//! Literal ignore patterns read from a directory's `.gitignore`.
//!
//! Patterns are compared as exact strings against entry names. There is no glob,
//! negation or anchoring support: `*.log` never matches `a.log`, and `build/`
//! only matches an entry literally named `build`.

use std::fs;
use std::path::Path;

/// Name of the ignore file read from each directory
pub const IGNORE_FILE: &str = ".gitignore";

/// Ordered literal patterns from one ignore file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePatterns {
    patterns: Vec<String>,
}

impl IgnorePatterns {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Read `<directory>/.gitignore`. A missing or unreadable file yields an
    /// empty set, which ignores nothing.
    pub fn load(directory: &Path) -> Self {
        let path = directory.join(IGNORE_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                if path.exists() {
                    log::debug!("Could not read '{}': {e}", path.display());
                }
                Self::default()
            }
        }
    }

    /// Split on line breaks, trim, and drop blank lines and `#` comments
    pub fn parse(content: &str) -> Self {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { patterns }
    }

    /// True iff `name` equals a pattern, or a pattern with one trailing `/`
    /// removed.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| match pattern.strip_suffix('/') {
            Some(stripped) => name == stripped,
            None => name == pattern,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_drops_comments_and_blanks() {
        let patterns = IgnorePatterns::parse("# deps\nnode_modules/\n\n   \n  dist  \r\n#x\n.env");
        assert_eq!(patterns.patterns(), &["node_modules/", "dist", ".env"]);
    }

    #[test]
    fn test_is_ignored_exact_match() {
        let patterns = IgnorePatterns::parse("dist\n.env");
        assert!(patterns.is_ignored("dist"));
        assert!(patterns.is_ignored(".env"));
        assert!(!patterns.is_ignored("dist2"));
        assert!(!patterns.is_ignored("dis"));
    }

    #[test]
    fn test_is_ignored_strips_one_trailing_separator() {
        let patterns = IgnorePatterns::parse("build/\nout//");
        assert!(patterns.is_ignored("build"));
        assert!(!patterns.is_ignored("build/"));
        assert!(patterns.is_ignored("out/"));
        assert!(!patterns.is_ignored("out"));
    }

    #[test]
    fn test_is_ignored_has_no_glob_semantics() {
        let patterns = IgnorePatterns::parse("*.log\n!keep.txt\n/target");
        assert!(!patterns.is_ignored("a.log"));
        assert!(!patterns.is_ignored("keep.txt"));
        assert!(!patterns.is_ignored("target"));
        assert!(patterns.is_ignored("*.log"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let patterns = IgnorePatterns::load(temp_dir.path());
        assert!(patterns.is_empty());
        assert!(!patterns.is_ignored("anything"));
    }

    #[test]
    fn test_load_reads_ignore_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(IGNORE_FILE), "target/\n# comment\nCargo.lock\n")
            .unwrap();
        let patterns = IgnorePatterns::load(temp_dir.path());
        assert!(patterns.is_ignored("target"));
        assert!(patterns.is_ignored("Cargo.lock"));
        assert_eq!(patterns.patterns().len(), 2);
    }

    #[test]
    fn test_load_unreadable_ignore_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        // A directory named .gitignore cannot be read as a file
        std::fs::create_dir(temp_dir.path().join(IGNORE_FILE)).unwrap();
        assert!(IgnorePatterns::load(temp_dir.path()).is_empty());
    }
}
