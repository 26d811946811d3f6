//! Time-bounded cache around scanning and detection.
//!
//! [`ScanCache`] owns one [`CachedScan`] slot, the scanner and the language
//! detector. A request is served from the slot while it is younger than the
//! expiry window and refresh was not forced; otherwise the root is rescanned,
//! every folder classified, and the slot replaced.
//!
//! The slot records the root it was taken from. With root matching enabled
//! (the default) a slot from another root counts as a miss; with it disabled
//! any fresh slot is returned, whichever root produced it.

use crate::core::detector::LanguageDetector;
use crate::core::scanner::DirectoryScanner;
use crate::core::state::{CachedScan, FolderRecord};
use chrono::{DateTime, TimeDelta, Utc};
use std::path::Path;

/// Default lifetime of a scan generation
pub const CACHE_EXPIRY_MINUTES: i64 = 120;

/// Longest lifetime `config ttl` accepts (one year)
pub const MAX_CACHE_EXPIRY_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug)]
pub struct ScanCache {
    scanner: DirectoryScanner,
    detector: LanguageDetector,
    expiry: TimeDelta,
    match_root: bool,
    slot: Option<CachedScan>,
}

impl ScanCache {
    pub fn new(scanner: DirectoryScanner) -> Self {
        Self {
            scanner,
            detector: LanguageDetector::new(),
            expiry: TimeDelta::minutes(CACHE_EXPIRY_MINUTES),
            match_root: true,
            slot: None,
        }
    }

    pub fn with_expiry(mut self, expiry: TimeDelta) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_root_matching(mut self, match_root: bool) -> Self {
        self.match_root = match_root;
        self
    }

    /// Seed the slot, typically from the persisted scan
    pub fn with_slot(mut self, slot: Option<CachedScan>) -> Self {
        self.slot = slot;
        self
    }

    pub fn get_folders(&mut self, root: &Path, force_refresh: bool) -> Vec<FolderRecord> {
        self.get_folders_at(root, force_refresh, Utc::now())
    }

    /// Same as [`get_folders`](Self::get_folders) with an explicit clock
    pub fn get_folders_at(
        &mut self,
        root: &Path,
        force_refresh: bool,
        now: DateTime<Utc>,
    ) -> Vec<FolderRecord> {
        if !force_refresh {
            if let Some(slot) = self.usable_slot(root, now) {
                log::debug!(
                    "Scan cache hit for '{}' ({} folders)",
                    root.display(),
                    slot.folders.len()
                );
                return slot.folders.clone();
            }
        }

        log::debug!(
            "Scan cache miss for '{}' (forced: {force_refresh})",
            root.display()
        );
        let mut folders = self.scanner.scan(root);
        for folder in &mut folders {
            let detection = self.detector.detect(&folder.path);
            folder.apply_detection(detection);
        }

        self.slot = Some(CachedScan::new(root.to_path_buf(), folders.clone(), now));
        folders
    }

    fn usable_slot(&self, root: &Path, now: DateTime<Utc>) -> Option<&CachedScan> {
        let slot = self.slot.as_ref()?;
        if !slot.is_fresh(self.expiry, now) {
            return None;
        }
        if self.match_root && slot.root != root {
            return None;
        }
        Some(slot)
    }

    pub fn slot(&self) -> Option<&CachedScan> {
        self.slot.as_ref()
    }

    pub fn into_slot(self) -> Option<CachedScan> {
        self.slot
    }

    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;
    use std::fs;
    use tempfile::TempDir;

    fn workspace() -> TempDir {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("service");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(".gitignore"), "").unwrap();
        fs::write(project.join("go.mod"), "module service\n").unwrap();
        temp
    }

    fn add_project(root: &Path, name: &str) {
        let project = root.join(name);
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(".gitignore"), "").unwrap();
    }

    #[test]
    fn test_first_call_scans_and_classifies() {
        let temp = workspace();
        let mut cache = ScanCache::new(DirectoryScanner::new());
        let folders = cache.get_folders(temp.path(), false);

        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].display_name, "service");
        assert_eq!(folders[0].language, Language::Go);
        assert_eq!(cache.slot().unwrap().folders, folders);
    }

    #[test]
    fn test_slot_reused_within_expiry() {
        let temp = workspace();
        let start = Utc::now();
        let mut cache = ScanCache::new(DirectoryScanner::new());
        let first = cache.get_folders_at(temp.path(), false, start);

        add_project(temp.path(), "later");
        let reused = cache.get_folders_at(temp.path(), false, start + TimeDelta::minutes(119));
        assert_eq!(reused, first);
    }

    #[test]
    fn test_rescan_after_expiry() {
        let temp = workspace();
        let start = Utc::now();
        let mut cache = ScanCache::new(DirectoryScanner::new());
        cache.get_folders_at(temp.path(), false, start);

        add_project(temp.path(), "later");
        let later = start + TimeDelta::minutes(121);
        let rescanned = cache.get_folders_at(temp.path(), false, later);
        assert_eq!(rescanned.len(), 2);
        assert_eq!(cache.slot().unwrap().timestamp, later);
    }

    #[test]
    fn test_force_refresh_bypasses_fresh_slot() {
        let temp = workspace();
        let start = Utc::now();
        let mut cache = ScanCache::new(DirectoryScanner::new());
        cache.get_folders_at(temp.path(), false, start);

        add_project(temp.path(), "later");
        let refreshed = cache.get_folders_at(temp.path(), true, start);
        assert_eq!(refreshed.len(), 2);
    }

    #[test]
    fn test_other_root_is_a_miss_when_matching() {
        let first = workspace();
        let second = TempDir::new().unwrap();
        let mut cache = ScanCache::new(DirectoryScanner::new());
        cache.get_folders(first.path(), false);

        assert!(cache.get_folders(second.path(), false).is_empty());
        assert_eq!(cache.slot().unwrap().root, second.path());
    }

    #[test]
    fn test_other_root_reuses_slot_without_matching() {
        let first = workspace();
        let second = TempDir::new().unwrap();
        let mut cache = ScanCache::new(DirectoryScanner::new()).with_root_matching(false);
        let original = cache.get_folders(first.path(), false);

        assert_eq!(cache.get_folders(second.path(), false), original);
    }

    #[test]
    fn test_seeded_slot_is_served() {
        let temp = TempDir::new().unwrap();
        let now = Utc::now();
        let seeded = CachedScan::new(
            temp.path().to_path_buf(),
            vec![FolderRecord::new("ghost", temp.path().join("ghost"))],
            now - TimeDelta::minutes(5),
        );
        let mut cache = ScanCache::new(DirectoryScanner::new()).with_slot(Some(seeded.clone()));
        assert_eq!(cache.get_folders_at(temp.path(), false, now), seeded.folders);
    }

    #[test]
    fn test_custom_expiry() {
        let temp = workspace();
        let start = Utc::now();
        let mut cache =
            ScanCache::new(DirectoryScanner::new()).with_expiry(TimeDelta::minutes(10));
        cache.get_folders_at(temp.path(), false, start);

        add_project(temp.path(), "later");
        let folders = cache.get_folders_at(temp.path(), false, start + TimeDelta::minutes(11));
        assert_eq!(folders.len(), 2);
    }
}
