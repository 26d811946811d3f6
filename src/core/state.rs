//! Scan result data structures.
//!
//! This module defines the records produced by a scan and the single cached
//! generation the scan cache keeps between calls.
//!
//! # Public API
//! - [`FolderRecord`]: One project folder with its detected language
//! - [`CachedScan`]: One cached scan generation with its timestamp
//!
//! # Cache Strategy
//! - **JSON serialization**: Human-readable cache files for debugging
//! - **Timestamping**: Track when the scan was taken, validity is decided by the cache
//! - **Root tracking**: The slot records which root produced it

use crate::core::language::{Detection, Language, FOLDER_ICON};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Path relative to the scan root
    pub display_name: String,
    pub path: PathBuf,
    pub language: Language,
    pub icon: String,
}

impl FolderRecord {
    /// Record as emitted by the scanner, before detection
    pub fn new(display_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            display_name: display_name.into(),
            path: path.into(),
            language: Language::Unknown,
            icon: FOLDER_ICON.to_string(),
        }
    }

    pub fn apply_detection(&mut self, detection: Detection) {
        self.language = detection.language;
        self.icon = detection.icon;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedScan {
    pub root: PathBuf,
    pub folders: Vec<FolderRecord>,
    pub timestamp: DateTime<Utc>,
}

impl CachedScan {
    pub fn new(root: PathBuf, folders: Vec<FolderRecord>, timestamp: DateTime<Utc>) -> Self {
        Self {
            root,
            folders,
            timestamp,
        }
    }

    /// True while `timestamp + expiry` is still in the future. An expiry
    /// past the end of representable time never runs out.
    pub fn is_fresh(&self, expiry: TimeDelta, now: DateTime<Utc>) -> bool {
        self.timestamp
            .checked_add_signed(expiry)
            .map_or(true, |expires_at| expires_at > now)
    }
}
