//! On-disk persistence of the scan slot.
//!
//! Every CLI invocation is a new process, so the cached scan generation is
//! written to `scan.json` in the cache directory after `list` and read back
//! by the next `list` or `open`.

use crate::core::dirs::get_cache_directory;
use crate::core::error::{ProjectNavigatorError, Result};
use crate::core::state::CachedScan;
use std::fs;
use std::path::{Path, PathBuf};

const SCAN_FILE: &str = "scan.json";

#[derive(Debug, Clone)]
pub struct ScanStore {
    file: PathBuf,
}

impl ScanStore {
    /// Store at the default cache location
    pub fn open() -> Result<Self> {
        let cache_dir = get_cache_directory().map_err(|e| {
            log::warn!("Failed to determine cache directory: {e}");
            e
        })?;
        Ok(Self::at(cache_dir.join(SCAN_FILE)))
    }

    pub fn at(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Persisted slot, `None` when nothing was saved yet
    pub fn load(&self) -> Result<Option<CachedScan>> {
        log::debug!("Looking for scan cache: {}", self.file.display());

        if !self.file.exists() {
            log::debug!("Scan cache does not exist: {}", self.file.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file).map_err(|e| {
            log::error!("Failed to read cache file '{}': {e}", self.file.display());
            ProjectNavigatorError::cache_read_failed(&self.file, e)
        })?;

        let scan: CachedScan = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse cache file '{}': {e}", self.file.display());
            ProjectNavigatorError::cache_parse_failed(&self.file, e)
        })?;

        log::debug!(
            "Loaded {} cached folders for '{}'",
            scan.folders.len(),
            scan.root.display()
        );
        Ok(Some(scan))
    }

    pub fn save(&self, scan: &CachedScan) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::error!(
                    "Failed to create cache directory '{}': {e}",
                    parent.display()
                );
                return Err(ProjectNavigatorError::cache_directory_creation_failed(
                    parent, e,
                ));
            }
        }

        let json = serde_json::to_string_pretty(scan).map_err(|e| {
            log::error!("Failed to serialize cache data: {e}");
            ProjectNavigatorError::cache_serialization_failed(e)
        })?;

        if let Err(e) = fs::write(&self.file, json) {
            log::error!("Failed to write cache file '{}': {e}", self.file.display());
            return Err(ProjectNavigatorError::cache_write_failed(&self.file, e));
        }

        log::debug!("Cached {} folders", scan.folders.len());
        Ok(())
    }
}
