//! Shared setup for commands that act on rows of the last `list`.
//!
//! `open` and any future row-based command need the same steps: load the
//! persisted scan, make sure it holds folders, and validate the requested
//! indices against it. [`OpenCommandInit`] performs them once.
//!
//! # Initialization Steps
//! 1. **Argument check**: at least one index argument
//! 2. **Cache loading**: the scan slot saved by `list`
//! 3. **Folder check**: the slot must hold folders
//! 4. **Index parsing**: indices validated against the folder count

use crate::core::{
    error::{ProjectNavigatorError, Result},
    selection::Selection,
    state::{CachedScan, FolderRecord},
    store::ScanStore,
};

/// Loaded scan plus the validated selection
#[derive(Debug)]
pub struct FolderSelectionContext {
    pub scan: CachedScan,
    pub selection: Selection,
}

pub struct OpenCommandInit;

impl OpenCommandInit {
    /// Initialize from the default scan store
    pub fn initialize(indices_args: Vec<String>) -> Result<FolderSelectionContext> {
        Self::initialize_with_store(indices_args, &ScanStore::open()?)
    }

    pub fn initialize_with_store(
        indices_args: Vec<String>,
        store: &ScanStore,
    ) -> Result<FolderSelectionContext> {
        if indices_args.is_empty() {
            return Err(ProjectNavigatorError::NoIndicesProvided);
        }

        log::debug!("Loading cached scan for folder selection");
        let scan = store.load()?.ok_or(ProjectNavigatorError::NoCachedScan)?;

        if scan.folders.is_empty() {
            return Err(ProjectNavigatorError::NothingToSelect);
        }

        let selection = Selection::parse(&indices_args, scan.folders.len())?;
        log::debug!(
            "Selected {} of {} cached folders",
            selection.len(),
            scan.folders.len()
        );

        Ok(FolderSelectionContext { scan, selection })
    }
}

impl FolderSelectionContext {
    pub fn selected_folders(&self) -> Vec<&FolderRecord> {
        self.selection.pick(&self.scan.folders)
    }

    pub fn folder_count(&self) -> usize {
        self.scan.folders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn store_with(folders: &[&str]) -> (TempDir, ScanStore) {
        let temp = TempDir::new().unwrap();
        let store = ScanStore::at(temp.path().join("scan.json"));
        let records = folders
            .iter()
            .map(|name| FolderRecord::new(*name, format!("/work/{name}")))
            .collect();
        store
            .save(&CachedScan::new("/work".into(), records, Utc::now()))
            .unwrap();
        (temp, store)
    }

    #[test]
    fn test_selects_cached_folders() {
        let (_temp, store) = store_with(&["a", "b", "c"]);
        let context =
            OpenCommandInit::initialize_with_store(vec!["1,3".to_string()], &store).unwrap();

        let names: Vec<&str> = context
            .selected_folders()
            .iter()
            .map(|f| f.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(context.folder_count(), 3);
    }

    #[test]
    fn test_requires_a_cached_scan() {
        let temp = TempDir::new().unwrap();
        let store = ScanStore::at(temp.path().join("scan.json"));
        let err = OpenCommandInit::initialize_with_store(vec!["1".to_string()], &store).unwrap_err();
        assert!(err.to_string().contains("Run 'list' first"));
    }

    #[test]
    fn test_empty_scan_has_nothing_to_select() {
        let (_temp, store) = store_with(&[]);
        assert!(matches!(
            OpenCommandInit::initialize_with_store(vec!["1".to_string()], &store),
            Err(ProjectNavigatorError::NothingToSelect)
        ));
    }

    #[test]
    fn test_requires_indices() {
        let (_temp, store) = store_with(&["a"]);
        assert!(matches!(
            OpenCommandInit::initialize_with_store(vec![], &store),
            Err(ProjectNavigatorError::NoIndicesProvided)
        ));
    }

    #[test]
    fn test_out_of_range_index() {
        let (_temp, store) = store_with(&["a", "b"]);
        let err =
            OpenCommandInit::initialize_with_store(vec!["3".to_string()], &store).unwrap_err();
        assert_eq!(err.to_string(), "Index 3 is out of range (1-2 available)");
    }
}
