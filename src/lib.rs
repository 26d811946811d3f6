//! Project Navigator - find project folders under a root and open them in the right editor.
//!
//! The library scans a directory tree for folders that carry a `.gitignore`,
//! classifies the primary language of each one with a layered heuristic, and
//! caches the result so repeated listings stay fast.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Language detection and the extension map
//! - Project scanning with a time-bounded cache
//! - Persisted settings and scan storage
//! - Index parsing and validation
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    classify,
    // Color system
    get_colored_language,
    get_language_color_style,
    parse_indices,
    render_template,
    render_template_plain,
    strip_ansi_codes,

    CachedScan,
    CustomEditor,
    CustomIgnoredFolder,
    Detection,
    DirectoryScanner,
    FolderRecord,
    FolderSelectionContext,
    Language,
    // Language detection
    LanguageDetector,
    OpenCommandInit,
    // Error handling
    ProjectNavigatorError,
    Result,
    ScanCache,
    ScanStore,
    Selection,
    Settings,

    TemplateContext,
    // UI and formatting
    Templates,
    TEMPLATES,
};
