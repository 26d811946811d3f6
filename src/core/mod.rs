//! Core functionality for the project-navigator tool.
//!
//! This module provides the detection engine, the project scanner and its
//! cache, persisted settings, and the UI building blocks shared by commands.

pub mod colors;
pub mod command_init;
pub mod config;
pub mod detector;
pub mod dirs;
pub mod editor;
pub mod error;
pub mod extension_counter;
pub mod ignore_patterns;
pub mod language;
pub mod output;
pub mod scan_cache;
pub mod scanner;
pub mod selection;
pub mod state;
pub mod store;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ProjectNavigatorError, Result};

// === Language detection ===
// Labels, icons and the detection cascade with its per-path memo
pub use detector::{classify, LanguageDetector};
pub use language::{Detection, Language};

// === Scanning ===
// Project discovery and the time-bounded scan cache
pub use scan_cache::ScanCache;
pub use scanner::DirectoryScanner;
pub use state::{CachedScan, FolderRecord};
pub use store::ScanStore;

// === Settings ===
// Persisted user preferences: root, editors, ignored folders
pub use config::{CustomEditor, CustomIgnoredFolder, Settings};

// === Index parsing ===
// Parser for handling user input like "1 3-5,8" -> [1, 3, 4, 5, 8]
pub use selection::{parse_indices, Selection};

// === Command initialization ===
// Shared setup for commands that act on rows of the last scan
pub use command_init::{FolderSelectionContext, OpenCommandInit};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_colored_index, get_colored_language, get_language_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    print_error, print_error_with_structured_usage, print_info, print_section_header,
    print_success, print_warning,
};
