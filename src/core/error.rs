//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ProjectNavigatorError`] which covers every failure the
//! command layer can report. The detection engine and the directory scanner do
//! not use it: filesystem problems there degrade to "skip" or `Unknown`.
//!
//! # Public API
//! - [`ProjectNavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ProjectNavigatorError>`
//!
//! # Error Categories
//! - **Settings**: config directory lookup, read/parse/write of `config.json`
//! - **Scan cache**: read/parse/write of the persisted scan slot
//! - **Index parsing**: invalid format, out of bounds, validation errors
//! - **User input**: missing required fields
//! - **Editor launch**: invalid command template, spawn or exit failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for project-navigator
#[derive(Error, Debug)]
pub enum ProjectNavigatorError {
    // Root folder errors
    #[error("No root folder configured. Pass --root <dir> or run 'config root <dir>'")]
    NoRootFolder,

    #[error("Root folder does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Settings errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Invalid value for {setting}: '{value}'")]
    InvalidSettingValue { setting: String, value: String },

    #[error("Failed to read settings file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write settings file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Scan cache errors
    #[error("Could not find cache directory")]
    CacheDirectoryNotFound,

    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize cache data: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read cache file '{path}': {source}")]
    CacheReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse cache file '{path}': {source}")]
    CacheParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("No cached project list. Run 'list' first to scan for projects.")]
    NoCachedScan,

    // Index parsing errors
    #[error("No indices provided. Usage: <command> <indices>\nExample: open 1 3-5,8")]
    NoIndicesProvided,

    #[error("No valid indices provided. Use format like: 1, 1-3, or 1,3,5")]
    NoValidIndices,

    #[error("Invalid range format: '{range}'. Use format like '3-6'")]
    InvalidRangeFormat { range: String },

    #[error("Invalid number in range: '{number}'")]
    InvalidRangeNumber { number: String },

    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRangeOrder { start: usize, end: usize },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    #[error("Index must be positive (got 0)")]
    ZeroIndex,

    #[error("Index {index} is out of range (1-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("No entries available to operate on")]
    NothingToSelect,

    // User input validation
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    // Editor launch errors
    #[error("Editor command is invalid: '{command}'")]
    EditorCommandInvalid { command: String },

    #[error("Failed to start editor '{executable}': {source}")]
    EditorSpawnFailed {
        executable: String,
        source: std::io::Error,
    },

    #[error("Editor '{executable}' exited with an error: {message}")]
    EditorExitFailed { executable: String, message: String },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ProjectNavigatorError
pub type Result<T> = std::result::Result<T, ProjectNavigatorError>;

impl ProjectNavigatorError {
    /// Create a root not found error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn invalid_setting_value(setting: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidSettingValue {
            setting: setting.into(),
            value: value.to_string(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { index, max }
    }

    /// Create an invalid range format error
    pub fn invalid_range_format(range: impl Into<String>) -> Self {
        Self::InvalidRangeFormat {
            range: range.into(),
        }
    }

    /// Create an invalid range number error
    pub fn invalid_range_number(number: impl Into<String>) -> Self {
        Self::InvalidRangeNumber {
            number: number.into(),
        }
    }

    /// Create an invalid range order error
    pub fn invalid_range_order(start: usize, end: usize) -> Self {
        Self::InvalidRangeOrder { start, end }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn editor_command_invalid(command: impl Into<String>) -> Self {
        Self::EditorCommandInvalid {
            command: command.into(),
        }
    }

    pub fn editor_spawn_failed(executable: impl Into<String>, source: std::io::Error) -> Self {
        Self::EditorSpawnFailed {
            executable: executable.into(),
            source,
        }
    }

    pub fn editor_exit_failed(executable: impl Into<String>, message: impl Into<String>) -> Self {
        Self::EditorExitFailed {
            executable: executable.into(),
            message: message.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache read failed error
    pub fn cache_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache parse failed error
    pub fn cache_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CacheParseFailed {
            path: path.into(),
            source,
        }
    }
}
