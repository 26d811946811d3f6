//! Per-OS settings and cache locations.
//!
//! `XDG_CONFIG_HOME` and `XDG_CACHE_HOME` take precedence on every platform
//! when set to a non-empty value.

use crate::core::error::{ProjectNavigatorError, Result};
use std::path::PathBuf;

const APP_DIRECTORY: &str = "project-navigator";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = xdg_override("XDG_CONFIG_HOME")
        .or_else(|| match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => {
                dirs::home_dir().map(|home| home.join(".config"))
            }
            "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
            _ => dirs::config_dir(),
        })
        .ok_or(ProjectNavigatorError::ConfigDirectoryNotFound)?;

    Ok(base.join(APP_DIRECTORY))
}

pub fn get_cache_directory() -> Result<PathBuf> {
    let base = xdg_override("XDG_CACHE_HOME")
        .or_else(|| match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => {
                dirs::home_dir().map(|home| home.join(".cache"))
            }
            "macos" => dirs::home_dir().map(|home| home.join("Library/Caches")),
            _ => dirs::cache_dir(),
        })
        .ok_or(ProjectNavigatorError::CacheDirectoryNotFound)?;

    Ok(base.join(APP_DIRECTORY))
}

fn xdg_override(variable: &str) -> Option<PathBuf> {
    std::env::var_os(variable)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
