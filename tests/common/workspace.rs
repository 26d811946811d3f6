//! Sandboxed workspaces for integration tests
//!
//! A [`TestWorkspace`] owns a temporary directory holding a `projects/` tree
//! to scan plus private config and cache homes, so tests never touch the
//! user's real settings.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The TempDir must be kept alive for the duration of the test to prevent
/// cleanup.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub config_home: PathBuf,
    pub cache_home: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().join("projects");
        let config_home = temp_dir.path().join("config");
        let cache_home = temp_dir.path().join("cache");
        fs::create_dir_all(&root)?;

        Ok(Self {
            temp_dir,
            root,
            config_home,
            cache_home,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The binary with isolated settings/cache and colours disabled
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("project-navigator")?;
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_CACHE_HOME", &self.cache_home)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_home.join("project-navigator").join("config.json")
    }

    pub fn scan_file(&self) -> PathBuf {
        self.cache_home.join("project-navigator").join("scan.json")
    }

    /// Create `relative` under the scan root as a project folder (with a
    /// `.gitignore`) containing `files`
    pub fn create_project(&self, relative: &str, files: &[&str]) -> anyhow::Result<PathBuf> {
        let dir = self.root.join(relative);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(".gitignore"), "")?;
        for file in files {
            create_file(&dir, file, "")?;
        }
        Ok(dir)
    }
}

/// Write `content` to `dir/relative`, creating parent folders
pub fn create_file(dir: &Path, relative: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
