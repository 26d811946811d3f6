use crate::core::dirs::get_config_directory;
use crate::core::error::{ProjectNavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "config.json";

pub const DEFAULT_EDITOR_COMMAND: &str = "code %s";

/// Editor override for one language
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomEditor {
    pub language: String,
    pub command: String,
}

/// User-configured folder name the scanner skips
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomIgnoredFolder {
    pub folder_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub root_folder: Option<PathBuf>,
    pub editor_command: String,
    pub custom_editors: Vec<CustomEditor>,
    pub ignored_folders: Vec<CustomIgnoredFolder>,
    pub force_refresh: bool,
    pub cache_ttl_minutes: i64,
    pub match_cached_root: bool,
    pub max_depth: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_folder: None,
            editor_command: DEFAULT_EDITOR_COMMAND.to_string(),
            custom_editors: Vec::new(),
            ignored_folders: Vec::new(),
            force_refresh: false,
            cache_ttl_minutes: crate::core::scan_cache::CACHE_EXPIRY_MINUTES,
            match_cached_root: true,
            max_depth: None,
        }
    }
}

impl Settings {
    pub fn settings_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(SETTINGS_FILE))
    }

    pub fn load_or_create() -> Result<Self> {
        let settings_file = Self::settings_path()?;

        if settings_file.exists() {
            Self::load_from(&settings_file)
        } else {
            log::debug!(
                "Creating default settings at {}",
                settings_file.display()
            );
            let settings = Self::default();
            settings.save_to(&settings_file)?;
            Ok(settings)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ProjectNavigatorError::config_read_failed(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| ProjectNavigatorError::config_parse_failed(path, e))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ProjectNavigatorError::config_write_failed(parent, e))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ProjectNavigatorError::config_write_failed(path, e))
    }

    /// Add or replace the editor for `language` (case-insensitive)
    pub fn add_custom_editor(&mut self, language: &str, command: &str) -> Result<()> {
        let language = language.trim();
        let command = command.trim();
        if language.is_empty() {
            return Err(ProjectNavigatorError::missing_field("language"));
        }
        if command.is_empty() {
            return Err(ProjectNavigatorError::missing_field("command"));
        }

        let key = language.to_lowercase();
        self.custom_editors
            .retain(|editor| editor.language.to_lowercase() != key);
        self.custom_editors.push(CustomEditor {
            language: language.to_string(),
            command: command.to_string(),
        });
        Ok(())
    }

    /// Remove the editor at the 1-based `index`
    pub fn remove_custom_editor(&mut self, index: usize) -> Result<CustomEditor> {
        let position = checked_position(index, self.custom_editors.len())?;
        Ok(self.custom_editors.remove(position))
    }

    /// Add or replace an ignored folder name (case-insensitive)
    pub fn add_ignored_folder(&mut self, folder_name: &str, description: Option<&str>) -> Result<()> {
        let folder_name = folder_name.trim();
        if folder_name.is_empty() {
            return Err(ProjectNavigatorError::missing_field("folder name"));
        }
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let key = folder_name.to_lowercase();
        self.ignored_folders
            .retain(|folder| folder.folder_name.to_lowercase() != key);
        self.ignored_folders.push(CustomIgnoredFolder {
            folder_name: folder_name.to_string(),
            description,
        });
        Ok(())
    }

    /// Remove the ignored folder at the 1-based `index`
    pub fn remove_ignored_folder(&mut self, index: usize) -> Result<CustomIgnoredFolder> {
        let position = checked_position(index, self.ignored_folders.len())?;
        Ok(self.ignored_folders.remove(position))
    }

    pub fn ignored_folder_names(&self) -> impl Iterator<Item = &str> {
        self.ignored_folders
            .iter()
            .map(|folder| folder.folder_name.as_str())
    }
}

fn checked_position(index: usize, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(ProjectNavigatorError::NothingToSelect);
    }
    if index == 0 {
        return Err(ProjectNavigatorError::ZeroIndex);
    }
    if index > len {
        return Err(ProjectNavigatorError::index_out_of_range(index, len));
    }
    Ok(index - 1)
}
