use crate::core::{
    config::Settings,
    error::{ProjectNavigatorError, Result},
    print_section_header, print_success,
    scan_cache::MAX_CACHE_EXPIRY_MINUTES,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::env;
use std::path::PathBuf;

pub fn execute_config_show() -> Result<()> {
    let settings = Settings::load_or_create()?;
    let path = Settings::settings_path()?;

    print_section_header(&format!("Settings ({})", path.display()));
    for line in render_settings(&settings) {
        println!("{line}");
    }
    println!();
    Ok(())
}

pub fn execute_config_root(directory: PathBuf) -> Result<()> {
    let directory = if directory.is_relative() {
        env::current_dir()?.join(directory)
    } else {
        directory
    };
    if !directory.is_dir() {
        return Err(ProjectNavigatorError::root_not_found(directory));
    }

    update_settings(|settings| settings.root_folder = Some(directory.clone()))?;
    print_success(&format!("Root folder set to {}", directory.display()));
    Ok(())
}

pub fn execute_config_editor(command: &str) -> Result<()> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ProjectNavigatorError::missing_field("command"));
    }

    update_settings(|settings| settings.editor_command = command.to_string())?;
    print_success(&format!("Default editor set to '{command}'"));
    Ok(())
}

pub fn execute_config_refresh(enabled: bool) -> Result<()> {
    update_settings(|settings| settings.force_refresh = enabled)?;
    let state = if enabled { "enabled" } else { "disabled" };
    print_success(&format!("Always-rescan {state}"));
    Ok(())
}

pub fn execute_config_ttl(minutes: i64) -> Result<()> {
    if !(1..=MAX_CACHE_EXPIRY_MINUTES).contains(&minutes) {
        return Err(ProjectNavigatorError::invalid_setting_value(
            "cache TTL (minutes)",
            minutes,
        ));
    }

    update_settings(|settings| settings.cache_ttl_minutes = minutes)?;
    print_success(&format!("Scan cache lifetime set to {minutes} minutes"));
    Ok(())
}

fn update_settings(change: impl FnOnce(&mut Settings)) -> Result<()> {
    let mut settings = Settings::load_or_create()?;
    change(&mut settings);
    settings.save()
}

pub fn render_settings(settings: &Settings) -> Vec<String> {
    let root = settings
        .root_folder
        .as_ref()
        .map(|root| root.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    let max_depth = settings
        .max_depth
        .map(|depth| depth.to_string())
        .unwrap_or_else(|| "unlimited".to_string());

    let rows = [
        ("root folder", root),
        ("editor", settings.editor_command.clone()),
        ("custom editors", settings.custom_editors.len().to_string()),
        ("ignored folders", settings.ignored_folders.len().to_string()),
        ("always rescan", settings.force_refresh.to_string()),
        ("cache TTL (minutes)", settings.cache_ttl_minutes.to_string()),
        ("cache per root", settings.match_cached_root.to_string()),
        ("max depth", max_depth),
    ];

    rows.iter()
        .map(|(name, value)| {
            render_template(
                TEMPLATES.setting_line,
                &TemplateContext {
                    name: Some(*name),
                    value: Some(value.as_str()),
                    ..Default::default()
                },
            )
        })
        .collect()
}
