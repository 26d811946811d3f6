use crate::core::{
    config::Settings,
    error::{ProjectNavigatorError, Result},
    print_info, print_warning,
    scan_cache::ScanCache,
    scanner::DirectoryScanner,
    state::FolderRecord,
    store::ScanStore,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use chrono::{DateTime, Local, TimeDelta, Utc};
use std::env;
use std::path::{Path, PathBuf};

pub fn execute_list(root: Option<PathBuf>, refresh: bool, filter: Option<String>) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let root = resolve_root(root, &settings)?;
    let store = match ScanStore::open() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Scan cache unavailable (list will not persist results): {e}");
            None
        }
    };

    let previous = store.as_ref().and_then(|store| match store.load() {
        Ok(slot) => slot,
        Err(e) => {
            log::warn!("Ignoring unreadable scan cache (list will rescan): {e}");
            None
        }
    });
    let previous_timestamp = previous.as_ref().map(|slot| slot.timestamp);

    let force_refresh = refresh || settings.force_refresh;
    let mut cache = build_cache(&settings)?.with_slot(previous);
    let folders = cache.get_folders(&root, force_refresh);

    let slot = cache.into_slot();
    let served_from_cache = slot.as_ref().map(|s| s.timestamp) == previous_timestamp;
    if let (false, Some(store), Some(slot)) = (served_from_cache, &store, &slot) {
        if let Err(e) = store.save(slot) {
            log::warn!("Scan cache save failed (list will continue): {e}");
            print_warning(&format!("Scan cache save failed: {e}"));
        }
    }

    if folders.is_empty() {
        print_info(&format!(
            "No project folders found under {}",
            root.display()
        ));
        return Ok(());
    }

    let cached_at = if served_from_cache {
        slot.map(|s| s.timestamp)
    } else {
        None
    };
    println!();
    for line in render_folder_list(&root, &folders, filter.as_deref(), cached_at) {
        println!("{line}");
    }
    println!();

    Ok(())
}

/// `--root`, else the configured root; relative paths resolve against the
/// working directory
pub fn resolve_root(root: Option<PathBuf>, settings: &Settings) -> Result<PathBuf> {
    let root = root
        .or_else(|| settings.root_folder.clone())
        .ok_or(ProjectNavigatorError::NoRootFolder)?;
    let root = if root.is_relative() {
        env::current_dir()?.join(root)
    } else {
        root
    };

    if !root.is_dir() {
        return Err(ProjectNavigatorError::root_not_found(root));
    }
    Ok(root)
}

/// Scan cache configured from the user's settings. A lifetime too large to
/// represent is reported instead of being clamped.
pub fn build_cache(settings: &Settings) -> Result<ScanCache> {
    let expiry = TimeDelta::try_minutes(settings.cache_ttl_minutes).ok_or_else(|| {
        ProjectNavigatorError::invalid_setting_value(
            "cache_ttl_minutes",
            settings.cache_ttl_minutes,
        )
    })?;
    let scanner = DirectoryScanner::new()
        .with_ignored_folders(settings.ignored_folder_names().map(str::to_string))
        .with_max_depth(settings.max_depth);

    Ok(ScanCache::new(scanner)
        .with_expiry(expiry)
        .with_root_matching(settings.match_cached_root))
}

/// Header, numbered rows and footer. Rows keep their position in the full
/// list when `filter` hides some of them, so the numbers stay valid for `open`.
pub fn render_folder_list(
    root: &Path,
    folders: &[FolderRecord],
    filter: Option<&str>,
    cached_at: Option<DateTime<Utc>>,
) -> Vec<String> {
    let root_text = root.display().to_string();
    let mut lines = vec![render_template(
        TEMPLATES.list_header,
        &TemplateContext {
            root: Some(&root_text),
            ..Default::default()
        },
    )];
    lines.push(String::new());

    let needle = filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);
    let mut shown = 0;

    for (position, folder) in folders.iter().enumerate() {
        if let Some(needle) = &needle {
            if !folder.display_name.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }
        shown += 1;

        let path = folder.path.display().to_string();
        lines.push(render_template(
            TEMPLATES.folder_line,
            &TemplateContext {
                n: Some(position + 1),
                name: Some(&folder.display_name),
                language: Some(folder.language),
                ..Default::default()
            },
        ));
        lines.push(render_template(
            TEMPLATES.folder_path,
            &TemplateContext {
                path: Some(&path),
                ..Default::default()
            },
        ));
    }

    lines.push(String::new());
    let footer = match (&needle, filter) {
        (Some(_), Some(filter)) => render_template(
            TEMPLATES.filtered_footer,
            &TemplateContext {
                count: Some(shown),
                total: Some(folders.len()),
                filter: Some(filter.trim()),
                ..Default::default()
            },
        ),
        _ => render_template(
            TEMPLATES.list_footer,
            &TemplateContext {
                count: Some(folders.len()),
                ..Default::default()
            },
        ),
    };
    lines.push(footer);

    if let Some(timestamp) = cached_at {
        let local = timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        lines.push(render_template(
            TEMPLATES.cached_note,
            &TemplateContext {
                timestamp: Some(&local),
                ..Default::default()
            },
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::{Detection, Language};
    use crate::core::templates::strip_ansi_codes;
    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, language: Language) -> FolderRecord {
        let mut record = FolderRecord::new(name, format!("/work/{name}"));
        record.apply_detection(Detection::of(language));
        record
    }

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines.iter().map(|l| strip_ansi_codes(l)).collect()
    }

    #[test]
    fn test_render_numbers_every_folder() {
        let folders = vec![record("api", Language::Go), record("web", Language::React)];
        let lines = plain(render_folder_list(Path::new("/work"), &folders, None, None));

        assert_eq!(lines[0], "Projects in /work");
        assert!(lines.contains(&"  [1] api  Go".to_string()));
        assert!(lines.contains(&"  [2] web  React".to_string()));
        assert!(lines.contains(&"      /work/web".to_string()));
        assert_eq!(lines.last().unwrap(), "2 project folders");
    }

    #[test]
    fn test_render_filter_keeps_original_numbers() {
        let folders = vec![
            record("api", Language::Go),
            record("tools/cli", Language::Rust),
            record("web", Language::Vue),
        ];
        let lines = plain(render_folder_list(
            Path::new("/work"),
            &folders,
            Some("CLI"),
            None,
        ));

        assert!(lines.contains(&"  [2] tools/cli  Rust".to_string()));
        assert!(!lines.iter().any(|l| l.contains("api")));
        assert_eq!(
            lines.last().unwrap(),
            "1 of 3 project folders match 'CLI'"
        );
    }

    #[test]
    fn test_render_cached_note() {
        let folders = vec![record("api", Language::Go)];
        let lines = plain(render_folder_list(
            Path::new("/work"),
            &folders,
            None,
            Some(Utc::now()),
        ));
        assert!(lines.last().unwrap().starts_with("(cached scan from "));
    }

    #[test]
    fn test_resolve_root_prefers_argument() {
        let temp = TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.root_folder = Some(PathBuf::from("/no/such/configured/root"));

        let root = resolve_root(Some(temp.path().to_path_buf()), &settings).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_resolve_root_errors() {
        let settings = Settings::default();
        assert!(matches!(
            resolve_root(None, &settings),
            Err(ProjectNavigatorError::NoRootFolder)
        ));
        assert!(matches!(
            resolve_root(Some(PathBuf::from("/no/such/root/dir")), &settings),
            Err(ProjectNavigatorError::RootNotFound { .. })
        ));
    }

    #[test]
    fn test_build_cache_applies_custom_ignores() {
        let temp = TempDir::new().unwrap();
        for name in ["keep", "skip/me"] {
            let dir = temp.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(".gitignore"), "").unwrap();
        }
        let mut settings = Settings::default();
        settings.add_ignored_folder("skip", None).unwrap();

        let folders = build_cache(&settings).unwrap().get_folders(temp.path(), false);
        let names: Vec<&str> = folders
            .iter()
            .map(|f| f.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["keep"]);
    }

    #[test]
    fn test_build_cache_rejects_unrepresentable_ttl() {
        let settings = Settings {
            cache_ttl_minutes: i64::MAX,
            ..Settings::default()
        };
        assert!(matches!(
            build_cache(&settings),
            Err(ProjectNavigatorError::InvalidSettingValue { .. })
        ));
    }

    #[test]
    fn test_huge_ttl_serves_second_list_from_cache() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("app");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join(".gitignore"), "").unwrap();
        let settings = Settings {
            cache_ttl_minutes: TimeDelta::MAX.num_minutes(),
            ..Settings::default()
        };

        let mut cache = build_cache(&settings).unwrap();
        let first = cache.get_folders(temp.path(), false);
        let second = cache.get_folders(temp.path(), false);
        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }
}
