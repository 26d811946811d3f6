use crate::core::{
    config::{CustomIgnoredFolder, Settings},
    error::Result,
    print_info, print_section_header, print_success,
    scanner::BUILTIN_IGNORED_FOLDERS,
    selection::Selection,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use colored::*;

pub fn execute_ignored_list() -> Result<()> {
    let settings = Settings::load_or_create()?;

    print_section_header("Always ignored");
    println!("  {}", BUILTIN_IGNORED_FOLDERS.join(" ").bright_black());

    if settings.ignored_folders.is_empty() {
        print_info("No custom ignored folders configured");
        return Ok(());
    }

    print_section_header("Custom ignored folders");
    for line in render_ignored(&settings.ignored_folders) {
        println!("{line}");
    }
    println!();

    Ok(())
}

pub fn execute_ignored_add(folder_name: &str, description: Option<&str>) -> Result<()> {
    let mut settings = Settings::load_or_create()?;
    settings.add_ignored_folder(folder_name, description)?;
    settings.save()?;

    print_success(&format!(
        "Folders named '{}' will be skipped by the next scan (run 'list --refresh')",
        folder_name.trim()
    ));
    Ok(())
}

pub fn execute_ignored_remove(indices_args: Vec<String>) -> Result<()> {
    let mut settings = Settings::load_or_create()?;
    let selection = Selection::parse(&indices_args, settings.ignored_folders.len())?;

    let mut removed = Vec::new();
    for &index in selection.indices().iter().rev() {
        removed.push(settings.remove_ignored_folder(index)?);
    }
    settings.save()?;

    removed.reverse();
    let names: Vec<&str> = removed.iter().map(|f| f.folder_name.as_str()).collect();
    print_success(&format!("No longer ignoring: {}", names.join(", ")));
    Ok(())
}

pub fn render_ignored(folders: &[CustomIgnoredFolder]) -> Vec<String> {
    folders
        .iter()
        .enumerate()
        .map(|(position, folder)| {
            render_template(
                TEMPLATES.ignored_line,
                &TemplateContext {
                    n: Some(position + 1),
                    name: Some(&folder.folder_name),
                    description: folder.description.as_deref(),
                    ..Default::default()
                },
            )
        })
        .collect()
}
