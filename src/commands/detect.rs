use crate::core::{
    detector::LanguageDetector,
    error::{ProjectNavigatorError, Result},
    extension_counter::{count_by_extension, ExtensionCounts},
    language::RECOGNIZED_EXTENSIONS,
    print_info, print_section_header,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::path::PathBuf;

pub fn execute_detect(directory: PathBuf, stats: bool) -> Result<()> {
    if !directory.is_dir() {
        return Err(ProjectNavigatorError::directory_not_found(directory));
    }

    let detection = LanguageDetector::new().detect(&directory);

    println!();
    println!(
        "{}",
        render_template(
            TEMPLATES.detect_language,
            &TemplateContext {
                language: Some(detection.language),
                ..Default::default()
            },
        )
    );
    println!(
        "{}",
        render_template(
            TEMPLATES.detect_icon,
            &TemplateContext {
                icon: Some(&detection.icon),
                ..Default::default()
            },
        )
    );

    if stats {
        let counts = count_by_extension(&directory, RECOGNIZED_EXTENSIONS);
        let lines = render_stats(&counts);
        if lines.is_empty() {
            print_info("No recognised source files");
        } else {
            print_section_header("Source files");
            for line in lines {
                println!("{line}");
            }
        }
    }
    println!();

    Ok(())
}

/// Non-zero counts, most frequent first, ties in extension order
pub fn render_stats(counts: &ExtensionCounts) -> Vec<String> {
    let mut rows: Vec<(&String, &usize)> = counts.iter().filter(|(_, n)| **n > 0).collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let width = rows.iter().map(|(ext, _)| ext.len()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(extension, count)| {
            let padded = format!("{extension:<width$}");
            render_template(
                TEMPLATES.stats_line,
                &TemplateContext {
                    extension: Some(&padded),
                    count: Some(*count),
                    ..Default::default()
                },
            )
        })
        .collect()
}
