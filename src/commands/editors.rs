use crate::core::{
    config::{CustomEditor, Settings, DEFAULT_EDITOR_COMMAND},
    error::Result,
    print_info, print_section_header, print_success,
    selection::Selection,
    templates::{render_template, TemplateContext, TEMPLATES},
};

pub fn execute_editors_list() -> Result<()> {
    let settings = Settings::load_or_create()?;

    if settings.custom_editors.is_empty() {
        print_info(&format!(
            "No custom editors configured. Every project opens with '{}'",
            settings.editor_command
        ));
        return Ok(());
    }

    print_section_header("Custom editors");
    for line in render_editors(&settings.custom_editors) {
        println!("{line}");
    }
    if settings.editor_command != DEFAULT_EDITOR_COMMAND {
        println!("\n  Default: {}", settings.editor_command);
    }
    println!();

    Ok(())
}

pub fn execute_editors_add(language: &str, command: &str) -> Result<()> {
    let mut settings = Settings::load_or_create()?;
    settings.add_custom_editor(language, command)?;
    settings.save()?;

    print_success(&format!(
        "{} projects now open with '{}'",
        language.trim(),
        command.trim()
    ));
    Ok(())
}

pub fn execute_editors_remove(indices_args: Vec<String>) -> Result<()> {
    let mut settings = Settings::load_or_create()?;
    let selection = Selection::parse(&indices_args, settings.custom_editors.len())?;

    let mut removed = Vec::new();
    for &index in selection.indices().iter().rev() {
        removed.push(settings.remove_custom_editor(index)?);
    }
    settings.save()?;

    removed.reverse();
    let languages: Vec<&str> = removed.iter().map(|e| e.language.as_str()).collect();
    print_success(&format!(
        "Removed custom editor(s): {}",
        languages.join(", ")
    ));
    Ok(())
}

pub fn render_editors(editors: &[CustomEditor]) -> Vec<String> {
    editors
        .iter()
        .enumerate()
        .map(|(position, editor)| {
            render_template(
                TEMPLATES.editor_line,
                &TemplateContext {
                    n: Some(position + 1),
                    name: Some(&editor.language),
                    command: Some(&editor.command),
                    ..Default::default()
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_render_editors() {
        let editors = vec![
            CustomEditor {
                language: "Rust".into(),
                command: "rustrover %s".into(),
            },
            CustomEditor {
                language: "Python".into(),
                command: "\"/opt/py charm/bin/pycharm\" %s".into(),
            },
        ];
        let lines: Vec<String> = render_editors(&editors)
            .iter()
            .map(|l| strip_ansi_codes(l))
            .collect();
        assert_eq!(lines[0], "  [1] Rust → rustrover %s");
        assert_eq!(lines[1], "  [2] Python → \"/opt/py charm/bin/pycharm\" %s");
    }
}
