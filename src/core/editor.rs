//! Opening project folders in an external editor.
//!
//! An editor command is a template such as `code %s` or
//! `"C:\Program Files\Editor\editor.exe" --new-window %s`. Tokens are either a
//! double-quoted run (quotes removed) or a run of non-whitespace. The first
//! token is the program; in every argument the first `%s` becomes the folder
//! path. When no argument carries `%s` the path is appended.

use crate::core::config::Settings;
use crate::core::error::{ProjectNavigatorError, Result};
use crate::core::language::Language;
use std::path::Path;
use std::process::Command;

const PATH_PLACEHOLDER: &str = "%s";

/// Command template for `language`: the last custom editor whose language
/// matches case-insensitively, else the default editor command
pub fn resolve_command(settings: &Settings, language: Language) -> &str {
    if language.is_unknown() {
        return &settings.editor_command;
    }
    settings
        .custom_editors
        .iter()
        .rev()
        .find(|editor| language.matches_label(&editor.language))
        .map(|editor| editor.command.as_str())
        .unwrap_or(settings.editor_command.as_str())
}

/// Split a command template into tokens
pub fn tokenize(template: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '"' {
            chars.next();
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                token.push(c);
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    tokens
}

/// Program and arguments ready to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorInvocation {
    pub fn from_template(template: &str, folder: &Path) -> Result<Self> {
        let mut tokens = tokenize(template).into_iter();
        let program = tokens
            .next()
            .filter(|program| !program.is_empty())
            .ok_or_else(|| ProjectNavigatorError::editor_command_invalid(template))?;

        let folder = folder.to_string_lossy();
        let mut substituted = false;
        let mut args: Vec<String> = tokens
            .map(|arg| {
                if arg.contains(PATH_PLACEHOLDER) {
                    substituted = true;
                    arg.replacen(PATH_PLACEHOLDER, &folder, 1)
                } else {
                    arg
                }
            })
            .collect();
        if !substituted {
            args.push(folder.into_owned());
        }

        Ok(Self { program, args })
    }

    /// Run to completion; spawn failures and non-zero exits are errors
    pub fn run(&self) -> Result<()> {
        log::debug!("Launching editor: {} {:?}", self.program, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| ProjectNavigatorError::editor_spawn_failed(&self.program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => output.status.to_string(),
                trimmed => trimmed.to_string(),
            };
            return Err(ProjectNavigatorError::editor_exit_failed(
                &self.program,
                message,
            ));
        }

        Ok(())
    }
}

/// Open `folder` with the editor configured for `language`
pub fn open_in_editor(settings: &Settings, folder: &Path, language: Language) -> Result<()> {
    let template = resolve_command(settings, language);
    EditorInvocation::from_template(template, folder)?.run()
}
