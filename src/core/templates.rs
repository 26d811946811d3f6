//! Template system for consistent output formatting.
//!
//! Templates are plain strings with `{placeholder}` markers. Rendering is a
//! single pass over the template; each placeholder value is coloured as it
//! is inserted (index markers dimmed, languages in their language colour,
//! paths muted) and literal text is left untouched.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output sections
//! - [`TemplateContext`]: Values available to placeholders
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Rendering with colours
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing colour codes

use crate::core::colors::{get_colored_index, get_colored_language};
use crate::core::language::Language;
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    pub list_header: &'static str,
    pub folder_line: &'static str,
    pub folder_path: &'static str,
    pub list_footer: &'static str,
    pub filtered_footer: &'static str,
    pub cached_note: &'static str,
    pub detect_language: &'static str,
    pub detect_icon: &'static str,
    pub stats_line: &'static str,
    pub editor_line: &'static str,
    pub ignored_line: &'static str,
    pub setting_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    list_header: "Projects in {root}",
    folder_line: "  {n} {name}  {language}",
    folder_path: "      {path}",
    list_footer: "{count} project folders",
    filtered_footer: "{count} of {total} project folders match '{filter}'",
    cached_note: "(cached scan from {timestamp}, use --refresh to rescan)",
    detect_language: "Language: {language}",
    detect_icon: "Icon:     {icon}",
    stats_line: "  {extension}  {count}",
    editor_line: "  {n} {name} → {command}",
    ignored_line: "  {n} {name}{description}",
    setting_line: "  {name}: {value}",
};

/// Values available to template placeholders
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub n: Option<usize>,
    pub name: Option<&'a str>,
    pub language: Option<Language>,
    pub path: Option<&'a str>,
    pub root: Option<&'a str>,
    pub icon: Option<&'a str>,
    pub count: Option<usize>,
    pub total: Option<usize>,
    pub filter: Option<&'a str>,
    pub timestamp: Option<&'a str>,
    pub extension: Option<&'a str>,
    pub command: Option<&'a str>,
    pub description: Option<&'a str>,
    pub value: Option<&'a str>,
}

/// Render a template with context and apply colours
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut output = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            output.push_str(&rest[open..]);
            return output;
        };

        let placeholder = &after[..close];
        if !write_placeholder(&mut output, placeholder, context) {
            // Unknown placeholder, keep as-is
            let _ = write!(output, "{{{placeholder}}}");
        }
        rest = &after[close + 1..];
    }

    output.push_str(rest);
    output
}

/// Append the coloured value for `placeholder`. Returns false for unknown
/// placeholders; a known placeholder without a value renders as nothing.
fn write_placeholder(output: &mut String, placeholder: &str, context: &TemplateContext) -> bool {
    match placeholder {
        "n" => {
            if let Some(n) = context.n {
                output.push_str(&get_colored_index(n));
            }
        }
        "name" => {
            if let Some(name) = context.name {
                let _ = write!(output, "{}", name.bold());
            }
        }
        "language" => {
            if let Some(language) = context.language {
                let _ = write!(output, "{}", get_colored_language(language));
            }
        }
        "path" | "root" | "icon" => {
            let value = match placeholder {
                "path" => context.path,
                "root" => context.root,
                _ => context.icon,
            };
            if let Some(value) = value {
                let _ = write!(output, "{}", value.bright_black());
            }
        }
        "count" | "total" => {
            let value = match placeholder {
                "count" => context.count,
                _ => context.total,
            };
            if let Some(value) = value {
                let _ = write!(output, "{}", value.to_string().white());
            }
        }
        "description" => {
            if let Some(description) = context.description {
                let _ = write!(output, "  {}", description.bright_black());
            }
        }
        "filter" | "timestamp" | "extension" | "command" | "value" => {
            let value = match placeholder {
                "filter" => context.filter,
                "timestamp" => context.timestamp,
                "extension" => context.extension,
                "command" => context.command,
                _ => context.value,
            };
            if let Some(value) = value {
                output.push_str(value);
            }
        }
        _ => return false,
    }
    true
}

/// Strip ANSI colour codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colours for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
