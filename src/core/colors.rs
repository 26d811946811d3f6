//! Colour mapping for language labels.
//!
//! Every language label is always printed in the same colour so that project
//! listings can be scanned by eye.
//!
//! # Public API
//! - [`get_language_color_style`]: Colour function for a language
//! - [`get_colored_language`]: Language label in its colour
//! - [`get_colored_index`]: `[n]` row marker
//!
//! # Color Scheme
//! - **JavaScript family**: yellow, TypeScript blue, React cyan, Vue green
//! - **Systems languages**: Rust red, Go cyan, C family bright blue
//! - **JVM**: Java red, Kotlin magenta
//! - **Unknown**: dimmed

use crate::core::language::Language;
use colored::*;

/// Colour function applied to anything labelled with `language`
pub fn get_language_color_style(language: Language) -> Box<dyn Fn(&str) -> ColoredString> {
    match language {
        Language::JavaScriptTypeScript | Language::JavaScript => Box::new(|text: &str| text.yellow()),
        Language::TypeScript => Box::new(|text: &str| text.blue()),
        Language::React => Box::new(|text: &str| text.bright_cyan()),
        Language::Vue => Box::new(|text: &str| text.green()),
        Language::Python => Box::new(|text: &str| text.bright_yellow()),
        Language::Rust => Box::new(|text: &str| text.red()),
        Language::Go => Box::new(|text: &str| text.cyan()),
        Language::Ruby => Box::new(|text: &str| text.bright_red()),
        Language::CSharp => Box::new(|text: &str| text.bright_magenta()),
        Language::Java | Language::JavaKotlin => Box::new(|text: &str| text.red().bold()),
        Language::Kotlin => Box::new(|text: &str| text.magenta()),
        Language::CCpp | Language::CCppOther | Language::Cpp | Language::C => {
            Box::new(|text: &str| text.bright_blue())
        }
        Language::Godot => Box::new(|text: &str| text.bright_green()),
        Language::Swift => Box::new(|text: &str| text.bright_red().bold()),
        Language::Dart => Box::new(|text: &str| text.bright_cyan().bold()),
        Language::Unknown => Box::new(|text: &str| text.bright_black()),
    }
}

pub fn get_colored_language(language: Language) -> ColoredString {
    let color_fn = get_language_color_style(language);
    color_fn(language.as_str())
}

pub fn get_colored_index(n: usize) -> String {
    format!(
        "{}{}{}",
        "[".bright_black(),
        n.to_string().white(),
        "]".bright_black()
    )
}
