//! Shared message formatting for the CLI.
//!
//! Errors are prefixed with a red cross, successes with a green check, and
//! command results are framed by blank lines so consecutive commands stay
//! readable in a terminal.

use colored::*;

/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Error followed by the accepted forms of the command and its options.
///
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   <usage_pattern>
///
/// Options:
///   <flag>  <description>
///
/// ```
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());
    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }
    println!();
}

/// `✓ <message>` after a blank line
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// `! <message>` for recoverable problems that do not fail the command
pub fn print_warning(message: &str) {
    println!("\n{} {}", "!".yellow(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// `<header>:` framed by blank lines
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
