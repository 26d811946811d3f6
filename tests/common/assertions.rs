//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating project-navigator listings, error
//! messages and notifications.

#![allow(dead_code)]

use predicates::prelude::*;

/// A numbered listing row: `[n] <name>  <language>`
pub fn has_row(index: usize, name: &str, language: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {name}  {language}"))
}

pub fn has_index(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}]"))
}

pub fn has_error(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}

pub fn has_success(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✓").and(predicates::str::contains(message.to_string()))
}

pub fn no_cached_scan() -> impl Predicate<str> {
    predicates::str::contains("Run 'list' first")
}
