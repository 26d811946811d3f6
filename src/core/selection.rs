//! Parsing of numbered selections such as `1 3-5,8`.
//!
//! Rows printed by `list` (and by the `editors` / `ignored` listings) are
//! numbered from 1. Selections accept single numbers, inclusive ranges, and
//! any mix of space or comma separators. The result is sorted and
//! deduplicated.
//!
//! # Public API
//! - [`parse_indices`]: Parse one selection string
//! - [`Selection`]: Parse command arguments and validate them against a row count

use crate::core::error::{ProjectNavigatorError, Result};
use std::collections::BTreeSet;

/// Parse a selection string into sorted, unique 1-based indices in
/// `1..=available`. Ranges are checked against `available` before they are
/// expanded, so `1-99999999999` fails fast instead of allocating.
pub fn parse_indices(input: &str, available: usize) -> Result<Vec<usize>> {
    let ranges = parse_ranges(input)?;
    if ranges.is_empty() {
        return Ok(Vec::new());
    }
    if available == 0 {
        return Err(ProjectNavigatorError::NothingToSelect);
    }
    if ranges.iter().any(|&(start, _)| start == 0) {
        return Err(ProjectNavigatorError::ZeroIndex);
    }
    if let Some(end) = ranges
        .iter()
        .map(|&(_, end)| end)
        .filter(|&end| end > available)
        .min()
    {
        return Err(ProjectNavigatorError::index_out_of_range(end, available));
    }

    let indices: BTreeSet<usize> = ranges
        .into_iter()
        .flat_map(|(start, end)| start..=end)
        .collect();
    Ok(indices.into_iter().collect())
}

/// Inclusive `(start, end)` pairs in input order; a single number is a
/// one-element range
fn parse_ranges(input: &str) -> Result<Vec<(usize, usize)>> {
    input
        .split([' ', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('-') {
            Some((start, end)) => {
                if end.contains('-') {
                    return Err(ProjectNavigatorError::invalid_range_format(part));
                }
                let start = parse_range_bound(start)?;
                let end = parse_range_bound(end)?;
                if start > end {
                    return Err(ProjectNavigatorError::invalid_range_order(start, end));
                }
                Ok((start, end))
            }
            None => part
                .parse::<usize>()
                .map(|index| (index, index))
                .map_err(|_| ProjectNavigatorError::invalid_number(part)),
        })
        .collect()
}

fn parse_range_bound(bound: &str) -> Result<usize> {
    bound
        .parse()
        .map_err(|_| ProjectNavigatorError::invalid_range_number(bound))
}

/// Validated selection against `available` numbered rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Parse clap arguments (`["1", "3-5,8"]`) and check every index is in
    /// `1..=available`
    pub fn parse(args: &[String], available: usize) -> Result<Self> {
        if args.is_empty() {
            return Err(ProjectNavigatorError::NoIndicesProvided);
        }

        let indices = parse_indices(&args.join(" "), available)?;
        if indices.is_empty() {
            return Err(ProjectNavigatorError::NoValidIndices);
        }

        Ok(Self { indices })
    }

    /// 1-based indices in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Items picked from `items`, which must hold at least `available` rows
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.indices
            .iter()
            .filter_map(|&index| items.get(index - 1))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
