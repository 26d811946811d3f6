//! Shared test utilities for project-navigator
//!
//! Integration tests build real directory trees in temporary folders and run
//! the binary with settings and cache redirected into the same sandbox.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
