//! Predefined project layouts
//!
//! Each scenario builds a workspace whose expected listing is known, so
//! tests can assert on row numbers and language labels.

#![allow(dead_code)]

use super::workspace::*;

/// Scenario: four projects in different ecosystems plus noise that must not
/// be listed.
///
/// Expected listing (sorted depth-first):
/// 1. `api` (Go)
/// 2. `apps/mobile` (Dart)
/// 3. `apps/web` (React)
/// 4. `tools/cli` (Rust)
pub fn create_mixed_workspace() -> anyhow::Result<TestWorkspace> {
    let workspace = TestWorkspace::new()?;

    workspace.create_project("api", &["go.mod", "main.go"])?;
    let web = workspace.create_project("apps/web", &[])?;
    create_file(
        &web,
        "package.json",
        r#"{"dependencies": {"react": "^18.2.0"}, "devDependencies": {"typescript": "^5.0.0"}}"#,
    )?;
    workspace.create_project("apps/mobile", &["lib/main.dart", "lib/app.dart"])?;
    workspace.create_project("tools/cli", &["Cargo.toml", "src/main.rs"])?;

    // Hidden by the built-in ignore list
    workspace.create_project("apps/web/node_modules/left-pad", &["index.js"])?;
    workspace.create_project("tools/cli/target/debug", &[])?;

    // Not a project: no .gitignore
    create_file(workspace.root(), "notes/readme.md", "")?;

    Ok(workspace)
}

/// Scenario: a single Kotlin project built with make
pub fn create_makefile_kotlin_workspace() -> anyhow::Result<TestWorkspace> {
    let workspace = TestWorkspace::new()?;
    workspace.create_project("service", &["Makefile", "A.kt", "B.kt", "C.kt"])?;
    Ok(workspace)
}
