use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*};

#[cfg(test)]
mod open_command_tests {
    use super::*;

    fn list(workspace: &common::workspace::TestWorkspace) -> anyhow::Result<()> {
        workspace
            .command()?
            .args(["list", "--root"])
            .arg(workspace.root())
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn test_open_without_list_fails() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;

        workspace
            .command()?
            .args(["open", "1"])
            .assert()
            .failure()
            .stdout(assertions::no_cached_scan());

        Ok(())
    }

    #[test]
    fn test_open_without_indices_shows_usage() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .arg("open")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("project-navigator open <index>..."));

        Ok(())
    }

    #[test]
    fn test_open_out_of_range_index() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .args(["open", "9"])
            .assert()
            .failure()
            .stdout(assertions::has_error("Index 9 is out of range (1-4 available)"));

        Ok(())
    }

    #[test]
    fn test_open_huge_range_fails_fast() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        assert_cmd::Command::from_std(workspace.command()?)
            .args(["open", "1-99999999999"])
            .timeout(std::time::Duration::from_secs(10))
            .assert()
            .failure()
            .stdout(assertions::has_error(
                "Index 99999999999 is out of range (1-4 available)",
            ));

        Ok(())
    }

    #[test]
    fn test_open_invalid_number() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .args(["open", "two"])
            .assert()
            .failure()
            .stdout(assertions::has_error("Invalid number: 'two'"));

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_open_runs_default_editor() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .args(["config", "editor", "true"])
            .assert()
            .success();

        workspace
            .command()?
            .args(["open", "1", "3-4"])
            .assert()
            .success()
            .stdout(assertions::has_success("Opened"))
            .stdout(predicate::str::contains("api"))
            .stdout(predicate::str::contains("apps/web"))
            .stdout(predicate::str::contains("tools/cli"))
            .stdout(predicate::str::contains("apps/mobile").not());

        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_open_uses_language_editor() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .args(["config", "editor", "true"])
            .assert()
            .success();
        workspace
            .command()?
            .args(["editors", "add", "rust", "false %s"])
            .assert()
            .success();

        workspace
            .command()?
            .args(["open", "1,4"])
            .assert()
            .success()
            .stdout(assertions::has_success("Opened"))
            .stdout(assertions::has_error("Editor 'false' exited with an error"));

        Ok(())
    }

    #[test]
    fn test_open_reports_missing_editor() -> anyhow::Result<()> {
        let workspace = create_mixed_workspace()?;
        list(&workspace)?;

        workspace
            .command()?
            .args(["config", "editor", "no-such-editor-binary-xyz %s"])
            .assert()
            .success();

        workspace
            .command()?
            .args(["open", "2"])
            .assert()
            .success()
            .stdout(assertions::has_error("Failed to start editor 'no-such-editor-binary-xyz'"));

        Ok(())
    }
}
